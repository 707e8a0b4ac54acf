/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when writing an ontology or questionnaire, and when extending the library.

Note, no log implementation is provided.
For more details, see [log].

For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
- Logs of the constraints emitted for each argument can be found with `RUST_LOG=compile=trace …`
- Logs of each probe and its outcome can be found with `RUST_LOG=probe …`
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [compilation](crate::kb::compile) of predicates into constraints.
    pub const COMPILE: &str = "compile";

    /// Logs related to the [sort taxonomy](crate::kb::taxonomy) and entity registry.
    pub const TAXONOMY: &str = "taxonomy";

    /// Logs related to [probes](crate::world::World::probe).
    pub const PROBE: &str = "probe";

    /// Logs related to [commits](crate::world::World::commit).
    pub const COMMIT: &str = "commit";

    /// Logs related to [propagation](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to the [clause database](crate::db::clause) and [rules](crate::db::rule)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to a [dialogue](crate::dialogue)
    pub const DIALOGUE: &str = "dialogue";

    /// Logs related to reading a [questionnaire](crate::questionnaire)
    pub const QUESTIONNAIRE: &str = "questionnaire";
}
