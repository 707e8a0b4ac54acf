use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, rule::RuleDB, trail::Trail},
    structures::literal::CLiteral,
};

use super::{ContextState, Counters};

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// [Default] is used in calls to [make_decision](GenericContext::make_decision) to appease the borrow checker.
///
/// # Example
///
/// ```rust
/// # use otter_world::context::GenericContext;
/// # use otter_world::generic::random::MinimalPCG32;
/// # use otter_world::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config(Config::default());
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The rule database.
    /// See [db::rule](crate::db::rule) for details.
    pub rule_db: RuleDB,

    /// The trail of the current solve.
    pub trail: Trail,

    /// Literals forced to hold on the next solve.
    pub assumptions: Vec<CLiteral>,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A context from some config, with the given source of rng.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            rule_db: RuleDB::default(),
            trail: Trail::default(),
            assumptions: Vec::default(),
            state: ContextState::Input,
            rng,
        }
    }

    /// Notes the formula has changed, so the fixed valuation is out of date.
    pub fn note_input(&mut self) {
        self.state = ContextState::Input;
    }
}
