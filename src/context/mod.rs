/*!
The context --- to which constraints are added and within which solves take place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness.
[from_config](Context::from_config) is implemented for a context rather than a generic context, to avoid requiring a source of randomness to be supplied alongside a config.

A context is the [oracle](crate::oracle::Oracle) a [world](crate::world::World) consults.

# Example
```rust
# use otter_world::context::Context;
# use otter_world::config::Config;
# use otter_world::oracle::{Constraint, Oracle};
# use otter_world::structures::literal::CLiteral;
# use otter_world::structures::name::PropositionName;
let mut the_context = Context::from_config(Config::default());

let p = the_context.proposition(PropositionName::Atomic("p".to_string())).unwrap();
let q = the_context.proposition(PropositionName::Atomic("q".to_string())).unwrap();

let p_or_q = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(the_context.assert(Constraint::Clause(p_or_q)).is_ok());
assert!(the_context.assert(Constraint::Clause(vec![CLiteral::new(p, false)])).is_ok());

assert_eq!(the_context.fixed_value(q), Ok(Some(true)));

let model = the_context.solve(false).unwrap().unwrap();
assert_eq!(model.value_of(p), Some(false));
assert_eq!(model.value_of(q), Some(true));
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// Constraints have been added since the fixed valuation was last found.
    Input,

    /// The fixed valuation is current, and consistent.
    Consistent,

    /// The fixed valuation is current, and the constraints are unsatisfiable regardless of assumptions.
    Inconsistent,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Consistent => write!(f, "Consistent"),
            Self::Inconsistent => write!(f, "Inconsistent"),
        }
    }
}
