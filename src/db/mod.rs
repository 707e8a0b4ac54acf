//! Databases for holding information relevant to a solve.
//!
//! - [The atom database](crate::db::atom)
//!   + Names of atoms, the valuation of the current solve, and the valuation fixed by the formula.
//! - [The clause database](crate::db::clause)
//!   + A collection of clauses, each indexed by a [ClauseKey]. \
//!     There are two kinds of clause:
//!     * Original clauses \
//!       Clauses asserted to the oracle, or used to define an auxiliary atom. \
//!       Original clauses are never removed.
//!     * Completion clauses \
//!       For each head of a rule, the clause requiring some body of the head to hold when the head holds. \
//!       Completion clauses are rebuilt whenever a rule is added.
//! - [The rule database](crate::db::rule)
//!   + The bodies of each rule, by head.
//! - [The trail](crate::db::trail)
//!   + The literals valued during a solve, in order, with the decisions made.

pub mod atom;
pub mod clause;
pub mod rule;
pub mod trail;

/// The key to a clause in the [clause database](crate::db::clause).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClauseKey {
    /// The key to an original clause.
    Original(usize),

    /// The key to a completion clause.
    Completion(usize),
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original(index) => write!(f, "o_{index}"),
            Self::Completion(index) => write!(f, "c_{index}"),
        }
    }
}
