//! Key structures, such as atoms, literals, clauses, and the names given to atoms.
//!
//! # Atoms and propositions
//!
//! Within the oracle every boolean variable is an [atom](atom::Atom).
//! Atoms which have been given a [name](name::PropositionName) are the *propositions* of a world --- e.g. `loves(mother)` or `exists(§family)`.
//! Other atoms are auxiliary, introduced by the oracle to encode rule bodies or cardinality constraints, and are never reported.
//!
//! # Formulas
//!
//! A formula is a set of [clauses](clause), interpreted as the conjunction of those clauses.
//! Alongside the formula the oracle keeps a collection of rules, whose completion is added to the formula whenever the oracle is consulted.
//!
//! # Valuations and models
//!
//! A [valuation](valuation) is a partial function from atoms to truth values.
//! A [model](valuation::Model) is a full valuation frozen at the end of a successful solve.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod name;
pub mod valuation;
