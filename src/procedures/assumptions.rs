//! Assumptions, aka. literals forced to hold on the next solve.
//!
//! Assumptions are not part of the formula.
//! They hold only until [reset](GenericContext::reset_assumptions), and so allow a question to be put to the oracle without a trace.
//!
//! In a solve, each assumption is valued before any decision is made, and no decision revises an assumption.

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::literal::CLiteral,
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Forces a literal to hold on the next solve.
    pub fn add_assumption(&mut self, literal: CLiteral) -> Result<(), err::OracleError> {
        if !self.atom_db.contains(literal.atom()) {
            return Err(err::OracleError::UnknownAtom(literal.atom()));
        }
        log::trace!(target: targets::PROPAGATION, "Assumption {literal}");
        self.assumptions.push(literal);
        Ok(())
    }

    /// Clears all assumptions, and any decisions or consequences of a previous solve.
    pub fn reset_assumptions(&mut self) {
        self.assumptions.clear();
        self.trail.clear();
        self.atom_db.restore_fixed();
    }
}
