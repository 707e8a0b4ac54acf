//! Chronological backtracking.
//!
//! On a conflict the most recent decision whose negation has not yet been tried is undone, along with every later decision and the consequences of those decisions.
//! The negation of the undone decision is then returned, to be made in place of the decision.
//!
//! If every decision has been tried with both values, the conflict is a consequence of the assumptions (and fixed valuation) alone.

use crate::{context::GenericContext, structures::literal::CLiteral};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backtracks to the most recent decision whose negation has not been tried, returning the negation.
    ///
    /// Returns None if there is no such decision, in which case every decision has been undone.
    pub fn backtrack(&mut self) -> Option<CLiteral> {
        while let Some(decision) = self.trail.decisions.pop() {
            for literal in self.trail.literals.drain(decision.index..) {
                self.atom_db.drop_value(literal.atom());
            }
            self.trail.q_head = decision.index;

            if !decision.flipped {
                return Some(decision.literal.negate());
            }
        }
        None
    }
}
