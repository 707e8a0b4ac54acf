//! Determines the satisfiability of the formula in a context, given the assumptions.
//!
//! # Overview
//!
//! The search is a complete backtracking search over the fixed valuation:
//!
//! - The valuation is restored to the fixed valuation, and each assumption is valued and propagated.
//!   If some assumption conflicts with the fixed valuation, or propagation of the assumptions leads to conflict, there is no model.
//! - Otherwise, decisions are made and propagated until either every atom has a value, in which case the valuation is a model, or some clause is false.
//! - On conflict, the search [backtracks](crate::procedures::backtrack) to the most recent decision which has not been tried with both values, and tries the other value.
//!   If there is no such decision, there is no model.
//!
//! ```none
//!           +---------------+
//!   +-------| make_decision |-----> model, if every atom has a value
//!   |       +---------------+
//!   |               ⌃
//!   |               | no conflict
//!   ⌄               |
//! --+----------->+-----+
//!   ⌃            | bcp |
//!   |            +-----+
//!   |               |
//!   |               | conflict
//!   |               ⌄
//!   |         +-----------+
//!   +---------| backtrack |-----> no model, if every decision has been tried
//!             +-----------+
//! ```
//!
//! The valuation found is left in place until the next solve or [reset](crate::context::GenericContext::reset_assumptions).

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    procedures::{bcp::PropagationOk, decision::DecisionOk},
    structures::valuation::{Model, Valuation},
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Searches for a model of the formula and assumptions, preferring false decisions if `optimize` is set.
    ///
    /// Returns `Ok(None)` if there is no model.
    pub fn solve_given(&mut self, optimize: bool) -> Result<Option<Model>, err::OracleError> {
        let total_time = std::time::Instant::now();
        self.counters.solves += 1;

        if self.refresh() == ContextState::Inconsistent {
            return Ok(None);
        }

        self.atom_db.restore_fixed();
        self.trail.clear();

        for index in 0..self.assumptions.len() {
            let assumption = self.assumptions[index];
            match self.atom_db.valuation.value_of(assumption.atom()) {
                None => self.assign(assumption),
                Some(value) if value != assumption.polarity() => {
                    log::trace!(target: targets::PROPAGATION, "Assumption {assumption} conflicts");
                    return Ok(None);
                }
                Some(_) => {}
            }
        }

        let time_limit = self.config.time_limit();

        'solve_loop: loop {
            self.counters.total_iterations += 1;

            self.counters.time = total_time.elapsed();
            if time_limit.is_some_and(|limit| self.counters.time > limit) {
                return Err(err::OracleError::TimeUp);
            }

            match self.bcp() {
                PropagationOk::Exhausted => match self.make_decision(optimize) {
                    DecisionOk::Literal(decision) => {
                        self.trail.store_decision(decision, false);
                        self.atom_db.set_value(decision);
                        continue 'solve_loop;
                    }

                    DecisionOk::Exhausted => break 'solve_loop,
                },

                PropagationOk::Conflict(_) => {
                    self.counters.total_conflicts += 1;
                    match self.backtrack() {
                        Some(flipped) => {
                            self.trail.store_decision(flipped, true);
                            self.atom_db.set_value(flipped);
                        }

                        None => return Ok(None),
                    }
                }
            }
        }

        let model = Model::from_valuation(&self.atom_db.valuation, self.atom_db.count());
        log::trace!(target: targets::DECISION, "Model found after {} decisions", self.trail.decision_count());
        Ok(Some(model))
    }
}
