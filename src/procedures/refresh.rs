/*!
Finds the valuation fixed by the formula.

The fixed valuation is the valuation given by propagating every unit clause of the formula, without any assumption or decision.
Any literal on the fixed valuation holds on every model of the formula.

Completion clauses depend on every rule, and so are regenerated before the fixed valuation is found.

The fixed valuation is cached, and is only found again after some change to the formula.
*/

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    procedures::bcp::PropagationOk,
    structures::valuation::Valuation,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Regenerates completion clauses and the fixed valuation, if the formula has changed.
    ///
    /// Returns the state of the context, which is either [Consistent](ContextState::Consistent) or [Inconsistent](ContextState::Inconsistent).
    pub fn refresh(&mut self) -> ContextState {
        if self.state != ContextState::Input {
            return self.state;
        }

        self.clause_db.replace_completion(self.rule_db.completion());
        self.clause_db.index(self.atom_db.count());

        self.atom_db.clear_valuation();
        self.trail.clear();

        self.state = 'fixing: {
            if self.clause_db.contains_empty() {
                break 'fixing ContextState::Inconsistent;
            }

            let units = self
                .clause_db
                .all_clauses()
                .filter(|(_, clause)| clause.len() == 1)
                .map(|(_, clause)| clause[0])
                .collect::<Vec<_>>();

            for unit in units {
                match self.atom_db.valuation.value_of(unit.atom()) {
                    None => self.assign(unit),
                    Some(value) if value != unit.polarity() => {
                        break 'fixing ContextState::Inconsistent;
                    }
                    Some(_) => {}
                }
            }

            match self.bcp() {
                PropagationOk::Exhausted => ContextState::Consistent,
                PropagationOk::Conflict(_) => ContextState::Inconsistent,
            }
        };

        log::trace!(target: targets::PROPAGATION, "Refreshed: {}", self.state);

        self.atom_db.fixed.clone_from(&self.atom_db.valuation);
        self.trail.clear();
        self.state
    }
}
