/*!
A context method for boolean constraint propagation.

See [GenericContext::bcp] for the relevant context method.

# Overview
Propagates each literal on the trail which has not yet been propagated.

For a literal *l*, every clause containing -*l* is examined, as these are the only clauses whose status may have changed.
A clause is either:
- Satisfied, if some literal of the clause is true.
- Asserting, if every literal but one is false and the remaining literal has no value, in which case the remaining literal is valued true and placed on the trail.
- Conflicting, if every literal is false.
- Open, otherwise.

Propagation ends on the first conflict, or when every literal on the trail has been propagated.

Occurrence lists are used rather than watched literals, as the formulas compiled from a world are small and are rebuilt often.
*/

use crate::{
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{literal::CLiteral, valuation::Valuation},
};

/// Possible 'Ok' results from propagation.
#[derive(Debug, PartialEq, Eq)]
pub enum PropagationOk {
    /// Every literal on the trail was propagated, without conflict.
    Exhausted,

    /// The clause with the given key is false on the valuation.
    Conflict(ClauseKey),
}

/// The status of a clause on a valuation.
enum ClauseStatus {
    Satisfied,
    Asserting(CLiteral),
    Conflict,
    Open,
}

fn examine(clause: &[CLiteral], valuation: &impl Valuation) -> ClauseStatus {
    let mut candidate = None;
    for literal in clause {
        match valuation.value_of(literal.atom()) {
            Some(value) if value == literal.polarity() => return ClauseStatus::Satisfied,
            Some(_) => {}
            None => match candidate {
                None => candidate = Some(*literal),
                Some(_) => return ClauseStatus::Open,
            },
        }
    }
    match candidate {
        Some(literal) => ClauseStatus::Asserting(literal),
        None => ClauseStatus::Conflict,
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    pub fn bcp(&mut self) -> PropagationOk {
        while let Some(literal) = self.trail.next_to_propagate() {
            for key in self.clause_db.occurrences(literal.negate()) {
                match examine(self.clause_db.get(*key), &self.atom_db.valuation) {
                    ClauseStatus::Satisfied | ClauseStatus::Open => {}

                    ClauseStatus::Asserting(consequence) => {
                        log::trace!(target: targets::PROPAGATION, "{consequence} from {key} and {literal}");
                        self.atom_db.set_value(consequence);
                        self.trail.store_assignment(consequence);
                    }

                    ClauseStatus::Conflict => {
                        log::trace!(target: targets::PROPAGATION, "Consequence of {key} and {literal} is contradiction");
                        return PropagationOk::Conflict(*key);
                    }
                }
            }
        }
        PropagationOk::Exhausted
    }

    /// Values a literal and places it on the trail, to be propagated.
    pub fn assign(&mut self, literal: CLiteral) {
        self.atom_db.set_value(literal);
        self.trail.store_assignment(literal);
    }
}
