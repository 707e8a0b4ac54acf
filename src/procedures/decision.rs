/*!
Methods for choosing the value of an atom.

# Overview

The core decision procedure is straightforward:
- Search through all atoms in the context for an atom which is not assigned a value, and assign either true or false.

By default the lowest atom without a value is chosen.
As atoms are created in the order propositions are first mentioned, this gives priority to propositions mentioned early.

# Polarity

When [optimizing](crate::config::Config::optimize), every decision is false.
So, only those propositions required to be true by the constraints and assumptions are made true.

Otherwise, a decision is true with probability [polarity_lean](crate::config::Config::polarity_lean).

# Randomness

With probability [random_decision_bias](crate::config::Config::random_decision_bias) the atom is chosen at random from those without a value.
*/

use rand::{seq::IteratorRandom, Rng};

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{atom::Atom, literal::CLiteral, valuation::Valuation},
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
pub enum DecisionOk {
    /// Some truth value was assigned to some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

/// Methods related to making decisions.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Chooses an atom without a value and a value for the atom.
    ///
    /// The decision is not made on the valuation, this is left to the caller.
    pub fn make_decision(&mut self, optimize: bool) -> DecisionOk {
        // Takes ownership of rng to satisfy the borrow checker.
        let mut rng = std::mem::take(&mut self.rng);
        let chosen_atom = self.atom_without_value(&mut rng);
        self.rng = rng;

        match chosen_atom {
            Some(chosen_atom) => {
                self.counters.total_decisions += 1;

                let value = match optimize {
                    true => false,
                    false => self.rng.gen_bool(self.config.polarity_lean.value),
                };

                let decision_literal = CLiteral::new(chosen_atom, value);
                log::trace!(target: targets::DECISION, "Decision {decision_literal}");
                DecisionOk::Literal(decision_literal)
            }

            None => DecisionOk::Exhausted,
        }
    }

    /// Returns an atom which has no value on the current valuation, either by random choice or the lowest such atom.
    pub fn atom_without_value(&mut self, rng: &mut impl Rng) -> Option<Atom> {
        match rng.gen_bool(self.config.random_decision_bias.value) {
            true => self.atom_db.valuation.unvalued_atoms().choose(rng),
            false => self.atom_db.valuation.unvalued_atoms().next(),
        }
    }
}
