/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is a vector of optional booleans, where:
- The zero index (first) element is true, interpreted as some arbitrary tautology.
- Each non-zero index of the vector is interpreted as an atom.

```rust
# use otter_world::structures::valuation::Valuation;
let valuation = vec![Some(true), None, Some(false), None];

assert_eq!(valuation.value_of(2), Some(false));
assert_eq!(valuation.unvalued_atoms().count(), 2);
```

A [Model] is a full valuation taken at the end of a successful solve, after which it is never revised.
*/

use crate::structures::{atom::Atom, literal::CLiteral};

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of an atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// The value of an atom under the valuation, if the atom is part of the valuation and has some value.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// An iterator through atoms which do not have some value (excluding top).
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// An iterator through all (Atom, Value) pairs for which the atom has some value (excluding top).
    fn atom_valued_pairs(&self) -> impl Iterator<Item = (Atom, bool)>;

    /// Whether the given literal is true on the valuation.
    fn satisfies(&self, literal: CLiteral) -> bool {
        self.value_of(literal.atom()) == Some(literal.polarity())
    }
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter(|(_, value)| value.is_none())
            .map(|(atom, _)| atom as Atom)
    }

    fn atom_valued_pairs(&self) -> impl Iterator<Item = (Atom, bool)> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| value.map(|v| (atom as Atom, v)))
    }
}

/// A complete valuation, as found by a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    values: Vec<bool>,
}

impl Model {
    /// A model from some valuation, with any atom lacking a value taken to be false.
    pub fn from_valuation(valuation: &impl Valuation, atom_count: usize) -> Self {
        let values = (0..atom_count)
            .map(|atom| valuation.value_of(atom as Atom).unwrap_or(false))
            .collect();
        Model { values }
    }

    /// The value of an atom on the model, if the atom was part of the language when the model was found.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.values.get(atom as usize).copied()
    }

    /// True if the literal is true on the model.
    ///
    /// Atoms created after the model was found are false.
    pub fn holds(&self, literal: CLiteral) -> bool {
        self.value_of(literal.atom()).unwrap_or(false) == literal.polarity()
    }

    /// An iterator through the atoms true on the model (excluding top), in atom order.
    pub fn true_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.values
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, value)| **value)
            .map(|(atom, _)| atom as Atom)
    }

    /// A count of the atoms in the model (including top).
    pub fn atom_count(&self) -> usize {
        self.values.len()
    }
}
