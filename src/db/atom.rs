/*!
A database of 'atom related' things, accessed via fields on the database.

Things include:
- The name of each atom, if the atom is a proposition.
- The valuation of the current solve.
- The valuation fixed by the formula, aka. the 'root' valuation.

Atoms are created by [fresh_atom](AtomDB::fresh_atom), and only the atom database creates atoms.
The top atom is created with the database, so every other atom is positive.

Names are unique, so a name is enough to fetch the atom of a proposition.
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX, TOP_ATOM},
        literal::CLiteral,
        name::PropositionName,
        valuation::CValuation,
    },
    types::err::{self},
};

/// The atom database.
pub struct AtomDB {
    /// The name of each atom, `None` for auxiliary atoms and top.
    names: Vec<Option<PropositionName>>,

    /// A map from names to atoms.
    index: HashMap<PropositionName, Atom>,

    /// The valuation of the current solve.
    pub valuation: CValuation,

    /// The values fixed by the formula, without any assumption or decision.
    ///
    /// Only accurate after a [refresh](crate::procedures::refresh).
    pub fixed: CValuation,
}

impl Default for AtomDB {
    fn default() -> Self {
        AtomDB {
            names: vec![None],
            index: HashMap::default(),
            valuation: vec![Some(true)],
            fixed: vec![Some(true)],
        }
    }
}

impl AtomDB {
    /// A fresh atom, with the given name if any.
    ///
    /// The caller is responsible for ensuring the name is not already in use.
    pub fn fresh_atom(&mut self, name: Option<PropositionName>) -> Result<Atom, err::OracleError> {
        let atom = match Atom::try_from(self.names.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(err::OracleError::AtomsExhausted),
        };

        if let Some(name) = &name {
            log::trace!(target: targets::CLAUSE_DB, "Atom {atom} named {name}");
            self.index.insert(name.clone(), atom);
        }

        self.names.push(name);
        self.valuation.push(None);
        self.fixed.push(None);
        Ok(atom)
    }

    /// The atom with the given name, if one exists.
    pub fn atom_named(&self, name: &PropositionName) -> Option<Atom> {
        self.index.get(name).copied()
    }

    /// The name of an atom, if the atom exists and has a name.
    pub fn name_of(&self, atom: Atom) -> Option<&PropositionName> {
        self.names.get(atom as usize).and_then(|name| name.as_ref())
    }

    /// A count of atoms, including top.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// True if the atom has been created.
    pub fn contains(&self, atom: Atom) -> bool {
        (atom as usize) < self.names.len()
    }

    /// A count of named atoms.
    pub fn proposition_count(&self) -> usize {
        self.index.len()
    }

    /// Values the atom of a literal to match the polarity of the literal, on the current valuation.
    pub fn set_value(&mut self, literal: CLiteral) {
        self.valuation[literal.atom() as usize] = Some(literal.polarity());
    }

    /// Clears the value of an atom, on the current valuation.
    pub fn drop_value(&mut self, atom: Atom) {
        if atom != TOP_ATOM {
            self.valuation[atom as usize] = None;
        }
    }

    /// A fresh valuation, with only top valued.
    pub fn clear_valuation(&mut self) {
        self.valuation = vec![None; self.names.len()];
        self.valuation[TOP_ATOM as usize] = Some(true);
    }

    /// Restores the current valuation to the fixed valuation.
    pub fn restore_fixed(&mut self) {
        self.valuation.clone_from(&self.fixed);
    }
}

#[cfg(test)]
mod atom_db_tests {
    use crate::structures::{name::PropositionName, valuation::Valuation};

    use super::*;

    #[test]
    fn names() {
        let mut db = AtomDB::default();
        let p_name = PropositionName::Atomic("p".to_string());

        let p = db.fresh_atom(Some(p_name.clone())).unwrap();
        let aux = db.fresh_atom(None).unwrap();

        assert_eq!(p, 1);
        assert_eq!(db.atom_named(&p_name), Some(p));
        assert_eq!(db.name_of(p), Some(&p_name));
        assert_eq!(db.name_of(aux), None);
        assert_eq!(db.proposition_count(), 1);
        assert_eq!(db.count(), 3);
    }

    #[test]
    fn top_survives() {
        let mut db = AtomDB::default();
        let p = db.fresh_atom(None).unwrap();

        db.set_value(CLiteral::new(p, false));
        db.drop_value(TOP_ATOM);
        db.drop_value(p);

        assert_eq!(db.valuation.value_of(TOP_ATOM), Some(true));
        assert_eq!(db.valuation.value_of(p), None);
    }
}
