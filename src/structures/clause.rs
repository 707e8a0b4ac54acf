//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use otter_world::structures::literal::CLiteral;
//! # use otter_world::structures::clause::Clause;
//! let clause = vec![CLiteral::new(3, true), CLiteral::new(1, false), CLiteral::new(2, true)];
//!
//! assert_eq!(clause.size(), 3);
//!
//! let mut valuation = vec![Some(true); 4];
//! valuation[3] = Some(false);
//! valuation[2] = None;
//! assert_eq!(clause.asserts(&valuation), Some(CLiteral::new(2, true)));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

use crate::structures::{literal::CLiteral, valuation::Valuation};

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

/// The clause trait.
pub trait Clause {
    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// The literal asserted by the clause on a given valuation, if one such literal exists. \
    /// In detail, returns:
    /// - Some(*l*), if *l* has no value on the given valuation and every other literal of the clause is false.
    /// - None, otherwise.
    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral> {
        let mut candidate = None;
        for literal in self.literals() {
            match valuation.value_of(literal.atom()) {
                Some(value) if value == literal.polarity() => return None,
                Some(_) => {}
                None => match candidate {
                    None => candidate = Some(*literal),
                    Some(_) => return None,
                },
            }
        }
        candidate
    }

    /// Some string representation of the clause, using internal atoms.
    fn as_string(&self) -> String {
        let mut the_string = String::default();
        for literal in self.literals() {
            the_string.push_str(format!("{literal} ").as_str());
        }
        the_string.pop();
        the_string
    }
}

impl Clause for CClause {
    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn canonical(self) -> CClause {
        self
    }
}

impl Clause for CLiteral {
    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        std::iter::once(self)
    }

    fn size(&self) -> usize {
        1
    }

    fn canonical(self) -> CClause {
        vec![self]
    }
}

/// Primarily to distinguish the case where preprocessing results in an empty clause.
#[derive(Debug, PartialEq, Eq)]
pub enum PreprocessingOk {
    /// The clause contains some literal and its negation.
    Tautology,

    /// The clause is sorted, free of duplicate literals, and not a tautology.
    Clause,
}

/// Sorts a clause and removes duplicate literals.
///
/// Sorting gives every clause a single representation, so identical clauses may be detected by the clause database.
pub fn preprocess_clause(clause: &mut CClause) -> PreprocessingOk {
    clause.sort_unstable();
    clause.dedup();

    match clause.windows(2).any(|pair| pair[0].atom() == pair[1].atom()) {
        true => PreprocessingOk::Tautology,
        false => PreprocessingOk::Clause,
    }
}
