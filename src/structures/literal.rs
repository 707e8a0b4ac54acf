//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical implementation is the [CLiteral] structure, made of an atom and a boolean.
//!
//! ```rust
//! # use otter_world::structures::literal::CLiteral;
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(-literal, literal.negate());
//! ```
//!
//! Literals are ordered by atom and then polarity, with false (strictly) less than true.
//! This ordering is relied on when sorting clauses to detect duplicates.

use crate::structures::atom::Atom;

/// The canonical representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl CLiteral {
    /// A fresh literal, specified by pairing an atom with a boolean.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> Atom {
        self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The literal in its integer form, with sign indicating polarity.
    pub fn as_int(&self) -> isize {
        match self.polarity {
            true => self.atom as isize,
            false => -(self.atom as isize),
        }
    }

    /// An index unique to the literal, for use with structures indexed by literals rather than atoms.
    ///
    /// Indicies are contiguous: the negative literal of atom *a* is `2a` and the positive literal is `2a + 1`.
    pub fn index(&self) -> usize {
        (self.atom as usize) * 2 + (self.polarity as usize)
    }
}

impl std::ops::Neg for CLiteral {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn ordering() {
        let p = CLiteral::new(1, true);
        let not_p = CLiteral::new(1, false);
        let q = CLiteral::new(2, false);

        assert!(not_p < p);
        assert!(p < q);
    }

    #[test]
    fn indicies_are_distinct() {
        let p = CLiteral::new(3, true);
        assert_eq!(p.index(), 7);
        assert_eq!(p.negate().index(), 6);
        assert_eq!(p.as_int(), 3);
        assert_eq!((-p).as_int(), -3);
    }
}
