use crate::structures::literal::CLiteral;

/// A decision made during a solve.
#[derive(Clone, Copy, Debug)]
pub struct Decision {
    /// The index of the decision on the trail.
    pub index: usize,

    /// The literal decided.
    pub literal: CLiteral,

    /// Whether the decision is the negation of some earlier decision, in which case both values of the atom have been tried.
    pub flipped: bool,
}

/// The literals valued during a solve, in order of valuation.
///
/// Literals valued before any decision are the assumptions of the solve and their consequences.
#[derive(Default)]
pub struct Trail {
    /// Every literal valued, in order.
    pub literals: Vec<CLiteral>,

    /// Every decision made, in order.
    pub decisions: Vec<Decision>,

    /// The index of the next literal to propagate.
    pub q_head: usize,
}

impl Trail {
    /// Stores a literal, to be propagated.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// Stores a decision, to be propagated.
    pub fn store_decision(&mut self, literal: CLiteral, flipped: bool) {
        self.decisions.push(Decision {
            index: self.literals.len(),
            literal,
            flipped,
        });
        self.literals.push(literal);
    }

    /// The next literal to propagate, if one exists, advancing the queue.
    pub fn next_to_propagate(&mut self) -> Option<CLiteral> {
        let literal = self.literals.get(self.q_head).copied();
        if literal.is_some() {
            self.q_head += 1;
        }
        literal
    }

    /// A count of decisions made.
    pub fn decision_count(&self) -> usize {
        self.decisions.len()
    }

    /// Clears the trail.
    pub fn clear(&mut self) {
        self.literals.clear();
        self.decisions.clear();
        self.q_head = 0;
    }
}
