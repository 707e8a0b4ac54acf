/*!
A database of rules.

A rule is a head atom paired with a body, a conjunction of literals, and is read as 'the head holds if the body holds'.

Rules are given the *completion* semantics: a head holds exactly when at least one of its bodies holds.
So, the head of a rule with bodies *B₁*, …, *Bₖ* is equivalent to *B₁* ∨ … ∨ *Bₖ*.

The database stores, for each head, the *support* of each body --- the literal true exactly when the body holds.
For a body of a single literal, the support is the literal itself.
For a longer body, the support is an auxiliary atom defined to be equivalent to the body, shared by every rule with the same body.

A head may be declared without any body, in which case the completion clause is the unit clause -*h*, until some body is added.

From the supports, a completion clause -*h* ∨ *s₁* ∨ … ∨ *sₖ* is generated for each head *h*.
The other half of each equivalence, *sᵢ* → *h*, is an original clause, and is stored when the rule is added.
*/

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::structures::{atom::Atom, clause::CClause, literal::CLiteral};

/// The rule database.
#[derive(Default)]
pub struct RuleDB {
    /// The supports of each head, in order of addition.
    supports: BTreeMap<Atom, Vec<CLiteral>>,

    /// Every (head, body) pair, for detecting duplicate rules.
    seen: HashSet<(Atom, CClause)>,

    /// Auxiliary atoms equivalent to a body, by body.
    definitions: HashMap<CClause, Atom>,
}

impl RuleDB {
    /// True if the rule has already been recorded.
    pub fn contains(&self, head: Atom, body: &CClause) -> bool {
        self.seen.contains(&(head, body.clone()))
    }

    /// Records the support of a (new) rule.
    pub fn record(&mut self, head: Atom, body: CClause, support: CLiteral) {
        self.seen.insert((head, body));
        let supports = self.supports.entry(head).or_default();
        if !supports.contains(&support) {
            supports.push(support);
        }
    }

    /// Notes an atom is the head of rules, though perhaps without any body.
    pub fn declare_head(&mut self, head: Atom) {
        self.supports.entry(head).or_default();
    }

    /// The auxiliary atom defined to be equivalent to a body, if one exists.
    pub fn definition(&self, body: &CClause) -> Option<Atom> {
        self.definitions.get(body).copied()
    }

    /// Notes an auxiliary atom is equivalent to a body.
    pub fn define(&mut self, body: CClause, atom: Atom) {
        self.definitions.insert(body, atom);
    }

    /// The completion clause of each head.
    pub fn completion(&self) -> Vec<CClause> {
        self.supports
            .iter()
            .map(|(head, supports)| {
                let mut clause = Vec::with_capacity(supports.len() + 1);
                clause.push(CLiteral::new(*head, false));
                clause.extend(supports.iter().copied());
                clause
            })
            .collect()
    }

    /// A count of recorded rules.
    pub fn count(&self) -> usize {
        self.seen.len()
    }

    /// The supports of a head.
    pub fn supports_of(&self, head: Atom) -> &[CLiteral] {
        match self.supports.get(&head) {
            Some(supports) => supports,
            None => &[],
        }
    }
}
