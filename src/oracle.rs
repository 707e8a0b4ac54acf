/*!
The interface to a satisfiability oracle.

A [knowledge base](crate::kb) compiles predicates into constraints, and a [world](crate::world) asks questions of the constraints, only through the [Oracle] trait.
The [context](crate::context) of the library is one oracle, though any structure implementing the trait may be used.

# Propositions

Atoms are fetched by name, with [proposition](Oracle::proposition) creating an atom for a name on first use.
So, repeated requests for the same name give the same atom, and propositions are never constructed apart from the oracle.

# Constraints

Three kinds of [Constraint] may be asserted:
- A clause, or disjunction of literals.
- An implication between two literals.
- A rule, given *completion* semantics: the head holds exactly when some body asserted for the head holds.

Constraints are permanent.

# Questions

Literals may be [forced](Oracle::force) to hold on the next [solve](Oracle::solve), until [reset](Oracle::reset_decisions).
The value of an atom fixed by the constraints alone is available through [fixed_value](Oracle::fixed_value).
*/

use crate::{
    context::{ContextState, GenericContext},
    structures::{
        atom::Atom, clause::CClause, literal::CLiteral, name::PropositionName, valuation::Model,
    },
    types::err::{self},
};

/// A constraint to assert to an oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constraint {
    /// At least one literal holds.
    Clause(CClause),

    /// If the body holds, the head holds.
    Implication { body: CLiteral, head: CLiteral },

    /// The head holds if every literal of the body holds, and (taken with every other rule for the head) only if.
    Rule { head: Atom, body: Vec<CLiteral> },
}

/// The operations on an oracle required to compile and question a world.
pub trait Oracle {
    /// The atom of the proposition with the given name, created if required.
    fn proposition(&mut self, name: PropositionName) -> Result<Atom, err::OracleError>;

    /// The atom of the proposition with the given name, if one exists.
    fn lookup(&self, name: &PropositionName) -> Option<Atom>;

    /// The name of an atom, if the atom is a proposition.
    fn name_of(&self, atom: Atom) -> Option<&PropositionName>;

    /// Asserts a constraint.
    fn assert(&mut self, constraint: Constraint) -> Result<(), err::OracleError>;

    /// Declares an atom to be the head of rules, so the atom holds only if some rule for the atom holds.
    ///
    /// A head without any rule is false.
    /// Asserting a [rule](Constraint::Rule) declares the head of the rule.
    fn define(&mut self, head: Atom) -> Result<(), err::OracleError>;

    /// Asserts at most `bound` of the literals hold.
    fn at_most(&mut self, bound: usize, literals: &[CLiteral]) -> Result<(), err::OracleError>;

    /// Asserts the literals do not both hold.
    fn inconsistent(&mut self, a: CLiteral, b: CLiteral) -> Result<(), err::OracleError> {
        self.assert(Constraint::Clause(vec![a.negate(), b.negate()]))
    }

    /// Asserts exactly one of the literals holds.
    fn unique(&mut self, literals: &[CLiteral]) -> Result<(), err::OracleError> {
        self.assert(Constraint::Clause(literals.to_vec()))?;
        self.at_most(1, literals)
    }

    /// Clears every forced literal, and any valuation from a previous solve.
    fn reset_decisions(&mut self);

    /// Forces a literal to hold on solves until the next reset.
    fn force(&mut self, literal: CLiteral) -> Result<(), err::OracleError>;

    /// Searches for a model of the constraints and forced literals, preferring false values if `optimize` is set.
    ///
    /// Returns `Ok(None)` if there is no model.
    fn solve(&mut self, optimize: bool) -> Result<Option<Model>, err::OracleError>;

    /// The value of an atom on every model of the constraints, if there is such a value.
    fn fixed_value(&mut self, atom: Atom) -> Result<Option<bool>, err::OracleError>;

    /// True if the atom has the same value on every model of the constraints.
    fn is_fixed(&mut self, atom: Atom) -> Result<bool, err::OracleError> {
        Ok(self.fixed_value(atom)?.is_some())
    }

    /// A count of the constraints stored by the oracle.
    ///
    /// Asserting a constraint identical to some stored constraint does not change the count.
    fn constraint_count(&self) -> usize;
}

impl<R: rand::Rng + std::default::Default> Oracle for GenericContext<R> {
    fn proposition(&mut self, name: PropositionName) -> Result<Atom, err::OracleError> {
        self.fresh_atom(Some(name))
    }

    fn lookup(&self, name: &PropositionName) -> Option<Atom> {
        self.atom_db.atom_named(name)
    }

    fn name_of(&self, atom: Atom) -> Option<&PropositionName> {
        self.atom_db.name_of(atom)
    }

    fn assert(&mut self, constraint: Constraint) -> Result<(), err::OracleError> {
        match constraint {
            Constraint::Clause(clause) => self.add_clause(clause).map(|_| ()),

            Constraint::Implication { body, head } => {
                self.add_clause(vec![body.negate(), head]).map(|_| ())
            }

            Constraint::Rule { head, body } => self.add_rule(head, body).map(|_| ()),
        }
    }

    fn define(&mut self, head: Atom) -> Result<(), err::OracleError> {
        self.add_head(head)
    }

    fn at_most(&mut self, bound: usize, literals: &[CLiteral]) -> Result<(), err::OracleError> {
        self.add_at_most(bound, literals)
    }

    fn reset_decisions(&mut self) {
        self.reset_assumptions();
    }

    fn force(&mut self, literal: CLiteral) -> Result<(), err::OracleError> {
        self.add_assumption(literal)
    }

    fn solve(&mut self, optimize: bool) -> Result<Option<Model>, err::OracleError> {
        self.solve_given(optimize)
    }

    fn fixed_value(&mut self, atom: Atom) -> Result<Option<bool>, err::OracleError> {
        if !self.atom_db.contains(atom) {
            return Err(err::OracleError::UnknownAtom(atom));
        }
        match self.refresh() {
            ContextState::Inconsistent => Ok(None),
            _ => Ok(self.atom_db.fixed[atom as usize]),
        }
    }

    fn constraint_count(&self) -> usize {
        self.clause_db.original_count() + self.rule_db.count()
    }
}

#[cfg(test)]
mod oracle_tests {
    use super::*;
    use crate::context::Context;

    fn named(oracle: &mut impl Oracle, name: &str) -> Atom {
        oracle
            .proposition(PropositionName::Atomic(name.to_string()))
            .unwrap()
    }

    #[test]
    fn propositions_are_shared() {
        let mut oracle = Context::default();
        let p = named(&mut oracle, "p");
        let also_p = named(&mut oracle, "p");
        let q = named(&mut oracle, "q");

        assert_eq!(p, also_p);
        assert_ne!(p, q);
        assert_eq!(
            oracle.lookup(&PropositionName::Atomic("q".to_string())),
            Some(q)
        );
        assert_eq!(
            oracle.name_of(q),
            Some(&PropositionName::Atomic("q".to_string()))
        );
    }

    #[test]
    fn rule_completion() {
        let mut oracle = Context::default();
        let head = named(&mut oracle, "head");
        let a = named(&mut oracle, "a");
        let b = named(&mut oracle, "b");

        oracle
            .assert(Constraint::Rule { head, body: vec![CLiteral::new(a, true)] })
            .unwrap();
        oracle
            .assert(Constraint::Rule { head, body: vec![CLiteral::new(b, true)] })
            .unwrap();

        oracle.force(CLiteral::new(a, false)).unwrap();
        oracle.force(CLiteral::new(b, false)).unwrap();
        let model = oracle.solve(false).unwrap().unwrap();
        assert_eq!(model.value_of(head), Some(false));

        oracle.reset_decisions();
        oracle.force(CLiteral::new(b, true)).unwrap();
        let model = oracle.solve(true).unwrap().unwrap();
        assert_eq!(model.value_of(head), Some(true));
    }

    #[test]
    fn defined_without_rule() {
        let mut oracle = Context::default();
        let head = named(&mut oracle, "head");
        let a = named(&mut oracle, "a");

        oracle.define(head).unwrap();
        assert_eq!(oracle.fixed_value(head), Ok(Some(false)));

        oracle
            .assert(Constraint::Rule { head, body: vec![CLiteral::new(a, true)] })
            .unwrap();
        assert_eq!(oracle.fixed_value(head), Ok(None));
    }

    #[test]
    fn conjunctive_rule() {
        let mut oracle = Context::default();
        let head = named(&mut oracle, "head");
        let a = named(&mut oracle, "a");
        let b = named(&mut oracle, "b");
        let body = vec![CLiteral::new(a, true), CLiteral::new(b, true)];

        oracle.assert(Constraint::Rule { head, body }).unwrap();

        oracle.force(CLiteral::new(head, true)).unwrap();
        let model = oracle.solve(true).unwrap().unwrap();
        assert_eq!(model.value_of(a), Some(true));
        assert_eq!(model.value_of(b), Some(true));

        oracle.reset_decisions();
        oracle.force(CLiteral::new(head, true)).unwrap();
        oracle.force(CLiteral::new(b, false)).unwrap();
        assert_eq!(oracle.solve(false), Ok(None));
    }

    #[test]
    fn fixed_values() {
        let mut oracle = Context::default();
        let p = named(&mut oracle, "p");
        let q = named(&mut oracle, "q");

        assert_eq!(oracle.is_fixed(p), Ok(false));

        oracle
            .assert(Constraint::Implication { body: CLiteral::new(q, true), head: CLiteral::new(p, true) })
            .unwrap();
        oracle.assert(Constraint::Clause(vec![CLiteral::new(q, true)])).unwrap();

        assert_eq!(oracle.fixed_value(p), Ok(Some(true)));
        assert_eq!(oracle.fixed_value(99), Err(err::OracleError::UnknownAtom(99)));
    }

    #[test]
    fn unique() {
        let mut oracle = Context::default();
        let literals = ["a", "b", "c"]
            .iter()
            .map(|name| CLiteral::new(named(&mut oracle, name), true))
            .collect::<Vec<_>>();

        oracle.unique(&literals).unwrap();

        let model = oracle.solve(true).unwrap().unwrap();
        assert_eq!(literals.iter().filter(|l| model.holds(**l)).count(), 1);

        oracle.force(literals[0].negate()).unwrap();
        oracle.force(literals[1].negate()).unwrap();
        assert!(oracle.solve(false).unwrap().unwrap().holds(literals[2]));

        oracle.force(literals[2].negate()).unwrap();
        assert_eq!(oracle.solve(false), Ok(None));
    }

    #[test]
    fn counts_ignore_duplicates() {
        let mut oracle = Context::default();
        let p = named(&mut oracle, "p");
        let q = named(&mut oracle, "q");

        oracle.inconsistent(CLiteral::new(p, true), CLiteral::new(q, true)).unwrap();
        let count = oracle.constraint_count();
        oracle.inconsistent(CLiteral::new(q, true), CLiteral::new(p, true)).unwrap();
        assert_eq!(oracle.constraint_count(), count);
    }
}
