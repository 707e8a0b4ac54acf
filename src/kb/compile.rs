/*!
Compilation of predicates to constraints.

# Calls

A [call](KnowledgeBase::call) of a predicate *p* on some arguments type checks the arguments and returns the atom of the proposition *p*(args).

The first call on some arguments also records the arguments in the domain of *p*, and asserts:
1. For each generalization *g* of *p*: *p*(args) → *g*(args).
2. For each strong generalization *g* of *p*: the rule *g*(args) ⇐ *p*(args), and then calls each strong specialization of *g* which admits the arguments.
   So, *g*(args) holds only if some strong specialization of *g* holds on the arguments.
3. For each negative generalization *g* of *p* which admits the arguments: ¬(*p*(args) ∧ *g*(args)).
4. For a unary predicate, for each existential quantification of *p* over a sort containing the argument: the rule ∃*p*(sort) ⇐ *p*(arg).

Later calls on the same arguments assert nothing.
If compilation fails part way, the arguments are withdrawn from the domain, so a later call compiles them afresh (and fails in the same way).

Each generalization is compiled by calling the generalization on the same arguments, so compilation continues through chains of generalizations.

# Existential quantification

The [existential](KnowledgeBase::existential) quantification of a unary predicate *p* over a sort *s* is the proposition ∃*p*(*s*), memoized per sort.
When created, the rules:
- ∃*p*(*s*) ⇐ ∃*p*(*t*), for each subsort *t* of *s*.
- ∃*p*(*s*) ⇐ *p*(*i*), for each instance *i* of *s* already in the domain of *p*.

are asserted, and ∃*p*(*s*) is declared the head of rules.
So, ∃*p*(*s*) holds exactly when *p* holds on some member of *s*, regardless of whether a member was called before or after the quantification was created.
*/

use crate::{
    kb::{
        predicate::{Arguments, PredicateId, Relation, Signature},
        taxonomy::SortId,
        KnowledgeBase,
    },
    misc::log::targets::{self},
    oracle::{Constraint, Oracle},
    structures::{
        atom::Atom,
        literal::CLiteral,
        name::{Call, PropositionName, Term},
    },
    types::err::{self, ErrorKind},
};

impl KnowledgeBase {
    /// Calls a unary predicate on an entity.
    pub fn call_unary(&mut self, oracle: &mut impl Oracle, predicate: PredicateId, entity: &str) -> Result<Atom, ErrorKind> {
        self.call(oracle, predicate, Arguments::One(entity.to_string()))
    }

    /// Calls a binary predicate on a pair of entities.
    pub fn call_binary(&mut self, oracle: &mut impl Oracle, predicate: PredicateId, left: &str, right: &str) -> Result<Atom, ErrorKind> {
        self.call(oracle, predicate, Arguments::Two(left.to_string(), right.to_string()))
    }

    /// Calls a predicate on some arguments, see [compile](crate::kb::compile) for details.
    pub fn call(&mut self, oracle: &mut impl Oracle, predicate: PredicateId, arguments: Arguments) -> Result<Atom, ErrorKind> {
        self.type_check(predicate, &arguments)?;

        if let Some(atom) = self.predicate(predicate).domain.get(&arguments) {
            return Ok(atom);
        }

        let name = self.predicate(predicate).name.clone();
        let call = Call::new(name.as_str(), arguments.terms());
        let atom = oracle.proposition(PropositionName::Call(call))?;
        self.predicate_mut(predicate).domain.insert(arguments.clone(), atom);
        log::trace!(target: targets::COMPILE, "{name}({arguments}) compiled to {atom}");

        if let Err(e) = self.compile_relations(oracle, predicate, &arguments, atom) {
            self.predicate_mut(predicate).domain.remove(&arguments);
            log::trace!(target: targets::COMPILE, "{name}({arguments}) withdrawn: {e}");
            return Err(e);
        }

        Ok(atom)
    }

    /// Asserts the constraints relating a fresh call to the predicates `predicate` is related to.
    fn compile_relations(
        &mut self,
        oracle: &mut impl Oracle,
        predicate: PredicateId,
        arguments: &Arguments,
        atom: Atom,
    ) -> Result<(), ErrorKind> {
        let this = CLiteral::new(atom, true);

        for general in self.related(predicate, Relation::Generalization) {
            let general = self.call(oracle, general, arguments.clone())?;
            let head = CLiteral::new(general, true);
            oracle.assert(Constraint::Implication { body: this, head })?;
        }

        for general in self.related(predicate, Relation::StrongGeneralization) {
            let head = self.call(oracle, general, arguments.clone())?;
            oracle.assert(Constraint::Rule { head, body: vec![this] })?;

            for specific in self.strong_specializations(general) {
                if specific != predicate && self.admits(specific, arguments) {
                    self.call(oracle, specific, arguments.clone())?;
                }
            }
        }

        for general in self.related(predicate, Relation::NegativeGeneralization) {
            if self.admits(general, arguments) {
                let other = self.call(oracle, general, arguments.clone())?;
                oracle.inconsistent(this, CLiteral::new(other, true))?;
            }
        }

        if let Arguments::One(entity) = arguments {
            let quantifications = self
                .predicate(predicate)
                .existentials
                .iter()
                .map(|(sort, atom)| (*sort, *atom))
                .collect::<Vec<_>>();

            for (sort, head) in quantifications {
                if self.is_a(entity, sort)? {
                    oracle.assert(Constraint::Rule { head, body: vec![this] })?;
                }
            }
        }

        Ok(())
    }

    /// The existential quantification of a unary predicate over a sort, see [compile](crate::kb::compile) for details.
    pub fn existential(&mut self, oracle: &mut impl Oracle, predicate: PredicateId, sort: SortId) -> Result<Atom, ErrorKind> {
        let Signature::Unary(_) = self.predicate(predicate).signature else {
            return Err(err::KbError::ArityMismatch {
                predicate: self.predicate(predicate).name.clone(),
                expected: self.predicate(predicate).signature.arity(),
                found: 1,
            }
            .into());
        };

        if let Some(atom) = self.predicate(predicate).existentials.get(&sort) {
            return Ok(*atom);
        }

        let name = self.predicate(predicate).name.clone();
        let sort_name = self.taxonomy.name_of(sort).to_string();
        let call = Call::new(name.as_str(), vec![Term::Sort(sort_name)]);
        let head = oracle.proposition(PropositionName::Call(call))?;
        oracle.define(head)?;
        self.predicate_mut(predicate).existentials.insert(sort, head);
        log::trace!(target: targets::COMPILE, "{name}(§{}) compiled to {head}", self.taxonomy.name_of(sort));

        for subsort in self.taxonomy.subsorts(sort).to_vec() {
            let sub_quantification = self.existential(oracle, predicate, subsort)?;
            let body = vec![CLiteral::new(sub_quantification, true)];
            oracle.assert(Constraint::Rule { head, body })?;
        }

        let instances = self
            .predicate(predicate)
            .domain
            .iter()
            .filter(|(arguments, _)| self.try_sort_of(arguments.subject()) == Some(sort))
            .map(|(_, atom)| atom)
            .collect::<Vec<_>>();

        for instance in instances {
            let body = vec![CLiteral::new(instance, true)];
            oracle.assert(Constraint::Rule { head, body })?;
        }

        Ok(head)
    }

    fn type_check(&mut self, predicate: PredicateId, arguments: &Arguments) -> Result<(), ErrorKind> {
        let signature = self.predicate(predicate).signature;

        if signature.arity() != arguments.arity() {
            return Err(err::KbError::ArityMismatch {
                predicate: self.predicate(predicate).name.clone(),
                expected: signature.arity(),
                found: arguments.arity(),
            }
            .into());
        }

        for (sort, entity) in signature.sorts().into_iter().zip(arguments.entities()) {
            self.ensure_sort(entity, sort);
            if !self.is_a(entity, sort)? {
                return Err(err::KbError::SortMismatch {
                    predicate: self.predicate(predicate).name.clone(),
                    argument: entity.to_string(),
                    expected: self.taxonomy.name_of(sort).to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod compile_tests {
    use super::*;
    use crate::context::Context;

    struct Family {
        kb: KnowledgeBase,
        oracle: Context,
        person: SortId,
        family: SortId,
    }

    fn family() -> Family {
        let mut kb = KnowledgeBase::new("entity");
        let person = kb.register_sort("person", "entity", &[]).unwrap();
        let family = kb.register_sort("family", "person", &[]).unwrap();
        kb.register_sort("parent", "family", &["mother", "father"]).unwrap();
        kb.register_sort("sibling", "family", &["brother", "sister"]).unwrap();
        kb.register_sort("rock", "entity", &["granite"]).unwrap();

        Family { kb, oracle: Context::default(), person, family }
    }

    #[test]
    fn sort_mismatch() {
        let Family { mut kb, mut oracle, person, .. } = family();
        let loves = kb.define_predicate("loves", Signature::Unary(person)).unwrap();

        assert_eq!(
            kb.call_unary(&mut oracle, loves, "granite"),
            Err(ErrorKind::Kb(err::KbError::SortMismatch {
                predicate: "loves".to_string(),
                argument: "granite".to_string(),
                expected: "person".to_string(),
            }))
        );
    }

    #[test]
    fn failed_call_is_not_recorded() {
        let Family { mut kb, mut oracle, person, .. } = family();
        let touches = kb
            .define_predicate("touches", Signature::Unary(kb.taxonomy.root()))
            .unwrap();
        let loves = kb.define_predicate("loves", Signature::Unary(person)).unwrap();
        kb.add_generalization(touches, loves).unwrap();

        let mismatch = Err(ErrorKind::Kb(err::KbError::SortMismatch {
            predicate: "loves".to_string(),
            argument: "granite".to_string(),
            expected: "person".to_string(),
        }));

        assert_eq!(kb.call_unary(&mut oracle, touches, "granite"), mismatch);
        assert!(kb.predicate(touches).domain.is_empty());

        // Calling again fails in the same way, rather than returning a half-compiled proposition.
        assert_eq!(kb.call_unary(&mut oracle, touches, "granite"), mismatch);
        assert!(kb.predicate(touches).domain.is_empty());
        assert!(kb.predicate(loves).domain.is_empty());
    }

    #[test]
    fn first_use_defines_sort() {
        let Family { mut kb, mut oracle, person, .. } = family();
        let loves = kb.define_predicate("loves", Signature::Unary(person)).unwrap();

        assert!(kb.call_unary(&mut oracle, loves, "stranger").is_ok());
        assert_eq!(kb.try_sort_of("stranger"), Some(person));
    }

    #[test]
    fn arity() {
        let Family { mut kb, mut oracle, person, .. } = family();
        let loves = kb.define_predicate("loves", Signature::Unary(person)).unwrap();

        assert!(matches!(
            kb.call_binary(&mut oracle, loves, "mother", "father"),
            Err(ErrorKind::Kb(err::KbError::ArityMismatch { .. }))
        ));
    }

    #[test]
    fn existential_memo() {
        let Family { mut kb, mut oracle, person, family } = family();
        let likes = kb.define_predicate("likes", Signature::Unary(person)).unwrap();

        let first = kb.existential(&mut oracle, likes, family).unwrap();
        let count = oracle.constraint_count();
        let second = kb.existential(&mut oracle, likes, family).unwrap();

        assert_eq!(first, second);
        assert_eq!(oracle.constraint_count(), count);
    }

    #[test]
    fn existential_without_members_is_false() {
        let Family { mut kb, mut oracle, person, family } = family();
        let likes = kb.define_predicate("likes", Signature::Unary(person)).unwrap();
        let quantification = kb.existential(&mut oracle, likes, family).unwrap();

        assert_eq!(oracle.fixed_value(quantification), Ok(Some(false)));
    }

    #[test]
    fn existential_after_quantification() {
        let Family { mut kb, mut oracle, person, family } = family();
        let likes = kb.define_predicate("likes", Signature::Unary(person)).unwrap();

        let quantification = kb.existential(&mut oracle, likes, family).unwrap();
        let likes_brother = kb.call_unary(&mut oracle, likes, "brother").unwrap();

        oracle.force(CLiteral::new(likes_brother, true)).unwrap();
        let model = oracle.solve(true).unwrap().unwrap();
        assert_eq!(model.value_of(quantification), Some(true));

        oracle.reset_decisions();
        oracle.force(CLiteral::new(likes_brother, false)).unwrap();
        let model = oracle.solve(true).unwrap().unwrap();
        assert_eq!(model.value_of(quantification), Some(false));
    }

    #[test]
    fn binary_negative_generalization() {
        let Family { mut kb, mut oracle, person, .. } = family();
        let admires = kb
            .define_predicate("admires", Signature::Binary(person, person))
            .unwrap();
        let resents = kb
            .define_predicate("resents", Signature::Binary(person, person))
            .unwrap();
        kb.mutually_exclusive(admires, resents).unwrap();

        let a = kb.call_binary(&mut oracle, admires, "mother", "brother").unwrap();
        let r = kb
            .predicate(resents)
            .domain
            .get(&Arguments::Two("mother".to_string(), "brother".to_string()));
        assert!(r.is_some());

        oracle.force(CLiteral::new(a, true)).unwrap();
        if let Some(r) = r {
            oracle.force(CLiteral::new(r, true)).unwrap();
        }
        assert_eq!(oracle.solve(false), Ok(None));
    }

    #[test]
    fn relation_after_use() {
        let Family { mut kb, mut oracle, person, .. } = family();
        let loves = kb.define_predicate("loves", Signature::Unary(person)).unwrap();
        let likes = kb.define_predicate("likes", Signature::Unary(person)).unwrap();

        kb.call_unary(&mut oracle, loves, "mother").unwrap();
        assert_eq!(
            kb.add_generalization(loves, likes),
            Err(err::KbError::RelationAfterUse("loves".to_string()))
        );
        assert!(kb.add_generalization(likes, loves).is_ok());
    }
}
