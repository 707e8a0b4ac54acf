//! The extension of a predicate on a model, aka. the arguments on which the predicate holds.
//!
//! Only arguments in the domain of a predicate are considered, as a predicate never called on some arguments has no proposition for those arguments.
//! Enumeration follows the order in which arguments were first called.

use crate::{
    kb::{
        predicate::{Arguments, PredicateId, Signature},
        KnowledgeBase,
    },
    structures::{literal::CLiteral, valuation::Model},
};

impl KnowledgeBase {
    /// Arguments of the predicate which are of the sorts given by `signature` and on which the predicate holds in `model`.
    pub fn extension<'a>(
        &'a self,
        predicate: PredicateId,
        signature: Signature,
        model: &'a Model,
    ) -> impl Iterator<Item = &'a Arguments> + 'a {
        self.predicate(predicate)
            .domain
            .iter()
            .filter(move |(arguments, _)| self.has_signature(arguments, signature))
            .filter(move |(_, atom)| model.holds(CLiteral::new(*atom, true)))
            .map(|(arguments, _)| arguments)
    }

    /// Each entity related to `left` by the (binary) predicate in `model`.
    pub fn right_relata<'a>(
        &'a self,
        predicate: PredicateId,
        left: &str,
        model: &'a Model,
    ) -> impl Iterator<Item = &'a str> + 'a {
        let left = left.to_string();
        self.predicate(predicate)
            .domain
            .iter()
            .filter(move |(_, atom)| model.holds(CLiteral::new(*atom, true)))
            .filter_map(move |(arguments, _)| match arguments {
                Arguments::Two(l, r) if *l == left => Some(r.as_str()),
                _ => None,
            })
    }

    /// Each entity which relates to `right` by the (binary) predicate in `model`.
    pub fn left_relata<'a>(
        &'a self,
        predicate: PredicateId,
        right: &str,
        model: &'a Model,
    ) -> impl Iterator<Item = &'a str> + 'a {
        let right = right.to_string();
        self.predicate(predicate)
            .domain
            .iter()
            .filter(move |(_, atom)| model.holds(CLiteral::new(*atom, true)))
            .filter_map(move |(arguments, _)| match arguments {
                Arguments::Two(l, r) if *r == right => Some(l.as_str()),
                _ => None,
            })
    }

    fn has_signature(&self, arguments: &Arguments, signature: Signature) -> bool {
        signature.arity() == arguments.arity()
            && signature
                .sorts()
                .into_iter()
                .zip(arguments.entities())
                .all(|(sort, entity)| self.is_a(entity, sort).unwrap_or(false))
    }
}

#[cfg(test)]
mod extension_tests {
    use crate::{
        context::Context,
        kb::{predicate::Signature, KnowledgeBase},
        oracle::Oracle,
        structures::literal::CLiteral,
    };

    #[test]
    fn binary_relata() {
        let mut oracle = Context::default();
        let mut kb = KnowledgeBase::new("entity");
        let person = kb
            .register_sort("person", "entity", &["mother", "father", "brother"])
            .unwrap();
        let rock = kb.register_sort("rock", "entity", &["granite"]).unwrap();
        let knows = kb
            .define_predicate("knows", Signature::Binary(person, person))
            .unwrap();
        let owns = kb
            .define_predicate("owns", Signature::Binary(person, kb.taxonomy.root()))
            .unwrap();

        let mother_father = kb.call_binary(&mut oracle, knows, "mother", "father").unwrap();
        let mother_brother = kb.call_binary(&mut oracle, knows, "mother", "brother").unwrap();
        let father_brother = kb.call_binary(&mut oracle, knows, "father", "brother").unwrap();
        let mother_granite = kb.call_binary(&mut oracle, owns, "mother", "granite").unwrap();

        oracle.force(CLiteral::new(mother_father, true)).unwrap();
        oracle.force(CLiteral::new(mother_brother, false)).unwrap();
        oracle.force(CLiteral::new(father_brother, true)).unwrap();
        oracle.force(CLiteral::new(mother_granite, true)).unwrap();
        let model = oracle.solve(false).unwrap().unwrap();

        assert_eq!(kb.right_relata(knows, "mother", &model).collect::<Vec<_>>(), vec!["father"]);
        assert_eq!(
            kb.left_relata(knows, "brother", &model).collect::<Vec<_>>(),
            vec!["father"]
        );

        // The relata borrow from the knowledge base, not from the name asked about.
        let relata = {
            let left = String::from("father");
            kb.right_relata(knows, &left, &model).collect::<Vec<_>>()
        };
        assert_eq!(relata, vec!["brother"]);

        let people = kb.extension(owns, Signature::Binary(person, person), &model).count();
        let rocks = kb.extension(owns, Signature::Binary(person, rock), &model).count();
        assert_eq!(people, 0);
        assert_eq!(rocks, 1);
    }
}
