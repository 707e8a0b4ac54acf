/*!
Predicates, and the relations between predicates.

A predicate has a name, a [Signature], and a [Domain] of the arguments it has been called on.

Predicates are nodes of a [Graph], and relations between predicates are edges, directed from the more specific predicate to the more general:
- A [Generalization](Relation::Generalization) edge from *p* to *g* states *p*(x) implies *g*(x).
- A [StrongGeneralization](Relation::StrongGeneralization) edge from *p* to *g* states *p*(x) is one way for *g*(x) to hold, and *g*(x) holds only if some strong specialization of *g* holds on x.
- A [NegativeGeneralization](Relation::NegativeGeneralization) edge from *p* to *g* states *p*(x) implies not *g*(x).

Mutual exclusion is a pair of negative generalizations, one in each direction.

Relations are only consulted when a predicate is called on a fresh argument.
So, a relation declared on a predicate after the predicate has been called would silently miss those arguments already compiled, and declaring such a relation is an error.
*/

use std::collections::HashMap;

use petgraph::{
    graph::NodeIndex,
    visit::EdgeRef,
    Direction::{Incoming, Outgoing},
};

use crate::{
    kb::{taxonomy::SortId, KnowledgeBase},
    misc::log::targets::{self},
    structures::{atom::Atom, name::Term},
    types::err::{self},
};

/// The key of a predicate in a [KnowledgeBase].
pub type PredicateId = NodeIndex;

/// The sort required of each argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signature {
    Unary(SortId),
    Binary(SortId, SortId),
}

impl Signature {
    /// The number of arguments.
    pub fn arity(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_, _) => 2,
        }
    }

    /// The sorts required of each argument, in order.
    pub fn sorts(&self) -> Vec<SortId> {
        match self {
            Self::Unary(sort) => vec![*sort],
            Self::Binary(left, right) => vec![*left, *right],
        }
    }
}

/// The arguments of a call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Arguments {
    One(String),
    Two(String, String),
}

impl Arguments {
    /// Arguments from a slice of entities, if the slice has one or two elements.
    pub fn from_slice(entities: &[&str]) -> Option<Self> {
        match entities {
            [entity] => Some(Self::One(entity.to_string())),
            [left, right] => Some(Self::Two(left.to_string(), right.to_string())),
            _ => None,
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Two(_, _) => 2,
        }
    }

    /// The first argument.
    pub fn subject(&self) -> &str {
        match self {
            Self::One(entity) | Self::Two(entity, _) => entity.as_str(),
        }
    }

    /// Each argument, in order.
    pub fn entities(&self) -> Vec<&str> {
        match self {
            Self::One(entity) => vec![entity.as_str()],
            Self::Two(left, right) => vec![left.as_str(), right.as_str()],
        }
    }

    /// Each argument as an entity term.
    pub fn terms(&self) -> Vec<Term> {
        self.entities()
            .into_iter()
            .map(|entity| Term::Entity(entity.to_string()))
            .collect()
    }
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One(entity) => write!(f, "{entity}"),
            Self::Two(left, right) => write!(f, "{left}, {right}"),
        }
    }
}

/// The arguments a predicate has been called on, each with the atom of the call.
///
/// Membership is by hash, and the order of insertion is kept for enumeration.
#[derive(Clone, Debug, Default)]
pub struct Domain {
    index: HashMap<Arguments, usize>,
    order: Vec<(Arguments, Atom)>,
}

impl Domain {
    /// The atom of the arguments, if the arguments are in the domain.
    pub fn get(&self, arguments: &Arguments) -> Option<Atom> {
        self.index
            .get(arguments)
            .map(|position| self.order[*position].1)
    }

    pub fn contains(&self, arguments: &Arguments) -> bool {
        self.index.contains_key(arguments)
    }

    /// Inserts arguments, returning false if the arguments were already in the domain.
    pub fn insert(&mut self, arguments: Arguments, atom: Atom) -> bool {
        if self.index.contains_key(&arguments) {
            return false;
        }
        self.index.insert(arguments.clone(), self.order.len());
        self.order.push((arguments, atom));
        true
    }

    /// Removes arguments, returning the atom of the arguments if the arguments were in the domain.
    ///
    /// The order of the remaining arguments is kept.
    pub fn remove(&mut self, arguments: &Arguments) -> Option<Atom> {
        let position = self.index.remove(arguments)?;
        let (_, atom) = self.order.remove(position);
        for later in self.index.values_mut() {
            if *later > position {
                *later -= 1;
            }
        }
        Some(atom)
    }

    /// Arguments and atoms, in order of insertion.
    pub fn iter(&self) -> impl Iterator<Item = (&Arguments, Atom)> {
        self.order.iter().map(|(arguments, atom)| (arguments, *atom))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// A predicate.
#[derive(Clone, Debug)]
pub struct Predicate {
    pub name: String,

    pub signature: Signature,

    /// Arguments compiled so far.
    pub domain: Domain,

    /// Existential quantifications of the predicate, by sort.
    pub existentials: HashMap<SortId, Atom>,

    /// Facts of a quiet predicate are left out of summaries.
    pub quiet: bool,

    /// The subject of the predicate is left implicit when realized.
    pub implicit_subject: bool,
}

impl Predicate {
    pub fn new(name: &str, signature: Signature) -> Self {
        Predicate {
            name: name.to_string(),
            signature,
            domain: Domain::default(),
            existentials: HashMap::default(),
            quiet: false,
            implicit_subject: false,
        }
    }
}

/// A relation from a more specific predicate to a more general predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    Generalization,
    StrongGeneralization,
    NegativeGeneralization,
}

impl KnowledgeBase {
    /// Defines a predicate.
    pub fn define_predicate(&mut self, name: &str, signature: Signature) -> Result<PredicateId, err::KbError> {
        if self.names.contains_key(name) {
            return Err(err::KbError::DuplicatePredicateName(name.to_string()));
        }

        let id = self.predicates.add_node(Predicate::new(name, signature));
        self.names.insert(name.to_string(), id);
        log::trace!(target: targets::COMPILE, "Predicate {name}/{}", signature.arity());
        Ok(id)
    }

    /// The predicate with the given key.
    ///
    /// # Panics
    /// If the key was not issued by the knowledge base.
    pub fn predicate(&self, id: PredicateId) -> &Predicate {
        &self.predicates[id]
    }

    pub(super) fn predicate_mut(&mut self, id: PredicateId) -> &mut Predicate {
        &mut self.predicates[id]
    }

    /// The key of the predicate with the given name, if one exists.
    pub fn predicate_named(&self, name: &str) -> Option<PredicateId> {
        self.names.get(name).copied()
    }

    /// The key of the predicate with the given name, or an error.
    pub fn predicate_id(&self, name: &str) -> Result<PredicateId, err::KbError> {
        self.predicate_named(name)
            .ok_or_else(|| err::KbError::UnknownPredicate(name.to_string()))
    }

    /// Every predicate, in order of definition.
    pub fn predicates(&self) -> impl Iterator<Item = (PredicateId, &Predicate)> {
        self.predicates
            .node_indices()
            .map(|id| (id, &self.predicates[id]))
    }

    /// Marks facts of the predicate as left out of summaries, or not.
    pub fn set_quiet(&mut self, id: PredicateId, quiet: bool) {
        self.predicates[id].quiet = quiet;
    }

    /// Marks the subject of the predicate as implicit when realized, or not.
    pub fn set_implicit_subject(&mut self, id: PredicateId, implicit: bool) {
        self.predicates[id].implicit_subject = implicit;
    }

    /// `specific` implies `general`.
    pub fn add_generalization(&mut self, specific: PredicateId, general: PredicateId) -> Result<(), err::KbError> {
        self.relate(specific, general, Relation::Generalization)
    }

    /// `specific` is one of the ways `general` holds.
    pub fn add_strong_generalization(&mut self, specific: PredicateId, general: PredicateId) -> Result<(), err::KbError> {
        self.relate(specific, general, Relation::StrongGeneralization)
    }

    /// `specific` implies not `general`.
    pub fn add_negative_generalization(&mut self, specific: PredicateId, general: PredicateId) -> Result<(), err::KbError> {
        self.relate(specific, general, Relation::NegativeGeneralization)
    }

    /// `a` and `b` never hold on the same arguments.
    pub fn mutually_exclusive(&mut self, a: PredicateId, b: PredicateId) -> Result<(), err::KbError> {
        self.check_relation(a, b)?;
        self.check_relation(b, a)?;
        self.relate(a, b, Relation::NegativeGeneralization)?;
        self.relate(b, a, Relation::NegativeGeneralization)
    }

    fn check_relation(&self, specific: PredicateId, general: PredicateId) -> Result<(), err::KbError> {
        let specific = &self.predicates[specific];
        let general = &self.predicates[general];

        if !specific.domain.is_empty() {
            return Err(err::KbError::RelationAfterUse(specific.name.clone()));
        }

        if specific.signature.arity() != general.signature.arity() {
            return Err(err::KbError::ArityMismatch {
                predicate: general.name.clone(),
                expected: general.signature.arity(),
                found: specific.signature.arity(),
            });
        }

        Ok(())
    }

    fn relate(&mut self, specific: PredicateId, general: PredicateId, relation: Relation) -> Result<(), err::KbError> {
        self.check_relation(specific, general)?;

        let exists = self
            .predicates
            .edges_connecting(specific, general)
            .any(|edge| *edge.weight() == relation);

        if !exists {
            log::trace!(target: targets::COMPILE, "{:?}: {} to {}", relation, self.predicates[specific].name, self.predicates[general].name);
            self.predicates.add_edge(specific, general, relation);
        }
        Ok(())
    }

    /// Predicates related to `id` by `relation`, in order of declaration.
    pub fn related(&self, id: PredicateId, relation: Relation) -> Vec<PredicateId> {
        let mut edges = self
            .predicates
            .edges_directed(id, Outgoing)
            .filter(|edge| *edge.weight() == relation)
            .map(|edge| (edge.id(), edge.target()))
            .collect::<Vec<_>>();
        edges.sort_unstable_by_key(|(edge, _)| *edge);
        edges.into_iter().map(|(_, target)| target).collect()
    }

    /// Predicates which `id` strongly generalizes, in order of declaration.
    pub fn strong_specializations(&self, id: PredicateId) -> Vec<PredicateId> {
        let mut edges = self
            .predicates
            .edges_directed(id, Incoming)
            .filter(|edge| *edge.weight() == Relation::StrongGeneralization)
            .map(|edge| (edge.id(), edge.source()))
            .collect::<Vec<_>>();
        edges.sort_unstable_by_key(|(edge, _)| *edge);
        edges.into_iter().map(|(_, source)| source).collect()
    }

    /// True if every argument is registered to a sort required by the signature of the predicate.
    pub fn admits(&self, id: PredicateId, arguments: &Arguments) -> bool {
        let signature = self.predicates[id].signature;
        if signature.arity() != arguments.arity() {
            return false;
        }

        signature
            .sorts()
            .into_iter()
            .zip(arguments.entities())
            .all(|(sort, entity)| self.is_a(entity, sort).unwrap_or(false))
    }
}

#[cfg(test)]
mod predicate_tests {
    use super::*;

    fn kb() -> (KnowledgeBase, SortId) {
        let mut kb = KnowledgeBase::new("entity");
        let person = kb.register_sort("person", "entity", &["mother"]).unwrap();
        (kb, person)
    }

    #[test]
    fn duplicate_name() {
        let (mut kb, person) = kb();
        assert!(kb.define_predicate("likes", Signature::Unary(person)).is_ok());
        assert_eq!(
            kb.define_predicate("likes", Signature::Unary(person)),
            Err(err::KbError::DuplicatePredicateName("likes".to_string()))
        );
    }

    #[test]
    fn exclusion_is_symmetric() {
        let (mut kb, person) = kb();
        let loves = kb.define_predicate("loves", Signature::Unary(person)).unwrap();
        let hates = kb.define_predicate("hates", Signature::Unary(person)).unwrap();
        kb.mutually_exclusive(loves, hates).unwrap();

        assert_eq!(kb.related(loves, Relation::NegativeGeneralization), vec![hates]);
        assert_eq!(kb.related(hates, Relation::NegativeGeneralization), vec![loves]);
    }

    #[test]
    fn relations_in_order() {
        let (mut kb, person) = kb();
        let loves = kb.define_predicate("loves", Signature::Unary(person)).unwrap();
        let likes = kb.define_predicate("likes", Signature::Unary(person)).unwrap();
        let exists = kb.define_predicate("exists", Signature::Unary(person)).unwrap();
        let dead = kb.define_predicate("dead", Signature::Unary(person)).unwrap();

        kb.add_generalization(loves, likes).unwrap();
        kb.add_generalization(loves, exists).unwrap();
        kb.add_generalization(loves, exists).unwrap();
        kb.add_strong_generalization(dead, exists).unwrap();

        assert_eq!(kb.related(loves, Relation::Generalization), vec![likes, exists]);
        assert_eq!(kb.strong_specializations(exists), vec![dead]);
        assert!(kb.strong_specializations(likes).is_empty());
    }

    #[test]
    fn arity_of_relations() {
        let (mut kb, person) = kb();
        let loves = kb.define_predicate("loves", Signature::Unary(person)).unwrap();
        let knows = kb
            .define_predicate("knows", Signature::Binary(person, person))
            .unwrap();

        assert!(matches!(
            kb.add_generalization(loves, knows),
            Err(err::KbError::ArityMismatch { .. })
        ));
    }

    #[test]
    fn domain_order() {
        let mut domain = Domain::default();
        assert!(domain.insert(Arguments::One("b".to_string()), 2));
        assert!(domain.insert(Arguments::One("a".to_string()), 1));
        assert!(!domain.insert(Arguments::One("b".to_string()), 3));

        assert_eq!(domain.get(&Arguments::One("b".to_string())), Some(2));
        let order = domain.iter().map(|(args, _)| args.subject()).collect::<Vec<_>>();
        assert_eq!(order, vec!["b", "a"]);

        assert!(domain.insert(Arguments::One("c".to_string()), 4));
        assert_eq!(domain.remove(&Arguments::One("b".to_string())), Some(2));
        assert_eq!(domain.remove(&Arguments::One("b".to_string())), None);
        assert_eq!(domain.get(&Arguments::One("c".to_string())), Some(4));
        let order = domain.iter().map(|(args, _)| args.subject()).collect::<Vec<_>>();
        assert_eq!(order, vec!["a", "c"]);
    }
}
