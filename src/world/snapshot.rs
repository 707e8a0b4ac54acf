/*!
The record of a commit.

A [Snapshot] holds the model found by a commit, the facts true on the model, and a summary of the facts.

Facts are grouped by subject, in the order in which entities were registered, with any fact lacking an entity subject placed in a separate bucket.
The summary has a line for each entity with some fact:
- If every fact of the entity is quiet, or states existence, the line is `You have a <sort> (<entity>).`
- Otherwise, the line is `<entity> (<sort>): <items>.`, where each item is the name of a unary predicate, or the name of a binary predicate followed by the other argument.

Any fact outside of the entity groups, and neither quiet nor a statement of existence, is listed on a final line beginning `Also:`.
*/

use serde::Serialize;

use crate::{
    kb::KnowledgeBase,
    oracle::Oracle,
    structures::{
        atom::Atom,
        literal::CLiteral,
        name::{PropositionName, Term},
        valuation::Model,
    },
};

/// A proposition true on a committed model.
#[derive(Clone, Debug, Serialize)]
pub struct Fact {
    #[serde(skip)]
    pub atom: Atom,

    /// The name of the proposition, as a string.
    pub proposition: String,

    /// The predicate of the proposition, if the proposition is a call.
    pub predicate: Option<String>,

    pub args: Vec<Term>,

    pub quiet: bool,

    pub implicit_subject: bool,

    /// Whether the proposition is the existence predicate.
    pub existence: bool,

    /// Whether some argument is a sort, i.e. the proposition is an existential quantification.
    pub arg_is_sort: bool,
}

impl Fact {
    fn new(atom: Atom, name: &PropositionName, kb: &KnowledgeBase) -> Self {
        let existence_name = kb.existence().map(|id| kb.predicate(id).name.as_str());

        match name {
            PropositionName::Atomic(word) => Fact {
                atom,
                proposition: word.clone(),
                predicate: None,
                args: Vec::default(),
                quiet: false,
                implicit_subject: false,
                existence: false,
                arg_is_sort: false,
            },

            PropositionName::Call(call) => {
                let predicate = kb.predicate_named(&call.predicate).map(|id| kb.predicate(id));
                Fact {
                    atom,
                    proposition: call.to_string(),
                    predicate: Some(call.predicate.clone()),
                    args: call.args.clone(),
                    quiet: predicate.is_some_and(|p| p.quiet),
                    implicit_subject: predicate.is_some_and(|p| p.implicit_subject),
                    existence: existence_name == Some(call.predicate.as_str()),
                    arg_is_sort: call.args.iter().any(Term::is_sort),
                }
            }
        }
    }

    /// The entity the fact is about, if the first argument of the fact is an entity.
    pub fn subject(&self) -> Option<&str> {
        match self.args.first() {
            Some(Term::Entity(entity)) => Some(entity),
            _ => None,
        }
    }

    /// Whether the fact is left out of the summary.
    pub fn is_silent(&self) -> bool {
        self.quiet || self.existence
    }

    /// The fact as an item of the line for its subject.
    fn item(&self) -> String {
        let predicate = self.predicate.as_deref().unwrap_or(&self.proposition);
        match self.args.as_slice() {
            [_, other] => format!("{predicate} {other}"),
            _ => predicate.to_string(),
        }
    }
}

/// The facts about an entity.
#[derive(Clone, Debug, Serialize)]
pub struct Group {
    pub entity: String,

    pub sort: String,

    /// Indices into the facts of the snapshot.
    pub facts: Vec<usize>,
}

/// A committed world.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    #[serde(skip)]
    model: Model,

    pub facts: Vec<Fact>,

    pub groups: Vec<Group>,

    /// Indices of facts without an entity subject.
    pub other: Vec<usize>,

    pub summary: String,
}

impl Snapshot {
    /// Builds a snapshot from a model of the oracle.
    pub fn new(kb: &KnowledgeBase, oracle: &impl Oracle, model: Model) -> Self {
        let facts = model
            .true_atoms()
            .filter_map(|atom| oracle.name_of(atom).map(|name| Fact::new(atom, name, kb)))
            .collect::<Vec<_>>();

        let mut groups = Vec::default();
        let mut grouped = vec![false; facts.len()];

        for entity in kb.entities() {
            let indices = facts
                .iter()
                .enumerate()
                .filter(|(_, fact)| fact.subject() == Some(entity))
                .map(|(index, _)| index)
                .collect::<Vec<_>>();

            if indices.is_empty() {
                continue;
            }
            for index in &indices {
                grouped[*index] = true;
            }

            let sort = match kb.try_sort_of(entity) {
                Some(sort) => kb.taxonomy.name_of(sort).to_string(),
                None => kb.taxonomy.name_of(kb.taxonomy.root()).to_string(),
            };

            groups.push(Group {
                entity: entity.to_string(),
                sort,
                facts: indices,
            });
        }

        let other = (0..facts.len()).filter(|index| !grouped[*index]).collect::<Vec<_>>();

        let mut snapshot = Snapshot {
            model,
            facts,
            groups,
            other,
            summary: String::default(),
        };
        snapshot.summary = snapshot.summarize();
        snapshot
    }

    fn summarize(&self) -> String {
        let mut lines = Vec::default();

        for group in &self.groups {
            let items = group
                .facts
                .iter()
                .map(|index| &self.facts[*index])
                .filter(|fact| !fact.is_silent())
                .map(Fact::item)
                .collect::<Vec<_>>();

            match items.is_empty() {
                true => lines.push(format!(
                    "You have {} {} ({}).",
                    article(&group.sort),
                    group.sort,
                    group.entity
                )),
                false => lines.push(format!("{} ({}): {}.", group.entity, group.sort, items.join(", "))),
            }
        }

        let also = self
            .other
            .iter()
            .map(|index| &self.facts[*index])
            .filter(|fact| !fact.is_silent())
            .map(|fact| fact.proposition.as_str())
            .collect::<Vec<_>>();

        if !also.is_empty() {
            lines.push(format!("Also: {}.", also.join(", ")));
        }

        lines.join("\n")
    }

    /// The model found by the commit.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// True if the literal holds on the committed model.
    pub fn holds(&self, literal: CLiteral) -> bool {
        self.model.holds(literal)
    }

    /// The fact with the given proposition string, if true on the committed model.
    pub fn fact(&self, proposition: &str) -> Option<&Fact> {
        self.facts.iter().find(|fact| fact.proposition == proposition)
    }

    /// The group of an entity, if the entity has some fact.
    pub fn group(&self, entity: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.entity == entity)
    }
}

fn article(noun: &str) -> &'static str {
    match noun.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}
