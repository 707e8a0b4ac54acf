//! The external representation of a proposition.
//!
//! A proposition is named either by a bare word (an *atomic* proposition, e.g. `brave`) or by a [Call] of a predicate on some terms (e.g. `loves(mother)`).
//!
//! Names are the keys used to fetch propositions from an [oracle](crate::oracle::Oracle), so two equal names always denote the same atom.
//!
//! Terms are either entities or sorts.
//! A sort appears as the argument of an existential proposition, and is written with a leading `§` to distinguish it from an entity of the same spelling.
//!
//! ```rust
//! # use otter_world::structures::name::{Call, PropositionName, Term};
//! let name = PropositionName::Call(Call::new("likes", vec![Term::Sort("family".to_string())]));
//! assert_eq!(name.to_string(), "likes(§family)");
//! ```

use serde::Serialize;

/// A term, as an argument to a predicate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Term {
    /// Some entity.
    Entity(String),

    /// Some sort, read as 'some member of the sort'.
    Sort(String),
}

impl Term {
    /// The name of the entity or sort.
    pub fn name(&self) -> &str {
        match self {
            Self::Entity(name) | Self::Sort(name) => name,
        }
    }

    /// True if the term is a sort.
    pub fn is_sort(&self) -> bool {
        matches!(self, Self::Sort(_))
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entity(name) => write!(f, "{name}"),
            Self::Sort(name) => write!(f, "§{name}"),
        }
    }
}

/// A predicate paired with the terms it is called on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Call {
    /// The name of the predicate.
    pub predicate: String,

    /// The arguments, in order.
    pub args: Vec<Term>,
}

impl Call {
    pub fn new(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Call {
            predicate: predicate.into(),
            args,
        }
    }

    /// The first argument of the call, if there is one.
    pub fn subject(&self) -> Option<&Term> {
        self.args.first()
    }
}

impl std::fmt::Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.predicate)?;
        for (index, arg) in self.args.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")
    }
}

/// The name of a proposition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum PropositionName {
    /// A bare word.
    Atomic(String),

    /// A predicate called on some terms.
    Call(Call),
}

impl PropositionName {
    /// The call naming the proposition, if the proposition is not atomic.
    pub fn call(&self) -> Option<&Call> {
        match self {
            Self::Atomic(_) => None,
            Self::Call(call) => Some(call),
        }
    }
}

impl std::fmt::Display for PropositionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atomic(word) => write!(f, "{word}"),
            Self::Call(call) => write!(f, "{call}"),
        }
    }
}

impl From<Call> for PropositionName {
    fn from(call: Call) -> Self {
        PropositionName::Call(call)
    }
}
