//! Error types used in the library.
//!
//! - Errors from the knowledge base indicate a malformed ontology or a malformed literal, and are not retried.
//! - Errors from the world indicate misuse by the caller, e.g. committing to an unsatisfiable collection of implications.
//! - Errors from a dialogue indicate a choice of answer which was never offered.
//! - Errors from the oracle are unlikely to occur during use.
//!
//! Inconsistency is *not* an error: a [probe](crate::world::World::probe) returns `Ok(false)` to signal some collection of literals has no model.
//!
//! Names of the error enums, for the most part, overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use thiserror::Error;

use crate::structures::atom::Atom;

/// The error type of the library, wrapping the error of each part.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ErrorKind {
    #[error(transparent)]
    Kb(#[from] KbError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Dialogue(#[from] DialogueError),
}

/// Errors in the ontology, or in the use of the ontology.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum KbError {
    /// An entity was declared to be of some sort, after being declared to be of some other sort.
    #[error("the sort of {entity} has already been declared to be {declared}, not {requested}")]
    SortConflict {
        entity: String,
        declared: String,
        requested: String,
    },

    /// An argument to some predicate is not of the sort required by the predicate.
    #[error("argument to {predicate}, {argument}, must be of sort {expected}")]
    SortMismatch {
        predicate: String,
        argument: String,
        expected: String,
    },

    /// An entity has no sort, and no sort could be assumed.
    #[error("no declared sort for {0}")]
    UndeclaredSort(String),

    /// A predicate with the name has already been defined.
    #[error("a predicate named {0} has already been defined")]
    DuplicatePredicateName(String),

    /// A sort with the name has already been registered.
    #[error("a sort named {0} has already been registered")]
    DuplicateSortName(String),

    #[error("no sort named {0}")]
    UnknownSort(String),

    #[error("no predicate named {0}")]
    UnknownPredicate(String),

    /// A predicate was used with the wrong number of arguments, or a syntax pattern has the wrong number of holes.
    #[error("{predicate} takes {expected} argument(s), not {found}")]
    ArityMismatch {
        predicate: String,
        expected: usize,
        found: usize,
    },

    /// A relation was declared on a predicate which has already been called on some argument.
    #[error("relations of {0} must be declared before it is called on any argument")]
    RelationAfterUse(String),
}

/// Errors from an oracle.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum OracleError {
    /// There are no more fresh atoms.
    #[error("atoms exhausted")]
    AtomsExhausted,

    /// Some atom is not part of the language of the oracle.
    #[error("atom {0} is not part of the language of the oracle")]
    UnknownAtom(Atom),

    /// A rule was given an empty body.
    #[error("a rule for atom {0} was given an empty body")]
    EmptyBody(Atom),

    /// The time limit for a solve was exceeded.
    #[error("the time limit of a solve was exceeded")]
    TimeUp,
}

/// Errors when reading a questionnaire, or resolving a phrase.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    #[error("an empty phrase")]
    Empty,

    /// No syntax rule matched some phrase.
    #[error("invalid proposition syntax: \"{0}\"")]
    Syntax(String),

    /// Some issue at a specific line of a questionnaire.
    #[error("line {line}: {reason}")]
    Line { line: usize, reason: Box<ErrorKind> },

    /// The head of a rule or implication was negated.
    #[error("the head of a rule must be a proposition, not the negation \"{0}\"")]
    NegatedHead(String),

    /// Implications were read before any question.
    #[error("implications given before any question")]
    Orphan,

    /// The source of a questionnaire could not be read.
    #[error("failed to read: {0}")]
    Io(String),
}

/// Errors from a world.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum WorldError {
    /// A commit was requested for implications which have no model.
    #[error("no model satisfies the implications to commit")]
    UnsatisfiableCommit,

    /// Something only available after a commit was requested before any commit.
    #[error("the world has not been committed")]
    NotCommitted,
}

/// Errors from a dialogue.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DialogueError {
    /// An answer was chosen by an index outside of the answers offered.
    #[error("no answer {0} was offered")]
    NoSuchAnswer(usize),
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Io(e.to_string())
    }
}
