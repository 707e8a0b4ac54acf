/*!
A small grammar, for reading propositions written as words.

A [SyntaxRule] pairs a pattern of words with a predicate.
Each `_` in a pattern is a hole, filled by an argument to the predicate, and the number of holes must match the arity of the predicate.
For example, the pattern `_ is alive` paired with the unary predicate `living` reads `mother is alive` as `living(mother)`.

Phrases are read by [parse_phrase](Grammar::parse_phrase):
- A leading `!` or `not` negates the rest of the phrase.
- A single word is [atomic](Phrase::Atomic).
- Otherwise, the phrase is read by the first syntax rule whose pattern matches every word.

A [Phrase] only records which predicate applies to which words.
Propositions are found for a phrase when the phrase is [resolved](crate::kb::KnowledgeBase::resolve) by a knowledge base, which may compile the predicate on the arguments.

```rust
# use otter_world::kb::{KnowledgeBase, predicate::Signature};
# use otter_world::syntax::{Grammar, Phrase};
let mut kb = KnowledgeBase::new("entity");
let person = kb.register_sort("person", "entity", &["mother"]).unwrap();
let living = kb.define_predicate("living", Signature::Unary(person)).unwrap();

let mut grammar = Grammar::default();
grammar.add_rule(&kb, living, "_ is alive").unwrap();

assert_eq!(
    grammar.parse_phrase("not mother is alive"),
    Ok(Phrase::Not(Box::new(Phrase::Unary { predicate: living, argument: "mother".to_string() })))
);
```
*/

mod resolve;

use crate::{
    kb::{predicate::PredicateId, KnowledgeBase},
    types::err::{self},
};

/// The word marking a hole in a pattern.
pub const HOLE: &str = "_";

/// A phrase, with predicates matched to their arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phrase {
    /// A single word.
    Atomic(String),

    /// The negation of a phrase.
    Not(Box<Phrase>),

    /// A unary predicate, applied to an entity or sort.
    Unary { predicate: PredicateId, argument: String },

    /// A binary predicate, applied to a pair of entities.
    Binary { predicate: PredicateId, left: String, right: String },
}

/// The predicate of a syntax rule, tagged by arity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Application {
    Unary(PredicateId),
    Binary(PredicateId),
}

/// A pattern of words, paired with a predicate.
#[derive(Clone, Debug)]
pub struct SyntaxRule {
    /// Each word of the pattern, with `None` for a hole.
    pattern: Vec<Option<String>>,

    application: Application,
}

impl SyntaxRule {
    /// The phrase given by the rule, if the rule matches the words.
    pub fn apply(&self, words: &[&str]) -> Option<Phrase> {
        if words.len() != self.pattern.len() {
            return None;
        }

        let mut arguments = Vec::with_capacity(2);
        for (expected, word) in self.pattern.iter().zip(words) {
            match expected {
                Some(expected) if expected != word => return None,
                Some(_) => {}
                None => arguments.push(word.to_string()),
            }
        }

        match (self.application, arguments.as_slice()) {
            (Application::Unary(predicate), [argument]) => Some(Phrase::Unary {
                predicate,
                argument: argument.clone(),
            }),

            (Application::Binary(predicate), [left, right]) => Some(Phrase::Binary {
                predicate,
                left: left.clone(),
                right: right.clone(),
            }),

            _ => None,
        }
    }

    pub fn application(&self) -> Application {
        self.application
    }
}

/// An ordered collection of syntax rules.
#[derive(Clone, Debug, Default)]
pub struct Grammar {
    rules: Vec<SyntaxRule>,
}

impl Grammar {
    /// Adds a rule reading `pattern` as the predicate, checking the holes of the pattern against the arity of the predicate.
    pub fn add_rule(&mut self, kb: &KnowledgeBase, predicate: PredicateId, pattern: &str) -> Result<(), err::KbError> {
        let pattern = pattern
            .split_whitespace()
            .map(|word| match word {
                HOLE => None,
                _ => Some(word.to_string()),
            })
            .collect::<Vec<_>>();

        let holes = pattern.iter().filter(|word| word.is_none()).count();
        let definition = kb.predicate(predicate);

        let application = match (definition.signature.arity(), holes) {
            (1, 1) => Application::Unary(predicate),
            (2, 2) => Application::Binary(predicate),
            (expected, found) => {
                return Err(err::KbError::ArityMismatch {
                    predicate: definition.name.clone(),
                    expected,
                    found,
                })
            }
        };

        self.rules.push(SyntaxRule { pattern, application });
        Ok(())
    }

    /// Reads a phrase, see [syntax](crate::syntax) for details.
    pub fn parse_phrase(&self, text: &str) -> Result<Phrase, err::ParseError> {
        let trimmed = text.trim();

        if let Some(rest) = trimmed.strip_prefix('!') {
            return Ok(Phrase::Not(Box::new(self.parse_phrase(rest)?)));
        }

        let words = trimmed.split_whitespace().collect::<Vec<_>>();
        self.parse_words(&words, trimmed)
    }

    fn parse_words(&self, words: &[&str], source: &str) -> Result<Phrase, err::ParseError> {
        match words {
            [] => Err(err::ParseError::Empty),

            ["not", rest @ ..] => Ok(Phrase::Not(Box::new(self.parse_words(rest, source)?))),

            [word] => Ok(Phrase::Atomic(word.to_string())),

            _ => self
                .rules
                .iter()
                .find_map(|rule| rule.apply(words))
                .ok_or_else(|| err::ParseError::Syntax(source.to_string())),
        }
    }

    /// The rules of the grammar, in order.
    pub fn rules(&self) -> &[SyntaxRule] {
        &self.rules
    }
}
