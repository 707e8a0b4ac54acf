//! Resolution of phrases to literals.

use crate::{
    kb::{predicate::Arguments, KnowledgeBase},
    oracle::Oracle,
    structures::{literal::CLiteral, name::PropositionName},
    syntax::Phrase,
    types::err::ErrorKind,
};

impl KnowledgeBase {
    /// The literal of a phrase, calling predicates as required.
    ///
    /// - A word naming a registered entity, of a sort the existence predicate admits, is read as existence of the entity.
    /// - A word naming a sort is read as existence of some member of the sort.
    /// - Any other word, including an entity the existence predicate does not admit, is an atomic proposition.
    ///
    /// Likewise, the argument to a unary predicate may name a sort, in which case the phrase is read as the existential quantification of the predicate over the sort.
    /// Entities take precedence over sorts, and existence is only read if an [existence predicate](KnowledgeBase::existence) has been set.
    pub fn resolve(&mut self, oracle: &mut impl Oracle, phrase: &Phrase) -> Result<CLiteral, ErrorKind> {
        let atom = match phrase {
            Phrase::Not(phrase) => return Ok(self.resolve(oracle, phrase)?.negate()),

            Phrase::Atomic(word) => match self.existence() {
                Some(exists) if self.admits(exists, &Arguments::One(word.clone())) => self.call_unary(oracle, exists, word)?,

                Some(exists) => match self.taxonomy.sort_named(word) {
                    Some(sort) => self.existential(oracle, exists, sort)?,
                    None => oracle.proposition(PropositionName::Atomic(word.clone()))?,
                },

                None => oracle.proposition(PropositionName::Atomic(word.clone()))?,
            },

            Phrase::Unary { predicate, argument } => {
                match (self.entities.get(argument), self.taxonomy.sort_named(argument)) {
                    (None, Some(sort)) => self.existential(oracle, *predicate, sort)?,
                    _ => self.call_unary(oracle, *predicate, argument)?,
                }
            }

            Phrase::Binary { predicate, left, right } => self.call_binary(oracle, *predicate, left, right)?,
        };

        Ok(CLiteral::new(atom, true))
    }
}
