/*!
A database of clauses.

Clauses are stored in two collections, distinguished by [ClauseKey]:
- Original clauses, which are only ever added to.
- Completion clauses, which are replaced in full whenever the [rules](crate::db::rule) change.

Each original clause is stored in canonical form (sorted, without duplicate literals), and a set of the stored clauses is kept so an identical clause is never stored twice.
This is what keeps repeated compilation of a constraint from growing the formula.

For propagation, an occurrence list is kept for each literal: the keys of every clause containing the literal.
The lists are rebuilt by [index](ClauseDB::index) before each solve, if the database has changed.
*/

use std::collections::HashSet;

use crate::{
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{
        clause::{Clause, CClause},
        literal::CLiteral,
    },
};

/// Possible 'Ok' results from storing a clause.
#[derive(Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was stored.
    Added(ClauseKey),

    /// An identical clause was already stored.
    Duplicate,

    /// The clause is a tautology, and was not stored.
    Tautology,
}

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    /// Original clauses, in order of addition.
    original: Vec<CClause>,

    /// Completion clauses.
    completion: Vec<CClause>,

    /// Every original clause, for detecting duplicates.
    seen: HashSet<CClause>,

    /// The keys of every clause containing a literal, indexed by [literal index](CLiteral::index).
    occurrences: Vec<Vec<ClauseKey>>,

    /// Whether the empty clause has been stored.
    empty: bool,
}

impl ClauseDB {
    /// Stores a clause, assumed to be in canonical form and free of tautology.
    pub fn store(&mut self, clause: CClause) -> ClauseOk {
        if self.seen.contains(&clause) {
            return ClauseOk::Duplicate;
        }

        if clause.is_empty() {
            log::trace!(target: targets::CLAUSE_DB, "Empty clause stored");
            self.empty = true;
        }

        let key = ClauseKey::Original(self.original.len());
        log::trace!(target: targets::CLAUSE_DB, "{key}: {}", clause.as_string());
        self.seen.insert(clause.clone());
        self.original.push(clause);
        ClauseOk::Added(key)
    }

    /// Replaces every completion clause with those given.
    pub fn replace_completion(&mut self, clauses: Vec<CClause>) {
        self.completion = clauses;
    }

    /// The clause of a key.
    ///
    /// # Soundness
    /// Keys are only issued by the database, and clauses are never removed apart from completion clauses.
    /// A completion key is only valid until the next replacement of completion clauses.
    pub fn get(&self, key: ClauseKey) -> &CClause {
        match key {
            ClauseKey::Original(index) => &self.original[index],
            ClauseKey::Completion(index) => &self.completion[index],
        }
    }

    /// Rebuilds the occurrence lists, for a language with the given count of atoms.
    pub fn index(&mut self, atom_count: usize) {
        let mut occurrences = vec![Vec::default(); atom_count * 2];
        for (key, clause) in self.all_clauses() {
            for literal in clause.literals() {
                occurrences[literal.index()].push(key);
            }
        }
        self.occurrences = occurrences;
    }

    /// The keys of clauses containing the literal.
    pub fn occurrences(&self, literal: CLiteral) -> &[ClauseKey] {
        match self.occurrences.get(literal.index()) {
            Some(keys) => keys,
            None => &[],
        }
    }

    /// An iterator over every clause, original and completion, with its key.
    pub fn all_clauses(&self) -> impl Iterator<Item = (ClauseKey, &CClause)> {
        let originals = self
            .original
            .iter()
            .enumerate()
            .map(|(index, clause)| (ClauseKey::Original(index), clause));

        let completions = self
            .completion
            .iter()
            .enumerate()
            .map(|(index, clause)| (ClauseKey::Completion(index), clause));

        originals.chain(completions)
    }

    /// True if the empty clause has been stored.
    pub fn contains_empty(&self) -> bool {
        self.empty
    }

    /// A count of original clauses.
    pub fn original_count(&self) -> usize {
        self.original.len()
    }
}
