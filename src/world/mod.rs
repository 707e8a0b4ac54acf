/*!
A world --- a knowledge base and grammar, paired with an oracle.

A world is built incrementally, and may be questioned at any point:
- [probe](World::probe) checks whether some collection of literals is consistent with everything asserted so far, without changing what is asserted.
- [commit](World::commit) forces some literals, fixes a model, and records the model as a [Snapshot].

Each probe and commit begins by clearing whatever literals were forced by a previous probe or commit, so a probe has no effect on later probes, and a probe after a commit leaves the snapshot of the commit untouched.

# Example

```rust
# use otter_world::config::Config;
# use otter_world::world::World;
let mut world = World::from_config(Config::default()).unwrap();

let dead = world.literal("mother is dead").unwrap();
let alive = world.literal("mother is alive").unwrap();

assert!(world.probe(&[&[dead]]).unwrap());
assert!(!world.probe(&[&[dead], &[alive]]).unwrap());

world.commit(&[dead]).unwrap();
assert!(world.summary().unwrap().contains("mother"));
```
*/

mod snapshot;
pub use snapshot::{Fact, Group, Snapshot};

use crate::{
    config::Config,
    context::Context,
    kb::{
        predicate::{Arguments, Signature},
        KnowledgeBase,
    },
    misc::log::targets::{self},
    ontology,
    oracle::Oracle,
    structures::{atom::Atom, literal::CLiteral},
    syntax::{Grammar, Phrase},
    types::err::{self, ErrorKind},
};

/// The state of a world.
#[derive(Clone, Debug, Default)]
pub enum WorldState {
    /// No commit has been made.
    #[default]
    Building,

    /// A commit has been made, with the given snapshot.
    Committed(Snapshot),
}

/// A knowledge base and grammar, paired with an oracle.
pub struct World<O: Oracle = Context> {
    /// Sorts, entities, and predicates.
    pub kb: KnowledgeBase,

    /// Syntax rules for reading phrases.
    pub grammar: Grammar,

    oracle: O,

    /// Whether commits prefer false values.
    optimize: bool,

    state: WorldState,
}

impl World<Context> {
    /// A world with the standard ontology, and a context built from the configuration.
    pub fn from_config(config: Config) -> Result<Self, ErrorKind> {
        let (kb, grammar) = ontology::standard()?;
        let optimize = config.optimize.value;
        Ok(World::new(kb, grammar, Context::from_config(config), optimize))
    }
}

impl<O: Oracle> World<O> {
    /// A world from its parts.
    pub fn new(kb: KnowledgeBase, grammar: Grammar, oracle: O, optimize: bool) -> Self {
        World {
            kb,
            grammar,
            oracle,
            optimize,
            state: WorldState::default(),
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Calls the predicate with the given name on the entities.
    pub fn call(&mut self, predicate: &str, entities: &[&str]) -> Result<Atom, ErrorKind> {
        let id = self.kb.predicate_id(predicate)?;
        let Some(arguments) = Arguments::from_slice(entities) else {
            return Err(err::KbError::ArityMismatch {
                predicate: predicate.to_string(),
                expected: self.kb.predicate(id).signature.arity(),
                found: entities.len(),
            }
            .into());
        };
        self.kb.call(&mut self.oracle, id, arguments)
    }

    /// The existential quantification of the predicate with the given name over the sort with the given name.
    pub fn existential(&mut self, predicate: &str, sort: &str) -> Result<Atom, ErrorKind> {
        let id = self.kb.predicate_id(predicate)?;
        let sort = self
            .kb
            .taxonomy
            .sort_named(sort)
            .ok_or_else(|| err::KbError::UnknownSort(sort.to_string()))?;
        self.kb.existential(&mut self.oracle, id, sort)
    }

    /// Reads a phrase with the grammar of the world.
    pub fn phrase(&self, text: &str) -> Result<Phrase, err::ParseError> {
        self.grammar.parse_phrase(text)
    }

    /// The literal of a phrase.
    pub fn resolve(&mut self, phrase: &Phrase) -> Result<CLiteral, ErrorKind> {
        self.kb.resolve(&mut self.oracle, phrase)
    }

    /// The literal of some text, read as a phrase.
    pub fn literal(&mut self, text: &str) -> Result<CLiteral, ErrorKind> {
        let phrase = self.phrase(text)?;
        self.resolve(&phrase)
    }

    /// Whether the literals of every set are consistent with the constraints of the world.
    ///
    /// Literals already fixed by the constraints are checked against their fixed value, and only the remaining literals are forced.
    /// Nothing is forced after the probe.
    pub fn probe(&mut self, sets: &[&[CLiteral]]) -> Result<bool, ErrorKind> {
        self.oracle.reset_decisions();
        let consistent = self.force_and_solve(sets);
        self.oracle.reset_decisions();

        let consistent = consistent?;
        log::trace!(target: targets::PROBE, "Probe of {} set(s): {consistent}", sets.len());
        Ok(consistent)
    }

    /// Forces each literal of the sets not fixed by the constraints, and solves.
    ///
    /// The caller resets decisions, on success or failure.
    fn force_and_solve(&mut self, sets: &[&[CLiteral]]) -> Result<bool, ErrorKind> {
        for literal in sets.iter().flat_map(|set| set.iter()) {
            match self.oracle.fixed_value(literal.atom())? {
                Some(value) if value != literal.polarity() => {
                    log::trace!(target: targets::PROBE, "{literal} conflicts with a fixed value");
                    return Ok(false);
                }

                Some(_) => {}

                None => self.oracle.force(*literal)?,
            }
        }

        Ok(self.oracle.solve(false)?.is_some())
    }

    /// Forces each implication, and records a model of the world as a [Snapshot].
    ///
    /// A commit replaces the snapshot of any previous commit.
    /// If there is no model, the world is left as it was.
    pub fn commit(&mut self, implications: &[CLiteral]) -> Result<&Snapshot, ErrorKind> {
        self.oracle.reset_decisions();

        let solve = implications
            .iter()
            .try_for_each(|implication| self.oracle.force(*implication))
            .and_then(|_| self.oracle.solve(self.optimize));
        self.oracle.reset_decisions();

        let Some(model) = solve? else {
            log::info!(target: targets::COMMIT, "No model for {} implication(s)", implications.len());
            return Err(err::WorldError::UnsatisfiableCommit.into());
        };

        let snapshot = Snapshot::new(&self.kb, &self.oracle, model);
        log::info!(target: targets::COMMIT, "Committed to {} fact(s)", snapshot.facts.len());

        self.state = WorldState::Committed(snapshot);
        match &self.state {
            WorldState::Committed(snapshot) => Ok(snapshot),
            WorldState::Building => Err(err::WorldError::NotCommitted.into()),
        }
    }

    /// The snapshot of the most recent commit, if any.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match &self.state {
            WorldState::Committed(snapshot) => Some(snapshot),
            WorldState::Building => None,
        }
    }

    pub fn is_committed(&self) -> bool {
        self.snapshot().is_some()
    }

    /// The summary of the most recent commit.
    pub fn summary(&self) -> Result<&str, err::WorldError> {
        self.snapshot()
            .map(|snapshot| snapshot.summary.as_str())
            .ok_or(err::WorldError::NotCommitted)
    }

    /// The arguments of the predicate with the given name true on the committed model, restricted to arguments matching the signature.
    ///
    /// Empty before a commit.
    pub fn extension(&self, predicate: &str, signature: Signature) -> Vec<&Arguments> {
        match (self.snapshot(), self.kb.predicate_named(predicate)) {
            (Some(snapshot), Some(id)) => self.kb.extension(id, signature, snapshot.model()).collect(),
            _ => Vec::default(),
        }
    }

    /// Each entity related to `left` by the binary predicate with the given name, on the committed model.
    pub fn right_relata(&self, predicate: &str, left: &str) -> Vec<&str> {
        match (self.snapshot(), self.kb.predicate_named(predicate)) {
            (Some(snapshot), Some(id)) => self.kb.right_relata(id, left, snapshot.model()).collect(),
            _ => Vec::default(),
        }
    }

    /// Each entity related to `right` by the binary predicate with the given name, on the committed model.
    pub fn left_relata(&self, predicate: &str, right: &str) -> Vec<&str> {
        match (self.snapshot(), self.kb.predicate_named(predicate)) {
            (Some(snapshot), Some(id)) => self.kb.left_relata(id, right, snapshot.model()).collect(),
            _ => Vec::default(),
        }
    }
}
