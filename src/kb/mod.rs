/*!
The knowledge base --- sorts, entities, and predicates, compiled to constraints on an oracle.

A [KnowledgeBase] holds:
- A [taxonomy](taxonomy) of sorts.
- A [registry](entity) of entities, each bound to a single sort.
- A collection of [predicates](predicate), related by generalization.

Predicates are compiled lazily.
Nothing is asserted to an oracle when a predicate is defined, or when a relation between predicates is declared.
Instead, the constraints relevant to some argument are asserted the first time the predicate is [called](KnowledgeBase::call) on the argument.
See [compile](crate::kb::compile) for details.

The knowledge base does not own an oracle.
Each method which may assert a constraint takes the oracle as an argument, so a knowledge base may be paired with any [Oracle](crate::oracle::Oracle).

# Example

```rust
# use otter_world::context::Context;
# use otter_world::kb::{KnowledgeBase, predicate::{Arguments, Signature}};
# use otter_world::oracle::Oracle;
# use otter_world::structures::literal::CLiteral;
let mut oracle = Context::default();
let mut kb = KnowledgeBase::new("entity");
let person = kb.register_sort("person", "entity", &["mother"]).unwrap();

let exists = kb.define_predicate("exists", Signature::Unary(person)).unwrap();
let dead = kb.define_predicate("dead", Signature::Unary(person)).unwrap();
kb.add_strong_generalization(dead, exists).unwrap();

let dead_mother = kb.call_unary(&mut oracle, dead, "mother").unwrap();
let mother_exists = kb.call_unary(&mut oracle, exists, "mother").unwrap();

oracle.force(CLiteral::new(dead_mother, true)).unwrap();
let model = oracle.solve(false).unwrap().unwrap();
assert_eq!(model.value_of(mother_exists), Some(true));
```
*/

pub mod compile;
pub mod entity;
pub mod extension;
pub mod predicate;
pub mod taxonomy;

use std::collections::HashMap;

use petgraph::Graph;

use entity::EntityRegistry;
use predicate::{Predicate, PredicateId, Relation};
use taxonomy::Taxonomy;

/// Sorts, entities, and predicates.
pub struct KnowledgeBase {
    /// The sort taxonomy.
    pub taxonomy: Taxonomy,

    /// The sort of each entity.
    pub entities: EntityRegistry,

    /// Predicates, with an edge from each predicate to each predicate it is related to.
    predicates: Graph<Predicate, Relation>,

    /// Predicates, by name.
    names: HashMap<String, PredicateId>,

    /// The predicate used to state an entity exists, if any.
    existence: Option<PredicateId>,
}

impl KnowledgeBase {
    /// An empty knowledge base, with a taxonomy containing only a root sort with the given name.
    pub fn new(root_name: &str) -> Self {
        KnowledgeBase {
            taxonomy: Taxonomy::new(root_name),
            entities: EntityRegistry::default(),
            predicates: Graph::default(),
            names: HashMap::default(),
            existence: None,
        }
    }

    /// Sets the predicate used to state an entity exists.
    ///
    /// Facts of the existence predicate are treated as sort membership when summarizing a world, and a bare word naming an entity or sort is read as existence of the entity or some member of the sort.
    pub fn set_existence(&mut self, predicate: PredicateId) {
        self.existence = Some(predicate);
    }

    /// The predicate used to state an entity exists, if any.
    pub fn existence(&self) -> Option<PredicateId> {
        self.existence
    }
}
