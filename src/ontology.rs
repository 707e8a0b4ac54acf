//! The standard sorts and predicates, for a world of people.
//!
//! Sorts:
//!
//! ```none
//! entity
//! └── person
//!     └── intimate
//!         ├── friend
//!         └── loved_one          lover, pet
//!             └── family
//!                 ├── parent     mother, father
//!                 └── sibling    brother, sister
//! ```
//!
//! Predicates, with their syntax:
//!
//! | Predicate   | Sort   | Syntax                            | Relations                                            |
//! |-------------|--------|-----------------------------------|------------------------------------------------------|
//! | `exists`    | person | `_ exists`                        | the existence predicate                              |
//! | `likes`     | entity | `likes _`                         | excludes `dislikes`                                  |
//! | `dislikes`  | entity | `dislikes _`                      |                                                      |
//! | `loves`     | person | `loves _`                         | generalized by `likes`, `exists`; excludes `hates`   |
//! | `hates`     | person | `hates _`                         | generalized by `dislikes`, `exists`                  |
//! | `alcoholic` | person | `alcoholic _`                     | generalized by `exists`                              |
//! | `abusive`   | person | `abusive _`                       | generalized by `hates`                               |
//! | `tastes`    | entity | `_ tastes`                        |                                                      |
//! | `living`    | person | `_ is alive`, `living _`          | strongly generalized by `exists`; excludes `dead`    |
//! | `dead`      | person | `_ is dead`, `_ dead`, `dead _`   | strongly generalized by `exists`                     |

use crate::{
    kb::{predicate::Signature, KnowledgeBase},
    syntax::Grammar,
    types::err::{self},
};

/// The name of the root sort.
pub const ROOT: &str = "entity";

/// A knowledge base and grammar with the standard sorts and predicates.
pub fn standard() -> Result<(KnowledgeBase, Grammar), err::KbError> {
    let mut kb = KnowledgeBase::new(ROOT);
    let mut grammar = Grammar::default();

    let entity = kb.taxonomy.root();
    let person = kb.register_sort("person", ROOT, &[])?;
    kb.register_sort("intimate", "person", &[])?;
    kb.register_sort("friend", "intimate", &[])?;
    kb.register_sort("loved_one", "intimate", &["lover", "pet"])?;
    kb.register_sort("family", "loved_one", &[])?;
    kb.register_sort("parent", "family", &["mother", "father"])?;
    kb.register_sort("sibling", "family", &["brother", "sister"])?;

    let mut predicate = |name: &str, sort, patterns: &[&str]| -> Result<_, err::KbError> {
        let id = kb.define_predicate(name, Signature::Unary(sort))?;
        for pattern in patterns {
            grammar.add_rule(&kb, id, pattern)?;
        }
        Ok(id)
    };

    let exists = predicate("exists", person, &["_ exists"])?;
    let likes = predicate("likes", entity, &["likes _"])?;
    let dislikes = predicate("dislikes", entity, &["dislikes _"])?;
    let loves = predicate("loves", person, &["loves _"])?;
    let hates = predicate("hates", person, &["hates _"])?;
    let alcoholic = predicate("alcoholic", person, &["alcoholic _"])?;
    let abusive = predicate("abusive", person, &["abusive _"])?;
    predicate("tastes", entity, &["_ tastes"])?;
    let living = predicate("living", person, &["_ is alive", "living _"])?;
    let dead = predicate("dead", person, &["_ is dead", "_ dead", "dead _"])?;

    kb.set_existence(exists);

    kb.mutually_exclusive(likes, dislikes)?;

    kb.add_generalization(loves, likes)?;
    kb.add_generalization(loves, exists)?;

    kb.add_generalization(hates, dislikes)?;
    kb.add_generalization(hates, exists)?;

    kb.add_generalization(alcoholic, exists)?;

    kb.mutually_exclusive(loves, hates)?;

    kb.add_generalization(abusive, hates)?;

    kb.add_strong_generalization(living, exists)?;
    kb.add_strong_generalization(dead, exists)?;

    kb.mutually_exclusive(living, dead)?;

    Ok((kb, grammar))
}
