/*!
The sort taxonomy.

Sorts form a tree, rooted at a single universal sort.
Each sort has (at most) one parent, an ordered list of subsorts, and an ordered list of instances.

Sorts are stored in a [SlotMap], and referred to by [SortId].
Sorts are never removed, so a [SortId] issued by a taxonomy is always valid for the taxonomy.

# Members

The members of a sort are the instances of the sort, followed by the members of each subsort in order.
That is, the tree is walked in preorder.

```rust
# use otter_world::kb::taxonomy::Taxonomy;
let mut taxonomy = Taxonomy::new("entity");
let root = taxonomy.root();
let person = taxonomy.add_sort("person", root).unwrap();
let pet = taxonomy.add_sort("pet", root).unwrap();

taxonomy.push_instance(root, "rock");
taxonomy.push_instance(pet, "cat");
taxonomy.push_instance(person, "mother");

let members = taxonomy.members(root).collect::<Vec<_>>();
assert_eq!(members, vec!["rock", "mother", "cat"]);
```
*/

use std::collections::HashMap;

use slotmap::{new_key_type, SlotMap};

use crate::types::err::{self};

new_key_type! {
    /// The key of a sort in a [Taxonomy].
    pub struct SortId;
}

/// A sort, aka. a 'type' of entity.
#[derive(Clone, Debug)]
pub struct Sort {
    /// The name of the sort.
    pub name: String,

    /// The parent of the sort, `None` only for the root.
    pub parent: Option<SortId>,

    /// Subsorts, in order of registration.
    pub subsorts: Vec<SortId>,

    /// Instances, in order of registration.
    pub instances: Vec<String>,
}

/// A tree of sorts.
#[derive(Clone, Debug)]
pub struct Taxonomy {
    sorts: SlotMap<SortId, Sort>,
    names: HashMap<String, SortId>,
    root: SortId,
}

impl Taxonomy {
    /// A taxonomy with a single sort, with the given name.
    pub fn new(root_name: &str) -> Self {
        let mut sorts = SlotMap::with_key();
        let root = sorts.insert(Sort {
            name: root_name.to_string(),
            parent: None,
            subsorts: Vec::default(),
            instances: Vec::default(),
        });

        let mut names = HashMap::default();
        names.insert(root_name.to_string(), root);

        Taxonomy { sorts, names, root }
    }

    /// The universal sort.
    pub fn root(&self) -> SortId {
        self.root
    }

    /// Adds a sort as the last subsort of `parent`.
    pub fn add_sort(&mut self, name: &str, parent: SortId) -> Result<SortId, err::KbError> {
        if self.names.contains_key(name) {
            return Err(err::KbError::DuplicateSortName(name.to_string()));
        }

        let sort = self.sorts.insert(Sort {
            name: name.to_string(),
            parent: Some(parent),
            subsorts: Vec::default(),
            instances: Vec::default(),
        });

        self.sorts[parent].subsorts.push(sort);
        self.names.insert(name.to_string(), sort);
        Ok(sort)
    }

    /// Appends an instance to a sort.
    pub fn push_instance(&mut self, sort: SortId, instance: &str) {
        self.sorts[sort].instances.push(instance.to_string());
    }

    /// The sort with the given name, if one exists.
    pub fn sort_named(&self, name: &str) -> Option<SortId> {
        self.names.get(name).copied()
    }

    pub fn sort(&self, sort: SortId) -> &Sort {
        &self.sorts[sort]
    }

    pub fn name_of(&self, sort: SortId) -> &str {
        &self.sorts[sort].name
    }

    pub fn parent(&self, sort: SortId) -> Option<SortId> {
        self.sorts[sort].parent
    }

    pub fn subsorts(&self, sort: SortId) -> &[SortId] {
        &self.sorts[sort].subsorts
    }

    pub fn instances(&self, sort: SortId) -> &[String] {
        &self.sorts[sort].instances
    }

    /// The sort and each ancestor of the sort, ending with the root.
    pub fn ancestors(&self, sort: SortId) -> impl Iterator<Item = SortId> + '_ {
        std::iter::successors(Some(sort), move |sort| self.parent(*sort))
    }

    /// True if `sort` is `general` or a descendant of `general`.
    pub fn is_subsort(&self, sort: SortId, general: SortId) -> bool {
        self.ancestors(sort).any(|ancestor| ancestor == general)
    }

    /// The members of a sort, see [taxonomy](crate::kb::taxonomy) for details.
    pub fn members(&self, sort: SortId) -> Members<'_> {
        Members {
            taxonomy: self,
            current: Some((sort, 0)),
            pending: self.subsorts(sort).iter().rev().copied().collect(),
        }
    }

    /// A count of sorts.
    pub fn len(&self) -> usize {
        self.sorts.len()
    }

    /// Always false, as the root is a sort.
    pub fn is_empty(&self) -> bool {
        self.sorts.is_empty()
    }
}

/// An iterator over the members of a sort.
///
/// Restartable, by a fresh call to [members](Taxonomy::members).
#[derive(Clone)]
pub struct Members<'t> {
    taxonomy: &'t Taxonomy,

    /// The sort being walked, and the index of its next instance.
    current: Option<(SortId, usize)>,

    /// Sorts yet to be walked, with the next on top.
    pending: Vec<SortId>,
}

impl<'t> Iterator for Members<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (sort, index) = self.current?;

            if let Some(instance) = self.taxonomy.instances(sort).get(index) {
                self.current = Some((sort, index + 1));
                return Some(instance.as_str());
            }

            self.current = self.pending.pop().map(|next| {
                self.pending
                    .extend(self.taxonomy.subsorts(next).iter().rev().copied());
                (next, 0)
            });
        }
    }
}

#[cfg(test)]
mod taxonomy_tests {
    use super::*;

    fn family_tree() -> (Taxonomy, Vec<SortId>) {
        let mut taxonomy = Taxonomy::new("entity");
        let entity = taxonomy.root();
        let person = taxonomy.add_sort("person", entity).unwrap();
        let family = taxonomy.add_sort("family", person).unwrap();
        let parent = taxonomy.add_sort("parent", family).unwrap();
        let sibling = taxonomy.add_sort("sibling", family).unwrap();

        taxonomy.push_instance(parent, "mother");
        taxonomy.push_instance(parent, "father");
        taxonomy.push_instance(sibling, "brother");
        taxonomy.push_instance(family, "cousin");

        (taxonomy, vec![entity, person, family, parent, sibling])
    }

    #[test]
    fn members_in_preorder() {
        let (taxonomy, sorts) = family_tree();
        let members = taxonomy.members(sorts[1]).collect::<Vec<_>>();
        assert_eq!(members, vec!["cousin", "mother", "father", "brother"]);

        // Restartable.
        assert_eq!(taxonomy.members(sorts[1]).count(), 4);
        assert_eq!(taxonomy.members(sorts[4]).collect::<Vec<_>>(), vec!["brother"]);
    }

    #[test]
    fn subsorts() {
        let (taxonomy, sorts) = family_tree();
        assert!(taxonomy.is_subsort(sorts[3], sorts[0]));
        assert!(taxonomy.is_subsort(sorts[3], sorts[3]));
        assert!(!taxonomy.is_subsort(sorts[3], sorts[4]));
        assert_eq!(taxonomy.ancestors(sorts[4]).count(), 4);
    }

    #[test]
    fn duplicate_name() {
        let (mut taxonomy, sorts) = family_tree();
        assert_eq!(
            taxonomy.add_sort("parent", sorts[0]),
            Err(err::KbError::DuplicateSortName("parent".to_string()))
        );
    }
}
