/*!
The entity registry, and operations which bind entities to sorts.

Each entity is bound to exactly one sort, its most specific sort.
A binding is made either by [declaration](KnowledgeBase::declare_sort) or on first use, and is never revised.
Binding an entity to a sort also appends the entity to the instances of the sort.

Queries and registration are separate:
- [try_sort_of](KnowledgeBase::try_sort_of) and [is_a](KnowledgeBase::is_a) never bind an entity.
- [ensure_sort](KnowledgeBase::ensure_sort) binds an entity to a default sort, if the entity has no sort.
*/

use std::collections::HashMap;

use crate::{
    kb::{taxonomy::SortId, KnowledgeBase},
    misc::log::targets::{self},
    types::err::{self},
};

/// A map from entities to sorts, preserving the order of registration.
#[derive(Clone, Debug, Default)]
pub struct EntityRegistry {
    sorts: HashMap<String, SortId>,
    order: Vec<String>,
}

impl EntityRegistry {
    /// The sort of an entity, if the entity has been registered.
    pub fn get(&self, entity: &str) -> Option<SortId> {
        self.sorts.get(entity).copied()
    }

    /// Entities, in order of registration.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|entity| entity.as_str())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn record(&mut self, entity: &str, sort: SortId) {
        self.sorts.insert(entity.to_string(), sort);
        self.order.push(entity.to_string());
    }
}

impl KnowledgeBase {
    /// Registers a sort as the last subsort of the sort named `parent`, with the given instances.
    pub fn register_sort(
        &mut self,
        name: &str,
        parent: &str,
        instances: &[&str],
    ) -> Result<SortId, err::KbError> {
        let parent = self
            .taxonomy
            .sort_named(parent)
            .ok_or_else(|| err::KbError::UnknownSort(parent.to_string()))?;

        let sort = self.taxonomy.add_sort(name, parent)?;
        log::trace!(target: targets::TAXONOMY, "Sort {name} under {}", self.taxonomy.name_of(parent));

        for instance in instances {
            self.declare_sort(instance, sort)?;
        }
        Ok(sort)
    }

    /// Binds an entity to a sort.
    ///
    /// Redeclaring an entity to the sort it is bound to has no effect.
    pub fn declare_sort(&mut self, entity: &str, sort: SortId) -> Result<(), err::KbError> {
        match self.entities.get(entity) {
            Some(declared) if declared == sort => Ok(()),

            Some(declared) => Err(err::KbError::SortConflict {
                entity: entity.to_string(),
                declared: self.taxonomy.name_of(declared).to_string(),
                requested: self.taxonomy.name_of(sort).to_string(),
            }),

            None => {
                log::trace!(target: targets::TAXONOMY, "{entity} is a {}", self.taxonomy.name_of(sort));
                self.entities.record(entity, sort);
                self.taxonomy.push_instance(sort, entity);
                Ok(())
            }
        }
    }

    /// The sort of an entity, if the entity has been registered.
    pub fn try_sort_of(&self, entity: &str) -> Option<SortId> {
        self.entities.get(entity)
    }

    /// The sort of an entity, binding the entity to `default` if the entity has not been registered.
    pub fn ensure_sort(&mut self, entity: &str, default: SortId) -> SortId {
        match self.entities.get(entity) {
            Some(sort) => sort,
            None => {
                log::trace!(target: targets::TAXONOMY, "{entity} assumed to be a {}", self.taxonomy.name_of(default));
                self.entities.record(entity, default);
                self.taxonomy.push_instance(default, entity);
                default
            }
        }
    }

    /// The sort of an entity, registering the entity with the given default if there is one.
    ///
    /// Returns `None` only if the entity has not been registered and no default is given.
    pub fn sort_of(&mut self, entity: &str, default: Option<SortId>) -> Option<SortId> {
        match default {
            Some(default) => Some(self.ensure_sort(entity, default)),
            None => self.try_sort_of(entity),
        }
    }

    /// True if the sort of the entity is `sort`, or some descendant of `sort`.
    pub fn is_a(&self, entity: &str, sort: SortId) -> Result<bool, err::KbError> {
        match self.entities.get(entity) {
            Some(declared) => Ok(self.taxonomy.is_subsort(declared, sort)),
            None => Err(err::KbError::UndeclaredSort(entity.to_string())),
        }
    }

    /// Entities, in order of registration.
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.entities.iter()
    }
}
