//! A library for building worlds of sorted entities and predicates, compiled to constraints on a satisfiability oracle.
//!
//! otter_world keeps a small knowledge base --- a taxonomy of sorts, a registry of entities, and predicates related by generalization --- and compiles the relations of each predicate to constraints the first time the predicate is used on some argument.
//! The constraints are kept by an oracle, which answers whether some collection of literals is consistent, and finds models.
//!
//! A world built in this way may be explored by a [dialogue](crate::dialogue) through a [questionnaire](crate::questionnaire): each question offers only those answers consistent with the answers given so far, and when the questions run out a model is fixed and summarized.
//!
//! # Orientation
//!
//! The library is designed around a [world](crate::world), which pairs a [knowledge base](crate::kb) and a [grammar](crate::syntax) with an [oracle](crate::oracle).
//!
//! - The [taxonomy](crate::kb::taxonomy) and [entity registry](crate::kb::entity) give the sort of each entity, and are used to type check arguments.
//! - [Predicates](crate::kb::predicate) are [compiled](crate::kb::compile) lazily, per argument.
//! - The oracle of the library is a [context](crate::context), with a solve made of the [procedures] over the [databases](crate::db).
//!   Any other structure implementing [Oracle](crate::oracle::Oracle) may be used instead.
//! - A world may [probe](crate::world::World::probe) for consistency any number of times, and [commits](crate::world::World::commit) to a model, recorded as a [snapshot](crate::world::Snapshot) with a summary.
//!
//! Useful starting points, then, may be:
//! - The [standard ontology](crate::ontology), for an example of sorts and predicates.
//! - The [compilation](crate::kb::compile) of predicates to constraints.
//! - The [solve](crate::procedures::solve) of the context.
//!
//! # Example
//!
//! ```rust
//! # use otter_world::config::Config;
//! # use otter_world::world::World;
//! let mut world = World::from_config(Config::default()).unwrap();
//!
//! // Some member of the family is dead.
//! let grief = world.literal("dead family").unwrap();
//! let mother = world.literal("mother is alive").unwrap();
//! let father = world.literal("father is alive").unwrap();
//!
//! assert!(world.probe(&[&[grief, mother]]).unwrap());
//!
//! // The existential is compiled before the siblings are called on, and still covers them.
//! let brother = world.literal("brother is alive").unwrap();
//! let sister = world.literal("sister is alive").unwrap();
//! assert!(!world.probe(&[&[grief, mother, father, brother, sister]]).unwrap());
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs of the constraints compiled for each argument can be found with `RUST_LOG=compile=trace …`
//! - Logs of each commit can be found with `RUST_LOG=commit=info …`

#![allow(clippy::single_match)]
#![allow(clippy::derivable_impls)]

#[doc(hidden)]
pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;

pub mod oracle;

pub mod kb;
pub mod ontology;
pub mod syntax;
pub mod world;

pub mod dialogue;
pub mod questionnaire;
