//! Sources of randomness.
//!
//! Randomness is only used when an oracle makes a free decision, and only when the [configuration](crate::config::Config) asks for it.
//! With the default configuration every solve is deterministic.

mod minimal_pcg;

pub use minimal_pcg::MinimalPCG32;
