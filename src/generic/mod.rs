//! Generic structures, not specific to worlds or oracles.

pub mod random;
