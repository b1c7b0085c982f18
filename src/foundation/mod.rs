//! Shared primitives: frame timing, canvas geometry, errors and deterministic hashing.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
