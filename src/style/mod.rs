//! Immutable style data.
//!
//! Tables are plain `static` arrays shared read-only by every bake.

pub(crate) mod lexicon;
pub(crate) mod tables;
