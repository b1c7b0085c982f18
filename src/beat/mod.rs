//! Beat tracking and the beat-driven pulse effects.

pub(crate) mod cursor;
pub(crate) mod spring;
