//! Group layout.
//!
//! Positions and font sizes are solved once per phrase group during prebake and cached by
//! [`solver::LayoutKey`]; per-frame code only reads the cache.

pub(crate) mod measure;
pub(crate) mod solver;
