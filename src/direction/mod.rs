//! Directive layering.
//!
//! Song defaults, chapter overrides and per-word directives are merged here into one effective
//! value per parameter. Resolution never fails: unknown tags fall through to the next layer.

pub(crate) mod resolver;
pub(crate) mod sections;
