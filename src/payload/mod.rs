//! Boundary input model.
//!
//! The payload arrives already validated and time-aligned from the ingestion side; this module
//! only describes its shape and derives song bounds.

pub(crate) mod model;
