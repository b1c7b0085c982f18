//! Pure animation curves.
//!
//! Entry, behavior and exit curves are closed enums dispatched through static evaluator tables.
//! Each evaluator is a plain `fn(&CurveCtx) -> AnimState` with no hidden state, so every style can
//! be tested in isolation and a frame can be recomputed from scratch at any time.

pub(crate) mod behavior;
pub(crate) mod ease;
pub(crate) mod entry;
pub(crate) mod exit;
pub(crate) mod state;
