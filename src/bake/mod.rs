//! Frame baking.
//!
//! [`prebake::PrebakedData`] front-loads everything that does not depend on frame time. The
//! per-frame function [`frame::bake_frame`] then advances an explicit [`frame::BakeState`] one
//! frame at a time. The synchronous and chunked drivers in [`baker`] share that function, so
//! their output is identical.

pub(crate) mod baker;
pub(crate) mod config;
pub(crate) mod fingerprint;
pub(crate) mod frame;
pub(crate) mod prebake;
pub(crate) mod timeline;
