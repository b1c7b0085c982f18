//! Camera motion and ambient particles.

pub(crate) mod atmosphere;
pub(crate) mod camera;
