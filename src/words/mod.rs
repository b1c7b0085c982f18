//! Word metadata and phrase grouping.

pub(crate) mod meta;
pub(crate) mod phrase;
