//! Data transfer objects exchanged with API consumers.

pub mod api;
pub mod item;
