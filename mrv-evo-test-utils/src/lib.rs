//! Shared test harness for the MRV Evo backend.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables and fixtures a test
//! needs, then [`TestBuilder::build`] returns a [`TestContext`] backed by a fresh in-memory SQLite
//! database with everything in place.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::item::factory, TestBuilder, TestContext, TestError};
}
