//! Service layer for business logic.
//!
//! Services coordinate repository calls, turn "row not found" outcomes into domain errors and
//! retry operations that fail on transient database errors.

pub mod item;
pub mod retry;
