//! Test fixture modules for database record creation.
//!
//! This module contains fixture utilities for creating test data during test execution
//! (Phase 2 of the test architecture).
//!
//! - `item` - `Items` table records and in-memory item models

pub mod item;
