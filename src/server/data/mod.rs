//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over SeaORM database operations. They accept any
//! `ConnectionTrait` so the same code runs against a pooled connection or inside a transaction.

pub mod item;
