//! Declarative test builder for Phase 1 setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::Schema;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and item
/// fixtures. Methods can be chained together and finalized with `build()` to create a complete
/// test setup.
pub struct TestBuilder {
    // Tables to create
    include_item_table: bool,

    // Database fixtures to insert, (name, description, category)
    items: Vec<(String, String, String)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured. Building it as-is
    /// yields a database without any tables, which is how tests provoke database errors.
    pub fn new() -> Self {
        Self {
            include_item_table: false,
            items: Vec::new(),
        }
    }

    /// Add the `Items` table to the test database.
    pub fn with_item_table(mut self) -> Self {
        self.include_item_table = true;
        self
    }

    /// Insert an item into the database.
    ///
    /// Implies [`Self::with_item_table`]. Items are inserted in call order, so the first queued
    /// item receives ID 1 in a fresh database.
    pub fn with_item(mut self, name: &str, description: &str, category: &str) -> Self {
        self.include_item_table = true;
        self.items.push((
            name.to_string(),
            description.to_string(),
            category.to_string(),
        ));
        self
    }

    /// Insert `count` items with generated values (`Item 1`, `Item 2`, ...).
    pub fn with_mock_items(mut self, count: usize) -> Self {
        for n in 1..=count {
            self = self.with_item(
                &format!("Item {}", n),
                &format!("Description {}", n),
                "General",
            );
        }
        self
    }

    /// Build the test context.
    ///
    /// Creates the in-memory database, executes all queued table creations, then inserts all
    /// queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready-to-use test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_item_table {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.push(schema.create_table_from_entity(entity::prelude::Item));
        }

        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (name, description, category) in self.items {
            setup
                .item()
                .insert_item(&name, &description, &category)
                .await?;
        }

        Ok(setup)
    }
}
