//! Item fixture utilities.
//!
//! Methods for inserting `Items` rows into the test database, plus factory functions for
//! in-memory models in [`factory`].

pub mod factory;

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    /// Access item fixture helpers.
    pub fn item<'a>(&'a mut self) -> ItemFixtures<'a> {
        ItemFixtures { setup: self }
    }
}

pub struct ItemFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> ItemFixtures<'a> {
    /// Insert an item with the given values.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted row, including its assigned ID
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. the `Items` table was not created
    pub async fn insert_item(
        &self,
        name: &str,
        description: &str,
        category: &str,
    ) -> Result<entity::item::Model, TestError> {
        Ok(entity::prelude::Item::insert(entity::item::ActiveModel {
            name: ActiveValue::Set(Some(name.to_string())),
            description: ActiveValue::Set(Some(description.to_string())),
            category: ActiveValue::Set(Some(category.to_string())),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert an item with values derived from `n`, e.g. `Item 3`.
    pub async fn insert_mock_item(&self, n: i32) -> Result<entity::item::Model, TestError> {
        self.insert_item(
            &format!("Item {}", n),
            &format!("Description {}", n),
            "General",
        )
        .await
    }

    /// Insert a row whose string columns are all NULL.
    ///
    /// The API never writes such a row, but databases shared with other writers may contain
    /// them.
    pub async fn insert_empty_item(&self) -> Result<entity::item::Model, TestError> {
        Ok(entity::prelude::Item::insert(entity::item::ActiveModel {
            name: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            category: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
