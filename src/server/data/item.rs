//! Data access for the `Items` table.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{model::item::ItemPayload, server::model::db::ItemModel};

/// Repository for rows of the `Items` table, usable with a connection or a transaction
pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    /// Creates a new instance of [`ItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new item, returning the stored row with its assigned ID
    pub async fn create(&self, item: ItemPayload) -> Result<ItemModel, DbErr> {
        let item = entity::item::ActiveModel {
            name: ActiveValue::Set(Some(item.name)),
            description: ActiveValue::Set(Some(item.description)),
            category: ActiveValue::Set(Some(item.category)),
            ..Default::default()
        };

        item.insert(self.db).await
    }

    /// Gets all items ordered by ID
    pub async fn get_all(&self) -> Result<Vec<ItemModel>, DbErr> {
        entity::prelude::Item::find()
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets an item by ID, `Ok(None)` if it does not exist
    pub async fn get_by_id(&self, item_id: i32) -> Result<Option<ItemModel>, DbErr> {
        entity::prelude::Item::find_by_id(item_id).one(self.db).await
    }

    /// Replaces every column of an existing item
    ///
    /// Returns `Ok(None)` if no item exists with the provided ID.
    pub async fn update(
        &self,
        item_id: i32,
        item: ItemPayload,
    ) -> Result<Option<ItemModel>, DbErr> {
        let existing = match self.get_by_id(item_id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        self.overwrite(existing, item).await
    }

    /// Writes the payload over a previously fetched row
    ///
    /// Returns `Ok(None)` if the row was deleted after it was fetched.
    async fn overwrite(
        &self,
        existing: ItemModel,
        item: ItemPayload,
    ) -> Result<Option<ItemModel>, DbErr> {
        let mut item_am = existing.into_active_model();
        item_am.name = ActiveValue::Set(Some(item.name));
        item_am.description = ActiveValue::Set(Some(item.description));
        item_am.category = ActiveValue::Set(Some(item.category));

        match item_am.update(self.db).await {
            Ok(item) => Ok(Some(item)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Deletes an item
    ///
    /// Returns OK regardless of item existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, item_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Item::delete_by_id(item_id)
            .exec(self.db)
            .await
    }
}
