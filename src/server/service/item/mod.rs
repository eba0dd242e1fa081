//! Item service layer.
//!
//! Business logic for the item catalogue. Every operation runs through [`RetryContext`] so
//! transient database failures are retried, and missing rows are reported as
//! [`ItemError::NotFound`].


use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::item::{ItemDto, ItemPayload},
    server::{
        data::item::ItemRepository, error::item::ItemError, error::Error,
        service::retry::RetryContext,
    },
};

/// Service for managing catalogue items.
pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    /// Creates a new instance of ItemService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new item from the provided payload.
    ///
    /// # Returns
    /// - `Ok(ItemDto)` - The stored item including its assigned ID
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn create_item(&self, payload: ItemPayload) -> Result<ItemDto, Error> {
        // A repeated INSERT after a dropped connection could store the item twice
        let mut ctx: RetryContext<()> = RetryContext::new().non_idempotent();

        let db = self.db.clone();

        ctx.execute_with_retry("create item", |_| {
            let db = db.clone();
            let payload = payload.clone();

            Box::pin(async move {
                let item_repo = ItemRepository::new(&db);
                let item = item_repo.create(payload).await?;

                tracing::info!("Created item ID {}", item.id);

                Ok::<_, Error>(ItemDto::from(item))
            })
        })
        .await
    }

    /// Retrieves every item, ordered by ID.
    pub async fn get_items(&self) -> Result<Vec<ItemDto>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry("get items", |_| {
            let db = db.clone();

            Box::pin(async move {
                let item_repo = ItemRepository::new(&db);
                let items = item_repo.get_all().await?;

                Ok::<_, Error>(items.into_iter().map(ItemDto::from).collect::<Vec<_>>())
            })
        })
        .await
    }

    /// Retrieves a single item.
    ///
    /// # Returns
    /// - `Ok(ItemDto)` - Item found
    /// - `Err(Error::ItemError(ItemError::NotFound))` - No item with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_item(&self, item_id: i32) -> Result<ItemDto, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get item ID {}", item_id), |_| {
            let db = db.clone();

            Box::pin(async move {
                let item_repo = ItemRepository::new(&db);

                match item_repo.get_by_id(item_id).await? {
                    Some(item) => Ok(ItemDto::from(item)),
                    None => Err(Error::from(ItemError::NotFound(item_id))),
                }
            })
        })
        .await
    }

    /// Replaces the name, description and category of an existing item.
    ///
    /// The lookup and the write share one transaction.
    ///
    /// # Returns
    /// - `Ok(ItemDto)` - The item as stored after the update
    /// - `Err(Error::ItemError(ItemError::NotFound))` - No item with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn update_item(&self, item_id: i32, payload: ItemPayload) -> Result<ItemDto, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("update item ID {}", item_id), |_| {
            let db = db.clone();
            let payload = payload.clone();

            Box::pin(async move {
                let txn = db.begin().await?;

                let item_repo = ItemRepository::new(&txn);
                let item = match item_repo.update(item_id, payload).await? {
                    Some(item) => item,
                    // Dropping the transaction rolls it back
                    None => return Err(Error::from(ItemError::NotFound(item_id))),
                };

                txn.commit().await?;

                tracing::info!("Updated item ID {}", item.id);

                Ok(ItemDto::from(item))
            })
        })
        .await
    }

    /// Deletes an item.
    ///
    /// # Returns
    /// - `Ok(())` - Item was deleted
    /// - `Err(Error::ItemError(ItemError::NotFound))` - No item with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn delete_item(&self, item_id: i32) -> Result<(), Error> {
        // A repeated DELETE of an already removed row would report NotFound
        let mut ctx: RetryContext<()> = RetryContext::new().non_idempotent();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("delete item ID {}", item_id), |_| {
            let db = db.clone();

            Box::pin(async move {
                let item_repo = ItemRepository::new(&db);
                let result = item_repo.delete(item_id).await?;

                if result.rows_affected == 0 {
                    return Err(Error::from(ItemError::NotFound(item_id)));
                }

                tracing::info!("Deleted item ID {}", item_id);

                Ok(())
            })
        })
        .await
    }
}
