//! Factory functions for generating mock item database models.
//!
//! These are in-memory model instances that don't require database interaction, suitable for
//! unit tests of conversions and response formatting.

/// Create a mock item model for testing.
///
/// # Arguments
/// - `id` - The item ID
///
/// # Returns
/// - `entity::item::Model` - An item model with all columns populated
pub fn mock_item_model(id: i32) -> entity::item::Model {
    entity::item::Model {
        id,
        name: Some(format!("Item {}", id)),
        description: Some(format!("Description {}", id)),
        category: Some("General".to_string()),
    }
}
