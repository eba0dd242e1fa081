//! Database model type aliases.

/// Type alias for a row of the `Items` table.
///
/// # Fields (from `entity::item::Model`)
/// - `id` - Primary key, auto incremented
/// - `name` - Item name (nullable column)
/// - `description` - Item description (nullable column)
/// - `category` - Item category (nullable column)
pub type ItemModel = entity::item::Model;
