use serde::{Deserialize, Serialize};

/// Request body for creating or replacing an item
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemPayload {
    pub name: String,
    pub description: String,
    pub category: String,
}

/// An item as stored in the `Items` table
///
/// Keys are serialized with the table's column names (`Id`, `Name`, ...), which is what
/// existing frontends read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ItemDto {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl From<entity::item::Model> for ItemDto {
    fn from(model: entity::item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            category: model.category,
        }
    }
}
