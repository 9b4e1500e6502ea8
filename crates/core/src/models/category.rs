use serde::{Deserialize, Serialize};

use crate::types::EntityId;

use super::Record;

/// A classification label attachable to products and public items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Record for Category {
    const ENTITY: &'static str = "Category";

    fn id(&self) -> &str {
        &self.category_id
    }
}
