use serde::{Deserialize, Serialize};

use crate::types::EntityId;

use super::{Category, Record, User};

/// A catalog entry describing a type of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    /// Early clients spelled this key `categiries`; both are accepted.
    #[serde(default, alias = "categiries")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub main_users: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Product {
    /// Whether any of the product's categories has the given id.
    pub fn has_category(&self, category_id: &str) -> bool {
        self.categories
            .iter()
            .any(|category| category.category_id == category_id)
    }
}

impl Record for Product {
    const ENTITY: &'static str = "Product";

    fn id(&self) -> &str {
        &self.product_id
    }
}
