use serde::{Deserialize, Serialize};

use crate::types::{EntityId, IsoDate};

use super::{Category, Record, User};

/// A physical piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicItem {
    pub public_item_id: EntityId,
    pub name: String,
    /// Whether the item still physically exists.
    pub is_remaining: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Purchase cost; non-negative when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<IsoDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<IsoDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    /// Product this item was registered against, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<EntityId>,
}

impl PublicItem {
    pub fn category_id(&self) -> Option<&str> {
        self.category
            .as_ref()
            .map(|category| category.category_id.as_str())
    }
}

impl Record for PublicItem {
    const ENTITY: &'static str = "PublicItem";

    fn id(&self) -> &str {
        &self.public_item_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_item_round_trips_without_optionals() {
        let raw = r#"{"public_item_id":"1","name":"けもみみ","is_remaining":true}"#;
        let item: PublicItem = serde_json::from_str(raw).unwrap();

        assert_eq!(item.category_id(), None);
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::from_str::<serde_json::Value>(raw).unwrap()
        );
    }
}
