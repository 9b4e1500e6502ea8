use serde::{Deserialize, Serialize};

use crate::types::{EntityId, IsoDate};

use super::Record;

/// A person who can be the main user of a product or public item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: EntityId,
    pub handle_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_id: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_member: bool,
    /// `None` serializes as `null`: the user has not graduated yet.
    #[serde(default)]
    pub graduation_date: Option<IsoDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl User {
    /// A user known only by id and handle, with every optional field absent.
    pub fn new(user_id: impl Into<EntityId>, handle_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            handle_name: handle_name.into(),
            screen_name: None,
            slack_id: None,
            is_admin: false,
            is_member: false,
            graduation_date: None,
            remarks: None,
        }
    }
}

impl Record for User {
    const ENTITY: &'static str = "User";

    fn id(&self) -> &str {
        &self.user_id
    }
}

/// Lightweight user reference carried by registration payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainUserRef {
    pub user_id: EntityId,
    pub handle_name: String,
}
