//! Registration payloads for new products and public items.
//!
//! Payload structs mirror what the registration forms post. Field rules are
//! declared with `validator` derives; rules that span fields or need a date
//! parser are checked by hand in `check`.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::models::{Category, MainUserRef, Product, PublicItem, User};
use crate::types::{is_iso_date, EntityId, IsoDate};

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// Payload for `POST /products`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewProduct {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name is required")
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    #[serde(default, alias = "categiries")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub main_users: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl NewProduct {
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(into_core_error)
    }

    /// Validate and build the stored record under `product_id`.
    pub fn into_product(self, product_id: EntityId) -> Result<Product, CoreError> {
        self.check()?;

        Ok(Product {
            product_id,
            name: self.name.unwrap_or_default(),
            model_number: self.model_number,
            product_url: self.product_url,
            categories: self.categories,
            main_users: self.main_users,
            remarks: self.remarks,
        })
    }
}

// ---------------------------------------------------------------------------
// Public item
// ---------------------------------------------------------------------------

fn default_is_remaining() -> bool {
    true
}

/// Payload for `POST /public-items`.
///
/// The item either references an existing product via `product_id` or
/// carries a `product` to register inline; never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewPublicItem {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name is required")
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_is_remaining")]
    pub is_remaining: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<EntityId>,
    #[validate(range(min = 0.0, message = "cost must not be negative"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Older forms post this as `purchase_date`.
    #[serde(default, alias = "purchase_date", skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<IsoDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<IsoDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_user: Option<MainUserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<NewProduct>,
}

impl Default for NewPublicItem {
    fn default() -> Self {
        Self {
            name: None,
            is_remaining: true,
            category_id: None,
            cost: None,
            approval_date: None,
            expiration_date: None,
            main_user: None,
            remarks: None,
            product_id: None,
            product: None,
        }
    }
}

/// References of a [`NewPublicItem`] after the caller has looked them up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedRefs {
    pub category: Option<Category>,
    pub main_user: Option<User>,
    pub product_id: Option<EntityId>,
}

impl NewPublicItem {
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(into_core_error)?;

        for (field, value) in [
            ("approval_date", &self.approval_date),
            ("expiration_date", &self.expiration_date),
        ] {
            if let Some(date) = value {
                if !is_iso_date(date) {
                    return Err(CoreError::Validation(format!(
                        "{field} must be a YYYY-MM-DD date, got '{date}'"
                    )));
                }
            }
        }

        if self.product_id.is_some() && self.product.is_some() {
            return Err(CoreError::Validation(
                "product_id and product are mutually exclusive".into(),
            ));
        }

        if let Some(product) = &self.product {
            product
                .check()
                .map_err(|e| CoreError::Validation(format!("product: {}", validation_message(e))))?;
        }

        Ok(())
    }

    /// Validate and build the stored record under `public_item_id`.
    pub fn into_public_item(
        self,
        public_item_id: EntityId,
        refs: ResolvedRefs,
    ) -> Result<PublicItem, CoreError> {
        self.check()?;

        Ok(PublicItem {
            public_item_id,
            name: self.name.unwrap_or_default(),
            is_remaining: self.is_remaining,
            category: refs.category,
            cost: self.cost,
            approval_date: self.approval_date,
            expiration_date: self.expiration_date,
            main_user: refs.main_user,
            remarks: self.remarks,
            product_id: refs.product_id,
        })
    }
}

// ---------------------------------------------------------------------------
// Error conversion
// ---------------------------------------------------------------------------

/// Flatten `validator` errors into a single, deterministically ordered message.
fn into_core_error(errors: ValidationErrors) -> CoreError {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let field = field.to_string();
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
                .collect();
            (field, messages)
        })
        .collect();
    fields.sort();

    let mut messages: Vec<String> = fields.into_iter().flat_map(|(_, m)| m).collect();
    messages.dedup();

    CoreError::Validation(messages.join("; "))
}

fn validation_message(err: CoreError) -> String {
    match err {
        CoreError::Validation(message) => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn named(name: &str) -> NewPublicItem {
        NewPublicItem {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    // -- NewProduct ----------------------------------------------------------

    #[test]
    fn product_without_name_is_rejected() {
        let err = NewProduct::default().check().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "name is required");
    }

    #[test]
    fn product_with_empty_name_is_rejected() {
        let payload = NewProduct {
            name: Some(String::new()),
            ..Default::default()
        };
        assert_matches!(payload.check(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn product_is_built_with_given_id() {
        let payload: NewProduct = serde_json::from_str(
            r#"{"name":"X","categiries":[{"category_id":"1","name":"けもみみ"}]}"#,
        )
        .unwrap();

        let product = payload.into_product("p-1".into()).unwrap();
        assert_eq!(product.product_id, "p-1");
        assert_eq!(product.name, "X");
        assert_eq!(product.categories.len(), 1);
        assert_eq!(product.model_number, None);
    }

    // -- NewPublicItem -------------------------------------------------------

    #[test]
    fn public_item_defaults_to_remaining() {
        let payload: NewPublicItem = serde_json::from_str(r#"{"name":"X"}"#).unwrap();
        assert!(payload.is_remaining);
    }

    #[test]
    fn purchase_date_is_accepted_as_approval_date() {
        let payload: NewPublicItem =
            serde_json::from_str(r#"{"name":"X","purchase_date":"2024-04-01"}"#).unwrap();
        assert_eq!(payload.approval_date.as_deref(), Some("2024-04-01"));
    }

    #[test]
    fn negative_cost_is_rejected() {
        let payload = NewPublicItem {
            cost: Some(-1.0),
            ..named("X")
        };
        assert_matches!(payload.check(), Err(CoreError::Validation(msg)) if msg.contains("cost"));
    }

    #[test]
    fn zero_cost_is_accepted() {
        let payload = NewPublicItem {
            cost: Some(0.0),
            ..named("X")
        };
        assert!(payload.check().is_ok());
    }

    #[test]
    fn malformed_date_is_rejected() {
        let payload = NewPublicItem {
            expiration_date: Some("2024/04/01".into()),
            ..named("X")
        };
        assert_matches!(
            payload.check(),
            Err(CoreError::Validation(msg)) if msg.starts_with("expiration_date")
        );
    }

    #[test]
    fn product_reference_and_inline_product_are_exclusive() {
        let payload = NewPublicItem {
            product_id: Some("1".into()),
            product: Some(NewProduct {
                name: Some("P".into()),
                ..Default::default()
            }),
            ..named("X")
        };
        assert_matches!(payload.check(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn inline_product_is_validated() {
        let payload = NewPublicItem {
            product: Some(NewProduct::default()),
            ..named("X")
        };
        assert_matches!(
            payload.check(),
            Err(CoreError::Validation(msg)) if msg == "product: name is required"
        );
    }

    #[test]
    fn missing_name_and_negative_cost_report_both() {
        let payload = NewPublicItem {
            cost: Some(-5.0),
            ..Default::default()
        };
        assert_matches!(
            payload.check(),
            Err(CoreError::Validation(msg))
                if msg == "cost must not be negative; name is required"
        );
    }

    #[test]
    fn public_item_takes_resolved_references() {
        let refs = ResolvedRefs {
            category: Some(Category {
                category_id: "1".into(),
                name: "けもみみ".into(),
                remarks: None,
            }),
            main_user: Some(User::new("1", "KEMO")),
            product_id: Some("1".into()),
        };

        let item = named("ねこみみ").into_public_item("i-1".into(), refs).unwrap();
        assert_eq!(item.public_item_id, "i-1");
        assert_eq!(item.category_id(), Some("1"));
        assert_eq!(item.main_user.unwrap().handle_name, "KEMO");
        assert_eq!(item.product_id.as_deref(), Some("1"));
    }
}
