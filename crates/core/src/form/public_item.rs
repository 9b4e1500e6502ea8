use crate::models::{MainUserRef, Product};
use crate::registration::NewPublicItem;
use crate::types::{is_iso_date, EntityId};

use super::{optional_text, FormErrors, FormField};

/// State of the "new public item" form.
///
/// Text inputs are kept exactly as typed; trimming and parsing happen in
/// [`PublicItemForm::validate`] and [`PublicItemForm::submit`].
#[derive(Debug, Clone, PartialEq)]
pub struct PublicItemForm {
    pub name: String,
    pub cost: String,
    pub approval_date: String,
    pub expiration_date: String,
    pub is_remaining: bool,
    pub remarks: String,
    pub category_id: Option<EntityId>,
    pub main_user: Option<MainUserRef>,
    pub selected_product: Option<Product>,
}

impl Default for PublicItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            cost: String::new(),
            approval_date: String::new(),
            expiration_date: String::new(),
            is_remaining: true,
            remarks: String::new(),
            category_id: None,
            main_user: None,
            selected_product: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PublicItemEvent {
    NameChanged(String),
    CostChanged(String),
    ApprovalDateChanged(String),
    ExpirationDateChanged(String),
    RemainingToggled(bool),
    RemarksChanged(String),
    CategorySelected(Option<EntityId>),
    MainUserSelected(Option<MainUserRef>),
    ProductSelected(Option<Product>),
    Reset,
}

impl PublicItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(self, event: PublicItemEvent) -> Self {
        match event {
            PublicItemEvent::NameChanged(name) => Self { name, ..self },
            PublicItemEvent::CostChanged(cost) => Self { cost, ..self },
            PublicItemEvent::ApprovalDateChanged(approval_date) => Self {
                approval_date,
                ..self
            },
            PublicItemEvent::ExpirationDateChanged(expiration_date) => Self {
                expiration_date,
                ..self
            },
            PublicItemEvent::RemainingToggled(is_remaining) => Self {
                is_remaining,
                ..self
            },
            PublicItemEvent::RemarksChanged(remarks) => Self { remarks, ..self },
            PublicItemEvent::CategorySelected(category_id) => Self {
                category_id,
                ..self
            },
            PublicItemEvent::MainUserSelected(main_user) => Self { main_user, ..self },
            PublicItemEvent::ProductSelected(selected_product) => Self {
                selected_product,
                ..self
            },
            PublicItemEvent::Reset => Self::default(),
        }
    }

    /// Select a product from the loaded product list by id. An empty or
    /// unknown id clears the selection.
    pub fn select_product(self, product_id: &str, products: &[Product]) -> Self {
        let selected = products
            .iter()
            .find(|product| product.product_id == product_id)
            .cloned();
        self.apply(PublicItemEvent::ProductSelected(selected))
    }

    fn parsed_cost(&self) -> Result<Option<f64>, &'static str> {
        let raw = self.cost.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<f64>() {
            Ok(cost) if cost.is_finite() && cost >= 0.0 => Ok(Some(cost)),
            Ok(_) => Err("購入コストは0以上の数値で入力してください。"),
            Err(_) => Err("購入コストは数値で入力してください。"),
        }
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(FormField::Name, "備品名は必須です。");
        }

        if let Err(message) = self.parsed_cost() {
            errors.insert(FormField::Cost, message);
        }

        let approval = optional_text(&self.approval_date);
        let expiration = optional_text(&self.expiration_date);

        if let Some(date) = &approval {
            if !is_iso_date(date) {
                errors.insert(FormField::ApprovalDate, "承認日の形式が正しくありません。");
            }
        }
        if let Some(date) = &expiration {
            if !is_iso_date(date) {
                errors.insert(FormField::ExpirationDate, "耐用期限の形式が正しくありません。");
            }
        }

        // Both dates are ISO, so lexical order is chronological.
        if let (Some(approval), Some(expiration)) = (&approval, &expiration) {
            if is_iso_date(approval) && is_iso_date(expiration) && expiration < approval {
                errors.insert(
                    FormField::ExpirationDate,
                    "耐用期限は承認日以降の日付にしてください。",
                );
            }
        }

        errors
    }

    /// Build the registration payload, or return the validation errors.
    pub fn submit(&self) -> Result<NewPublicItem, FormErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewPublicItem {
            name: Some(self.name.trim().to_string()),
            is_remaining: self.is_remaining,
            category_id: self.category_id.clone(),
            cost: self.parsed_cost().ok().flatten(),
            approval_date: optional_text(&self.approval_date),
            expiration_date: optional_text(&self.expiration_date),
            main_user: self.main_user.clone(),
            remarks: optional_text(&self.remarks),
            product_id: self
                .selected_product
                .as_ref()
                .map(|product| product.product_id.clone()),
            product: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Product> {
        vec![Product {
            product_id: "1".into(),
            name: "けもみみ".into(),
            model_number: Some("KM-001".into()),
            product_url: None,
            categories: Vec::new(),
            main_users: Vec::new(),
            remarks: None,
        }]
    }

    fn filled() -> PublicItemForm {
        PublicItemForm::new()
            .apply(PublicItemEvent::NameChanged("  ねこみみ  ".into()))
            .apply(PublicItemEvent::CostChanged("1200".into()))
            .apply(PublicItemEvent::ApprovalDateChanged("2024-04-01".into()))
    }

    #[test]
    fn new_form_defaults_to_remaining() {
        assert!(PublicItemForm::new().is_remaining);
    }

    #[test]
    fn apply_does_not_touch_other_fields() {
        let form = filled().apply(PublicItemEvent::RemarksChanged("予備".into()));
        assert_eq!(form.cost, "1200");
        assert_eq!(form.remarks, "予備");
    }

    #[test]
    fn blank_name_is_an_error() {
        let form = PublicItemForm::new().apply(PublicItemEvent::NameChanged("   ".into()));
        let errors = form.validate();
        assert_eq!(errors.get(FormField::Name), Some("備品名は必須です。"));
    }

    #[test]
    fn non_numeric_and_negative_costs_are_errors() {
        let text = filled().apply(PublicItemEvent::CostChanged("abc".into()));
        assert!(text.validate().get(FormField::Cost).is_some());

        let negative = filled().apply(PublicItemEvent::CostChanged("-3".into()));
        assert!(negative.validate().get(FormField::Cost).is_some());
    }

    #[test]
    fn expiration_before_approval_is_an_error() {
        let form = filled().apply(PublicItemEvent::ExpirationDateChanged("2020-01-01".into()));
        assert!(form.validate().get(FormField::ExpirationDate).is_some());
    }

    #[test]
    fn submit_trims_and_drops_blank_fields() {
        let payload = filled()
            .apply(PublicItemEvent::RemarksChanged("   ".into()))
            .submit()
            .unwrap();

        assert_eq!(payload.name.as_deref(), Some("ねこみみ"));
        assert_eq!(payload.cost, Some(1200.0));
        assert_eq!(payload.approval_date.as_deref(), Some("2024-04-01"));
        assert_eq!(payload.expiration_date, None);
        assert_eq!(payload.remarks, None);
        assert!(payload.is_remaining);
    }

    #[test]
    fn submit_returns_errors_instead_of_payload() {
        let errors = PublicItemForm::new().submit().unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn selecting_a_product_sets_product_id() {
        let form = filled().select_product("1", &products());
        assert_eq!(form.selected_product.as_ref().unwrap().name, "けもみみ");
        assert_eq!(form.submit().unwrap().product_id.as_deref(), Some("1"));
    }

    #[test]
    fn selecting_an_unknown_product_clears_selection() {
        let form = filled()
            .select_product("1", &products())
            .select_product("", &products());
        assert_eq!(form.selected_product, None);
    }

    #[test]
    fn reset_returns_to_defaults() {
        let form = filled()
            .apply(PublicItemEvent::RemainingToggled(false))
            .apply(PublicItemEvent::Reset);
        assert_eq!(form, PublicItemForm::default());
    }

    #[test]
    fn submitted_payload_passes_server_validation() {
        let payload = filled().submit().unwrap();
        assert!(payload.check().is_ok());
    }
}
