//! Registration form state.
//!
//! A form is an immutable value: every user edit is a [`PublicItemEvent`] or
//! [`ProductEvent`] applied with `apply`, which returns the next state.
//! Validation and payload construction are pure functions of the state, so
//! they can be exercised without any UI.

mod product;
mod public_item;

use std::collections::BTreeMap;

pub use product::{ProductEvent, ProductForm};
pub use public_item::{PublicItemEvent, PublicItemForm};

/// Form fields that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Cost,
    ApprovalDate,
    ExpirationDate,
    ProductUrl,
}

/// Per-field validation messages, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }
}

/// Trim a text input; blank input means "not supplied".
fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
