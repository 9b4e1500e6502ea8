use crate::models::{Category, User};
use crate::registration::NewProduct;

use super::{optional_text, FormErrors, FormField};

/// State of the "new product" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub model_number: String,
    pub product_url: String,
    pub remarks: String,
    pub categories: Vec<Category>,
    pub main_users: Vec<User>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductEvent {
    NameChanged(String),
    ModelNumberChanged(String),
    ProductUrlChanged(String),
    RemarksChanged(String),
    /// Add the category, or remove it if it is already selected.
    CategoryToggled(Category),
    /// Add the user, or remove them if they are already selected.
    MainUserToggled(User),
    Reset,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(self, event: ProductEvent) -> Self {
        match event {
            ProductEvent::NameChanged(name) => Self { name, ..self },
            ProductEvent::ModelNumberChanged(model_number) => Self {
                model_number,
                ..self
            },
            ProductEvent::ProductUrlChanged(product_url) => Self {
                product_url,
                ..self
            },
            ProductEvent::RemarksChanged(remarks) => Self { remarks, ..self },
            ProductEvent::CategoryToggled(category) => {
                let mut categories = self.categories;
                match categories
                    .iter()
                    .position(|c| c.category_id == category.category_id)
                {
                    Some(index) => {
                        categories.remove(index);
                    }
                    None => categories.push(category),
                }
                Self { categories, ..self }
            }
            ProductEvent::MainUserToggled(user) => {
                let mut main_users = self.main_users;
                match main_users.iter().position(|u| u.user_id == user.user_id) {
                    Some(index) => {
                        main_users.remove(index);
                    }
                    None => main_users.push(user),
                }
                Self { main_users, ..self }
            }
            ProductEvent::Reset => Self::default(),
        }
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(FormField::Name, "製品名は必須です。");
        }

        if let Some(url) = optional_text(&self.product_url) {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                errors.insert(FormField::ProductUrl, "URLはhttp(s)で始めてください。");
            }
        }

        errors
    }

    pub fn submit(&self) -> Result<NewProduct, FormErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewProduct {
            name: Some(self.name.trim().to_string()),
            model_number: optional_text(&self.model_number),
            product_url: optional_text(&self.product_url),
            categories: self.categories.clone(),
            main_users: self.main_users.clone(),
            remarks: optional_text(&self.remarks),
        })
    }
}
