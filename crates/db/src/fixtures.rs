//! Seed records loaded at startup when `SEED_FIXTURES` is enabled.

use kemomimi_core::models::{Category, Product, PublicItem, User};

pub fn categories() -> Vec<Category> {
    vec![
        Category {
            category_id: "1".into(),
            name: "けもみみ".into(),
            remarks: Some("かわいい".into()),
        },
        Category {
            category_id: "2".into(),
            name: "PC周辺機器".into(),
            remarks: None,
        },
        Category {
            category_id: "3".into(),
            name: "家具".into(),
            remarks: None,
        },
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            user_id: "1".into(),
            handle_name: "KEMO".into(),
            screen_name: Some("ahokusa".into()),
            slack_id: Some("U123456".into()),
            is_admin: false,
            is_member: true,
            graduation_date: None,
            remarks: Some("けもみみ".into()),
        },
        User {
            user_id: "2".into(),
            handle_name: "NEKO".into(),
            screen_name: Some("nekomata".into()),
            slack_id: None,
            is_admin: true,
            is_member: true,
            graduation_date: Some("2025-03-31".into()),
            remarks: None,
        },
    ]
}

pub fn products() -> Vec<Product> {
    let categories = categories();
    let users = users();

    vec![
        Product {
            product_id: "1".into(),
            name: "けもみみ".into(),
            model_number: Some("KM-001".into()),
            product_url: Some("https://ahokusa.com/kmm-001".into()),
            categories: categories[..1].to_vec(),
            main_users: users[..1].to_vec(),
            remarks: Some("けもみみ".into()),
        },
        Product {
            product_id: "2".into(),
            name: "27インチモニター".into(),
            model_number: Some("MON-27".into()),
            product_url: None,
            categories: categories[1..2].to_vec(),
            main_users: Vec::new(),
            remarks: None,
        },
    ]
}

pub fn public_items() -> Vec<PublicItem> {
    let categories = categories();
    let users = users();

    vec![
        PublicItem {
            public_item_id: "1".into(),
            name: "けもみみ".into(),
            is_remaining: true,
            category: categories.first().cloned(),
            cost: Some(1200.0),
            approval_date: Some("2024-04-01".into()),
            expiration_date: Some("2029-03-31".into()),
            main_user: users.first().cloned(),
            remarks: Some("KMM-001 の予備".into()),
            product_id: Some("1".into()),
        },
        PublicItem {
            public_item_id: "2".into(),
            name: "モニター".into(),
            is_remaining: true,
            category: categories.get(1).cloned(),
            cost: Some(25000.0),
            approval_date: Some("2023-10-01".into()),
            expiration_date: None,
            main_user: users.get(1).cloned(),
            remarks: None,
            product_id: Some("2".into()),
        },
        PublicItem {
            public_item_id: "3".into(),
            name: "会議机".into(),
            is_remaining: false,
            category: categories.get(2).cloned(),
            cost: Some(18000.0),
            approval_date: Some("2019-05-20".into()),
            expiration_date: Some("2024-05-19".into()),
            main_user: None,
            remarks: Some("廃棄済み".into()),
            product_id: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use kemomimi_core::models::Record;

    fn unique<T: Record>(records: &[T]) -> bool {
        let ids: HashSet<&str> = records.iter().map(Record::id).collect();
        ids.len() == records.len()
    }

    #[test]
    fn fixture_ids_are_unique() {
        assert!(unique(&categories()));
        assert!(unique(&users()));
        assert!(unique(&products()));
        assert!(unique(&public_items()));
    }

    #[test]
    fn fixture_references_exist() {
        let category_ids: HashSet<String> =
            categories().into_iter().map(|c| c.category_id).collect();
        let product_ids: HashSet<String> = products().into_iter().map(|p| p.product_id).collect();

        for item in public_items() {
            if let Some(id) = item.category_id() {
                assert!(category_ids.contains(id));
            }
            if let Some(id) = &item.product_id {
                assert!(product_ids.contains(id));
            }
        }
    }
}
