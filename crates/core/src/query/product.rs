//! Pipeline rules for [`Product`] records.

use std::cmp::Ordering;

use crate::models::Product;

use super::collate::locale_cmp;
use super::{ListParams, Queryable, FILTER_CATEGORY_ID, SORT_NAME, SORT_PRODUCT_ID};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    /// Keep products with a category of this id. `None` matches nothing.
    CategoryId(Option<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    ProductId,
    Name,
}

impl ProductSort {
    /// Parse a sort key, returning `None` for unknown keys.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            SORT_PRODUCT_ID => Some(Self::ProductId),
            SORT_NAME => Some(Self::Name),
            _ => None,
        }
    }
}

impl Queryable for Product {
    type Filter = ProductFilter;
    type SortKey = ProductSort;

    fn parse_filter(params: &ListParams) -> Option<ProductFilter> {
        match params.filter.as_deref()? {
            FILTER_CATEGORY_ID => Some(ProductFilter::CategoryId(params.category_id.clone())),
            _ => None,
        }
    }

    fn parse_sort(key: &str) -> Option<ProductSort> {
        ProductSort::parse(key)
    }

    fn matches_filter(&self, filter: &ProductFilter) -> bool {
        match filter {
            ProductFilter::CategoryId(Some(id)) => self.has_category(id),
            ProductFilter::CategoryId(None) => false,
        }
    }

    fn search_targets(&self) -> Vec<&str> {
        [Some(self.name.as_str()), self.model_number.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn compare_by(&self, other: &Self, key: ProductSort) -> Ordering {
        match key {
            ProductSort::ProductId => locale_cmp(&self.product_id, &other.product_id),
            ProductSort::Name => locale_cmp(&self.name, &other.name),
        }
    }
}
