//! List query pipeline: filter, then search, then sort.
//!
//! The pipeline is a pure function of a collection snapshot and a set of
//! options. None of the stages can fail: unknown filter kinds and sort keys
//! are no-ops, and filters whose parameter is missing match nothing.

pub mod collate;
mod params;
pub mod product;
pub mod public_item;

use std::cmp::Ordering;
use std::fmt;

pub use params::{parse_flag, ListParams};
pub use product::{ProductFilter, ProductSort};
pub use public_item::{PublicItemFilter, PublicItemSort};

// ---------------------------------------------------------------------------
// Parameter names
// ---------------------------------------------------------------------------

/// `filter=category_id` together with `category_id=<id>`.
pub const FILTER_CATEGORY_ID: &str = "category_id";
/// `filter=is_remaining` together with `is_remaining=<bool>`.
pub const FILTER_IS_REMAINING: &str = "is_remaining";

pub const SORT_PRODUCT_ID: &str = "product_id";
pub const SORT_PUBLIC_ITEM_ID: &str = "public_item_id";
pub const SORT_NAME: &str = "name";
pub const SORT_COST: &str = "cost";
pub const SORT_APPROVAL_DATE: &str = "approval_date";

// ---------------------------------------------------------------------------
// Queryable records
// ---------------------------------------------------------------------------

/// A record type the list pipeline knows how to filter, search, and sort.
pub trait Queryable: Clone {
    /// Filter kinds recognised for this record type.
    type Filter: Clone + fmt::Debug + PartialEq;
    /// Sort keys recognised for this record type.
    type SortKey: Copy + fmt::Debug + PartialEq;

    /// Build a filter from the raw parameters. `None` for an absent or
    /// unrecognised `filter` kind.
    fn parse_filter(params: &ListParams) -> Option<Self::Filter>;

    /// Parse a sort key. `None` for an unrecognised key.
    fn parse_sort(key: &str) -> Option<Self::SortKey>;

    fn matches_filter(&self, filter: &Self::Filter) -> bool;

    /// Text fields the search stage looks at. Absent optionals are skipped.
    fn search_targets(&self) -> Vec<&str>;

    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Parsed pipeline options for record type `T`.
pub struct QueryOptions<T: Queryable> {
    pub filter: Option<T::Filter>,
    pub search: Option<String>,
    pub sort: Option<T::SortKey>,
}

impl<T: Queryable> QueryOptions<T> {
    /// Options that pass the collection through unchanged.
    pub fn new() -> Self {
        Self {
            filter: None,
            search: None,
            sort: None,
        }
    }

    pub fn with_filter(mut self, filter: T::Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_sort(mut self, sort: T::SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Interpret raw query-string parameters leniently.
    pub fn from_params(params: &ListParams) -> Self {
        Self {
            filter: T::parse_filter(params),
            search: params.search.clone().filter(|s| !s.is_empty()),
            sort: params.sort.as_deref().and_then(T::parse_sort),
        }
    }
}

impl<T: Queryable> Default for QueryOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Queryable> Clone for QueryOptions<T> {
    fn clone(&self) -> Self {
        Self {
            filter: self.filter.clone(),
            search: self.search.clone(),
            sort: self.sort,
        }
    }
}

impl<T: Queryable> fmt::Debug for QueryOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryOptions")
            .field("filter", &self.filter)
            .field("search", &self.search)
            .field("sort", &self.sort)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Run the full pipeline over a snapshot of `collection`.
pub fn query<T: Queryable>(collection: &[T], options: &QueryOptions<T>) -> Vec<T> {
    let filtered = apply_filter(collection.to_vec(), options.filter.as_ref());
    let searched = apply_search(filtered, options.search.as_deref());
    apply_sort(searched, options.sort)
}

/// Filter stage. `None` keeps every record.
pub fn apply_filter<T: Queryable>(records: Vec<T>, filter: Option<&T::Filter>) -> Vec<T> {
    match filter {
        Some(filter) => records
            .into_iter()
            .filter(|record| record.matches_filter(filter))
            .collect(),
        None => records,
    }
}

/// Search stage: case-insensitive substring match on any search target.
/// `None` or an empty query keeps every record.
pub fn apply_search<T: Queryable>(records: Vec<T>, search: Option<&str>) -> Vec<T> {
    let needle = match search {
        Some(s) if !s.is_empty() => s.to_lowercase(),
        _ => return records,
    };

    records
        .into_iter()
        .filter(|record| {
            record
                .search_targets()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Sort stage: stable ascending sort. `None` keeps input order.
pub fn apply_sort<T: Queryable>(mut records: Vec<T>, sort: Option<T::SortKey>) -> Vec<T> {
    if let Some(key) = sort {
        records.sort_by(|a, b| a.compare_by(b, key));
    }
    records
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
