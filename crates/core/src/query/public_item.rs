//! Pipeline rules for [`PublicItem`] records.

use std::cmp::Ordering;

use crate::models::PublicItem;

use super::collate::{absent_last, locale_cmp, numeric_cmp};
use super::{
    ListParams, Queryable, FILTER_CATEGORY_ID, FILTER_IS_REMAINING, SORT_APPROVAL_DATE,
    SORT_COST, SORT_NAME, SORT_PUBLIC_ITEM_ID,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicItemFilter {
    /// Keep items whose `is_remaining` equals this value. `None` (missing or
    /// unparseable parameter) matches nothing.
    IsRemaining(Option<bool>),
    /// Keep items whose category has this id. `None` matches nothing.
    CategoryId(Option<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicItemSort {
    PublicItemId,
    Name,
    Cost,
    ApprovalDate,
}

impl PublicItemSort {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            SORT_PUBLIC_ITEM_ID => Some(Self::PublicItemId),
            SORT_NAME => Some(Self::Name),
            SORT_COST => Some(Self::Cost),
            SORT_APPROVAL_DATE => Some(Self::ApprovalDate),
            _ => None,
        }
    }
}

impl Queryable for PublicItem {
    type Filter = PublicItemFilter;
    type SortKey = PublicItemSort;

    fn parse_filter(params: &ListParams) -> Option<PublicItemFilter> {
        match params.filter.as_deref()? {
            FILTER_IS_REMAINING => Some(PublicItemFilter::IsRemaining(params.is_remaining_flag())),
            FILTER_CATEGORY_ID => Some(PublicItemFilter::CategoryId(params.category_id.clone())),
            _ => None,
        }
    }

    fn parse_sort(key: &str) -> Option<PublicItemSort> {
        PublicItemSort::parse(key)
    }

    fn matches_filter(&self, filter: &PublicItemFilter) -> bool {
        match filter {
            PublicItemFilter::IsRemaining(Some(wanted)) => self.is_remaining == *wanted,
            PublicItemFilter::CategoryId(Some(id)) => self.category_id() == Some(id.as_str()),
            PublicItemFilter::IsRemaining(None) | PublicItemFilter::CategoryId(None) => false,
        }
    }

    fn search_targets(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn compare_by(&self, other: &Self, key: PublicItemSort) -> Ordering {
        match key {
            PublicItemSort::PublicItemId => {
                locale_cmp(&self.public_item_id, &other.public_item_id)
            }
            PublicItemSort::Name => locale_cmp(&self.name, &other.name),
            PublicItemSort::Cost => absent_last(self.cost, other.cost, numeric_cmp),
            // ISO dates order lexically.
            PublicItemSort::ApprovalDate => absent_last(
                self.approval_date.as_deref(),
                other.approval_date.as_deref(),
                |a, b| a.cmp(b),
            ),
        }
    }
}
