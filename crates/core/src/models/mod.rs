//! Record schema for the inventory collections.
//!
//! Optional fields are omitted from JSON when absent so records round-trip
//! without gaining `null` or empty-string values. The one exception is
//! [`User::graduation_date`], where `null` means "not yet graduated".

pub mod category;
pub mod product;
pub mod public_item;
pub mod user;

pub use category::Category;
pub use product::Product;
pub use public_item::PublicItem;
pub use user::{MainUserRef, User};

/// A record that lives in an identifier-keyed collection.
pub trait Record: Clone + Send + Sync + 'static {
    /// Human-readable entity name used in error messages.
    const ENTITY: &'static str;

    /// The record's unique identifier within its collection.
    fn id(&self) -> &str;
}
