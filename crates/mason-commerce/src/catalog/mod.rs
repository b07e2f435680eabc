//! Catalog module.
//!
//! Selectable entries for the booking screens and the products shown on
//! category and detail pages.

mod entry;
mod product;

pub use entry::CatalogEntry;
pub(crate) use entry::find_in;
pub use product::Product;
