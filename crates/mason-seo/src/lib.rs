//! Document metadata for Mason pages.
//!
//! Pages describe themselves with a [`PageMeta`]; resolving it against the
//! [`SiteDefaults`] yields the title, social tags and schema.org JSON-LD a
//! document head renders.
//!
//! Structured data is only emitted for input that validates. A product with
//! a blank name or sku, or a negative price, produces no `Product` block.

mod error;
mod meta;
mod site;
pub mod structured;

pub use error::SeoError;
pub use meta::{ContentType, MetaAttr, MetaTag, PageMeta, ResolvedMeta};
pub use site::SiteDefaults;
pub use structured::{Breadcrumb, ProductSummary};
