//! Storefront domain types for the Mason building-materials store.
//!
//! This crate holds the framework-free parts of the storefront:
//!
//! - **Catalog**: selectable entries (categories, subcategories, services) and products
//! - **Booking**: the multi-step service-booking flow
//! - **Checkout**: cached order summaries, order tracking, payment return handling
//!
//! # Example
//!
//! ```rust,ignore
//! use mason_commerce::{BookingFlow, BookingStep, EntryId};
//!
//! let mut flow = BookingFlow::new(catalog);
//! flow.select(&EntryId::new("flooring"))?;
//! flow.select(&EntryId::new("hardwood"))?;
//! flow.select(&EntryId::new("installation"))?;
//!
//! assert_eq!(flow.step(), BookingStep::Review);
//! let path = flow.booking_path()?;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod booking;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

pub use booking::{BookingDraft, BookingFlow, BookingSelection, BookingStep};
pub use catalog::{CatalogEntry, Product};
pub use checkout::{OrderSummary, PaymentReturnParams, PaymentStatus};

