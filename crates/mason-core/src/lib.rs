//! Mason core services.
//!
//! Framework-free building blocks the storefront UI is wired from:
//!
//! - [`StoreConfig`]: TOML configuration with defaults for every section
//! - [`logging`]: `tracing` subscriber setup for native and browser builds
//! - [`overlay`]: one transient-overlay model for loading screens, skeletons and toasts
//! - [`widget`]: scoped mounting of third-party script widgets
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mason_core::overlay::{OverlaySpec, OverlayState};
//! use mason_core::StoreConfig;
//!
//! let config = StoreConfig::from_toml(include_str!("../store.toml"))?;
//! mason_core::logging::init(&config.logging.level)?;
//!
//! let mut toast = OverlayState::new(OverlaySpec::toast("Added to cart"));
//! if let Some(ticket) = toast.show() {
//!     // schedule `toast.fire(ticket)` after `ticket.delay`
//! }
//! ```

mod config;
mod error;
pub mod logging;
pub mod overlay;
pub mod widget;

pub use config::*;
pub use error::MasonError;
