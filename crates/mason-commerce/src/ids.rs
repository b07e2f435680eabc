//! Identifier newtypes.
//!
//! Keeps a catalog entry id from being passed where an order id is expected.
//! Ids arriving from query strings or user input go through `parse`, which
//! trims and rejects blanks; `new` is for ids the shop itself defines.

use crate::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! shop_id {
    ($name:ident, $label:literal) => {
        #[doc = concat!("Identifier of ", $label, ".")]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Parse an untrusted id, trimming whitespace.
            pub fn parse(id: &str) -> Result<Self, CommerceError> {
                let id = id.trim();
                if id.is_empty() {
                    return Err(CommerceError::ValidationError(format!(
                        "{} must not be blank",
                        $label
                    )));
                }
                Ok(Self(id.to_string()))
            }

            /// Whether the id is empty or whitespace.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Catalog entries cover categories, subcategories and bookable services.
shop_id!(EntryId, "a catalog entry");
shop_id!(ProductId, "a product");
shop_id!(OrderId, "an order");
