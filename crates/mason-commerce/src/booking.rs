//! Service-booking flow state machine.
//!
//! A booking walks category -> subcategory -> service and ends on a review
//! step. Categories whose children are all leaves list services directly
//! and skip the subcategory step. A leaf category is itself the service.

use crate::catalog::{find_in, CatalogEntry};
use crate::ids::EntryId;
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Route that receives a completed booking selection.
pub const BOOKING_ORDER_PATH: &str = "/booking-order";

/// Steps in the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStep {
    /// Choose a top-level category.
    Category,
    /// Choose a subcategory.
    Subcategory,
    /// Choose a service.
    Service,
    /// Selection complete.
    Review,
}

impl BookingStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStep::Category => "category",
            BookingStep::Subcategory => "subcategory",
            BookingStep::Service => "service",
            BookingStep::Review => "review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BookingStep::Category => "Choose a category",
            BookingStep::Subcategory => "Choose a type",
            BookingStep::Service => "Choose a service",
            BookingStep::Review => "Review your booking",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            BookingStep::Category => 1,
            BookingStep::Subcategory => 2,
            BookingStep::Service => 3,
            BookingStep::Review => 4,
        }
    }
}

/// A completed booking selection, as carried in the booking-order query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSelection {
    pub category: EntryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<EntryId>,
    pub service: EntryId,
}

/// Display names for a booking selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    pub category: String,
    pub subcategory: Option<String>,
    pub service: String,
}

impl BookingSelection {
    /// Path of the booking-order page for this selection, values URL-encoded.
    pub fn path(&self) -> Result<String, CommerceError> {
        let query = serde_urlencoded::to_string(self)?;
        Ok(format!("{}?{}", BOOKING_ORDER_PATH, query))
    }

    /// Parse a selection from a query string (leading `?` optional).
    ///
    /// Blank category or service ids are rejected; a blank subcategory
    /// counts as absent.
    pub fn from_query(query: &str) -> Result<Self, CommerceError> {
        let raw: Self = serde_urlencoded::from_str(query.trim_start_matches('?'))
            .map_err(|e| CommerceError::ValidationError(e.to_string()))?;
        Ok(Self {
            category: EntryId::parse(raw.category.as_str())?,
            subcategory: raw
                .subcategory
                .and_then(|id| EntryId::parse(id.as_str()).ok()),
            service: EntryId::parse(raw.service.as_str())?,
        })
    }

    /// Look up display names in the catalog.
    ///
    /// Returns `None` if any selected id is no longer in the catalog.
    pub fn describe(&self, catalog: &[CatalogEntry]) -> Option<BookingSummary> {
        let category = find_in(catalog, &self.category)?;
        let subcategory = match &self.subcategory {
            Some(id) => Some(category.find(id)?.name.clone()),
            None => None,
        };
        let service = category.find(&self.service)?;
        Some(BookingSummary {
            category: category.name.clone(),
            subcategory,
            service: service.name.clone(),
        })
    }
}

/// Choices made so far in a booking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub category: Option<EntryId>,
    pub subcategory: Option<EntryId>,
    pub service: Option<EntryId>,
}

/// Booking flow state.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingFlow {
    catalog: Vec<CatalogEntry>,
    draft: BookingDraft,
}

impl BookingFlow {
    /// Start a booking over the given top-level categories.
    pub fn new(catalog: Vec<CatalogEntry>) -> Self {
        Self {
            catalog,
            draft: BookingDraft::default(),
        }
    }

    fn category_entry(&self) -> Option<&CatalogEntry> {
        let id = self.draft.category.as_ref()?;
        self.catalog.iter().find(|e| &e.id == id)
    }

    fn subcategory_entry(&self) -> Option<&CatalogEntry> {
        let id = self.draft.subcategory.as_ref()?;
        self.category_entry()?.child(id)
    }

    fn skips_subcategory(&self) -> bool {
        self.category_entry()
            .map(|c| c.is_leaf() || c.has_only_leaf_children())
            .unwrap_or(false)
    }

    /// Current step.
    pub fn step(&self) -> BookingStep {
        if self.category_entry().is_none() {
            BookingStep::Category
        } else if !self.skips_subcategory() && self.subcategory_entry().is_none() {
            BookingStep::Subcategory
        } else if self.draft.service.is_none() {
            BookingStep::Service
        } else {
            BookingStep::Review
        }
    }

    /// Entries selectable at the current step.
    pub fn entries(&self) -> &[CatalogEntry] {
        match self.step() {
            BookingStep::Category => &self.catalog,
            BookingStep::Subcategory => self
                .category_entry()
                .map(|c| c.children.as_slice())
                .unwrap_or_default(),
            BookingStep::Service => {
                let parent = if self.skips_subcategory() {
                    self.category_entry()
                } else {
                    self.subcategory_entry()
                };
                parent.map(|p| p.children.as_slice()).unwrap_or_default()
            }
            BookingStep::Review => &[],
        }
    }

    /// Select an entry at the current step and advance.
    pub fn select(&mut self, id: &EntryId) -> Result<BookingStep, CommerceError> {
        let step = self.step();
        let entry = self
            .entries()
            .iter()
            .find(|e| &e.id == id)
            .ok_or_else(|| CommerceError::UnknownEntry(id.to_string()))?;
        let leaf = entry.is_leaf();

        match step {
            BookingStep::Category => {
                self.draft.category = Some(id.clone());
                if leaf {
                    self.draft.service = Some(id.clone());
                }
            }
            BookingStep::Subcategory => {
                self.draft.subcategory = Some(id.clone());
                if leaf {
                    self.draft.service = Some(id.clone());
                }
            }
            BookingStep::Service => self.draft.service = Some(id.clone()),
            BookingStep::Review => return Err(CommerceError::UnknownEntry(id.to_string())),
        }

        Ok(self.step())
    }

    /// Step back one level, clearing the latest choice.
    ///
    /// Returns `false` when already at the first step.
    pub fn back(&mut self) -> bool {
        match self.step() {
            BookingStep::Category => return false,
            BookingStep::Subcategory => self.draft.category = None,
            BookingStep::Service => {
                if self.skips_subcategory() {
                    self.draft.category = None;
                } else {
                    self.draft.subcategory = None;
                }
            }
            BookingStep::Review => {
                self.draft.service = None;
                if self.category_entry().map(CatalogEntry::is_leaf).unwrap_or(false) {
                    self.draft.category = None;
                } else if self.subcategory_entry().map(CatalogEntry::is_leaf).unwrap_or(false) {
                    self.draft.subcategory = None;
                }
            }
        }
        true
    }

    /// Clear every choice.
    pub fn reset(&mut self) {
        self.draft = BookingDraft::default();
    }

    /// Choices made so far.
    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// The completed selection, once the flow reaches review.
    pub fn selection(&self) -> Option<BookingSelection> {
        if self.step() != BookingStep::Review {
            return None;
        }
        Some(BookingSelection {
            category: self.draft.category.clone()?,
            subcategory: self.draft.subcategory.clone(),
            service: self.draft.service.clone()?,
        })
    }

    /// Path of the booking-order page for the completed selection.
    pub fn booking_path(&self) -> Result<String, CommerceError> {
        self.selection()
            .ok_or_else(|| CommerceError::BookingIncomplete(self.step().as_str().to_string()))?
            .path()
    }

    /// Top-level categories.
    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }
}
