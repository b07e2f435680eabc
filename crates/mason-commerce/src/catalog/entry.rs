//! Selectable catalog entries.
//!
//! One shape covers every selection screen: top-level categories, their
//! subcategories, and the bookable services beneath them.

use crate::ids::EntryId;
use serde::{Deserialize, Serialize};

/// An entry in the selection hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Unique entry identifier.
    pub id: EntryId,
    /// Display name.
    pub name: String,
    /// Short description shown on the card.
    #[serde(default)]
    pub description: String,
    /// Card image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Nested entries (subcategories or services).
    #[serde(default)]
    pub children: Vec<CatalogEntry>,
}

impl CatalogEntry {
    /// Create a leaf entry.
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            image: None,
            children: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the card image.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the nested entries.
    pub fn with_children(mut self, children: Vec<CatalogEntry>) -> Self {
        self.children = children;
        self
    }

    /// Check if this entry has no nested entries.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Check if every child is itself a leaf.
    ///
    /// A category like this lists services directly, with no subcategory level.
    pub fn has_only_leaf_children(&self) -> bool {
        !self.children.is_empty() && self.children.iter().all(CatalogEntry::is_leaf)
    }

    /// Find a direct child by id.
    pub fn child(&self, id: &EntryId) -> Option<&CatalogEntry> {
        self.children.iter().find(|c| &c.id == id)
    }

    /// Find an entry anywhere below this one (depth-first).
    pub fn find(&self, id: &EntryId) -> Option<&CatalogEntry> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }
}

/// Find an entry in a list of roots.
pub(crate) fn find_in<'a>(roots: &'a [CatalogEntry], id: &EntryId) -> Option<&'a CatalogEntry> {
    roots.iter().find_map(|r| r.find(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flooring() -> CatalogEntry {
        CatalogEntry::new("flooring", "Flooring").with_children(vec![
            CatalogEntry::new("hardwood", "Hardwood")
                .with_children(vec![CatalogEntry::new("hardwood-install", "Installation")]),
            CatalogEntry::new("vinyl", "Vinyl"),
        ])
    }

    #[test]
    fn test_leaf_entry() {
        let entry = CatalogEntry::new("measure", "Measurement")
            .with_description("On-site measurement")
            .with_image("/img/measure.jpg");

        assert!(entry.is_leaf());
        assert_eq!(entry.image.as_deref(), Some("/img/measure.jpg"));
        assert!(!entry.has_only_leaf_children());
    }

    #[test]
    fn test_find_nested() {
        let root = flooring();
        let found = root.find(&EntryId::new("hardwood-install")).unwrap();
        assert_eq!(found.name, "Installation");
        assert!(root.find(&EntryId::new("paint")).is_none());
    }

    #[test]
    fn test_child_lookup_is_direct_only() {
        let root = flooring();
        assert!(root.child(&EntryId::new("vinyl")).is_some());
        assert!(root.child(&EntryId::new("hardwood-install")).is_none());
    }

    #[test]
    fn test_only_leaf_children() {
        let painting = CatalogEntry::new("painting", "Painting").with_children(vec![
            CatalogEntry::new("interior", "Interior"),
            CatalogEntry::new("exterior", "Exterior"),
        ]);
        assert!(painting.has_only_leaf_children());
        assert!(!flooring().has_only_leaf_children());
    }

    #[test]
    fn test_deserialize_defaults() {
        let entry: CatalogEntry =
            serde_json::from_str(r#"{"id":"tiles","name":"Tiles"}"#).unwrap();
        assert!(entry.is_leaf());
        assert!(entry.description.is_empty());
    }
}
