//! Service catalog database.
//!
//! This module provides access to the embedded catalog of tabs, sections, and
//! items. The catalog is compiled into the binary, parsed once, and read-only
//! for the lifetime of the process.

use crate::models::{Category, Item, Tab};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Embedded catalog definitions
const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Errors raised by catalog construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A tab index outside `0..len` was requested
    #[error("tab index {index} out of range (catalog has {len} tabs)")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of tabs
        len: usize,
    },
    /// Catalog content violates a structural rule
    #[error("invalid catalog: {0}")]
    Invalid(String),
    /// Catalog content could not be parsed
    #[error("failed to parse catalog: {0}")]
    Parse(String),
}

/// Database schema from catalog.json.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    version: String,
    tabs: Vec<Tab>,
}

/// Location of an item inside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ItemLocation {
    /// Tab index
    pub tab: usize,
    /// Section index within the tab's category
    pub section: usize,
    /// Item index within the section
    pub item: usize,
}

/// Read-only catalog of tabs with O(1) lookup by tab index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    version: String,
    tabs: Vec<Tab>,
}

impl Catalog {
    /// Loads the catalog from the embedded JSON file.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    /// Parses and validates catalog content.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_tabs(file.version, file.tabs)
    }

    /// Builds a catalog from already-constructed tabs.
    ///
    /// # Validation
    ///
    /// - At least one tab
    /// - Tab indices are dense and zero-based, in order
    /// - Every section has at least one item
    /// - Power levels are within `0..=100`
    pub fn from_tabs(version: impl Into<String>, tabs: Vec<Tab>) -> Result<Self, CatalogError> {
        if tabs.is_empty() {
            return Err(CatalogError::Invalid("catalog has no tabs".to_string()));
        }

        for (position, tab) in tabs.iter().enumerate() {
            if tab.index != position {
                return Err(CatalogError::Invalid(format!(
                    "tab '{}' has index {} but appears at position {position}",
                    tab.title, tab.index
                )));
            }

            for section in &tab.content.sections {
                if section.items.is_empty() {
                    return Err(CatalogError::Invalid(format!(
                        "section '{}' in tab '{}' has no items",
                        section.title, tab.title
                    )));
                }

                if let Some(item) = section
                    .items
                    .iter()
                    .find(|item| item.power_level.is_some_and(|p| p > 100))
                {
                    return Err(CatalogError::Invalid(format!(
                        "item '{}' has power level above 100",
                        item.title
                    )));
                }
            }
        }

        Ok(Self {
            version: version.into(),
            tabs,
        })
    }

    /// Process-wide catalog built from the embedded file on first use.
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<Catalog> = OnceLock::new();
        SHARED.get_or_init(Self::default)
    }

    /// Catalog content version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// All tabs in display order.
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Number of tabs.
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Gets a tab by index.
    pub fn tab(&self, index: usize) -> Result<&Tab, CatalogError> {
        self.tabs.get(index).ok_or(CatalogError::IndexOutOfRange {
            index,
            len: self.tabs.len(),
        })
    }

    /// Gets the category shown for a tab index.
    pub fn category(&self, index: usize) -> Result<&Category, CatalogError> {
        self.tab(index).map(|tab| &tab.content)
    }

    /// Iterates over every item with its location, in document order.
    pub fn items(&self) -> impl Iterator<Item = (ItemLocation, &Item)> + '_ {
        self.tabs.iter().flat_map(|tab| {
            tab.content
                .sections
                .iter()
                .enumerate()
                .flat_map(move |(section_idx, section)| {
                    section.items.iter().enumerate().map(move |(item_idx, item)| {
                        (
                            ItemLocation {
                                tab: tab.index,
                                section: section_idx,
                                item: item_idx,
                            },
                            item,
                        )
                    })
                })
        })
    }

    /// Gets the item at a location.
    #[must_use]
    pub fn item_at(&self, location: ItemLocation) -> Option<&Item> {
        self.tabs
            .get(location.tab)?
            .content
            .sections
            .get(location.section)?
            .items
            .get(location.item)
    }

    /// Finds an item by its id.
    #[must_use]
    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.items()
            .map(|(_, item)| item)
            .find(|item| item.id.as_deref() == Some(id))
    }

    /// Finds an item by title (case-insensitive).
    #[must_use]
    pub fn find_item_by_title(&self, title: &str) -> Option<&Item> {
        let wanted = title.trim().to_lowercase();
        self.items()
            .map(|(_, item)| item)
            .find(|item| item.title.to_lowercase() == wanted)
    }

    /// Total number of items across all tabs.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.tabs.iter().map(|tab| tab.content.item_count()).sum()
    }

    /// Total number of sections across all tabs.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.tabs
            .iter()
            .map(|tab| tab.content.sections.len())
            .sum()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::load().expect("Failed to load embedded catalog.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_catalog() -> Catalog {
        Catalog::load().expect("Failed to load catalog")
    }

    #[test]
    fn test_load_catalog() {
        let catalog = get_test_catalog();
        assert_eq!(catalog.tab_count(), 4);
        assert!(catalog.item_count() > 10);
        assert_eq!(catalog.version(), "1.0");
    }

    #[test]
    fn test_tab_indices_dense() {
        let catalog = get_test_catalog();
        for (position, tab) in catalog.tabs().iter().enumerate() {
            assert_eq!(tab.index, position);
        }
    }

    #[test]
    fn test_tab_order() {
        let catalog = get_test_catalog();
        let titles: Vec<&str> = catalog.tabs().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Charts", "Reports", "Numerology", "Timing"]);
    }

    #[test]
    fn test_every_section_non_empty() {
        let catalog = get_test_catalog();
        for tab in catalog.tabs() {
            for section in &tab.content.sections {
                assert!(
                    !section.items.is_empty(),
                    "section '{}' should have items",
                    section.title
                );
            }
        }
    }

    #[test]
    fn test_category_lookup() {
        let catalog = get_test_catalog();
        assert_eq!(catalog.category(0).unwrap().title, "Divine Charts");
        assert_eq!(catalog.category(3).unwrap().title, "Cosmic Timing");
    }

    #[test]
    fn test_category_out_of_range() {
        let catalog = get_test_catalog();
        assert_eq!(
            catalog.category(4),
            Err(CatalogError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_find_item() {
        let catalog = get_test_catalog();
        let rashi = catalog.find_item("rashi-d1").unwrap();
        assert_eq!(rashi.title, "Rashi Chart (D1)");
        assert_eq!(rashi.route_kind.as_deref(), Some("rashi"));
        assert!(rashi.is_free);
        assert_eq!(rashi.power_level, Some(95));
        assert!(catalog.find_item("does-not-exist").is_none());
    }

    #[test]
    fn test_find_item_by_title() {
        let catalog = get_test_catalog();
        let blueprint = catalog.find_item_by_title("complete soul blueprint").unwrap();
        assert!(blueprint.id.is_none());
        assert!(!blueprint.is_routable());
    }

    #[test]
    fn test_items_document_order() {
        let catalog = get_test_catalog();
        let (location, first) = catalog.items().next().unwrap();
        assert_eq!(location, ItemLocation { tab: 0, section: 0, item: 0 });
        assert_eq!(first.id.as_deref(), Some("rashi-d1"));
        assert_eq!(catalog.items().count(), catalog.item_count());
        assert_eq!(catalog.item_at(location), Some(first));
    }

    #[test]
    fn test_reconstruction_is_structurally_equal() {
        assert_eq!(Catalog::load().unwrap(), Catalog::load().unwrap());
    }

    #[test]
    fn test_rejects_empty_section() {
        let json = r#"{"version": "t", "tabs": [{"index": 0, "title": "A", "symbolGlyph": "*",
            "content": {"title": "A", "subtitle": "", "description": "",
            "sections": [{"title": "Empty", "subtitle": "", "description": "", "energyLabel": "", "items": []}]}}]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Invalid(msg)) if msg.contains("Empty")
        ));
    }

    #[test]
    fn test_rejects_sparse_indices() {
        let json = r#"{"version": "t", "tabs": [{"index": 1, "title": "A", "symbolGlyph": "*",
            "content": {"title": "A", "subtitle": "", "description": "", "sections": []}}]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_no_tabs() {
        assert!(matches!(
            Catalog::from_json(r#"{"version": "t", "tabs": []}"#),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
