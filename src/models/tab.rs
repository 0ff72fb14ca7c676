//! Tabs and their category payloads.

use crate::models::Section;
use serde::{Deserialize, Serialize};

/// The content shown when a tab is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category heading
    pub title: String,
    /// Short line under the heading
    pub subtitle: String,
    /// Longer description
    pub description: String,
    /// Sections in authoring order
    pub sections: Vec<Section>,
}

impl Category {
    /// Total number of items across all sections.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(Section::item_count).sum()
    }
}

/// A top-level tab of the catalog screen.
///
/// # Validation
///
/// - `index` is zero-based, unique, and dense across the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    /// Position in the tab bar
    pub index: usize,
    /// Tab label
    pub title: String,
    /// Glyph shown before the label (e.g., "☉")
    pub symbol_glyph: String,
    /// Content for this tab
    pub content: Category,
}

impl Tab {
    /// Label with glyph, as shown in the tab bar.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.symbol_glyph, self.title)
    }
}
