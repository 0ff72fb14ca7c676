//! Sections group related items under a shared heading.

use crate::models::Item;
use serde::{Deserialize, Serialize};

/// An ordered group of items inside a tab's category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Section heading
    pub title: String,
    /// Short line under the heading
    pub subtitle: String,
    /// Longer description
    pub description: String,
    /// Energy tag shown next to the heading
    pub energy_label: String,
    /// Items in authoring order
    pub items: Vec<Item>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        description: impl Into<String>,
        energy_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            description: description.into(),
            energy_label: energy_label.into(),
            items: Vec::new(),
        }
    }

    /// Appends an item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Number of items in the section.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
