//! Active tab selection for a single catalog screen.
//!
//! The state is owned by the screen that created it and is only mutated by
//! explicit tab selection. The index always stays within `0..tab_count`.

use tracing::debug;

use crate::catalog::CatalogError;

/// The active tab of one screen instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    active_tab_index: usize,
    tab_count: usize,
}

impl SelectionState {
    /// Creates the selection at mount time, starting on the first tab.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Invalid` if `tab_count` is zero.
    pub fn new(tab_count: usize) -> Result<Self, CatalogError> {
        if tab_count == 0 {
            return Err(CatalogError::Invalid(
                "cannot select a tab in an empty catalog".to_string(),
            ));
        }

        Ok(Self {
            active_tab_index: 0,
            tab_count,
        })
    }

    /// Index of the active tab.
    #[must_use]
    pub const fn active_tab_index(&self) -> usize {
        self.active_tab_index
    }

    /// Number of selectable tabs.
    #[must_use]
    pub const fn tab_count(&self) -> usize {
        self.tab_count
    }

    /// Selects a tab by index.
    ///
    /// Out-of-range input is rejected and leaves the selection unchanged.
    pub fn select(&mut self, index: usize) -> Result<(), CatalogError> {
        if index >= self.tab_count {
            return Err(CatalogError::IndexOutOfRange {
                index,
                len: self.tab_count,
            });
        }

        if index != self.active_tab_index {
            debug!(from = self.active_tab_index, to = index, "tab selected");
        }
        self.active_tab_index = index;
        Ok(())
    }

    /// Move selection to the next tab, wrapping to the first.
    pub fn next(&mut self) {
        self.active_tab_index = (self.active_tab_index + 1) % self.tab_count;
        debug!(to = self.active_tab_index, "tab selected");
    }

    /// Move selection to the previous tab, wrapping to the last.
    pub fn previous(&mut self) {
        self.active_tab_index = if self.active_tab_index > 0 {
            self.active_tab_index - 1
        } else {
            self.tab_count - 1
        };
        debug!(to = self.active_tab_index, "tab selected");
    }

    /// Returns true if `index` is the active tab.
    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        self.active_tab_index == index
    }
}
