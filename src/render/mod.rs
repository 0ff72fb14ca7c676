//! Render tree derivation for the catalog screen.
//!
//! [`render`] maps the tabs, the active tab index, and the design tokens to a
//! [`RenderTree`]: a plain description of what the screen shows. It performs no
//! I/O and draws nothing. The terminal front-end and the `render` command both
//! consume the same tree.

use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::catalog::{CatalogError, ItemLocation};
use crate::models::{Item, Section, Tab};
use crate::tokens::{names, DesignTokens, Easing, TokenError};

/// Badge shown on an item card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Badge {
    /// Sacred content; suppresses the popular badge
    Sacred,
    /// Popular content
    Popular,
    /// Not declared free
    Pro,
}

impl Badge {
    /// Upper-case label drawn on the card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sacred => "SACRED",
            Self::Popular => "POPULAR",
            Self::Pro => "PRO",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Animation descriptor attached to the tree. Execution belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Easing curve
    pub easing: Easing,
}

/// Spacing hints for laying out the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutHints {
    /// Blank rows between sections
    pub section_gap: u16,
    /// Blank rows between cards
    pub card_gap: u16,
    /// Card inner padding
    pub card_padding: u16,
}

/// One entry in the tab bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabAffordance {
    /// Tab index
    pub index: usize,
    /// Tab label
    pub title: String,
    /// Glyph shown before the label
    pub symbol_glyph: String,
    /// Whether this is the active tab
    pub selected: bool,
}

/// A rendered item card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCard {
    /// Where the item lives in the catalog
    pub location: ItemLocation,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Energy tag
    pub energy_type: String,
    /// At most two feature bullets
    pub features: Vec<String>,
    /// Badges in precedence order
    pub badges: Vec<Badge>,
    /// Display ranking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_level: Option<u8>,
    /// Whether selecting the card opens a detail view
    pub routable: bool,
}

/// A rendered section header with its cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBlock {
    /// Section heading
    pub title: String,
    /// Short line under the heading
    pub subtitle: String,
    /// Longer description
    pub description: String,
    /// Energy tag
    pub energy_label: String,
    /// Number of cards in the block
    pub item_count: usize,
    /// Cards in authoring order
    pub cards: Vec<ItemCard>,
}

/// Content area for the active tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentBlock {
    /// Index of the tab this content belongs to
    pub tab_index: usize,
    /// Category heading
    pub title: String,
    /// Short line under the heading
    pub subtitle: String,
    /// Longer description
    pub description: String,
    /// Sections in authoring order
    pub sections: Vec<SectionBlock>,
}

/// Everything the catalog screen shows for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderTree {
    /// Tab bar entries
    pub tabs: Vec<TabAffordance>,
    /// Tab selection transition
    pub transition: Transition,
    /// Content spacing
    pub layout: LayoutHints,
    /// Content area, `None` when the active tab could not be resolved
    pub content: Option<ContentBlock>,
}

impl RenderTree {
    /// The selected tab entry, if any.
    #[must_use]
    pub fn selected_tab(&self) -> Option<&TabAffordance> {
        self.tabs.iter().find(|tab| tab.selected)
    }

    /// All cards of the content area in display order.
    pub fn cards(&self) -> impl Iterator<Item = &ItemCard> + '_ {
        self.content
            .iter()
            .flat_map(|content| content.sections.iter())
            .flat_map(|section| section.cards.iter())
    }

    /// Number of cards in the content area.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards().count()
    }
}

/// Badges for an item.
///
/// Sacred takes precedence over popular and suppresses it. The pro badge
/// depends only on `is_free` and may appear alongside either.
#[must_use]
pub fn badges_for(item: &Item) -> Vec<Badge> {
    let mut badges = Vec::with_capacity(2);
    if item.is_sacred {
        badges.push(Badge::Sacred);
    } else if item.is_popular {
        badges.push(Badge::Popular);
    }
    if !item.is_free {
        badges.push(Badge::Pro);
    }
    badges
}

/// Derives the render tree for `tabs` with `active_tab_index` selected.
///
/// An active index that does not resolve to a tab produces a tree with no
/// content area instead of an error.
///
/// # Errors
///
/// Returns `TokenError::UnknownToken` if a required design token is missing.
pub fn render(
    tabs: &[Tab],
    active_tab_index: usize,
    tokens: &DesignTokens,
) -> Result<RenderTree, TokenError> {
    let transition = Transition {
        duration_ms: tokens.timing(names::TIMING_STANDARD)?,
        easing: tokens.easing(names::EASING_STANDARD)?,
    };
    let layout = LayoutHints {
        section_gap: tokens.spacing(names::SPACING_SECTION_GAP)?,
        card_gap: tokens.spacing(names::SPACING_CARD_GAP)?,
        card_padding: tokens.spacing(names::SPACING_SM)?,
    };

    // Selection and content both resolve by slice position.
    let tab_bar = tabs
        .iter()
        .enumerate()
        .map(|(position, tab)| TabAffordance {
            index: tab.index,
            title: tab.title.clone(),
            symbol_glyph: tab.symbol_glyph.clone(),
            selected: position == active_tab_index,
        })
        .collect();

    let content = match tabs.get(active_tab_index) {
        Some(tab) => Some(render_content(active_tab_index, tab)),
        None => {
            let err = CatalogError::IndexOutOfRange {
                index: active_tab_index,
                len: tabs.len(),
            };
            warn!("rendering empty content area: {err}");
            None
        }
    };

    debug!(
        tab = active_tab_index,
        sections = content.as_ref().map_or(0, |c| c.sections.len()),
        "render tree derived"
    );

    Ok(RenderTree {
        tabs: tab_bar,
        transition,
        layout,
        content,
    })
}

fn render_content(tab_index: usize, tab: &Tab) -> ContentBlock {
    let category = &tab.content;
    let sections = category
        .sections
        .iter()
        .enumerate()
        .filter(|(_, section)| !section.items.is_empty())
        .map(|(section_index, section)| render_section(tab_index, section_index, section))
        .collect();

    ContentBlock {
        tab_index,
        title: category.title.clone(),
        subtitle: category.subtitle.clone(),
        description: category.description.clone(),
        sections,
    }
}

fn render_section(tab_index: usize, section_index: usize, section: &Section) -> SectionBlock {
    let cards: Vec<ItemCard> = section
        .items
        .iter()
        .enumerate()
        .map(|(item_index, item)| ItemCard {
            location: ItemLocation {
                tab: tab_index,
                section: section_index,
                item: item_index,
            },
            title: item.title.clone(),
            description: item.description.clone(),
            energy_type: item.energy_type.clone(),
            features: item.displayed_features().to_vec(),
            badges: badges_for(item),
            power_level: item.power_level,
            routable: item.is_routable(),
        })
        .collect();

    SectionBlock {
        title: section.title.clone(),
        subtitle: section.subtitle.clone(),
        description: section.description.clone(),
        energy_label: section.energy_label.clone(),
        item_count: cards.len(),
        cards,
    }
}
