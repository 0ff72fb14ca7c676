//! Catalog item records and their routing identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of feature bullets shown on an item card.
pub const MAX_DISPLAYED_FEATURES: usize = 2;

/// A single service offered in the catalog (a chart, report, or tool).
///
/// # Validation
///
/// - `id` and `route_kind` are both present (routable) or both absent
///   (informational). An item carrying only one of them is still displayed,
///   but it is treated as informational when selected.
/// - `power_level` is a display ranking in `0..=100`; it never affects
///   ordering or access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Routable identifier (e.g., "rashi-d1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display title
    pub title: String,
    /// One-paragraph description
    pub description: String,
    /// Energy tag shown on the card (e.g., "Solar", "Lunar")
    pub energy_type: String,
    /// Feature bullets in authoring order
    #[serde(default)]
    pub features: Vec<String>,
    /// Declared free content (not an entitlement decision)
    #[serde(default)]
    pub is_free: bool,
    /// Popular badge flag
    #[serde(default)]
    pub is_popular: bool,
    /// Sacred badge flag
    #[serde(default)]
    pub is_sacred: bool,
    /// Display ranking in `0..=100`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_level: Option<u8>,
    /// Chart-type discriminator handed to the detail view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_kind: Option<String>,
}

/// Why an item has no routable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InformationalReason {
    /// Neither `id` nor `route_kind` is set
    MissingIdentity,
    /// `id` is set but `route_kind` is not
    MissingRouteKind,
    /// `route_kind` is set but `id` is not
    MissingId,
}

impl fmt::Display for InformationalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::MissingIdentity => "no chart identity",
            Self::MissingRouteKind => "id without chart type",
            Self::MissingId => "chart type without id",
        };
        f.write_str(text)
    }
}

/// Routing identity of an item, resolved once from its optional fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRoute<'a> {
    /// Item can open a detail view
    Routable {
        /// Chart id
        id: &'a str,
        /// Chart type
        route_kind: &'a str,
    },
    /// Item is display-only
    Informational(InformationalReason),
}

impl Item {
    /// Creates an informational item with no flags set.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        energy_type: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            energy_type: energy_type.into(),
            features: Vec::new(),
            is_free: false,
            is_popular: false,
            is_sacred: false,
            power_level: None,
            route_kind: None,
        }
    }

    /// Sets both routing fields.
    pub fn with_route(mut self, id: impl Into<String>, route_kind: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self.route_kind = Some(route_kind.into());
        self
    }

    /// Sets the feature bullets.
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the free/popular/sacred flags.
    #[must_use]
    pub const fn with_flags(mut self, is_free: bool, is_popular: bool, is_sacred: bool) -> Self {
        self.is_free = is_free;
        self.is_popular = is_popular;
        self.is_sacred = is_sacred;
        self
    }

    /// Sets the power level.
    #[must_use]
    pub const fn with_power_level(mut self, power_level: u8) -> Self {
        self.power_level = Some(power_level);
        self
    }

    /// Resolves the routing identity. Blank strings count as absent.
    #[must_use]
    pub fn route(&self) -> ItemRoute<'_> {
        let id = self.id.as_deref().filter(|s| !s.trim().is_empty());
        let kind = self.route_kind.as_deref().filter(|s| !s.trim().is_empty());

        match (id, kind) {
            (Some(id), Some(route_kind)) => ItemRoute::Routable { id, route_kind },
            (None, None) => ItemRoute::Informational(InformationalReason::MissingIdentity),
            (Some(_), None) => ItemRoute::Informational(InformationalReason::MissingRouteKind),
            (None, Some(_)) => ItemRoute::Informational(InformationalReason::MissingId),
        }
    }

    /// Returns true if selecting this item opens a detail view.
    #[must_use]
    pub fn is_routable(&self) -> bool {
        matches!(self.route(), ItemRoute::Routable { .. })
    }

    /// Feature bullets shown on the card; extras are dropped.
    #[must_use]
    pub fn displayed_features(&self) -> &[String] {
        let end = self.features.len().min(MAX_DISPLAYED_FEATURES);
        &self.features[..end]
    }
}
