//! Item selection dispatch.
//!
//! Selecting a card turns its item into either a [`NavigationIntent`] for the
//! detail view or a logged fallback for display-only entries. Dispatch is a
//! pure mapping; performing the navigation is the job of a [`Navigator`].

use serde::Serialize;
use tracing::{debug, info};

use crate::models::{InformationalReason, Item, ItemRoute};

/// Power level sent when an item has none, or an unusable one.
pub const DEFAULT_POWER_LEVEL: u8 = 75;

/// Parameters handed to the detail view for a routable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationIntent {
    /// Item id
    pub chart_id: String,
    /// Item route kind
    pub chart_type: String,
    /// Item title
    pub title: String,
    /// Item energy tag
    pub energy_type: String,
    /// Item description
    pub description: String,
    /// "true" unless the item is declared free
    pub is_premium: String,
    /// Power level in `1..=100`
    pub power_level: u8,
}

impl NavigationIntent {
    /// Premium flag as a boolean.
    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.is_premium == "true"
    }

    /// Ordered key/value parameters as the detail view receives them.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("chartId", self.chart_id.clone()),
            ("chartType", self.chart_type.clone()),
            ("title", self.title.clone()),
            ("energyType", self.energy_type.clone()),
            ("description", self.description.clone()),
            ("isPremium", self.is_premium.clone()),
            ("powerLevel", self.power_level.to_string()),
        ]
    }
}

/// Record of a selection that produced no navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallbackLogged {
    /// Title of the selected item
    pub title: String,
    /// Why the item is not routable
    pub reason: InformationalReason,
}

/// Result of dispatching a selected item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// Open the detail view
    Navigate(NavigationIntent),
    /// Selection swallowed after logging
    Fallback(FallbackLogged),
}

impl DispatchOutcome {
    /// The navigation intent, if any.
    #[must_use]
    pub const fn intent(&self) -> Option<&NavigationIntent> {
        match self {
            Self::Navigate(intent) => Some(intent),
            Self::Fallback(_) => None,
        }
    }
}

/// Receiver of navigation intents (the detail view collaborator).
pub trait Navigator {
    /// Open the detail view for `intent`.
    fn navigate(&mut self, intent: &NavigationIntent);
}

/// Maps a selected item to a dispatch outcome.
///
/// Items without a complete `id`/`route_kind` pair are logged and produce a
/// fallback. Calling this twice on the same item yields equal outcomes.
#[must_use]
pub fn dispatch(item: &Item) -> DispatchOutcome {
    match item.route() {
        ItemRoute::Routable { id, route_kind } => {
            let intent = NavigationIntent {
                chart_id: id.to_string(),
                chart_type: route_kind.to_string(),
                title: item.title.clone(),
                energy_type: item.energy_type.clone(),
                description: item.description.clone(),
                is_premium: (!item.is_free).to_string(),
                power_level: effective_power_level(item.power_level),
            };
            debug!(chart_id = id, chart_type = route_kind, "navigation intent");
            DispatchOutcome::Navigate(intent)
        }
        ItemRoute::Informational(reason) => {
            info!(title = %item.title, %reason, "item has no detail view; selection ignored");
            DispatchOutcome::Fallback(FallbackLogged {
                title: item.title.clone(),
                reason,
            })
        }
    }
}

/// Dispatches an item and hands any intent to `navigator`.
pub fn dispatch_to<N: Navigator + ?Sized>(item: &Item, navigator: &mut N) -> DispatchOutcome {
    let outcome = dispatch(item);
    if let Some(intent) = outcome.intent() {
        navigator.navigate(intent);
    }
    outcome
}

/// Power level sent to the detail view: absent, zero, or above 100 become the default.
#[must_use]
pub fn effective_power_level(power_level: Option<u8>) -> u8 {
    match power_level {
        Some(level) if (1..=100).contains(&level) => level,
        _ => DEFAULT_POWER_LEVEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[derive(Default)]
    struct RecordingNavigator {
        opened: Vec<NavigationIntent>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, intent: &NavigationIntent) {
            self.opened.push(intent.clone());
        }
    }

    #[test]
    fn test_dispatch_rashi() {
        let catalog = Catalog::load().unwrap();
        let item = catalog.find_item("rashi-d1").unwrap();
        let outcome = dispatch(item);
        let intent = outcome.intent().expect("rashi should be routable");
        assert_eq!(intent.chart_id, "rashi-d1");
        assert_eq!(intent.chart_type, "rashi");
        assert_eq!(intent.is_premium, "false");
        assert!(!intent.is_premium());
        assert_eq!(intent.power_level, 95);
        assert_eq!(intent.title, "Rashi Chart (D1)");
    }

    #[test]
    fn test_dispatch_report_falls_back() {
        let catalog = Catalog::load().unwrap();
        let item = catalog.find_item_by_title("Complete Soul Blueprint").unwrap();
        assert_eq!(
            dispatch(item),
            DispatchOutcome::Fallback(FallbackLogged {
                title: "Complete Soul Blueprint".to_string(),
                reason: InformationalReason::MissingIdentity,
            })
        );
    }

    #[test]
    fn test_dispatch_half_identity_falls_back() {
        let catalog = Catalog::load().unwrap();
        let item = catalog.find_item("synastry-overlay").unwrap();
        let outcome = dispatch(item);
        assert!(outcome.intent().is_none());
        assert!(matches!(
            outcome,
            DispatchOutcome::Fallback(FallbackLogged {
                reason: InformationalReason::MissingRouteKind,
                ..
            })
        ));
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let item = Item::new("Navamsa", "d9", "Venusian")
            .with_route("navamsa-d9", "navamsa")
            .with_power_level(92);
        assert_eq!(dispatch(&item), dispatch(&item));
    }

    #[test]
    fn test_premium_flag_stringified() {
        let item = Item::new("Paid", "p", "Solar")
            .with_route("paid-1", "rashi")
            .with_flags(false, false, false);
        assert_eq!(dispatch(&item).intent().unwrap().is_premium, "true");
    }

    #[test]
    fn test_power_level_defaults() {
        assert_eq!(effective_power_level(None), DEFAULT_POWER_LEVEL);
        assert_eq!(effective_power_level(Some(0)), DEFAULT_POWER_LEVEL);
        assert_eq!(effective_power_level(Some(101)), DEFAULT_POWER_LEVEL);
        assert_eq!(effective_power_level(Some(1)), 1);
        assert_eq!(effective_power_level(Some(100)), 100);
    }

    #[test]
    fn test_catalog_zero_and_missing_power_default() {
        let catalog = Catalog::load().unwrap();
        let transit = catalog.find_item("transit-board").unwrap();
        assert_eq!(dispatch(transit).intent().unwrap().power_level, 75);
        let trimsamsa = catalog.find_item("trimsamsa-d30").unwrap();
        assert_eq!(dispatch(trimsamsa).intent().unwrap().power_level, 75);
    }

    #[test]
    fn test_params_order() {
        let item = Item::new("Rashi", "Birth chart", "Solar")
            .with_route("rashi-d1", "rashi")
            .with_flags(true, false, false)
            .with_power_level(95);
        let params = dispatch(&item).intent().unwrap().params();
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            [
                "chartId",
                "chartType",
                "title",
                "energyType",
                "description",
                "isPremium",
                "powerLevel"
            ]
        );
        assert_eq!(params[6].1, "95");
    }

    #[test]
    fn test_intent_serializes_boundary_names() {
        let item = Item::new("Rashi", "Birth chart", "Solar")
            .with_route("rashi-d1", "rashi")
            .with_flags(true, false, false);
        let json = serde_json::to_value(dispatch(&item)).unwrap();
        assert_eq!(json["outcome"], "navigate");
        assert_eq!(json["chartId"], "rashi-d1");
        assert_eq!(json["isPremium"], "false");
        assert_eq!(json["powerLevel"], 75);
    }

    #[test]
    fn test_dispatch_to_navigator() {
        let catalog = Catalog::load().unwrap();
        let mut navigator = RecordingNavigator::default();

        dispatch_to(catalog.find_item("rashi-d1").unwrap(), &mut navigator);
        dispatch_to(
            catalog.find_item_by_title("Hora Clock").unwrap(),
            &mut navigator,
        );

        assert_eq!(navigator.opened.len(), 1);
        assert_eq!(navigator.opened[0].chart_id, "rashi-d1");
    }
}
