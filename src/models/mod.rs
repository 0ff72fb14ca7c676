//! Data models for the service catalog: tabs, categories, sections, and items.
//!
//! Models are plain owned records with no back-references. They are built once
//! from the embedded catalog and never mutated afterwards.

pub mod item;
pub mod section;
pub mod tab;

// Re-export all model types
pub use item::{InformationalReason, Item, ItemRoute, MAX_DISPLAYED_FEATURES};
pub use section::Section;
pub use tab::{Category, Tab};
