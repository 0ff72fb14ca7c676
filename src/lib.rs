//! Mystic Catalog Library
//!
//! This library provides the core of the Mystic Catalog services screen: the
//! embedded catalog of charts, reports, and tools, the design token registry,
//! tab selection state, render tree derivation, and item dispatch to the
//! detail view. The terminal front-end and the headless CLI are built on top.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod render;
pub mod selection;
pub mod tokens;
pub mod tui;
