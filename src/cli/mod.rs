//! CLI command handlers.
//!
//! This module provides headless, scriptable access to the catalog, the render
//! tree, item dispatch, and design tokens for automation and testing.

pub mod common;
pub mod config;
pub mod dispatch;
pub mod render;
pub mod tabs;
pub mod tokens;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use dispatch::DispatchArgs;
pub use render::RenderArgs;
pub use tabs::TabsArgs;
pub use tokens::TokensArgs;
