//! Render tree command.
//!
//! Prints what the catalog screen would show for a tab, either as an indented
//! text outline or as the JSON render tree.

use crate::catalog::Catalog;
use crate::cli::common::{print_json, CliError, CliResult};
use crate::render::{render, RenderTree};
use crate::selection::SelectionState;
use crate::tokens::DesignTokens;
use clap::Args;
use std::fmt::Write as _;

/// Render the catalog screen for a tab
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Tab index to select (0-based)
    #[arg(short, long, default_value_t = 0, value_name = "INDEX")]
    pub tab: usize,

    /// Output the render tree as JSON
    #[arg(long)]
    pub json: bool,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = Catalog::shared();

        let mut selection = SelectionState::new(catalog.tab_count())
            .map_err(|e| CliError::validation(e.to_string()))?;
        selection
            .select(self.tab)
            .map_err(|e| CliError::validation(e.to_string()))?;

        let tree = render(
            catalog.tabs(),
            selection.active_tab_index(),
            DesignTokens::shared(),
        )
        .map_err(|e| CliError::validation(e.to_string()))?;

        if self.json {
            print_json(&tree)
        } else {
            print!("{}", format_tree(&tree));
            Ok(())
        }
    }
}

/// Formats a render tree as an indented text outline.
pub fn format_tree(tree: &RenderTree) -> String {
    let mut out = String::new();

    let tab_bar: Vec<String> = tree
        .tabs
        .iter()
        .map(|tab| {
            if tab.selected {
                format!("[{} {}]", tab.symbol_glyph, tab.title)
            } else {
                format!(" {} {} ", tab.symbol_glyph, tab.title)
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tab_bar.join(" "));

    let Some(content) = &tree.content else {
        return out;
    };

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", content.title);
    let _ = writeln!(out, "{}", content.subtitle);

    for section in &content.sections {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "== {} ({}) [{} items]",
            section.title, section.energy_label, section.item_count
        );
        let _ = writeln!(out, "   {}", section.subtitle);

        for card in &section.cards {
            let badges: Vec<&str> = card.badges.iter().map(|b| b.label()).collect();
            let badge_text = if badges.is_empty() {
                String::new()
            } else {
                format!(" [{}]", badges.join("] ["))
            };
            let _ = writeln!(out, "  * {}{}", card.title, badge_text);
            let _ = writeln!(out, "    {} | {}", card.energy_type, card.description);
            for feature in &card.features {
                let _ = writeln!(out, "      - {feature}");
            }
        }
    }

    out
}
