//! Tab listing command.

use crate::catalog::Catalog;
use crate::cli::common::{print_json, CliResult};
use clap::Args;
use serde::Serialize;

/// List the catalog tabs
#[derive(Debug, Clone, Args)]
pub struct TabsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TabSummary<'a> {
    index: usize,
    title: &'a str,
    symbol_glyph: &'a str,
    category: &'a str,
    sections: usize,
    items: usize,
}

#[derive(Debug, Serialize)]
struct TabsResponse<'a> {
    tabs: Vec<TabSummary<'a>>,
    count: usize,
}

impl TabsArgs {
    /// Execute the tabs command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = Catalog::shared();

        let tabs: Vec<TabSummary> = catalog
            .tabs()
            .iter()
            .map(|tab| TabSummary {
                index: tab.index,
                title: &tab.title,
                symbol_glyph: &tab.symbol_glyph,
                category: &tab.content.title,
                sections: tab.content.sections.len(),
                items: tab.content.item_count(),
            })
            .collect();

        if self.json {
            let count = tabs.len();
            return print_json(&TabsResponse { tabs, count });
        }

        println!("Tabs ({}):", tabs.len());
        for tab in &tabs {
            println!(
                "  {}  {} {:<12} {:<16} {} sections, {} items",
                tab.index, tab.symbol_glyph, tab.title, tab.category, tab.sections, tab.items
            );
        }

        Ok(())
    }
}
