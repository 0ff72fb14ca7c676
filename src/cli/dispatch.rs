//! Item dispatch command.

use crate::catalog::Catalog;
use crate::cli::common::{print_json, CliError, CliResult};
use crate::navigation::{dispatch, DispatchOutcome};
use clap::{ArgGroup, Args};

/// Show what selecting a catalog item does
#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("item").required(true).args(["id", "title"])))]
pub struct DispatchArgs {
    /// Item id (e.g., "rashi-d1")
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// Item title, case-insensitive (e.g., "Complete Soul Blueprint")
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl DispatchArgs {
    /// Execute the dispatch command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = Catalog::shared();

        let item = match (&self.id, &self.title) {
            (Some(id), _) => catalog
                .find_item(id)
                .ok_or_else(|| CliError::not_found(format!("No item with id '{id}'")))?,
            (None, Some(title)) => catalog
                .find_item_by_title(title)
                .ok_or_else(|| CliError::not_found(format!("No item titled '{title}'")))?,
            (None, None) => {
                return Err(CliError::validation("Either --id or --title is required"));
            }
        };

        let outcome = dispatch(item);

        if self.json {
            return print_json(&outcome);
        }

        match &outcome {
            DispatchOutcome::Navigate(intent) => {
                println!("Navigate to chart detail:");
                for (key, value) in intent.params() {
                    println!("  {key:<12} {value}");
                }
            }
            DispatchOutcome::Fallback(fallback) => {
                println!("No detail view for '{}' ({})", fallback.title, fallback.reason);
            }
        }

        Ok(())
    }
}
