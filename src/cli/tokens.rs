//! Design token listing command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::tokens::{DesignTokens, TokenKind, TokenValue};
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;

/// List design tokens
#[derive(Debug, Clone, Args)]
pub struct TokensArgs {
    /// Only list one kind (timing, easing, or spacing)
    #[arg(short, long, value_name = "KIND")]
    pub kind: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TokensResponse<'a> {
    name: &'a str,
    version: &'a str,
    tokens: BTreeMap<&'static str, BTreeMap<&'a str, TokenValue>>,
}

impl TokensArgs {
    /// Execute the tokens command
    pub fn execute(&self) -> CliResult<()> {
        let registry = DesignTokens::shared();

        let kinds: Vec<TokenKind> = match &self.kind {
            Some(kind) => vec![kind.parse::<TokenKind>().map_err(CliError::validation)?],
            None => TokenKind::ALL.to_vec(),
        };

        if self.json {
            let tokens: BTreeMap<_, BTreeMap<_, _>> = kinds
                .iter()
                .map(|kind| (kind.as_str(), registry.entries(*kind).into_iter().collect()))
                .collect();
            return print_json(&TokensResponse {
                name: registry.name(),
                version: registry.version(),
                tokens,
            });
        }

        println!("{} tokens v{}", registry.name(), registry.version());
        for kind in kinds {
            println!();
            println!("{kind}:");
            for (name, value) in registry.entries(kind) {
                println!("  {name:<14} {value}");
            }
        }

        Ok(())
    }
}
