use anyhow::{anyhow, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

use crate::config::{CliConfig, LookupMode};
use crate::url_query::{parse_structured_url, QueryItem, QueryLookup, QuerySource};

/// Look up query parameters in a URL
#[derive(Debug, Parser)]
#[command(name = "query_lookup", version, about)]
pub struct Cli {
    /// URL to read the query component from
    pub url: String,

    /// Parameter name to look up (exact, case-sensitive)
    #[arg(required_unless_present = "list")]
    pub key: Option<String>,

    /// Report whether the parameter appears instead of its value
    #[arg(long, conflicts_with = "list")]
    pub has: bool,

    /// Print every query item in order
    #[arg(long)]
    pub list: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Write logs to a timestamped file in this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        let mode = if cli.list {
            LookupMode::List
        } else if cli.has {
            LookupMode::Presence
        } else {
            LookupMode::Value
        };
        Self {
            url: cli.url,
            key: cli.key,
            mode,
            json: cli.json,
            log_dir: cli.log_dir,
        }
    }
}

/// Result of one CLI run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Value { key: String, value: Option<String> },
    Presence { key: String, present: bool },
    List { items: Vec<QueryItem> },
}

impl Report {
    /// Whether the lookup found what it was asked for
    pub fn is_found(&self) -> bool {
        match self {
            Report::Value { value, .. } => value.is_some(),
            Report::Presence { present, .. } => *present,
            Report::List { .. } => true,
        }
    }

    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            return Ok(serde_json::to_string_pretty(self)?);
        }
        let text = match self {
            Report::Value { value: Some(value), .. } => value.clone(),
            Report::Value { value: None, .. } => "(absent)".to_string(),
            Report::Presence { present, .. } => present.to_string(),
            Report::List { items } => items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        };
        Ok(text)
    }
}

/// Parses the configured URL and answers the configured lookup
#[instrument(level = "debug", skip_all, fields(url = %config.url))]
pub fn run(config: &CliConfig) -> Result<Report> {
    let url = parse_structured_url(&config.url)?;

    if config.mode == LookupMode::List {
        let items = url.query_items().to_vec();
        info!("Listing {} query items", items.len());
        return Ok(Report::List { items });
    }

    let key = config
        .key
        .clone()
        .ok_or_else(|| anyhow!("A parameter name is required unless --list is given"))?;
    debug!("Looking up query parameter '{}'", key);

    let report = match config.mode {
        LookupMode::Presence => {
            let present = url.has_query_parameter(&key);
            Report::Presence { key, present }
        }
        _ => {
            let value = url.value_for_query_parameter(&key);
            Report::Value { key, value }
        }
    };
    info!("Lookup found: {}", report.is_found());

    Ok(report)
}
