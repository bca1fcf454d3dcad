//! Output formatting for CLI results.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use campusnav_lib::{RenderMode, RouteSummary};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Header plus numbered turn-by-turn steps.
    #[default]
    Text,
    /// One line per result.
    Compact,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Text render mode for route summaries, `None` for JSON.
    pub fn render_mode(self) -> Option<RenderMode> {
        match self {
            OutputFormat::Text => Some(RenderMode::PlainText),
            OutputFormat::Compact => Some(RenderMode::Compact),
            OutputFormat::Json => None,
        }
    }
}

/// Serialize any value as pretty JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    json.push('\n');
    Ok(json)
}

/// Render a route summary in the requested format.
pub fn render_summary(summary: &RouteSummary, format: OutputFormat) -> Result<String> {
    match format.render_mode() {
        Some(mode) => Ok(summary.render(mode)),
        None => to_json(summary),
    }
}
