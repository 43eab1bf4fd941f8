pub mod response;

pub use response::{CheckReport, VerdictReport};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::Verdict;

/// How the verdict is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One human-readable line
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Human-readable rendering of a verdict.
pub fn render_text(verdict: &Verdict) -> String {
    match (&verdict.reason, &verdict.error) {
        _ if verdict.is_approved() => "Application approved".to_string(),
        (Some(reason), _) => format!("Rejected, stop check fired: {reason}"),
        (None, Some(error)) => format!("Rejected, client data could not be processed: {error}"),
        (None, None) => "Rejected".to_string(),
    }
}

/// Render a verdict in the requested format.
pub fn render(verdict: &Verdict, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(render_text(verdict)),
        ReportFormat::Json => serde_json::to_string_pretty(&VerdictReport::from(verdict)),
    }
}
