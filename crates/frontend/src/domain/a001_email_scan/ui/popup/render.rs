//! Email Scan Popup - Render
//!
//! The result area is owned entirely by the popup and rewritten in full on
//! every state change, so rendering is a pure `RenderState -> HTML` function.

use contracts::domain::a001_email_scan::features::describe;
use contracts::domain::a001_email_scan::{Prediction, Reason};

pub const NO_SELECTION_MESSAGE: &str = "Please select a .eml file.";
pub const SCANNING_MESSAGE: &str = "Scanning…";
pub const UNREACHABLE_MESSAGE: &str = "Failed to reach the API. Is it running?";
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Содержимое области результата
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RenderState {
    #[default]
    Idle,
    NoSelection,
    Scanning,
    Verdict(Prediction),
    /// Server answered with a failure status
    Rejected { error: Option<String> },
    /// Transport, parse or decode failure
    Unreachable,
}

impl RenderState {
    pub fn to_html(&self) -> String {
        match self {
            RenderState::Idle => String::new(),
            RenderState::NoSelection => NO_SELECTION_MESSAGE.to_string(),
            RenderState::Scanning => SCANNING_MESSAGE.to_string(),
            RenderState::Verdict(prediction) => render_verdict(prediction),
            RenderState::Rejected { error } => format!(
                "Error: {}",
                html_escape(error.as_deref().unwrap_or(UNKNOWN_ERROR))
            ),
            RenderState::Unreachable => UNREACHABLE_MESSAGE.to_string(),
        }
    }
}

fn render_verdict(p: &Prediction) -> String {
    let label = match p.label {
        Some(label) => format!(" <small>(label {})</small>", label),
        None => String::new(),
    };
    let reasons: String = p.reasons.iter().map(render_reason).collect();

    format!(
        "<b>Prediction:</b> {}{}<br/>\
         <b>Confidence:</b> {}<br/>\
         <b>Top reasons:</b>\
         <ul>{}</ul>",
        html_escape(&p.prediction),
        label,
        html_escape(&p.confidence.to_string()),
        reasons
    )
}

fn render_reason(r: &Reason) -> String {
    let title = match describe(&r.feature) {
        Some(d) => format!(" title=\"{}\"", html_escape(d)),
        None => String::new(),
    };
    format!(
        "<li{}><b>{}</b>: value={}, weight={}</li>",
        title,
        html_escape(&r.feature),
        html_escape(&r.value_text()),
        r.weight_text()
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
