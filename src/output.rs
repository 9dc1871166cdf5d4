//! Output formatting and control utilities.
//!
//! CHANGELOG:
//! - 10/16/2026 - Trimmed to json/compact rendering of contact listings
//! - 10/16/2026 - Initial implementation

use crate::contacts::Contact;
use serde::Serialize;
use serde_json::json;

/// Output control settings from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct OutputControls {
    pub json: bool,
    pub compact: bool,
}

impl OutputControls {
    /// Serialize data as JSON, pretty unless compact output was requested.
    pub fn emit<T: Serialize>(&self, data: &T) -> String {
        let value = serde_json::to_value(data).unwrap_or(json!(null));

        if self.compact {
            serde_json::to_string(&value).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render a contact listing.
    ///
    /// In text mode `text` (the store's own rendering) is returned as is.
    /// In JSON mode the contacts are serialized instead, so an empty listing
    /// is `[]` rather than a status message.
    pub fn render_contacts(&self, contacts: &[&Contact], text: String) -> String {
        if self.json {
            self.emit(&contacts)
        } else {
            text
        }
    }
}

/// Format error as JSON.
pub fn format_error(error: &str) -> String {
    serde_json::to_string(&json!({
        "error": error,
        "success": false
    }))
    .unwrap_or_else(|_| format!(r#"{{"error":"{}"}}"#, error))
}
