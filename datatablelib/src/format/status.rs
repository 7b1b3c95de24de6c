//! Status classification for presentation.

use serde::{Deserialize, Serialize};

/// Visual category of a status value.
///
/// Purely presentational: nothing else in the table branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCategory {
    Paid,
    Unpaid,
    Pending,
    Other,
}

impl StatusCategory {
    /// Classify a status by case-insensitive exact match.
    pub fn classify(status: &str) -> Self {
        match status.to_uppercase().as_str() {
            "PAID" => StatusCategory::Paid,
            "UNPAID" => StatusCategory::Unpaid,
            "PENDING" => StatusCategory::Pending,
            _ => StatusCategory::Other,
        }
    }

    /// Lowercase name, used as a style key by renderers.
    pub fn style_name(&self) -> &'static str {
        match self {
            StatusCategory::Paid => "paid",
            StatusCategory::Unpaid => "unpaid",
            StatusCategory::Pending => "pending",
            StatusCategory::Other => "other",
        }
    }
}
