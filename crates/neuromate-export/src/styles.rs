use serde::{Deserialize, Serialize};

/// Document styling configuration for exported reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for body text and table cells.
    pub body_font: String,

    /// Font for headings.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Report title size in points.
    pub heading1_size: usize,

    /// Section heading size in points.
    pub heading2_size: usize,

    pub heading3_size: usize,

    /// Hex fill (no `#`) behind table header cells.
    pub table_header_fill: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Helvetica".to_string(),
            heading_font: "Helvetica".to_string(),
            body_size: 11,
            heading1_size: 22,
            heading2_size: 14,
            heading3_size: 12,
            table_header_fill: "E2E8F0".to_string(),
        }
    }
}
