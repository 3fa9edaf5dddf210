//! Presentation settings shared by the builder and the renderers.
//!
//! One [`ReportStyle`] is built per run and passed down explicitly.

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStyle {
    pub title: String,
    pub header_color: Rgb,
    pub orphan_header_color: Rgb,
    pub alt_row_color: Rgb,
    pub section_color: Rgb,
    /// Shade every other table row.
    pub band_rows: bool,
    /// Status text of enumerated hosts without an assignment.
    pub available_label: String,
    pub unassigned_label: String,
    /// Placeholder for missing values.
    pub missing_label: String,
    pub gateway_label: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        ReportStyle {
            title: "Network Documentation".to_string(),
            header_color: Rgb(0x1F, 0x4E, 0x79),
            orphan_header_color: Rgb(0xC6, 0x59, 0x11),
            alt_row_color: Rgb(0xD6, 0xDC, 0xE4),
            section_color: Rgb(0x1F, 0x4E, 0x79),
            band_rows: true,
            available_label: "Available".to_string(),
            unassigned_label: "Unassigned".to_string(),
            missing_label: "N/A".to_string(),
            gateway_label: "Gateway".to_string(),
        }
    }
}

impl ReportStyle {
    /// `value` or the missing-value placeholder when it is empty.
    pub fn or_missing(&self, value: Option<&str>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v.to_string(),
            _ => self.missing_label.clone(),
        }
    }

    /// Whether the row at `index` (0-based within its table) is shaded.
    pub fn is_banded(&self, index: usize) -> bool {
        self.band_rows && index % 2 == 1
    }
}
