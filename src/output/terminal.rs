//! Terminal output utilities.
//!
//! Colored preview of the summary tables, using the run's [`ReportStyle`].

use super::ReportStyle;
use crate::models::ReportModel;
use colored::{ColoredString, Colorize};

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn header(text: String, style: &ReportStyle, orphan: bool) -> ColoredString {
    let c = if orphan {
        style.orphan_header_color
    } else {
        style.header_color
    };
    text.bold().white().on_truecolor(c.0, c.1, c.2)
}

fn band(text: String, style: &ReportStyle, index: usize) -> ColoredString {
    let c = style.alt_row_color;
    if style.is_banded(index) {
        text.black().on_truecolor(c.0, c.1, c.2)
    } else {
        text.normal()
    }
}

/// Summary and orphan tables as colored text.
pub fn render_preview(model: &ReportModel, style: &ReportStyle) -> String {
    let section = style.section_color;
    let mut lines = vec![format!(
        "{}",
        format!("Network Summary - {}", model.site_name)
            .bold()
            .truecolor(section.0, section.1, section.2)
    )];

    let summary_header = format!(
        "{},{},{},{},{},{}",
        format_field("prefix", 22),
        format_field("vlan", 7),
        format_field("vlan_name", 18),
        format_field("gateway", 18),
        format_field("used/capacity", 16),
        format_field("utilization", 13),
    );
    lines.push(header(summary_header, style, false).to_string());
    for (i, s) in model.summary.iter().enumerate() {
        let row = format!(
            "{},{},{},{},{},{}",
            format_field(s.network, 22),
            format_field(
                s.vlan_id
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "None".to_string()),
                7
            ),
            format_field(s.vlan_name.as_deref().unwrap_or("No VLAN"), 18),
            format_field(
                s.gateway.map(|g| g.to_string()).unwrap_or_default(),
                18
            ),
            format_field(format!("{}/{}", s.used, s.capacity), 16),
            format_field(s.utilization, 13),
        );
        lines.push(band(row, style, i).to_string());
    }

    if !model.orphans.is_empty() {
        lines.push(String::new());
        let orphan_header = format!(
            "{},{},{}",
            format_field("vlan", 7),
            format_field("vlan_name", 18),
            format_field("status", 12),
        );
        lines.push(header(orphan_header, style, true).to_string());
        for (i, o) in model.orphans.iter().enumerate() {
            let row = format!(
                "{},{},{}",
                format_field(o.vid, 7),
                format_field(&o.name, 18),
                format_field(&o.status, 12),
            );
            lines.push(band(row, style, i).to_string());
        }
    }

    if !model.faults.is_empty() {
        lines.push(format!(
            "{} {} rows skipped, see log",
            "NOTE".on_red(),
            model.faults.len()
        ));
    }
    lines.join("\n")
}

/// Print the preview to stdout.
pub fn print_preview(model: &ReportModel, style: &ReportStyle) {
    println!("{}", render_preview(model, style));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_render_preview() {
        use crate::models::{utilization, Cidr, CoverSection, OrphanRow, SummaryRow};
        let model = ReportModel {
            site_name: "Lab".to_string(),
            site_slug: "lab".to_string(),
            cover: CoverSection {
                title: "Network Documentation".to_string(),
                site_name: "Lab".to_string(),
                details: vec![],
                generated: String::new(),
            },
            summary: vec![SummaryRow {
                network: Cidr::new("10.1.0.0/24").unwrap(),
                vlan_id: Some(100),
                vlan_name: Some("servers".to_string()),
                gateway: None,
                description: String::new(),
                used: 3,
                capacity: 254,
                utilization: utilization(3, 254),
            }],
            orphans: vec![OrphanRow {
                vid: 200,
                name: "voice".to_string(),
                description: String::new(),
                status: "active".to_string(),
            }],
            details: vec![],
            notes: vec![],
            faults: vec![],
        };
        let text = render_preview(&model, &ReportStyle::default());
        assert!(text.contains("Network Summary - Lab"));
        assert!(text.contains("\"10.1.0.0/24\""));
        assert!(text.contains("\"3/254\""));
        assert!(text.contains("\"1.2%\""));
        assert!(text.contains("\"voice\""));
        assert!(!text.contains("rows skipped"));
    }
}
