//! CSV rendering of the report model.
//!
//! The document is written as consecutive sections separated by blank lines:
//! cover, summary, orphan VLANs, data quality, then one section per prefix.

use super::{DocumentRenderer, ReportStyle};
use crate::models::{DetailSection, ReportModel};
use std::error::Error;

/// Sheet-style section names are limited to 31 characters.
const MAX_SECTION_NAME: usize = 31;

const SUMMARY_HEADERS: [&str; 8] = [
    "Prefix",
    "VLAN ID",
    "VLAN Name",
    "Gateway",
    "Description",
    "Used",
    "Capacity",
    "Utilization",
];
const ORPHAN_HEADERS: [&str; 4] = ["VLAN ID", "VLAN Name", "Description", "Status"];
const DETAIL_HEADERS: [&str; 8] = [
    "IP Address",
    "Device/VM Name",
    "Device Role",
    "Model/Platform",
    "Interface",
    "Type",
    "Status",
    "Gateway",
];

#[derive(Debug, Default)]
pub struct CsvRenderer;

impl DocumentRenderer for CsvRenderer {
    fn file_extension(&self) -> &'static str {
        "csv"
    }

    fn render(&self, model: &ReportModel, style: &ReportStyle) -> Result<Vec<u8>, Box<dyn Error>> {
        log::info!("Rendering CSV document for site '{}'", model.site_name);
        let mut out = CsvWriter::default();

        // Cover
        out.section("Cover");
        out.row([model.cover.title.as_str()]);
        out.row(["Site", model.cover.site_name.as_str()]);
        for (label, value) in &model.cover.details {
            out.row([label.as_str(), value.as_str()]);
        }
        out.row(["Generated", model.cover.generated.as_str()]);

        // Summary
        out.blank();
        out.section("Summary");
        out.row([format!("Network Summary - {}", model.site_name)]);
        out.row(["Prefixes and Associated VLANs"]);
        out.row(SUMMARY_HEADERS);
        for s in &model.summary {
            out.row([
                s.network.to_string(),
                s.vlan_id
                    .map(|vid| vid.to_string())
                    .unwrap_or_else(|| "None".to_string()),
                s.vlan_name.clone().unwrap_or_else(|| "No VLAN".to_string()),
                s.gateway.map(|g| g.to_string()).unwrap_or_default(),
                s.description.clone(),
                s.used.to_string(),
                s.capacity.to_string(),
                s.utilization.to_string(),
            ]);
        }

        if !model.orphans.is_empty() {
            out.blank();
            out.row(["Orphan VLANs (Not Associated with Prefixes)"]);
            out.row(ORPHAN_HEADERS);
            for o in &model.orphans {
                out.row([
                    o.vid.to_string(),
                    o.name.clone(),
                    o.description.clone(),
                    o.status.clone(),
                ]);
            }
        }

        if !model.notes.is_empty() {
            out.blank();
            out.row(["Data Quality (VRF differs from containing prefix)"]);
            for note in &model.notes {
                out.row([note.to_string()]);
            }
        }

        for detail in &model.details {
            out.blank();
            render_detail(&mut out, detail, style);
        }

        log::debug!("CSV document: {} lines", out.lines);
        Ok(out.buf.into_bytes())
    }
}

fn render_detail(out: &mut CsvWriter, detail: &DetailSection, style: &ReportStyle) {
    out.section(&section_name(detail));
    out.row([format!("Prefix: {}", detail.network)]);
    out.row([format!(
        "VLAN: {}",
        detail.vlan.as_deref().unwrap_or("None")
    )]);
    out.row([format!("Description: {}", detail.description)]);
    out.row([format!("Role: {}", detail.role)]);
    out.row([format!("VRF: {}", detail.vrf)]);
    out.row([format!(
        "{}: {}",
        style.gateway_label,
        detail
            .gateway
            .map(|g| g.to_string())
            .unwrap_or_else(|| style.missing_label.clone())
    )]);
    out.row(DETAIL_HEADERS);
    for r in &detail.rows {
        out.row([
            r.address.to_string(),
            r.owner_name.clone(),
            r.owner_role.clone(),
            r.owner_model.clone(),
            r.interface.clone(),
            r.kind.clone(),
            r.status.clone(),
            if r.is_gateway {
                style.gateway_label.clone()
            } else {
                String::new()
            },
        ]);
    }
}

/// Section name of a prefix, `/` replaced and cut like a sheet name.
pub fn section_name(detail: &DetailSection) -> String {
    detail
        .network
        .to_string()
        .replace('/', "_")
        .chars()
        .take(MAX_SECTION_NAME)
        .collect()
}

#[derive(Default)]
struct CsvWriter {
    buf: String,
    lines: usize,
}

impl CsvWriter {
    fn section(&mut self, name: &str) {
        self.row([format!("[{name}]")]);
    }

    fn blank(&mut self) {
        self.buf.push('\n');
        self.lines += 1;
    }

    fn row<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let line = fields
            .into_iter()
            .map(|f| escape_csv_field(f.as_ref()))
            .collect::<Vec<String>>()
            .join(",");
        self.buf.push_str(&line);
        self.buf.push('\n');
        self.lines += 1;
    }
}

/// Quote a field when it contains a separator, quote or line break.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') || input.contains('\n') || input.contains('\r') {
        // excel does not like spaces after comma between fields, so none are added
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}
