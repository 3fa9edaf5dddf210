//! In-memory document produced by the builder and consumed by renderers.

use super::{Cidr, Utilization};
use crate::error::RowFault;
use std::net::IpAddr;

/// Site details shown on the first page.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverSection {
    pub title: String,
    pub site_name: String,
    /// (label, value) pairs, missing values already rendered as `N/A`.
    pub details: Vec<(String, String)>,
    pub generated: String,
}

/// One summary line per prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub network: Cidr,
    pub vlan_id: Option<u16>,
    pub vlan_name: Option<String>,
    pub gateway: Option<IpAddr>,
    pub description: String,
    pub used: u128,
    pub capacity: u128,
    pub utilization: Utilization,
}

/// A VLAN not referenced by any prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanRow {
    pub vid: u16,
    pub name: String,
    pub description: String,
    pub status: String,
}

/// One row of a prefix detail table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRow {
    pub address: Cidr,
    pub owner_name: String,
    pub owner_role: String,
    pub owner_model: String,
    pub interface: String,
    pub kind: String,
    pub status: String,
    pub is_gateway: bool,
    /// Enumerated host with no assignment record.
    pub available: bool,
}

/// Detail section for a single prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSection {
    pub network: Cidr,
    /// `"100 - servers"` or `None` when the prefix has no VLAN.
    pub vlan: Option<String>,
    pub description: String,
    pub role: String,
    pub vrf: String,
    pub gateway: Option<IpAddr>,
    pub rows: Vec<AddressRow>,
}

impl DetailSection {
    pub fn assigned_rows(&self) -> impl Iterator<Item = &AddressRow> {
        self.rows.iter().filter(|r| !r.available)
    }

    pub fn available_rows(&self) -> impl Iterator<Item = &AddressRow> {
        self.rows.iter().filter(|r| r.available)
    }
}

/// An address found inside a prefix whose stored VRF disagrees with the
/// prefix's VRF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataQualityNote {
    pub prefix: Cidr,
    pub address: Cidr,
    pub prefix_vrf: Option<String>,
    pub address_vrf: Option<String>,
}

impl std::fmt::Display for DataQualityNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (vrf {}) contained in {} (vrf {})",
            self.address,
            self.address_vrf.as_deref().unwrap_or("global"),
            self.prefix,
            self.prefix_vrf.as_deref().unwrap_or("global"),
        )
    }
}

/// The complete document for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportModel {
    pub site_name: String,
    pub site_slug: String,
    pub cover: CoverSection,
    pub summary: Vec<SummaryRow>,
    pub orphans: Vec<OrphanRow>,
    pub details: Vec<DetailSection>,
    pub notes: Vec<DataQualityNote>,
    pub faults: Vec<RowFault>,
}

impl ReportModel {
    pub fn detail_for(&self, network: &Cidr) -> Option<&DetailSection> {
        self.details.iter().find(|d| &d.network == network)
    }
}
