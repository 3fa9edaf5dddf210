//! Report model builder.
//!
//! Runs one ordered pass over a site's inventory:
//! `Init -> PrefixesLoaded -> VlansLoaded -> OrphansResolved -> Validated ->
//! CoverBuilt -> SummaryBuilt -> DetailsBuilt -> Done`.
//! A site without prefixes and VLANs stops at `Validated` with
//! [`BuildOutcome::NoData`]. Faults on single rows are collected in the
//! model and never abort the run.

use super::attribution::attribute;
use super::containment::ContainmentIndex;
use super::gateway::is_gateway;
use super::vlan::{associated_vlan_ids, orphans};
use crate::config::ReportConfig;
use crate::error::{ReportError, RowFault, RowResult, RowScope};
use crate::inventory::{AddressScope, InventoryQuery};
use crate::models::{
    utilization, AddressRow, Cidr, CoverSection, DetailSection, EnumerationPolicy, IpAddress,
    OrphanRow, Prefix, ReportModel, Site, SummaryRow, Vlan,
};
use crate::output::ReportStyle;
use chrono::DateTime;
use chrono_tz::Tz;
use itertools::{EitherOrBoth, Itertools};
use std::collections::BTreeSet;
use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BuildStage {
    Init,
    PrefixesLoaded,
    VlansLoaded,
    OrphansResolved,
    Validated,
    CoverBuilt,
    SummaryBuilt,
    DetailsBuilt,
    Done,
}

#[derive(Debug)]
pub enum BuildOutcome {
    Report(ReportModel),
    /// The site has neither prefixes nor VLANs; nothing is rendered.
    NoData { site: String },
}

/// Options that change what the builder emits.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    pub include_empty_prefixes: bool,
    pub show_unused_ips: bool,
    pub policy: EnumerationPolicy,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            include_empty_prefixes: true,
            show_unused_ips: true,
            policy: EnumerationPolicy::default(),
        }
    }
}

impl From<&ReportConfig> for BuildOptions {
    fn from(config: &ReportConfig) -> Self {
        BuildOptions {
            include_empty_prefixes: config.include_empty_prefixes,
            show_unused_ips: config.show_unused_ips,
            policy: EnumerationPolicy::new(config.enumerate_min_len),
        }
    }
}

/// Everything known about one prefix before rows are emitted.
struct PrefixFacts<'a> {
    prefix: &'a Prefix,
    vlan: Option<&'a Vlan>,
    contained: &'a [&'a IpAddress],
    /// Numeric values of the contained addresses tagged as gateway.
    gateways: BTreeSet<u128>,
}

impl<'a> PrefixFacts<'a> {
    fn first_gateway(&self) -> Option<IpAddr> {
        self.contained
            .iter()
            .find(|ip| self.gateways.contains(&ip.bits()))
            .map(|ip| ip.address.addr)
    }
}

pub struct ReportBuilder<'a> {
    inventory: &'a dyn InventoryQuery,
    options: BuildOptions,
    style: &'a ReportStyle,
    generated_at: DateTime<Tz>,
    stage: BuildStage,
    faults: Vec<RowFault>,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(
        inventory: &'a dyn InventoryQuery,
        options: BuildOptions,
        style: &'a ReportStyle,
        generated_at: DateTime<Tz>,
    ) -> ReportBuilder<'a> {
        ReportBuilder {
            inventory,
            options,
            style,
            generated_at,
            stage: BuildStage::Init,
            faults: Vec::new(),
        }
    }

    pub fn stage(&self) -> BuildStage {
        self.stage
    }

    fn advance(&mut self, next: BuildStage) {
        log::debug!("Build stage {:?} -> {:?}", self.stage, next);
        self.stage = next;
    }

    fn record(&mut self, fault: RowFault) {
        log::warn!("{fault}");
        self.faults.push(fault);
    }

    /// Keep decoded records, record the rest as faults.
    fn keep_valid<T>(&mut self, rows: Vec<RowResult<T>>) -> Vec<T> {
        let mut valid = Vec::with_capacity(rows.len());
        for row in rows {
            match row {
                Ok(record) => valid.push(record),
                Err(fault) => self.record(fault),
            }
        }
        valid
    }

    /// Build the document for `site`.
    pub fn build(&mut self, site: &Site) -> Result<BuildOutcome, ReportError> {
        log::info!("Collecting network data for site: {}", site.name);

        let prefixes = self
            .inventory
            .get_prefixes(site)
            .map_err(|e| ReportError::Inventory(format!("prefixes of {}: {e}", site.slug)))?;
        let prefixes = self.keep_valid(prefixes);
        log::info!("Found {} prefixes for site '{}'", prefixes.len(), site.name);
        if prefixes.is_empty() {
            log::warn!(
                "No prefixes found for site '{}' - check if prefixes have site assigned",
                site.name
            );
        }
        self.advance(BuildStage::PrefixesLoaded);

        let vlans = self
            .inventory
            .get_vlans(site)
            .map_err(|e| ReportError::Inventory(format!("VLANs of {}: {e}", site.slug)))?;
        let vlans = self.keep_valid(vlans);
        log::info!("Found {} VLANs for site '{}'", vlans.len(), site.name);
        if vlans.is_empty() {
            log::warn!(
                "No VLANs found for site '{}' - check if VLANs have site assigned",
                site.name
            );
        }
        self.advance(BuildStage::VlansLoaded);

        let associated = associated_vlan_ids(&prefixes);
        let orphan_vlans = orphans(&vlans, &associated);
        self.advance(BuildStage::OrphansResolved);

        self.advance(BuildStage::Validated);
        if prefixes.is_empty() && vlans.is_empty() {
            log::error!("No network data found for site '{}'", site.name);
            return Ok(BuildOutcome::NoData {
                site: site.name.clone(),
            });
        }

        let addresses = self
            .inventory
            .get_addresses_in(AddressScope::All)
            .map_err(|e| ReportError::Inventory(format!("IP addresses: {e}")))?;
        let addresses = self.keep_valid(addresses);
        let valid_prefixes: Vec<Prefix> = prefixes
            .iter()
            .filter_map(|p| match validate_prefix(p) {
                Ok(()) => Some(p.clone()),
                Err(fault) => {
                    self.record(fault);
                    None
                }
            })
            .collect();
        let index = ContainmentIndex::build(&valid_prefixes, &addresses);
        let notes = index.vrf_mismatches();
        let facts: Vec<PrefixFacts> = index
            .iter()
            .map(|(prefix, contained)| PrefixFacts {
                prefix: *prefix,
                vlan: prefix
                    .vlan_id
                    .and_then(|key| vlans.iter().find(|v| v.id == key)),
                contained: contained.as_slice(),
                gateways: contained
                    .iter()
                    .filter(|ip| is_gateway(self.inventory, ip))
                    .map(|ip| ip.bits())
                    .collect(),
            })
            .collect();

        let cover = self.build_cover(site);
        self.advance(BuildStage::CoverBuilt);

        let summary: Vec<SummaryRow> = facts.iter().map(|f| self.summary_row(f)).collect();
        let orphan_rows: Vec<OrphanRow> = orphan_vlans.iter().map(|v| self.orphan_row(v)).collect();
        self.advance(BuildStage::SummaryBuilt);

        let mut details = Vec::new();
        let mut skipped = 0;
        for f in &facts {
            match self.detail_section(f) {
                Some(section) => details.push(section),
                None => skipped += 1,
            }
        }
        log::info!(
            "Created {} prefix sections, skipped {} empty prefixes",
            details.len(),
            skipped
        );
        self.advance(BuildStage::DetailsBuilt);

        let model = ReportModel {
            site_name: site.name.clone(),
            site_slug: site.slug.clone(),
            cover,
            summary,
            orphans: orphan_rows,
            details,
            notes,
            faults: std::mem::take(&mut self.faults),
        };
        self.advance(BuildStage::Done);
        Ok(BuildOutcome::Report(model))
    }

    fn build_cover(&self, site: &Site) -> CoverSection {
        let style = self.style;
        let asn = site.asns.first().map(|asn| asn.to_string());
        CoverSection {
            title: style.title.clone(),
            site_name: site.name.clone(),
            details: vec![
                ("Site Status".to_string(), style.or_missing(site.status.as_deref())),
                ("Region".to_string(), style.or_missing(site.region.as_deref())),
                ("Facility".to_string(), style.or_missing(site.facility.as_deref())),
                (
                    "Physical Address".to_string(),
                    style.or_missing(site.physical_address.as_deref()),
                ),
                ("ASN".to_string(), style.or_missing(asn.as_deref())),
            ],
            generated: self.generated_at.format("%Y-%m-%d %H:%M:%S %Z").to_string(),
        }
    }

    fn summary_row(&self, facts: &PrefixFacts) -> SummaryRow {
        let used = facts.contained.len() as u128;
        let capacity = facts.prefix.prefix.capacity();
        SummaryRow {
            network: facts.prefix.prefix,
            vlan_id: facts.vlan.map(|v| v.vid),
            vlan_name: facts.vlan.map(|v| v.name.clone()),
            gateway: facts.first_gateway(),
            description: facts.prefix.description.clone().unwrap_or_default(),
            used,
            capacity,
            utilization: utilization(used, capacity),
        }
    }

    fn orphan_row(&self, vlan: &Vlan) -> OrphanRow {
        OrphanRow {
            vid: vlan.vid,
            name: vlan.name.clone(),
            description: vlan.description.clone().unwrap_or_default(),
            status: vlan.status.clone().unwrap_or_default(),
        }
    }

    fn detail_section(&mut self, facts: &PrefixFacts) -> Option<DetailSection> {
        let prefix = facts.prefix;
        if facts.contained.is_empty()
            && !self.options.include_empty_prefixes
            && !self.options.show_unused_ips
        {
            log::debug!("Skipping empty prefix: {}", prefix.prefix);
            return None;
        }

        let mut assigned: Vec<(u128, AddressRow)> = Vec::with_capacity(facts.contained.len());
        for ip in facts.contained {
            match self.address_row(ip, facts.gateways.contains(&ip.bits())) {
                Ok(row) => assigned.push((ip.bits(), row)),
                Err(fault) => self.record(fault),
            }
        }

        let hosts = if self.options.show_unused_ips {
            let hosts = prefix.prefix.enumerate_hosts(&self.options.policy);
            if hosts.is_none() {
                log::debug!(
                    "Prefix {} is larger than /{}, unused addresses not listed",
                    prefix.prefix,
                    self.options.policy.min_v4_len
                );
            }
            hosts
        } else {
            None
        };

        let rows: Vec<AddressRow> = match hosts {
            None => assigned.into_iter().map(|(_, row)| row).collect(),
            Some(hosts) => {
                // every contained record blocks its value, even if its row faulted
                let occupied: BTreeSet<u128> = facts.contained.iter().map(|ip| ip.bits()).collect();
                let free = hosts.filter(|h| !occupied.contains(&crate::models::addr_to_bits(*h)));
                free.merge_join_by(assigned, |host, (bits, _)| {
                    crate::models::addr_to_bits(*host).cmp(bits)
                })
                .map(|either| match either {
                    EitherOrBoth::Left(host) => self.available_row(host, prefix.prefix.len),
                    EitherOrBoth::Right((_, row)) | EitherOrBoth::Both(_, (_, row)) => row,
                })
                .collect()
            }
        };

        log::debug!(
            "Prefix {}: {} rows, {} IP addresses documented",
            prefix.prefix,
            rows.len(),
            rows.iter().filter(|r| !r.available).count()
        );

        let style = self.style;
        Some(DetailSection {
            network: prefix.prefix,
            vlan: facts.vlan.map(|v| format!("{} - {}", v.vid, v.name)),
            description: style.or_missing(prefix.description.as_deref()),
            role: style.or_missing(prefix.role.as_deref()),
            vrf: prefix.vrf.clone().unwrap_or_else(|| "Global".to_string()),
            gateway: facts.first_gateway(),
            rows,
        })
    }

    fn address_row(&self, ip: &IpAddress, gateway: bool) -> RowResult<AddressRow> {
        let attribution = attribute(self.inventory, ip)?;
        let style = self.style;
        Ok(AddressRow {
            address: ip.address,
            owner_name: attribution
                .owner_name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| style.unassigned_label.clone()),
            owner_role: style.or_missing(attribution.owner_role.as_deref()),
            owner_model: style.or_missing(attribution.owner_model.as_deref()),
            interface: style.or_missing(attribution.interface.as_deref()),
            kind: style.or_missing(attribution.kind.as_deref()),
            status: style.or_missing(ip.status.as_deref()),
            is_gateway: gateway,
            available: false,
        })
    }

    fn available_row(&self, host: IpAddr, len: u8) -> AddressRow {
        AddressRow {
            address: Cidr { addr: host, len },
            owner_name: String::new(),
            owner_role: String::new(),
            owner_model: String::new(),
            interface: String::new(),
            kind: String::new(),
            status: self.style.available_label.clone(),
            is_gateway: false,
            available: true,
        }
    }
}

/// A prefix must be written as its network address.
fn validate_prefix(prefix: &Prefix) -> RowResult<()> {
    let network = prefix.prefix.network();
    if network.addr != prefix.prefix.addr {
        return Err(RowFault::new(
            RowScope::Prefix,
            prefix.prefix,
            format!("host bits set, network is {network}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{Dataset, Record, Snapshot, SnapshotInventory};
    use crate::models::{TagRecord, Utilization};
    use chrono::TimeZone;
    use serde_json::json;

    fn generated_at() -> DateTime<Tz> {
        Tz::UTC.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
    }

    fn site() -> Site {
        Site {
            id: 1,
            name: "Lab".to_string(),
            slug: "lab".to_string(),
            ..Default::default()
        }
    }

    fn prefix(id: u64, cidr: &str, vlan_id: Option<u64>) -> Prefix {
        Prefix {
            id,
            prefix: Cidr::new(cidr).unwrap(),
            site_id: 1,
            vlan_id,
            vrf: None,
            role: None,
            description: None,
            status: None,
        }
    }

    fn vlan(id: u64, vid: u16, name: &str) -> Vlan {
        Vlan {
            id,
            vid,
            name: name.to_string(),
            site_id: 1,
            description: None,
            status: Some("active".to_string()),
            role: None,
        }
    }

    fn device_ip(id: u64, addr: &str, device: &str, gateway: bool) -> IpAddress {
        IpAddress {
            id,
            address: Cidr::new(addr).unwrap(),
            vrf: None,
            status: Some("active".to_string()),
            tags: if gateway {
                vec![TagRecord {
                    slug: Some("default-gateway".to_string()),
                    name: None,
                }]
            } else {
                vec![]
            },
            assigned_object_type: Some("dcim.interface".to_string()),
            assigned_object: Some(json!({
                "name": "eth0",
                "device": {"name": device, "role": "Server", "device_type": "R650"}
            })),
        }
    }

    fn inventory(dataset: Dataset) -> SnapshotInventory {
        SnapshotInventory::from_snapshot(Snapshot {
            main: dataset,
            branches: Default::default(),
        })
    }

    fn build(inv: &SnapshotInventory, options: BuildOptions) -> BuildOutcome {
        let scope = inv.activate(None).unwrap();
        let style = ReportStyle::default();
        let mut builder = ReportBuilder::new(&scope, options, &style, generated_at());
        let outcome = builder.build(&site()).unwrap();
        match &outcome {
            BuildOutcome::Report(_) => assert_eq!(builder.stage(), BuildStage::Done),
            BuildOutcome::NoData { .. } => assert_eq!(builder.stage(), BuildStage::Validated),
        }
        outcome
    }

    fn report(outcome: BuildOutcome) -> ReportModel {
        match outcome {
            BuildOutcome::Report(model) => model,
            BuildOutcome::NoData { site } => panic!("unexpected NoData for {site}"),
        }
    }

    #[test]
    fn test_slash24_with_unused_addresses() {
        let inv = inventory(Dataset::from_records(
            vec![site()],
            vec![prefix(1, "10.1.0.0/24", Some(1))],
            vec![vlan(1, 100, "servers")],
            vec![
                device_ip(1, "10.1.0.1/24", "rtr-01", true),
                device_ip(2, "10.1.0.50/24", "srv-01", false),
                device_ip(3, "10.1.0.254/24", "srv-02", false),
            ],
        ));
        let model = report(build(&inv, BuildOptions::default()));

        let detail = &model.details[0];
        assert_eq!(detail.rows.len(), 254);
        assert_eq!(detail.assigned_rows().count(), 3);
        assert_eq!(detail.available_rows().count(), 251);
        assert!(detail.rows.iter().all(|r| r.available || r.owner_name != ""));
        let gateways: Vec<&AddressRow> = detail.rows.iter().filter(|r| r.is_gateway).collect();
        assert_eq!(gateways.len(), 1);
        assert_eq!(gateways[0].owner_name, "rtr-01");
        assert_eq!(detail.rows[0].address.to_string(), "10.1.0.1/24");
        assert_eq!(detail.rows[1].address.to_string(), "10.1.0.2/24");
        assert_eq!(detail.rows[1].status, "Available");
        assert_eq!(detail.rows[253].owner_name, "srv-02");
        let values: Vec<u128> = detail.rows.iter().map(|r| r.address.bits()).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));

        let summary = &model.summary[0];
        assert_eq!(summary.used, 3);
        assert_eq!(summary.capacity, 254);
        assert_eq!(summary.utilization, Utilization::Percent(1.2));
        assert_eq!(summary.gateway, Some("10.1.0.1".parse().unwrap()));
        assert_eq!(summary.vlan_id, Some(100));
    }

    #[test]
    fn test_slash30_without_vlans() {
        let inv = inventory(Dataset::from_records(
            vec![site()],
            vec![prefix(1, "10.9.0.0/30", None)],
            vec![],
            vec![],
        ));
        let model = report(build(&inv, BuildOptions::default()));
        assert_eq!(model.summary[0].capacity, 2);
        assert_eq!(model.summary[0].utilization.to_string(), "0.0%");
        assert_eq!(model.summary[0].vlan_id, None);
        assert_eq!(model.details[0].available_rows().count(), 2);

        let inv = inventory(Dataset::from_records(
            vec![site()],
            vec![prefix(1, "10.9.0.0/30", None)],
            vec![],
            vec![device_ip(1, "10.9.0.1/30", "rtr-01", false)],
        ));
        let model = report(build(&inv, BuildOptions::default()));
        assert_eq!(model.summary[0].utilization.to_string(), "50.0%");
    }

    #[test]
    fn test_orphan_vlan_not_in_summary() {
        let inv = inventory(Dataset::from_records(
            vec![site()],
            vec![prefix(1, "10.1.0.0/24", Some(1))],
            vec![vlan(1, 100, "servers"), vlan(2, 200, "voice")],
            vec![],
        ));
        let model = report(build(&inv, BuildOptions::default()));
        assert_eq!(model.orphans.len(), 1);
        assert_eq!(model.orphans[0].vid, 200);
        assert!(model.summary.iter().all(|s| s.vlan_id != Some(200)));
    }

    #[test]
    fn test_no_data() {
        let inv = inventory(Dataset {
            sites: vec![site()],
            ..Default::default()
        });
        match build(&inv, BuildOptions::default()) {
            BuildOutcome::NoData { site } => assert_eq!(site, "Lab"),
            other => panic!("expected NoData, got {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_assignment_kind() {
        let mut ip = device_ip(1, "10.1.0.7/24", "unused", false);
        ip.assigned_object_type = Some("ipam.fhrpgroup".to_string());
        ip.assigned_object = Some(json!({"display": "HSRP 7"}));
        let inv = inventory(Dataset::from_records(
            vec![site()],
            vec![prefix(1, "10.1.0.0/24", None)],
            vec![],
            vec![ip],
        ));
        let options = BuildOptions {
            show_unused_ips: false,
            ..Default::default()
        };
        let model = report(build(&inv, options));
        let row = &model.details[0].rows[0];
        assert_eq!(row.owner_name, "HSRP 7");
        assert_eq!(row.kind, "Other");
        assert_eq!(row.interface, "N/A");
        assert!(model.faults.is_empty());
    }

    #[test]
    fn test_empty_prefix_skip_rules() {
        let dataset = Dataset::from_records(
            vec![site()],
            vec![prefix(1, "10.1.0.0/24", None), prefix(2, "10.2.0.0/16", None)],
            vec![],
            vec![device_ip(1, "10.1.0.9/24", "srv", false)],
        );
        let inv = inventory(dataset);

        let skip = BuildOptions {
            include_empty_prefixes: false,
            show_unused_ips: false,
            ..Default::default()
        };
        let model = report(build(&inv, skip));
        assert_eq!(model.summary.len(), 2);
        assert_eq!(model.details.len(), 1);
        assert_eq!(model.details[0].network.to_string(), "10.1.0.0/24");

        let keep = BuildOptions {
            include_empty_prefixes: true,
            show_unused_ips: false,
            ..Default::default()
        };
        let model = report(build(&inv, keep));
        assert_eq!(model.details.len(), 2);
        // /16 is never enumerated
        assert!(model.details[1].rows.is_empty());
    }

    #[test]
    fn test_row_fault_keeps_value_out_of_available() {
        let mut broken = device_ip(2, "10.1.0.20/24", "x", false);
        broken.assigned_object = Some(json!({"name": "Gi0/1"}));
        let inv = inventory(Dataset::from_records(
            vec![site()],
            vec![prefix(1, "10.1.0.0/24", None)],
            vec![],
            vec![device_ip(1, "10.1.0.10/24", "srv", false), broken],
        ));
        let model = report(build(&inv, BuildOptions::default()));
        let detail = &model.details[0];
        assert_eq!(detail.rows.len(), 253);
        assert!(detail
            .rows
            .iter()
            .all(|r| r.address.addr.to_string() != "10.1.0.20"));
        assert_eq!(model.faults.len(), 1);
        assert_eq!(model.faults[0].scope, RowScope::Address);
        assert_eq!(model.summary[0].used, 2);
    }

    #[test]
    fn test_malformed_prefix_is_skipped() {
        let inv = inventory(Dataset::from_records(
            vec![site()],
            vec![prefix(1, "10.1.0.5/24", None), prefix(2, "10.2.0.0/24", None)],
            vec![],
            vec![],
        ));
        let model = report(build(&inv, BuildOptions::default()));
        assert_eq!(model.summary.len(), 1);
        assert_eq!(model.summary[0].network.to_string(), "10.2.0.0/24");
        assert_eq!(model.faults.len(), 1);
        assert_eq!(model.faults[0].scope, RowScope::Prefix);
    }

    #[test]
    fn test_undecodable_records_are_row_faults() {
        let mut dataset = Dataset::from_records(
            vec![site()],
            vec![prefix(1, "10.1.0.0/24", Some(1))],
            vec![vlan(1, 100, "servers")],
            vec![device_ip(1, "10.1.0.10/24", "srv", false)],
        );
        dataset.prefixes.push(Record::parse(json!(
            {"id": 2, "prefix": "10.1.1.0/33", "site_id": 1}
        )));
        dataset.vlans.push(Record::parse(json!(
            {"id": 2, "vid": 4095, "name": "reserved", "site_id": 1}
        )));
        dataset.vlans.push(Record::parse(json!(
            {"id": 3, "vid": 70000, "name": "other-site", "site_id": 2}
        )));
        dataset.ip_addresses.push(Record::parse(json!(
            {"id": 2, "address": "10.1.0.999/24"}
        )));
        let model = report(build(&inventory(dataset), BuildOptions::default()));

        let scopes: Vec<RowScope> = model.faults.iter().map(|f| f.scope).collect();
        assert_eq!(scopes, vec![RowScope::Prefix, RowScope::Vlan, RowScope::Address]);
        assert_eq!(model.faults[1].subject, "4095");
        // the out-of-range VLAN is in no table
        assert!(model.orphans.is_empty());
        assert_eq!(model.summary.len(), 1);
        assert_eq!(model.summary[0].vlan_id, Some(100));
        assert_eq!(model.details[0].assigned_rows().count(), 1);
    }

    #[test]
    fn test_cover_defaults() {
        let inv = inventory(Dataset::from_records(
            vec![site()],
            vec![],
            vec![vlan(1, 10, "only")],
            vec![],
        ));
        let model = report(build(&inv, BuildOptions::default()));
        assert_eq!(model.cover.title, "Network Documentation");
        assert_eq!(model.cover.details[0], ("Site Status".to_string(), "N/A".to_string()));
        assert_eq!(model.cover.details[4], ("ASN".to_string(), "N/A".to_string()));
        assert_eq!(model.cover.generated, "2026-10-16 09:30:00 UTC");
        assert_eq!(model.orphans.len(), 1);
        assert!(model.details.is_empty());
    }
}
