//! JSON inventory export.
//!
//! The export holds the main dataset plus optional named branches, each a
//! complete alternate dataset. Queries only run through a [`BranchScope`], so
//! every read of a run happens inside one activated context.

use super::{resolve_raw_assignment, AddressScope, InventoryQuery, Record};
use crate::error::{ReportError, RowResult, RowScope};
use crate::models::{Assignment, IpAddress, Prefix, Site, Vlan};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;

/// One complete set of inventory records.
///
/// Prefixes, VLANs and addresses are decoded one record at a time, see
/// [`Record`].
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Dataset {
    #[serde(default)]
    pub sites: Vec<Site>,
    #[serde(default)]
    pub prefixes: Vec<Record<Prefix>>,
    #[serde(default)]
    pub vlans: Vec<Record<Vlan>>,
    #[serde(default)]
    pub ip_addresses: Vec<Record<IpAddress>>,
}

impl Dataset {
    /// Dataset of already decoded records.
    pub fn from_records(
        sites: Vec<Site>,
        prefixes: Vec<Prefix>,
        vlans: Vec<Vlan>,
        ip_addresses: Vec<IpAddress>,
    ) -> Dataset {
        Dataset {
            sites,
            prefixes: prefixes.into_iter().map(Record::from).collect(),
            vlans: vlans.into_iter().map(Record::from).collect(),
            ip_addresses: ip_addresses.into_iter().map(Record::from).collect(),
        }
    }

    fn malformed(&self) -> usize {
        self.prefixes.iter().filter(|r| r.valid().is_none()).count()
            + self.vlans.iter().filter(|r| r.valid().is_none()).count()
            + self.ip_addresses.iter().filter(|r| r.valid().is_none()).count()
    }
}

/// Inventory export as stored on disk.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Snapshot {
    #[serde(flatten)]
    pub main: Dataset,
    /// Alternate data contexts keyed by branch name.
    #[serde(default)]
    pub branches: BTreeMap<String, Dataset>,
}

/// Read an inventory export from `path`.
///
/// # Returns
/// * `Ok(SnapshotInventory)` - The parsed export
/// * `Err` - If the file is missing or the JSON does not match, with the JSON path of the error
pub fn read_snapshot(path: &Path) -> Result<SnapshotInventory, Box<dyn Error>> {
    if !path.exists() {
        return Err(format!("Snapshot file does not exist: {}", path.display()).into());
    }
    log::info!("Reading inventory snapshot: {}", path.display());
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading snapshot {}: {e}", path.display()))?;

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let snapshot: Snapshot = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        format!(
            "Error parsing snapshot {}: path={} error={}",
            path.display(),
            e.path(),
            e
        )
    })?;

    log::info!(
        "Snapshot: {} sites, {} prefixes, {} VLANs, {} IP addresses, {} branches",
        snapshot.main.sites.len(),
        snapshot.main.prefixes.len(),
        snapshot.main.vlans.len(),
        snapshot.main.ip_addresses.len(),
        snapshot.branches.len()
    );
    Ok(SnapshotInventory::from_snapshot(snapshot))
}

/// Inventory backed by an in-memory [`Snapshot`].
#[derive(Debug, Default)]
pub struct SnapshotInventory {
    snapshot: Snapshot,
}

impl SnapshotInventory {
    pub fn from_snapshot(snapshot: Snapshot) -> SnapshotInventory {
        SnapshotInventory { snapshot }
    }

    /// Activate the main dataset or a named branch.
    pub fn activate<'a>(&'a self, branch: Option<&'a str>) -> Result<BranchScope<'a>, ReportError> {
        let data = match branch {
            None => &self.snapshot.main,
            Some(name) => self
                .snapshot
                .branches
                .get(name)
                .ok_or_else(|| ReportError::UnknownBranch(name.to_string()))?,
        };
        log::info!("Activated data context: {}", branch.unwrap_or("main"));
        let malformed = data.malformed();
        if malformed > 0 {
            log::warn!("{malformed} malformed records in this data context, reported per row");
        }
        Ok(BranchScope { branch, data })
    }
}

/// A single activated data context.
#[derive(Debug, Clone, Copy)]
pub struct BranchScope<'a> {
    branch: Option<&'a str>,
    data: &'a Dataset,
}

impl<'a> BranchScope<'a> {
    pub fn branch(&self) -> Option<&'a str> {
        self.branch
    }
}

impl<'a> InventoryQuery for BranchScope<'a> {
    fn site(&self, slug: &str) -> Result<Option<Site>, Box<dyn Error>> {
        Ok(self.data.sites.iter().find(|s| s.slug == slug).cloned())
    }

    fn get_prefixes(&self, site: &Site) -> Result<Vec<RowResult<Prefix>>, Box<dyn Error>> {
        let mut prefixes: Vec<RowResult<Prefix>> = self
            .data
            .prefixes
            .iter()
            .filter(|r| r.belongs_to(site.id, |p| p.site_id))
            .map(|r| r.decoded(RowScope::Prefix, "prefix"))
            .collect();
        prefixes.sort_by_key(|p| p.as_ref().ok().map(|p| p.prefix.network()));
        Ok(prefixes)
    }

    fn get_vlans(&self, site: &Site) -> Result<Vec<RowResult<Vlan>>, Box<dyn Error>> {
        let mut vlans: Vec<RowResult<Vlan>> = self
            .data
            .vlans
            .iter()
            .filter(|r| r.belongs_to(site.id, |v| v.site_id))
            .map(|r| r.decoded(RowScope::Vlan, "vid"))
            .collect();
        vlans.sort_by_key(|v| v.as_ref().ok().map(|v| (v.vid, v.id)));
        Ok(vlans)
    }

    fn get_addresses_in(
        &self,
        scope: AddressScope<'_>,
    ) -> Result<Vec<RowResult<IpAddress>>, Box<dyn Error>> {
        let mut addresses: Vec<RowResult<IpAddress>> = match scope {
            AddressScope::All => self
                .data
                .ip_addresses
                .iter()
                .map(|r| r.decoded(RowScope::Address, "address"))
                .collect(),
            // a malformed address cannot be placed inside any prefix
            AddressScope::Within(cidr) => self
                .data
                .ip_addresses
                .iter()
                .filter_map(Record::valid)
                .filter(|ip| cidr.contains(ip.address.addr))
                .cloned()
                .map(Ok)
                .collect(),
        };
        addresses.sort_by_key(|ip| ip.as_ref().ok().map(|ip| ip.address));
        Ok(addresses)
    }

    fn resolve_assignment(&self, address: &IpAddress) -> Result<Assignment, Box<dyn Error>> {
        resolve_raw_assignment(
            address.assigned_object_type.as_deref(),
            address.assigned_object.as_ref(),
        )
    }

    fn has_tag(&self, address: &IpAddress, slug: &str) -> Result<bool, Box<dyn Error>> {
        if address
            .tags
            .iter()
            .any(|t| t.slug.as_deref() == Some(slug))
        {
            return Ok(true);
        }
        if let Some(bad) = address.tags.iter().find(|t| t.slug.is_none()) {
            return Err(format!(
                "malformed tag record on {}: {:?} has no slug",
                address.address, bad.name
            )
            .into());
        }
        Ok(false)
    }
}
