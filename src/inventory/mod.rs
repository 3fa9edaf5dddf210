//! Read-only access to the host inventory.
//!
//! - [`InventoryQuery`] - the contract the report compiler consumes
//! - [`snapshot`] - JSON inventory export with optional branches
//! - [`assignment`] - interpretation of raw assignment records
//! - [`record`] - per-record decoding, a malformed entry is a row fault

mod assignment;
mod record;
mod snapshot;

use crate::error::RowResult;
use crate::models::{Assignment, Cidr, IpAddress, Prefix, Site, Vlan};
use std::error::Error;

// Re-export public types and functions
pub use assignment::{resolve_raw_assignment, DEVICE_INTERFACE_TYPE, VM_INTERFACE_TYPE};
pub use record::Record;
pub use snapshot::{read_snapshot, BranchScope, Dataset, Snapshot, SnapshotInventory};

/// Which addresses to fetch.
#[derive(Debug, Clone, Copy)]
pub enum AddressScope<'a> {
    All,
    /// Hint only; callers recompute containment themselves.
    Within(&'a Cidr),
}

/// Read-only queries the report compiler runs against the inventory.
///
/// Record lists carry one [`RowResult`] per record; a record that cannot be
/// decoded is returned as its fault and never fails the query.
pub trait InventoryQuery {
    /// Look up a site by slug.
    fn site(&self, slug: &str) -> Result<Option<Site>, Box<dyn Error>>;

    /// Prefixes of `site`, ascending by network.
    fn get_prefixes(&self, site: &Site) -> Result<Vec<RowResult<Prefix>>, Box<dyn Error>>;

    /// VLANs of `site`, ascending by VLAN id.
    fn get_vlans(&self, site: &Site) -> Result<Vec<RowResult<Vlan>>, Box<dyn Error>>;

    fn get_addresses_in(
        &self,
        scope: AddressScope<'_>,
    ) -> Result<Vec<RowResult<IpAddress>>, Box<dyn Error>>;

    fn resolve_assignment(&self, address: &IpAddress) -> Result<Assignment, Box<dyn Error>>;

    fn has_tag(&self, address: &IpAddress, slug: &str) -> Result<bool, Box<dyn Error>>;
}
