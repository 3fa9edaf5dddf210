//! Domain models for the site network documentation.
//!
//! - [`Cidr`] - IPv4/IPv6 prefix math
//! - [`Site`], [`Prefix`], [`Vlan`], [`IpAddress`] - inventory entities
//! - [`ReportModel`] - the generated document

mod cidr;
mod inventory;
mod report;

// Re-export public types
pub use cidr::{
    addr_to_bits, bits_to_addr, broadcast_addr, cut_addr, get_cidr_mask, num_hosts,
    utilization, Cidr, EnumerationPolicy, HostIter, Utilization, MAX_LENGTH_V4, MAX_LENGTH_V6,
};
pub use inventory::{Assignment, IpAddress, Prefix, Site, TagRecord, Vlan, VlanKey, MAX_VID};
pub use report::{
    AddressRow, CoverSection, DataQualityNote, DetailSection, OrphanRow, ReportModel, SummaryRow,
};
