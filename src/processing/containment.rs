//! Address containment per prefix.
//!
//! Containment is recomputed from the raw address values instead of trusting
//! the VRF linkage stored in the inventory; disagreements between the two are
//! reported as [`DataQualityNote`]s.

use crate::models::{DataQualityNote, IpAddress, Prefix};

/// Addresses numerically contained in each prefix, in prefix order.
#[derive(Debug)]
pub struct ContainmentIndex<'a> {
    entries: Vec<(&'a Prefix, Vec<&'a IpAddress>)>,
}

impl<'a> ContainmentIndex<'a> {
    /// Match every address against every prefix.
    pub fn build(prefixes: &'a [Prefix], addresses: &'a [IpAddress]) -> ContainmentIndex<'a> {
        let entries = prefixes
            .iter()
            .map(|prefix| {
                let mut contained: Vec<&IpAddress> = addresses
                    .iter()
                    .filter(|ip| prefix.prefix.contains(ip.address.addr))
                    .collect();
                contained.sort_by_key(|ip| ip.bits());
                log::debug!(
                    "Found {} IP addresses in prefix {}",
                    contained.len(),
                    prefix.prefix
                );
                (prefix, contained)
            })
            .collect();
        ContainmentIndex { entries }
    }

    pub fn addresses_in(&self, prefix: &Prefix) -> &[&'a IpAddress] {
        self.entries
            .iter()
            .find(|(p, _)| p.id == prefix.id && p.prefix == prefix.prefix)
            .map(|(_, ips)| ips.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'a Prefix, Vec<&'a IpAddress>)> {
        self.entries.iter()
    }

    /// Contained addresses whose VRF differs from their prefix's VRF.
    pub fn vrf_mismatches(&self) -> Vec<DataQualityNote> {
        let mut notes = Vec::new();
        for (prefix, ips) in &self.entries {
            for ip in ips.iter().filter(|ip| ip.vrf != prefix.vrf) {
                log::warn!(
                    "Data quality: {} (vrf {}) is inside {} (vrf {}), using computed containment",
                    ip.address,
                    ip.vrf.as_deref().unwrap_or("global"),
                    prefix.prefix,
                    prefix.vrf.as_deref().unwrap_or("global"),
                );
                notes.push(DataQualityNote {
                    prefix: prefix.prefix,
                    address: ip.address,
                    prefix_vrf: prefix.vrf.clone(),
                    address_vrf: ip.vrf.clone(),
                });
            }
        }
        notes
    }
}
