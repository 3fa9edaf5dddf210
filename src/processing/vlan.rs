//! VLAN association with prefixes.
//!
//! Splits a site's VLANs into the ones referenced by at least one prefix and
//! the orphans nobody references.

use crate::models::{Prefix, Vlan, VlanKey};
use std::collections::BTreeSet;

/// Collect the VLAN of every prefix that has one.
pub fn associated_vlan_ids(prefixes: &[Prefix]) -> BTreeSet<VlanKey> {
    prefixes.iter().filter_map(|p| p.vlan_id).collect()
}

/// Site VLANs not in `associated`, ascending by VLAN id.
pub fn orphans<'a>(site_vlans: &'a [Vlan], associated: &BTreeSet<VlanKey>) -> Vec<&'a Vlan> {
    let mut orphans: Vec<&Vlan> = site_vlans
        .iter()
        .filter(|v| !associated.contains(&v.id))
        .collect();
    orphans.sort_by_key(|v| (v.vid, v.id));

    if orphans.is_empty() {
        log::info!("No orphan VLANs found - all VLANs are associated with prefixes");
    } else {
        log::warn!(
            "Found {} orphan VLANs (not associated with any prefix)",
            orphans.len()
        );
        for vlan in &orphans {
            log::debug!("  Orphan VLAN: {} - {}", vlan.vid, vlan.name);
        }
    }
    orphans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cidr;

    fn vlan(id: VlanKey, vid: u16) -> Vlan {
        Vlan {
            id,
            vid,
            name: format!("vlan{vid}"),
            site_id: 1,
            description: None,
            status: None,
            role: None,
        }
    }

    fn prefix(cidr: &str, vlan_id: Option<VlanKey>) -> Prefix {
        Prefix {
            id: 0,
            prefix: Cidr::new(cidr).unwrap(),
            site_id: 1,
            vlan_id,
            vrf: None,
            role: None,
            description: None,
            status: None,
        }
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let vlans = vec![vlan(1, 100), vlan(2, 200), vlan(3, 300), vlan(4, 50)];
        let prefixes = vec![
            prefix("10.0.0.0/24", Some(1)),
            prefix("10.0.1.0/24", Some(3)),
            prefix("10.0.2.0/24", None),
            // VLAN of another site
            prefix("10.0.3.0/24", Some(99)),
        ];

        let associated = associated_vlan_ids(&prefixes);
        let orphan_list = orphans(&vlans, &associated);

        let orphan_vids: Vec<u16> = orphan_list.iter().map(|v| v.vid).collect();
        assert_eq!(orphan_vids, vec![50, 200]);

        for v in &vlans {
            let is_orphan = orphan_list.iter().any(|o| o.id == v.id);
            assert_ne!(is_orphan, associated.contains(&v.id), "vlan {}", v.vid);
        }
    }

    #[test]
    fn test_no_orphans_is_valid() {
        let vlans = vec![vlan(1, 100)];
        let prefixes = vec![prefix("10.0.0.0/24", Some(1))];
        assert!(orphans(&vlans, &associated_vlan_ids(&prefixes)).is_empty());
        assert!(orphans(&[], &associated_vlan_ids(&[])).is_empty());
    }
}
