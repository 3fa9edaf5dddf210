//! Read-only inventory entities consumed by the report compiler.

use super::Cidr;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Inventory primary key of a VLAN record (not the 802.1Q tag).
pub type VlanKey = u64;

/// Highest usable 802.1Q VLAN id.
pub const MAX_VID: u16 = 4094;

/// A site, the scope key for every query.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Site {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub status: Option<String>,
    pub region: Option<String>,
    pub facility: Option<String>,
    pub physical_address: Option<String>,
    /// Autonomous system numbers, the first one is shown on the cover.
    #[serde(default)]
    pub asns: Vec<u32>,
}

/// An IP prefix owned by exactly one site.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Prefix {
    pub id: u64,
    pub prefix: Cidr,
    pub site_id: u64,
    pub vlan_id: Option<VlanKey>,
    /// Routing domain (VRF) name, `None` for the global table.
    pub vrf: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// A VLAN owned by a site.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Vlan {
    pub id: VlanKey,
    /// 802.1Q tag, 0-4094.
    #[serde(deserialize_with = "vid_in_range")]
    pub vid: u16,
    pub name: String,
    pub site_id: u64,
    pub description: Option<String>,
    pub status: Option<String>,
    pub role: Option<String>,
}

fn vid_in_range<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let vid = i64::deserialize(deserializer)?;
    u16::try_from(vid)
        .ok()
        .filter(|vid| *vid <= MAX_VID)
        .ok_or_else(|| de::Error::custom(format!("VLAN id {vid} out of range 0-{MAX_VID}")))
}

/// Tag attached to an IP address. A record without a slug is malformed.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TagRecord {
    pub slug: Option<String>,
    pub name: Option<String>,
}

/// A host address with its declared prefix length.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IpAddress {
    pub id: u64,
    pub address: Cidr,
    pub vrf: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub tags: Vec<TagRecord>,
    /// Raw object type of the assignment, e.g. `dcim.interface`.
    pub assigned_object_type: Option<String>,
    /// Raw assigned object as exported by the inventory.
    pub assigned_object: Option<serde_json::Value>,
}

impl IpAddress {
    /// Numeric value of the host address.
    pub fn bits(&self) -> u128 {
        self.address.bits()
    }
}

/// What an IP address is assigned to, resolved from the raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    DeviceInterface {
        device: String,
        role: Option<String>,
        model: Option<String>,
        interface: String,
    },
    VmInterface {
        virtual_machine: String,
        role: Option<String>,
        platform: Option<String>,
        interface: String,
    },
    /// Any object type without a dedicated resolver.
    Other { kind: String, description: String },
    Unassigned,
}

impl Assignment {
    /// Generic label shown in the "Type" column.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Assignment::DeviceInterface { .. } => "Device",
            Assignment::VmInterface { .. } => "VM",
            Assignment::Other { .. } => "Other",
            Assignment::Unassigned => "",
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assignment::DeviceInterface {
                device, interface, ..
            } => write!(f, "{device} [{interface}]"),
            Assignment::VmInterface {
                virtual_machine,
                interface,
                ..
            } => write!(f, "{virtual_machine} [{interface}]"),
            Assignment::Other { kind, description } => write!(f, "{description} ({kind})"),
            Assignment::Unassigned => write!(f, "unassigned"),
        }
    }
}
