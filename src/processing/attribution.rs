//! Device / VM / interface attribution of an IP address.

use crate::error::{RowFault, RowResult, RowScope};
use crate::inventory::InventoryQuery;
use crate::models::{Assignment, IpAddress};

/// Owner details of an assigned address; empty fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribution {
    pub owner_name: Option<String>,
    pub owner_role: Option<String>,
    pub owner_model: Option<String>,
    pub interface: Option<String>,
    pub kind: Option<String>,
}

impl From<Assignment> for Attribution {
    fn from(assignment: Assignment) -> Self {
        let kind = Some(assignment.kind_label().to_string()).filter(|k| !k.is_empty());
        match assignment {
            Assignment::DeviceInterface {
                device,
                role,
                model,
                interface,
            } => Attribution {
                owner_name: Some(device),
                owner_role: role,
                owner_model: model,
                interface: Some(interface),
                kind,
            },
            Assignment::VmInterface {
                virtual_machine,
                role,
                platform,
                interface,
            } => Attribution {
                owner_name: Some(virtual_machine),
                owner_role: role,
                owner_model: platform,
                interface: Some(interface),
                kind,
            },
            Assignment::Other { description, .. } => Attribution {
                owner_name: Some(description),
                kind,
                ..Default::default()
            },
            Assignment::Unassigned => Attribution::default(),
        }
    }
}

/// Resolve who owns `address`; a malformed assignment is a row fault.
pub fn attribute(inventory: &dyn InventoryQuery, address: &IpAddress) -> RowResult<Attribution> {
    let assignment = inventory
        .resolve_assignment(address)
        .map_err(|e| RowFault::new(RowScope::Address, address.address, e))?;
    match &assignment {
        Assignment::Unassigned => log::debug!("IP {} has no assigned object", address.address),
        Assignment::Other { kind, .. } => {
            log::debug!("IP {} -> Other: {}", address.address, kind)
        }
        other => log::debug!("IP {} -> {}: {}", address.address, other.kind_label(), other),
    }
    Ok(assignment.into())
}
