//! Default gateway detection.

use crate::config::GATEWAY_TAG_SLUG;
use crate::inventory::InventoryQuery;
use crate::models::IpAddress;

/// True iff `address` carries the `default-gateway` tag.
///
/// Lookup errors are logged and count as "not a gateway".
pub fn is_gateway(inventory: &dyn InventoryQuery, address: &IpAddress) -> bool {
    match inventory.has_tag(address, GATEWAY_TAG_SLUG) {
        Ok(tagged) => tagged,
        Err(e) => {
            log::warn!(
                "Error checking gateway tag on {}: {} (treated as not a gateway)",
                address.address,
                e
            );
            false
        }
    }
}
