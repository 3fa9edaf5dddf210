//! Interpretation of raw assignment records.
//!
//! Each known object type has its own resolver; everything else becomes
//! [`Assignment::Other`] carrying the stringified owner.

use crate::models::Assignment;
use serde_json::Value;
use std::error::Error;

/// Object type of a physical device interface.
pub const DEVICE_INTERFACE_TYPE: &str = "dcim.interface";
/// Object type of a virtual machine interface.
pub const VM_INTERFACE_TYPE: &str = "virtualization.vminterface";

/// Resolve a raw `(assigned_object_type, assigned_object)` pair.
pub fn resolve_raw_assignment(
    object_type: Option<&str>,
    object: Option<&Value>,
) -> Result<Assignment, Box<dyn Error>> {
    let object = match object {
        None | Some(Value::Null) => return Ok(Assignment::Unassigned),
        Some(object) => object,
    };

    match object_type {
        Some(DEVICE_INTERFACE_TYPE) => resolve_device_interface(object),
        Some(VM_INTERFACE_TYPE) => resolve_vm_interface(object),
        Some(other) => Ok(resolve_other(other, object)),
        None => Ok(resolve_other("unknown", object)),
    }
}

fn resolve_device_interface(object: &Value) -> Result<Assignment, Box<dyn Error>> {
    let interface = required_str(object, "name")?;
    let device = object
        .get("device")
        .filter(|d| d.is_object())
        .ok_or("interface has no device")?;

    Ok(Assignment::DeviceInterface {
        device: required_str(device, "name")?,
        role: named(device, "role", "name"),
        model: named(device, "device_type", "model"),
        interface,
    })
}

fn resolve_vm_interface(object: &Value) -> Result<Assignment, Box<dyn Error>> {
    let interface = required_str(object, "name")?;
    let vm = object
        .get("virtual_machine")
        .filter(|vm| vm.is_object())
        .ok_or("VM interface has no virtual machine")?;

    Ok(Assignment::VmInterface {
        virtual_machine: required_str(vm, "name")?,
        role: named(vm, "role", "name"),
        platform: named(vm, "platform", "name"),
        interface,
    })
}

fn resolve_other(kind: &str, object: &Value) -> Assignment {
    let description = ["display", "name"]
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| match object {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });
    Assignment::Other {
        kind: kind.to_string(),
        description,
    }
}

fn required_str(object: &Value, key: &str) -> Result<String, Box<dyn Error>> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| format!("missing field '{key}'").into())
}

/// Related object given either as a plain string or as `{ <field>: "..." }`.
fn named(object: &Value, key: &str, field: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get(field).and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}
