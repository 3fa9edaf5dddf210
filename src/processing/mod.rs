//! Report compilation logic.
//!
//! - [`containment`] - which addresses fall inside which prefix
//! - [`gateway`] - default gateway detection
//! - [`vlan`] - VLAN association and orphan detection
//! - [`attribution`] - device / VM / interface owner of an address
//! - [`builder`] - assembles the [`crate::models::ReportModel`]

mod attribution;
mod builder;
mod containment;
mod gateway;
mod vlan;

// Re-export public functions
pub use attribution::{attribute, Attribution};
pub use builder::{BuildOptions, BuildOutcome, BuildStage, ReportBuilder};
pub use containment::ContainmentIndex;
pub use gateway::is_gateway;
pub use vlan::{associated_vlan_ids, orphans};
