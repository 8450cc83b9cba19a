//! Stable DTOs and IDs used across the plateguard workspace.
//!
//! This crate is intentionally boring:
//! - the dietary preference enum and allergen catalog
//! - data types for the emitted report
//! - stable string IDs and codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod allergens;
pub mod diet;
pub mod explain;
pub mod ids;
pub mod receipt;

pub use allergens::{ALLERGEN_CATALOG, is_catalog_allergen};
pub use diet::DietaryPreference;
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    Finding, ItemKind, ItemRef, ItemVerdict, PlateguardData, PlateguardReport,
    PlateguardReportV1, ReportEnvelope, SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict,
};
