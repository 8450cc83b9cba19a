//! Config parsing and profile/preset resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{PlateguardConfigV1, RuleConfig, SCHEMA_CONFIG_V1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `plateguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PlateguardConfigV1> {
    let cfg: PlateguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config and user preferences (profile + overrides + per-rule config).
pub fn resolve_config(
    cfg: PlateguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
