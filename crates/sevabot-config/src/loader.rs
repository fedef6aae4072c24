// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./sevabot.toml` > `~/.config/sevabot/sevabot.toml`
//! > `/etc/sevabot/sevabot.toml` with environment variable overrides via the
//! `SEVABOT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::SevabotConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/sevabot/sevabot.toml` (system-wide)
/// 3. `~/.config/sevabot/sevabot.toml` (user XDG config)
/// 4. `./sevabot.toml` (local directory)
/// 5. `SEVABOT_*` environment variables
pub fn load_config() -> Result<SevabotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SevabotConfig::default()))
        .merge(Toml::file("/etc/sevabot/sevabot.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("sevabot/sevabot.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("sevabot.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<SevabotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SevabotConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SevabotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SevabotConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `SEVABOT_CHANNEL_OPERATOR_ID` must map
/// to `channel.operator_id`, not `channel.operator.id`.
fn env_provider() -> Env {
    Env::prefixed("SEVABOT_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("channel_", "channel.", 1)
            .replacen("intake_", "intake.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
