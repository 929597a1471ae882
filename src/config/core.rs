use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use std::path::Path;

use super::HookwardenConfig;

// Embed the default config at compile time
pub const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Repository config files, lowest priority first
const REPO_CONFIG_FILES: [&str; 4] = [
    "hookwarden.toml",
    "hookwarden.json",
    "hookwarden.yaml",
    "hookwarden.yml",
];

impl HookwardenConfig {
    /// Built-in configuration only
    pub fn defaults() -> Result<Self> {
        Figment::from(Toml::string(DEFAULT_CONFIG))
            .extract()
            .context("Embedded default configuration is invalid")
    }

    /// Load the effective configuration for the working tree at `root`.
    ///
    /// Layers, later wins: embedded defaults, then either `custom` or the
    /// `hookwarden.{toml,json,yaml,yml}` files in `root`, then `HOOKWARDEN_*`
    /// environment variables.
    pub fn load(root: &Path, custom: Option<&Path>) -> Result<Self> {
        Self::figment(root, custom)?
            .extract()
            .context("Invalid hookwarden configuration")
    }

    /// The merged provider stack, before extraction
    pub fn figment(root: &Path, custom: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(custom_path) = custom {
            if !custom_path.is_file() {
                anyhow::bail!("Config file not found: {}", custom_path.display());
            }
            tracing::debug!("Using custom config {}", custom_path.display());
            figment = match custom_path.extension().and_then(|e| e.to_str()) {
                Some("json") => figment.merge(Json::file(custom_path)),
                Some("yaml" | "yml") => figment.merge(Yaml::file(custom_path)),
                _ => figment.merge(Toml::file(custom_path)),
            };
        } else {
            for name in REPO_CONFIG_FILES {
                let path = root.join(name);
                if !path.is_file() {
                    continue;
                }
                tracing::debug!("Merging repository config {}", path.display());
                figment = match name.rsplit('.').next() {
                    Some("json") => figment.merge(Json::file(path)),
                    Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
                    _ => figment.merge(Toml::file(path)),
                };
            }
        }

        // Environment variables always have highest priority
        Ok(figment.merge(Env::prefixed("HOOKWARDEN_").split("__")))
    }
}
