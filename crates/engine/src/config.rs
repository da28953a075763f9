//! Engine configuration loaded from environment variables.
//!
//! Supported environment variables:
//! - POINTBUY_DEFAULT_SYSTEM: cost system selected at startup (default: dnd5e)
//! - POINTBUY_CUSTOM_MIN / POINTBUY_CUSTOM_MAX / POINTBUY_CUSTOM_BUDGET:
//!   bounds and budget of the custom system (defaults: 8 / 15 / 27)
//! - POINTBUY_DRAFT_PATH: file holding the saved draft (default: character-draft.json)
//! - POINTBUY_SEED: fixed seed for random distributions (default: OS entropy)
//!
//! Values that fail to parse are ignored with a warning.

use std::path::PathBuf;
use std::str::FromStr;

use pointbuy_domain::{
    CUSTOM_DEFAULT_BUDGET, CUSTOM_DEFAULT_MAX, CUSTOM_DEFAULT_MIN, DEFAULT_SYSTEM_ID,
};

pub const DEFAULT_DRAFT_PATH: &str = "character-draft.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub default_system: String,
    pub custom_min: i32,
    pub custom_max: i32,
    pub custom_budget: i32,
    pub draft_path: PathBuf,
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_system: DEFAULT_SYSTEM_ID.to_string(),
            custom_min: CUSTOM_DEFAULT_MIN,
            custom_max: CUSTOM_DEFAULT_MAX,
            custom_budget: CUSTOM_DEFAULT_BUDGET,
            draft_path: PathBuf::from(DEFAULT_DRAFT_PATH),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(system) = lookup("POINTBUY_DEFAULT_SYSTEM") {
            let system = system.trim();
            if system.is_empty() {
                tracing::warn!("POINTBUY_DEFAULT_SYSTEM is empty, ignoring");
            } else {
                config.default_system = system.to_string();
            }
        }
        if let Some(min) = parse_var(&lookup, "POINTBUY_CUSTOM_MIN") {
            config.custom_min = min;
        }
        if let Some(max) = parse_var(&lookup, "POINTBUY_CUSTOM_MAX") {
            config.custom_max = max;
        }
        if let Some(budget) = parse_var(&lookup, "POINTBUY_CUSTOM_BUDGET") {
            config.custom_budget = budget;
        }
        if let Some(path) = lookup("POINTBUY_DRAFT_PATH").filter(|p| !p.trim().is_empty()) {
            config.draft_path = PathBuf::from(path);
        }
        config.seed = parse_var(&lookup, "POINTBUY_SEED");

        tracing::debug!(?config, "Loaded engine configuration");
        config
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => {
            tracing::info!(key, value = %raw.trim(), "Applied environment override");
            Some(value)
        }
        Err(_) => {
            tracing::warn!(key, value = %raw, "Environment value is not a valid number, ignoring");
            None
        }
    }
}
