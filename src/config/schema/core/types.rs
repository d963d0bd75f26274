use super::super::{
    DiscoveryConfig, MatchingConfig, ObservabilityConfig, ReservationsConfig, TaggingConfig,
};
use crate::error::ConfigError;
use anyhow::Result;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub tagging: TaggingConfig,

    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub matching: MatchingConfig,

    #[serde(default)]
    pub reservations: ReservationsConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());

        Self {
            config_path: home.join(".tablemate").join("config.toml"),
            tagging: TaggingConfig::default(),
            discovery: DiscoveryConfig::default(),
            matching: MatchingConfig::default(),
            reservations: ReservationsConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

fn is_unit_ratio(value: f64) -> bool {
    value > 0.0 && value <= 1.0
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let t = &self.tagging;
        for (name, value) in [
            ("tagging.commit_ratio", t.commit_ratio),
            ("tagging.intensify_ratio", t.intensify_ratio),
            ("tagging.adventure_ratio", t.adventure_ratio),
            ("tagging.classic_ratio", t.classic_ratio),
        ] {
            if !is_unit_ratio(value) {
                return Err(
                    ConfigError::Validation(format!("{name} must be in (0, 1], got {value}")).into(),
                );
            }
        }
        if t.commit_ratio >= t.intensify_ratio {
            return Err(ConfigError::Validation(
                "tagging.commit_ratio must be below tagging.intensify_ratio".into(),
            )
            .into());
        }
        if t.classic_ratio > t.adventure_ratio {
            return Err(ConfigError::Validation(
                "tagging.classic_ratio must not exceed tagging.adventure_ratio".into(),
            )
            .into());
        }
        if self.reservations.code_prefix.trim().is_empty() {
            return Err(
                ConfigError::Validation("reservations.code_prefix must not be empty".into()).into(),
            );
        }
        Ok(())
    }
}
