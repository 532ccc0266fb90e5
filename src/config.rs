use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::engagement::EngagementWeights;
use crate::error::ConfigError;
use crate::icp::IcpDefinition;

pub const DEFAULT_CONFIG_PATH: &str = "config/scoring.toml";

/// File-backed scoring configuration. Any table or key left out of the file
/// keeps its built-in default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub engagement: EngagementWeights,
    pub icp: IcpDefinition,
}

impl ScoringConfig {
    /// Loads from `path`, else `$SCORING_CONFIG_PATH`, else the default
    /// location. A missing file yields defaults. Env overrides apply last.
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => Self::read(path)?,
            Some(path) => {
                tracing::info!(path = %path.display(), "no config file, using defaults");
                ScoringConfig::default()
            }
            None => ScoringConfig::default(),
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded scoring config");
        Ok(config)
    }

    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let payload = toml::to_string_pretty(self)?;
        std::fs::write(path, payload).map_err(write_err)?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        override_from_env("SCORING_LIKES_WEIGHT", &mut self.engagement.likes_weight);
        override_from_env("SCORING_COMMENTS_WEIGHT", &mut self.engagement.comments_weight);
        override_from_env("SCORING_SHARES_WEIGHT", &mut self.engagement.shares_weight);
        override_from_env("SCORING_INFLUENCER_FOLLOWERS", &mut self.icp.influencer_followers);
    }
}

fn override_from_env<T: std::str::FromStr>(key: &str, slot: &mut T) {
    let Ok(raw) = env::var(key) else {
        return;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => *slot = value,
        Err(_) => tracing::warn!(key, value = %raw, "ignoring unparseable env override"),
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("SCORING_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from(DEFAULT_CONFIG_PATH)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let (config, used) = ScoringConfig::load(Some(path.clone())).unwrap();
        assert_eq!(used, Some(path));
        assert_eq!(config.icp.target_roles.len(), 38);
        assert!(config.engagement.sentiment_multiplier > 0.0);
    }

    #[test]
    fn write_then_load_keeps_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scoring.toml");
        let mut config = ScoringConfig::default();
        config.engagement.word_count_multiplier = 0.2;
        config.icp.target_industries = vec!["Robotics".to_string()];
        config.write(&path).unwrap();

        let loaded = ScoringConfig::read(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scoring.toml");
        std::fs::write(&path, "[engagement]\nlikes_weight = 1.5\n").unwrap();

        let loaded = ScoringConfig::read(&path).unwrap();
        assert!((loaded.engagement.likes_weight - 1.5).abs() < 1e-9);
        assert!((loaded.engagement.comments_weight - 2.0).abs() < 1e-9);
        assert_eq!(loaded.icp, IcpDefinition::default());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scoring.toml");
        std::fs::write(&path, "[engagement\n").unwrap();

        let err = ScoringConfig::read(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
