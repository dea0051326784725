//! Rotation settings from an optional TOML file merged with CLI flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use logkeep_core::RotationPolicy;
use serde::Deserialize;

use crate::cli::Cli;
use crate::cli::args::validate_size_limit;

/// Thresholds and backup destination for one run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotationConfig {
    /// Maximum size in megabytes before rotation.
    #[serde(default)]
    pub size_limit: Option<f64>,
    /// Maximum line count before rotation.
    #[serde(default)]
    pub line_limit: Option<u64>,
    /// Backup destination; `<log>.prev` when unset.
    #[serde(default)]
    pub backup_path: Option<PathBuf>,
}

impl RotationConfig {
    /// Parse and validate TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| anyhow!("invalid configuration: {}", e.message()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in config file {}", path.display()))
    }

    /// Settings for `cli`: the config file if one was given, overridden by
    /// any thresholds passed as flags.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let base = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.merged_with(cli))
    }

    /// Overlay the flags set on `cli` onto this configuration. An empty
    /// `backup_path` in the file counts as unset; clap rejects an empty flag.
    pub fn merged_with(self, cli: &Cli) -> Self {
        Self {
            size_limit: cli.size_limit.or(self.size_limit),
            line_limit: cli.line_limit.or(self.line_limit),
            backup_path: cli.backup_path.clone().or(non_empty(self.backup_path)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(size_limit) = self.size_limit {
            if let Err(msg) = validate_size_limit(size_limit) {
                bail!("invalid configuration: {msg}");
            }
        }
        Ok(())
    }

    pub fn policy(&self) -> RotationPolicy {
        RotationPolicy::new(self.size_limit, self.line_limit)
    }
}

fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::ffi::OsString;

    #[test]
    fn test_parse_full_config() {
        let config = RotationConfig::parse(
            r#"
size_limit = 10.5
line_limit = 5000
backup_path = "/var/log/app.log.bak"
"#,
        )
        .expect("should parse");

        assert_eq!(
            config,
            RotationConfig {
                size_limit: Some(10.5),
                line_limit: Some(5000),
                backup_path: Some(PathBuf::from("/var/log/app.log.bak")),
            }
        );
    }

    #[test]
    fn test_parse_empty_config_disables_rotation() {
        let config = RotationConfig::parse("").expect("should parse");
        assert_eq!(config, RotationConfig::default());
        assert!(config.policy().is_disabled());
    }

    #[test]
    fn test_integer_size_limit_is_accepted() {
        let config = RotationConfig::parse("size_limit = 10").expect("should parse");
        assert_eq!(config.size_limit, Some(10.0));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = RotationConfig::parse("max_size = 10").unwrap_err();
        assert!(format!("{err:#}").contains("max_size"));
    }

    #[test]
    fn test_negative_values_rejected() {
        assert!(RotationConfig::parse("size_limit = -1.0").is_err());
        assert!(RotationConfig::parse("line_limit = -1").is_err());
        assert!(RotationConfig::parse("size_limit = nan").is_err());
    }

    #[test]
    fn test_flags_override_file_values() {
        let file = RotationConfig {
            size_limit: Some(10.0),
            line_limit: Some(100),
            backup_path: Some(PathBuf::from("file.bak")),
        };
        let cli = Cli::try_parse_from(["logkeep", "--line_limit", "5", "app.log"]).unwrap();

        let merged = file.merged_with(&cli);
        assert_eq!(merged.size_limit, Some(10.0));
        assert_eq!(merged.line_limit, Some(5));
        assert_eq!(merged.backup_path, Some(PathBuf::from("file.bak")));
    }

    #[test]
    fn test_empty_backup_path_is_unset() {
        let file = RotationConfig::parse("backup_path = \"\"").expect("should parse");
        let cli = Cli::try_parse_from(["logkeep", "app.log"]).unwrap();
        assert_eq!(file.merged_with(&cli).backup_path, None);
    }

    #[test]
    fn test_resolve_loads_config_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("logkeep.toml");
        std::fs::write(&config_path, "line_limit = 7\n").expect("Failed to write config");

        let cli = Cli::try_parse_from([
            OsString::from("logkeep"),
            OsString::from("--config"),
            config_path.into_os_string(),
            OsString::from("app.log"),
        ])
        .unwrap();
        let config = RotationConfig::resolve(&cli).expect("should resolve");
        assert_eq!(config.policy(), RotationPolicy::new(None, Some(7)));
    }

    #[test]
    fn test_missing_config_file_names_path() {
        let err = RotationConfig::load(Path::new("/nonexistent/logkeep.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/logkeep.toml"));
    }
}
