use grader_common::ModalConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_CONFIG_FILE: &str = "grader.yaml";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn default_log_level() -> String {
    "info".to_string()
}

/// YAML config file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigYaml {
    /// Origin of the grading server, e.g. `https://markus.example.edu`.
    /// Absent = request endpoints relative to the page.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Default tracing filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Modal definitions. Absent = built-in create-tag and update-text modals.
    #[serde(default)]
    pub modals: Option<Vec<ModalConfig>>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: Option<String>,
    pub log_level: String,
    pub modals: Vec<ModalConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            log_level: default_log_level(),
            modals: ModalConfig::defaults(),
        }
    }
}

impl Config {
    /// Load from the environment in dev mode, otherwise from the YAML file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        let env = |key: &str| std::env::var(key).ok();
        if Self::is_dev_mode() {
            info!("Dev mode activated - loading from environment");
            Ok(Self::from_env_with(env))
        } else {
            Self::from_file_or_default(&Self::config_path_with(env))
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn is_dev_mode() -> bool {
        std::env::var("GRADER_DEV_MODE").is_ok() || dotenvy::dotenv().is_ok()
    }

    /// `GRADER_CONFIG`, or `grader.yaml` in the working directory.
    #[cfg(not(target_arch = "wasm32"))]
    fn config_path_with(env: impl Fn(&str) -> Option<String>) -> PathBuf {
        env("GRADER_CONFIG")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Dev-mode config: built-in modals, `GRADER_BASE_URL` and `GRADER_LOG_LEVEL`.
    #[cfg(not(target_arch = "wasm32"))]
    fn from_env_with(env: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = env("GRADER_BASE_URL").filter(|s| !s.is_empty());
        let log_level = env("GRADER_LOG_LEVEL")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "debug".to_string());

        Self {
            base_url,
            log_level,
            modals: ModalConfig::defaults(),
        }
    }

    /// Read `path`, falling back to defaults when it does not exist.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(
                "No config file at {}, using built-in defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let parsed: ConfigYaml =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Serialization(e.to_string()))?;

        let config = Self {
            base_url: parsed.base_url.filter(|s| !s.is_empty()),
            log_level: parsed.log_level,
            modals: parsed.modals.unwrap_or_else(ModalConfig::defaults),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        let yaml = ConfigYaml {
            base_url: self.base_url.clone(),
            log_level: self.log_level.clone(),
            modals: Some(self.modals.clone()),
        };
        serde_yaml::to_string(&yaml).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut ids = HashSet::new();
        for modal in &self.modals {
            if !ids.insert(modal.id.as_str()) {
                return Err(ConfigError::Config(format!(
                    "modal `{}` is defined more than once",
                    modal.id
                )));
            }
            modal
                .validate()
                .map_err(|e| ConfigError::Config(e.to_string()))?;
        }
        Ok(())
    }

    pub fn modal(&self, id: &str) -> Option<&ModalConfig> {
        self.modals.iter().find(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grader_common::{CounterStyle, CREATE_TAG_MODAL_ID, UPDATE_TEXT_MODAL_ID};
    use std::collections::HashMap;
    use std::io::Write;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_yaml_uses_defaults() {
        let config = Config::from_yaml_str("{}").unwrap();
        assert_eq!(config.base_url, None);
        assert_eq!(config.log_level, "info");
        assert!(config.modal(CREATE_TAG_MODAL_ID).is_some());
        assert!(config.modal(UPDATE_TEXT_MODAL_ID).is_some());
    }

    #[test]
    fn yaml_overrides_modals() {
        let yaml = r#"
base_url: http://localhost:3000
log_level: debug
modals:
  - id: remark
    title: Remark Request
    trigger_label: Request Remark
    fields:
      - id: reason
        label: Reason
        max_chars: 500
    endpoint: /api/results/{result_id}/remark
    counter_style: used
"#;
        let config = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.modals.len(), 1);
        let remark = config.modal("remark").unwrap();
        assert_eq!(remark.counter_style, CounterStyle::Used);
        assert!(config.modal(CREATE_TAG_MODAL_ID).is_none());
    }

    #[test]
    fn invalid_yaml_is_serialization_error() {
        let err = Config::from_yaml_str("modals: [not, a, modal").unwrap_err();
        assert!(matches!(err, ConfigError::Serialization(_)));
    }

    #[test]
    fn duplicate_modal_ids_rejected() {
        let mut config = Config::default();
        config.modals.push(grader_common::ModalConfig::create_tag());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Config(_)));
        assert!(err.to_string().contains("create_tag"));
    }

    #[test]
    fn invalid_modal_rejected() {
        let yaml = r#"
modals:
  - id: empty
    title: Empty
    trigger_label: Open
    fields: []
    endpoint: /api/empty
"#;
        let err = Config::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("has no fields"));
    }

    #[test]
    fn from_file_reads_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: https://markus.example.edu/csc108").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://markus.example.edu/csc108")
        );
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_file_or_default(&dir.path().join("grader.yaml")).unwrap();
        assert_eq!(config.modals.len(), 2);
    }

    #[test]
    fn yaml_roundtrip_preserves_modals() {
        let config = Config::default();
        let reparsed = Config::from_yaml_str(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(reparsed.modals, config.modals);
    }

    #[test]
    fn env_overrides_base_url_and_log_level() {
        let config = Config::from_env_with(env_from(&[
            ("GRADER_BASE_URL", "http://localhost:3000"),
            ("GRADER_LOG_LEVEL", "grader_core=trace"),
        ]));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(config.log_level, "grader_core=trace");
        assert_eq!(config.modals, ModalConfig::defaults());
    }

    #[test]
    fn env_defaults_to_debug_without_base_url() {
        let config = Config::from_env_with(env_from(&[("GRADER_BASE_URL", "")]));
        assert_eq!(config.base_url, None);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn config_path_from_env() {
        assert_eq!(
            Config::config_path_with(env_from(&[("GRADER_CONFIG", "/etc/grader/prod.yaml")])),
            PathBuf::from("/etc/grader/prod.yaml")
        );
        assert_eq!(
            Config::config_path_with(env_from(&[])),
            PathBuf::from("grader.yaml")
        );
    }
}
