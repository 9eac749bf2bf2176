//! Application configuration.
//!
//! Layering, lowest priority first:
//! 1. `AppConfig::default()`
//! 2. YAML file passed with `--config`
//! 3. environment variables `APP__SECTION__KEY`
//! 4. CLI overrides (`--port`, `-v`)

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "APP__";

/// Configuration error for typed module config access
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid config for module '{module}': {source}")]
    InvalidConfig {
        module: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
    /// Per-module sections: `modules.<name>.config`.
    pub modules: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_owned(),
            request_timeout_secs: 30,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `calculator=debug,info`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: [
                "http://localhost:3000",
                "http://localhost:5173",
                "http://localhost:9001",
                "http://localhost:9002",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            allowed_methods: vec!["*".to_owned()],
            allowed_headers: vec!["*".to_owned()],
            allow_credentials: true,
            max_age_seconds: 0,
        }
    }
}

impl AppConfig {
    /// Defaults, then the YAML file (if any), then `APP__*` env vars.
    ///
    /// # Errors
    /// Fails if the file is missing or any layer does not match the schema.
    pub fn load_layered(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
            .extract()
            .context("failed to load layered configuration")
    }

    pub fn apply_cli_overrides(&mut self, port: Option<u16>, verbose: u8) {
        if let Some(port) = port {
            let host = self
                .server
                .bind_addr
                .rsplit_once(':')
                .map_or(self.server.bind_addr.as_str(), |(host, _)| host);
            self.server.bind_addr = format!("{host}:{port}");
        }

        let level = match verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            level.clone_into(&mut self.logging.level);
        }
    }

    /// # Errors
    /// Fails if the config cannot be serialized.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }

    /// Typed config of one module, falling back to defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConfig` if the section exists but does not parse.
    pub fn module_config_or_default<T: DeserializeOwned + Default>(
        &self,
        module_name: &str,
    ) -> Result<T, ConfigError> {
        let Some(config_section) = self
            .modules
            .get(module_name)
            .and_then(serde_json::Value::as_object)
            .and_then(|obj| obj.get("config"))
        else {
            return Ok(T::default());
        };

        serde_json::from_value(config_section.clone()).map_err(|e| ConfigError::InvalidConfig {
            module: module_name.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calculator::CalculatorConfig;
    use std::io::Write;

    const SAMPLE: &str = r#"
server:
  bind_addr: "0.0.0.0:9000"
  request_timeout_secs: 5
logging:
  level: debug
  format: json
cors:
  allowed_origins: ["http://localhost:3000"]
modules:
  calculator:
    config:
      service_name: calc
      max_history: 100
"#;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.bind_addr, "127.0.0.1:8000");
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert_eq!(cfg.cors.allowed_origins.len(), 4);
        assert!(cfg.cors.allow_credentials);
        assert!(cfg.modules.is_empty());
    }

    #[test]
    fn test_yaml_deserializes() {
        let cfg: AppConfig = serde_saphyr::from_str(SAMPLE).unwrap();
        assert_eq!(cfg.server.bind_addr, "0.0.0.0:9000");
        assert_eq!(cfg.server.request_timeout_secs, 5);
        // omitted keys keep their defaults
        assert_eq!(cfg.server.body_limit_bytes, 1024 * 1024);
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert!(cfg.cors.allow_credentials);
    }

    #[test]
    fn test_load_layered_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let cfg = AppConfig::load_layered(Some(file.path())).unwrap();
        assert_eq!(cfg.server.bind_addr, "0.0.0.0:9000");
        assert_eq!(cfg.logging.level, "debug");

        let calc: CalculatorConfig = cfg.module_config_or_default("calculator").unwrap();
        assert_eq!(calc.service_name, "calc");
        assert_eq!(calc.max_history, Some(100));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/calculator.yaml");
        let cfg = AppConfig::load_layered(Some(&path)).unwrap();
        assert_eq!(cfg.server, ServerConfig::default());
        assert_eq!(cfg.cors, CorsConfig::default());

        let calc: CalculatorConfig = cfg.module_config_or_default("calculator").unwrap();
        assert_eq!(calc, CalculatorConfig::default());
    }

    #[test]
    fn test_load_layered_missing_file() {
        let err = AppConfig::load_layered(Some(Path::new("/nonexistent/calculator.yaml")))
            .unwrap_err();
        assert!(err.to_string().contains("config file does not exist"));
    }

    #[test]
    fn test_load_layered_rejects_unknown_server_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"server:\n  bind_adr: \"0.0.0.0:1\"\n").unwrap();
        assert!(AppConfig::load_layered(Some(file.path())).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(Some(8123), 2);
        assert_eq!(cfg.server.bind_addr, "127.0.0.1:8123");
        assert_eq!(cfg.logging.level, "debug");

        cfg.apply_cli_overrides(None, 0);
        assert_eq!(cfg.server.bind_addr, "127.0.0.1:8123");
        assert_eq!(cfg.logging.level, "debug");

        cfg.apply_cli_overrides(None, 5);
        assert_eq!(cfg.logging.level, "trace");
    }

    #[test]
    fn test_module_config_lenient() {
        let mut cfg = AppConfig::default();
        let calc: CalculatorConfig = cfg.module_config_or_default("calculator").unwrap();
        assert_eq!(calc, CalculatorConfig::default());

        cfg.modules
            .insert("calculator".to_owned(), serde_json::json!({"other": 1}));
        let calc: CalculatorConfig = cfg.module_config_or_default("calculator").unwrap();
        assert_eq!(calc, CalculatorConfig::default());

        cfg.modules.insert(
            "calculator".to_owned(),
            serde_json::json!({"config": {"max_history": "lots"}}),
        );
        let err = cfg
            .module_config_or_default::<CalculatorConfig>("calculator")
            .unwrap_err();
        assert!(err.to_string().contains("calculator"));
    }

    #[test]
    fn test_to_json_round_trips() {
        let cfg = AppConfig::default();
        let parsed: AppConfig = serde_json::from_str(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(parsed, cfg);
    }
}
