mod error;

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::anyhow;
use coverflow_core::EngineConfig;
use tracing::{debug, info, warn};

use crate::warnings::{ConfigWarnings, collect_warnings};

pub use error::ConfigLoadError;

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "COVERFLOW_CONFIG_PATH";
/// Environment variable carrying the whole config as inline JSON.
pub const CONFIG_JSON_VAR: &str = "COVERFLOW_CONFIG_JSON";

const DEFAULT_CONFIG_LOCATIONS: &[&str] = &[
    "coverflow.toml",
    "coverflow.json",
    "config/coverflow.toml",
];

/// Where the effective configuration came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => f.write_str("built-in defaults"),
            Self::EnvPath(path) => {
                write!(f, "{} ({CONFIG_PATH_VAR})", path.display())
            }
            Self::EnvInline => f.write_str(CONFIG_JSON_VAR),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Format implied by a file extension, if any.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") | Some("tml") => Some(Self::Toml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration-related environment, captured once.
#[derive(Debug, Clone, Default)]
pub struct EnvSources {
    pub config_path: Option<PathBuf>,
    pub config_json: Option<String>,
}

impl EnvSources {
    pub fn gather() -> Self {
        Self {
            config_path: non_empty_var(CONFIG_PATH_VAR).map(PathBuf::from),
            config_json: non_empty_var(CONFIG_JSON_VAR),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    /// Explicit config file; takes precedence over the environment.
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Directory searched for default config files. Defaults to the working
    /// directory.
    pub search_dir: Option<PathBuf>,
}

/// Effective configuration plus provenance and non-fatal findings.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: EngineConfig,
    pub source: ConfigSource,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_search_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.options.search_dir = Some(dir.into());
        self
    }

    /// Load `.env`, read the environment and resolve the configuration.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };
        debug!(env_file_loaded, "environment prepared");

        self.resolve(&EnvSources::gather())
    }

    /// Resolve against already captured environment values.
    pub fn resolve(
        &self,
        env: &EnvSources,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (config, source) = self.select_source(env)?;
        config.validate()?;

        let warnings = collect_warnings(&config);
        for warning in &warnings.items {
            match &warning.hint {
                Some(hint) => {
                    warn!(warning = %warning.message, %hint, "config warning")
                }
                None => warn!(warning = %warning.message, "config warning"),
            }
        }
        info!(%source, "engine configuration loaded");

        Ok(ConfigLoad {
            config,
            source,
            warnings,
        })
    }

    fn select_source(
        &self,
        env: &EnvSources,
    ) -> Result<(EngineConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.options.config_path {
            if !path.exists() {
                return Err(ConfigLoadError::MissingConfig {
                    path: path.clone(),
                });
            }
            let config = load_from_file(path)?;
            return Ok((config, ConfigSource::File(path.clone())));
        }

        if let Some(path) = &env.config_path {
            if !path.exists() {
                return Err(ConfigLoadError::MissingConfig {
                    path: path.clone(),
                });
            }
            let config = load_from_file(path)?;
            return Ok((config, ConfigSource::EnvPath(path.clone())));
        }

        if let Some(raw) = &env.config_json {
            let config = parse_str(raw, ConfigFormat::Json, CONFIG_JSON_VAR)?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((EngineConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        let base = self
            .options
            .search_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(|candidate| base.join(candidate))
            .find(|path| path.exists())
    }
}

pub fn load_from_file(path: &Path) -> Result<EngineConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    match ConfigFormat::from_path(path) {
        Some(format) => parse_str(&contents, format, &origin),
        None => parse_any(&contents, &origin),
    }
}

pub fn parse_str(
    contents: &str,
    format: ConfigFormat,
    origin: &str,
) -> Result<EngineConfig, ConfigLoadError> {
    let parsed = match format {
        ConfigFormat::Toml => {
            toml::from_str(contents).map_err(anyhow::Error::from)
        }
        ConfigFormat::Json => {
            serde_json::from_str(contents).map_err(anyhow::Error::from)
        }
    };
    parsed.map_err(|source| ConfigLoadError::Parse {
        origin: origin.to_string(),
        source,
    })
}

// Unknown extension: TOML first, then JSON.
fn parse_any(
    contents: &str,
    origin: &str,
) -> Result<EngineConfig, ConfigLoadError> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            ConfigLoadError::Parse {
                origin: origin.to_string(),
                source: anyhow!(
                    "toml error: {toml_err}; json error: {json_err}"
                ),
            }
        })
    })
}

/// Render a configuration as TOML, e.g. to seed a `coverflow.toml`.
pub fn render_toml(config: &EngineConfig) -> Result<String, ConfigLoadError> {
    toml::to_string_pretty(config).map_err(ConfigLoadError::Render)
}
