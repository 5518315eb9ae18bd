use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Cli;
use crate::consts::{
    DEFAULT_ANSWER_TIMEOUT, DEFAULT_ASSISTANT_NAME, DEFAULT_BROWSER, DEFAULT_KEY_DELAY,
    DEFAULT_SETTLE_DELAY,
};
use crate::core::AppCatalog;
use crate::error::AppError;
use crate::utils::Timezone;

/// On-disk configuration (`config.toml`)
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) default_browser: Option<String>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) settle_delay_ms: Option<u64>,
    #[serde(default)]
    pub(crate) key_delay_ms: Option<u64>,
    #[serde(default)]
    pub(crate) answer_timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) browser_apps: Option<Vec<String>>,
    /// App name -> launch path, layered over the built-in table
    #[serde(default)]
    pub(crate) apps: BTreeMap<String, String>,
    /// App name -> executable name used when closing
    #[serde(default)]
    pub(crate) processes: BTreeMap<String, String>,
    #[serde(default)]
    pub(crate) web_services: BTreeMap<String, String>,
}

/// Outcome of config discovery, reported once logging is up
#[derive(Debug, Default)]
pub(crate) struct LoadedConfig {
    pub(crate) config: Config,
    pub(crate) path: Option<PathBuf>,
    pub(crate) rejected: Vec<(PathBuf, String)>,
}

impl LoadedConfig {
    pub(crate) fn report(&self) {
        for (path, error) in &self.rejected {
            log::warn!("Failed to parse {}: {}", path.display(), error);
        }
        if let Some(path) = &self.path {
            log::info!("Loaded config from {}", path.display());
        }
    }
}

impl Config {
    /// Load an explicitly requested file; any failure is fatal
    pub(crate) fn load_from(path: &Path) -> Result<LoadedConfig, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::Io {
            context: "config file",
            source,
        })?;
        let config = toml::from_str::<Config>(&content).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(LoadedConfig {
            config,
            path: Some(path.to_path_buf()),
            rejected: Vec::new(),
        })
    }

    /// First parsable file among the standard locations, else defaults
    pub(crate) fn load() -> LoadedConfig {
        let mut loaded = LoadedConfig::default();

        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        loaded.config = config;
                        loaded.path = Some(path);
                        return loaded;
                    }
                    Err(e) => loaded.rejected.push((path, e.to_string())),
                }
            }
        }

        loaded
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/aura/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("aura").join("config.toml"));
        }

        // 2. Platform config dir (Application Support, AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("aura").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.aura.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".aura.toml"));
        }

        paths
    }
}

/// Fully resolved settings handed to the command processor
#[derive(Debug, Clone)]
pub(crate) struct AssistantConfig {
    pub(crate) name: String,
    pub(crate) default_browser: String,
    pub(crate) timezone: Timezone,
    /// Pause between launching an app and typing into it
    pub(crate) settle_delay: Duration,
    /// Pause before a hotkey reaches the foreground window
    pub(crate) key_delay: Duration,
    pub(crate) answer_timeout: Duration,
    pub(crate) catalog: AppCatalog,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_ASSISTANT_NAME.to_string(),
            default_browser: DEFAULT_BROWSER.to_string(),
            timezone: Timezone::Local,
            settle_delay: DEFAULT_SETTLE_DELAY,
            key_delay: DEFAULT_KEY_DELAY,
            answer_timeout: DEFAULT_ANSWER_TIMEOUT,
            catalog: AppCatalog::default(),
        }
    }
}

impl AssistantConfig {
    /// Combine merged CLI options with the tables only the file can supply
    pub(crate) fn resolve(cli: &Cli, config: &Config) -> Result<Self, AppError> {
        let defaults = Self::default();
        let catalog = defaults.catalog.with_overrides(
            &config.apps,
            &config.processes,
            &config.web_services,
            config.browser_apps.as_deref(),
        );

        Ok(Self {
            name: config.name.clone().unwrap_or(defaults.name),
            default_browser: cli
                .browser
                .as_deref()
                .map(str::to_lowercase)
                .unwrap_or(defaults.default_browser),
            timezone: Timezone::parse(cli.timezone.as_deref())?,
            settle_delay: cli
                .settle_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.settle_delay),
            key_delay: config
                .key_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.key_delay),
            answer_timeout: config
                .answer_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.answer_timeout),
            catalog,
        })
    }
}
