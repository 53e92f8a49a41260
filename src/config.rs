use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::extract::{DEFAULT_FACTORY, FactoryName};

pub const CONFIG_FILE_NAME: &str = ".siftmergerc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
    #[serde(default = "default_outdir")]
    pub outdir: String,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sift: Option<String>,
    #[serde(default = "default_factory")]
    pub factory: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub ignore_test_files: bool,
}

fn default_source_locale() -> String {
    "en-US".to_string()
}

fn default_outdir() -> String {
    ".".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

fn default_factory() -> String {
    DEFAULT_FACTORY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_locale: default_source_locale(),
            outdir: default_outdir(),
            format: default_format(),
            sift: None,
            factory: default_factory(),
            ignores: Vec::new(),
            ignore_test_files: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or
    /// `factory` is not of the form `<package>.<function>`.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        self.factory_name()?;

        Ok(())
    }

    pub fn factory_name(&self) -> Result<FactoryName> {
        self.factory
            .parse()
            .context("Invalid 'factory' in configuration")
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Search `start_dir` and its ancestors for the config file, stopping at a
/// directory containing `.git`. A relative `start_dir` is resolved against
/// the working directory first.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = if start_dir.is_absolute() {
        start_dir.to_path_buf()
    } else {
        env::current_dir().ok()?.join(start_dir)
    };

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the loaded file, `None` if using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
