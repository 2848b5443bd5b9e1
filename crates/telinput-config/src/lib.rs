use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use telinput_core::domain::normalize_iso2;
use telinput_core::{CoreError, FormatMode, NormalizerOptions};
use thiserror::Error;

const APP_DIR: &str = "telinput";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_MAX_LENGTH: u32 = 15;
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search ...";

/// Browser autocomplete hint forwarded to the host input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Autocomplete {
    Off,
    Tel,
}

/// Host-level defaults for the phone input. `autocomplete`,
/// `max_length`, `enable_search`, and `search_placeholder` are input
/// attributes the host forwards as-is; the rest feed the normalizer.
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub format: FormatMode,
    pub enable_placeholder: bool,
    pub enable_search: bool,
    pub reset_on_change: bool,
    pub reset_on_empty_assign: bool,
    pub autocomplete: Autocomplete,
    pub max_length: u32,
    pub search_placeholder: String,
    pub preferred_countries: Vec<String>,
    pub only_countries: Vec<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            format: FormatMode::Default,
            enable_placeholder: false,
            enable_search: false,
            reset_on_change: false,
            reset_on_empty_assign: false,
            autocomplete: Autocomplete::Off,
            max_length: DEFAULT_MAX_LENGTH,
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            preferred_countries: Vec::new(),
            only_countries: Vec::new(),
        }
    }
}

impl HostConfig {
    pub fn normalizer_options(&self) -> NormalizerOptions {
        NormalizerOptions {
            format: self.format,
            enable_placeholder: self.enable_placeholder,
            reset_on_change: self.reset_on_change,
            reset_on_empty_assign: self.reset_on_empty_assign,
            preferred_countries: self.preferred_countries.clone(),
            only_countries: self.only_countries.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid max_length value: {0}")]
    InvalidMaxLength(u32),
    #[error("invalid {field} entry: {source}")]
    InvalidCountryList {
        field: &'static str,
        #[source]
        source: CoreError,
    },
    #[error("duplicate {field} entry: {iso2}")]
    DuplicateCountry { field: &'static str, iso2: String },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    format: Option<FormatMode>,
    enable_placeholder: Option<bool>,
    enable_search: Option<bool>,
    reset_on_change: Option<bool>,
    reset_on_empty_assign: Option<bool>,
    autocomplete: Option<Autocomplete>,
    max_length: Option<u32>,
    search_placeholder: Option<String>,
    preferred_countries: Option<Vec<String>>,
    only_countries: Option<Vec<String>>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<HostConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(HostConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(HostConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(HostConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<HostConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<HostConfig> {
    let mut config = HostConfig::default();

    if let Some(format) = parsed.format {
        config.format = format;
    }
    if let Some(enable_placeholder) = parsed.enable_placeholder {
        config.enable_placeholder = enable_placeholder;
    }
    if let Some(enable_search) = parsed.enable_search {
        config.enable_search = enable_search;
    }
    if let Some(reset_on_change) = parsed.reset_on_change {
        config.reset_on_change = reset_on_change;
    }
    if let Some(reset_on_empty_assign) = parsed.reset_on_empty_assign {
        config.reset_on_empty_assign = reset_on_empty_assign;
    }
    if let Some(autocomplete) = parsed.autocomplete {
        config.autocomplete = autocomplete;
    }
    if let Some(max_length) = parsed.max_length {
        if max_length == 0 {
            return Err(ConfigError::InvalidMaxLength(max_length));
        }
        config.max_length = max_length;
    }
    if let Some(search_placeholder) = parsed.search_placeholder {
        config.search_placeholder = search_placeholder;
    }
    if let Some(preferred) = parsed.preferred_countries {
        config.preferred_countries = validate_country_list("preferred_countries", preferred)?;
    }
    if let Some(only) = parsed.only_countries {
        config.only_countries = validate_country_list("only_countries", only)?;
    }

    Ok(config)
}

fn validate_country_list(field: &'static str, raw: Vec<String>) -> Result<Vec<String>> {
    let mut normalized = Vec::with_capacity(raw.len());
    for entry in raw {
        let iso2 = normalize_iso2(&entry)
            .map_err(|source| ConfigError::InvalidCountryList { field, source })?;
        if normalized.contains(&iso2) {
            return Err(ConfigError::DuplicateCountry { field, iso2 });
        }
        normalized.push(iso2);
    }
    Ok(normalized)
}
