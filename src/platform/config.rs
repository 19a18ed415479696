// Stocklist - platform/config.rs
//
// Platform-specific configuration: config directory resolution and
// config.toml loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Stocklist configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/stocklist/ or %APPDATA%\Stocklist\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[catalog]` section.
    pub catalog: CatalogSection,
    /// `[export]` section.
    pub export: ExportSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[catalog]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// Categories offered by the presentation layer.
    pub categories: Option<Vec<String>>,
    /// Minimum product name length (after trimming).
    pub min_name_len: Option<usize>,
}

/// `[export]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// Maximum products per export operation.
    pub max_entries: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// All values are validated against named constants at load time.
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- Catalog --
    /// Categories offered in the add/filter prompts.
    pub categories: Vec<String>,
    /// Minimum product name length.
    pub min_name_len: usize,

    // -- Export --
    /// Maximum products per export operation.
    pub max_export_entries: usize,

    // -- Logging --
    /// Logging level string (read before tracing is initialised).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            categories: constants::DEFAULT_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            min_name_len: constants::MIN_NAME_LEN,
            max_export_entries: constants::MAX_EXPORT_ENTRIES,
            log_level: None,
        }
    }
}

/// Load and validate the config file at an explicitly requested path.
///
/// Unlike `load_config`, a missing or unparseable file here is a hard
/// error: the user named the file, so silently ignoring it would hide a
/// misconfiguration.
pub fn load_config_from(path: &Path) -> Result<(AppConfig, Vec<String>), ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let raw: RawConfig = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), "Loaded config file");
    Ok(validate_with_warnings(raw))
}

/// Load and validate `config.toml` from the platform config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. If the file does not exist, returns defaults with no warnings
/// (first-run). If the file is unreadable or unparseable, returns defaults
/// with a warning -- the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            return (AppConfig::default(), vec![msg]);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            return (AppConfig::default(), vec![msg]);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");
    validate_with_warnings(raw)
}

/// Validate each field against named constants, accumulating all warnings.
fn validate_with_warnings(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- Catalog: categories --
    if let Some(categories) = raw.catalog.categories {
        let cleaned: Vec<String> = categories
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        if cleaned.is_empty() {
            warnings.push(
                "[catalog] categories is empty or all-blank. Using defaults.".to_string(),
            );
        } else {
            config.categories = cleaned;
        }
    }

    // -- Catalog: min_name_len --
    if let Some(len) = raw.catalog.min_name_len {
        if (constants::MIN_MIN_NAME_LEN..=constants::MAX_MIN_NAME_LEN).contains(&len) {
            config.min_name_len = len;
        } else {
            warnings.push(format!(
                "[catalog] min_name_len = {len} is out of range ({}-{}). Using default ({}).",
                constants::MIN_MIN_NAME_LEN,
                constants::MAX_MIN_NAME_LEN,
                constants::MIN_NAME_LEN,
            ));
        }
    }

    // -- Export: max_entries --
    if let Some(max) = raw.export.max_entries {
        if (1..=constants::MAX_EXPORT_ENTRIES).contains(&max) {
            config.max_export_entries = max;
        } else {
            warnings.push(format!(
                "[export] max_entries = {max} is out of range (1-{}). Using default ({}).",
                constants::MAX_EXPORT_ENTRIES,
                constants::MAX_EXPORT_ENTRIES,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}
