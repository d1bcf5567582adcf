//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.showcase/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::DEFAULT_RECENT_CAPACITY;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShowcaseConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub recent_capacity: Option<usize>,
    /// Catalog TOML file. Relative paths are resolved against `~/.showcase/`.
    pub catalog_file: Option<String>,
    pub theme: Option<ThemeName>,
}

/// Which palette the shell renders with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(ThemeName::Dark),
            "light" => Some(ThemeName::Light),
            _ => None,
        }
    }
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub recent_capacity: usize,
    /// `None` means use the built-in catalog.
    pub catalog_file: Option<PathBuf>,
    pub theme: ThemeName,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".showcase"))
}

/// Returns the path to `~/.showcase/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.showcase/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ShowcaseConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ShowcaseConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ShowcaseConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ShowcaseConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ShowcaseConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Showcase Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# recent_capacity = 10               # Or set SHOWCASE_RECENT_CAPACITY
# catalog_file = "catalog.toml"      # Path relative to ~/.showcase/, or SHOWCASE_CATALOG
# theme = "dark"                     # "dark" or "light", or SHOWCASE_THEME
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_catalog` and `cli_theme` come from CLI flags (None = not specified).
pub fn resolve(
    config: &ShowcaseConfig,
    cli_catalog: Option<&Path>,
    cli_theme: Option<ThemeName>,
) -> ResolvedConfig {
    resolve_with_env(config, cli_catalog, cli_theme, |key| std::env::var(key).ok())
}

/// `resolve` with the `SHOWCASE_*` lookups supplied by `env`.
fn resolve_with_env(
    config: &ShowcaseConfig,
    cli_catalog: Option<&Path>,
    cli_theme: Option<ThemeName>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Catalog: CLI → env → config (relative to ~/.showcase/) → built-in
    let catalog_file = cli_catalog
        .map(Path::to_path_buf)
        .or_else(|| env("SHOWCASE_CATALOG").map(PathBuf::from))
        .or_else(|| config.general.catalog_file.as_deref().map(config_relative));

    // Theme: CLI → env → config → default
    let theme = cli_theme
        .or_else(|| {
            let raw = env("SHOWCASE_THEME")?;
            let parsed = ThemeName::parse(&raw);
            if parsed.is_none() {
                warn!("Ignoring unknown SHOWCASE_THEME value: {}", raw);
            }
            parsed
        })
        .or(config.general.theme)
        .unwrap_or_default();

    // Recent capacity: env → config → default
    let recent_capacity = env("SHOWCASE_RECENT_CAPACITY")
        .and_then(|raw| match raw.trim().parse::<usize>() {
            Ok(n) => Some(n),
            Err(e) => {
                warn!("Ignoring invalid SHOWCASE_RECENT_CAPACITY '{}': {}", raw, e);
                None
            }
        })
        .or(config.general.recent_capacity)
        .unwrap_or(DEFAULT_RECENT_CAPACITY);

    ResolvedConfig {
        recent_capacity,
        catalog_file,
        theme,
    }
}

fn config_relative(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = ShowcaseConfig::default();
        assert!(config.general.recent_capacity.is_none());
        assert!(config.general.catalog_file.is_none());
        assert!(config.general.theme.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ShowcaseConfig {
            general: GeneralConfig {
                recent_capacity: Some(4),
                catalog_file: Some("/srv/gallery/catalog.toml".to_string()),
                theme: Some(ThemeName::Light),
            },
        };
        let resolved = resolve_with_env(&config, None, None, no_env);
        assert_eq!(resolved.recent_capacity, 4);
        assert_eq!(resolved.theme, ThemeName::Light);
        assert_eq!(
            resolved.catalog_file.as_deref(),
            Some(Path::new("/srv/gallery/catalog.toml"))
        );
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = ShowcaseConfig {
            general: GeneralConfig {
                catalog_file: Some("/srv/gallery/catalog.toml".to_string()),
                theme: Some(ThemeName::Dark),
                ..Default::default()
            },
        };
        let resolved = resolve_with_env(
            &config,
            Some(Path::new("local.toml")),
            Some(ThemeName::Light),
            |key| match key {
                "SHOWCASE_CATALOG" => Some("/env/catalog.toml".to_string()),
                "SHOWCASE_THEME" => Some("dark".to_string()),
                _ => None,
            },
        );
        assert_eq!(resolved.catalog_file.as_deref(), Some(Path::new("local.toml")));
        assert_eq!(resolved.theme, ThemeName::Light);
    }

    #[test]
    fn test_resolve_env_beats_config() {
        let config = ShowcaseConfig {
            general: GeneralConfig {
                recent_capacity: Some(4),
                catalog_file: Some("/srv/gallery/catalog.toml".to_string()),
                theme: Some(ThemeName::Dark),
            },
        };
        let resolved = resolve_with_env(&config, None, None, |key| match key {
            "SHOWCASE_CATALOG" => Some("/env/catalog.toml".to_string()),
            "SHOWCASE_THEME" => Some("light".to_string()),
            "SHOWCASE_RECENT_CAPACITY" => Some(" 2 ".to_string()),
            _ => None,
        });
        assert_eq!(resolved.recent_capacity, 2);
        assert_eq!(resolved.theme, ThemeName::Light);
        assert_eq!(
            resolved.catalog_file.as_deref(),
            Some(Path::new("/env/catalog.toml"))
        );
    }

    #[test]
    fn test_resolve_ignores_invalid_env_values() {
        let config = ShowcaseConfig {
            general: GeneralConfig {
                recent_capacity: Some(4),
                theme: Some(ThemeName::Light),
                ..Default::default()
            },
        };
        let resolved = resolve_with_env(&config, None, None, |key| match key {
            "SHOWCASE_THEME" => Some("neon".to_string()),
            "SHOWCASE_RECENT_CAPACITY" => Some("lots".to_string()),
            _ => None,
        });
        assert_eq!(resolved.recent_capacity, 4);
        assert_eq!(resolved.theme, ThemeName::Light);
    }

    #[test]
    fn test_relative_catalog_file_is_under_config_dir() {
        let path = config_relative("catalog.toml");
        if let Some(dir) = config_dir() {
            assert_eq!(path, dir.join("catalog.toml"));
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
recent_capacity = 7
catalog_file = "mine.toml"
theme = "light"
"#;
        let config: ShowcaseConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.recent_capacity, Some(7));
        assert_eq!(config.general.catalog_file.as_deref(), Some("mine.toml"));
        assert_eq!(config.general.theme, Some(ThemeName::Light));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[general]
theme = "dark"
"#;
        let config: ShowcaseConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, Some(ThemeName::Dark));
        assert!(config.general.recent_capacity.is_none());
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let toml_str = r#"
[general]
theme = "neon"
"#;
        assert!(toml::from_str::<ShowcaseConfig>(toml_str).is_err());
    }

    #[test]
    fn test_theme_name_parse() {
        assert_eq!(ThemeName::parse(" Light "), Some(ThemeName::Light));
        assert_eq!(ThemeName::parse("dark"), Some(ThemeName::Dark));
        assert_eq!(ThemeName::parse("solarized"), None);
    }
}
