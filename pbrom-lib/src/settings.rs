//! Shared settings (storage bases, default console).
//!
//! Stored at `~/.config/pbrom/settings.toml`:
//!
//! ```toml
//! [roots]
//! internal = "/home/me/roms"
//! removable = "/media/sdcard/roms"
//!
//! [catalog]
//! default_console = "gba"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use pbrom_core::ConsoleType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub roots: RootSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootSettings {
    /// Base directory holding one folder per console.
    pub internal: Option<PathBuf>,
    /// Base on removable media, preferred when it is mounted.
    pub removable: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    pub default_console: Option<ConsoleType>,
}

/// Canonical path to the settings file: `~/.config/pbrom/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("pbrom").join("settings.toml")
}

/// Default storage base when none is configured: `<data dir>/pbrom/roms`.
pub fn default_base() -> PathBuf {
    match dirs::data_dir() {
        Some(data) => data.join("pbrom").join("roms"),
        None => PathBuf::from("roms"),
    }
}

impl Settings {
    /// Resolve the storage base:
    ///
    /// 1. CLI override (if `Some`)
    /// 2. `roots.internal` from the settings file
    /// 3. [`default_base`]
    pub fn resolve_base(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.roots.internal.clone())
            .unwrap_or_else(default_base)
    }
}

/// Load settings from the canonical path.
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, returning defaults if missing or corrupt.
pub fn load_settings_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            Settings::default()
        }),
        Err(_) => Settings::default(),
    }
}

pub fn save_settings(settings: &Settings) -> io::Result<()> {
    save_settings_to(&settings_path(), settings)
}

/// Save settings to `path` atomically (write to temp, then rename).
pub fn save_settings_to(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let settings = load_settings_from(&tmp.path().join("settings.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "roots = [[[").unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("settings.toml");
        let settings = Settings {
            roots: RootSettings {
                internal: Some(PathBuf::from("/home/me/roms")),
                removable: Some(PathBuf::from("/media/sd/roms")),
            },
            catalog: CatalogSettings {
                default_console: Some(ConsoleType::MegaDrive),
            },
        };
        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path), settings);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn console_accepts_aliases() {
        let settings: Settings = toml::from_str(
            r#"
[catalog]
default_console = "Genesis"
"#,
        )
        .unwrap();
        assert_eq!(settings.catalog.default_console, Some(ConsoleType::MegaDrive));
    }

    #[test]
    fn console_is_written_as_short_name() {
        let settings = Settings {
            catalog: CatalogSettings {
                default_console: Some(ConsoleType::GameBoyAdvance),
            },
            ..Settings::default()
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        assert!(text.contains("default_console = \"gba\""), "{text}");
    }

    #[test]
    fn base_resolution_priority() {
        let mut settings = Settings::default();
        assert_eq!(settings.resolve_base(None), default_base());

        settings.roots.internal = Some(PathBuf::from("/configured"));
        assert_eq!(settings.resolve_base(None), PathBuf::from("/configured"));
        assert_eq!(
            settings.resolve_base(Some(PathBuf::from("/cli"))),
            PathBuf::from("/cli")
        );
    }
}
