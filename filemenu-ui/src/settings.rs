use std::path::{Path, PathBuf};

use anyhow::Context;
use filemenu_core::{Capabilities, FilterContext, RelativeStyle, StringCatalog};
use filemenu_integrations::ids::{
    CONFIG_DIR_NAME, ENV_FILE_LOCKING, ENV_GROUP_DIVIDERS, ENV_RELATIVE_STYLE, ENV_SHARING,
    ENV_STRINGS, ENV_USER, STRINGS_FILENAME,
};
use serde::Serialize;

const DEFAULT_FILE_LOCKING: bool = true;
const DEFAULT_SHARING: bool = true;
const DEFAULT_GROUP_DIVIDERS: bool = true;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SettingsSnapshot {
    pub user_id: String,
    pub file_locking: bool,
    pub sharing: bool,
    pub group_dividers: bool,
    pub relative_style: RelativeStyle,
    pub strings_path: Option<String>,
}

impl SettingsSnapshot {
    pub fn filter_context(&self) -> FilterContext {
        FilterContext {
            user_id: self.user_id.clone(),
            capabilities: Capabilities {
                file_locking: self.file_locking,
                sharing: self.sharing,
            },
        }
    }

    pub fn string_catalog(&self) -> anyhow::Result<StringCatalog> {
        let Some(path) = &self.strings_path else {
            return Ok(StringCatalog::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read strings from {path}"))?;
        StringCatalog::from_json(&raw).with_context(|| format!("invalid strings file {path}"))
    }
}

pub fn read_settings_snapshot() -> SettingsSnapshot {
    let default_strings = dirs::config_dir()
        .map(|base| base.join(CONFIG_DIR_NAME).join(STRINGS_FILENAME))
        .filter(|path| path.is_file());
    read_settings_from(|name| std::env::var(name).ok(), default_strings)
}

fn read_settings_from<F>(lookup: F, default_strings: Option<PathBuf>) -> SettingsSnapshot
where
    F: Fn(&str) -> Option<String>,
{
    let home = dirs::home_dir().unwrap_or_else(std::env::temp_dir);
    let user_id = lookup(ENV_USER)
        .or_else(|| lookup("USER"))
        .map(|value| value.trim().to_string())
        .unwrap_or_default();
    let relative_style = lookup(ENV_RELATIVE_STYLE)
        .and_then(|value| RelativeStyle::parse(&value))
        .unwrap_or_default();
    let strings_path = lookup(ENV_STRINGS)
        .filter(|value| !value.trim().is_empty())
        .map(|value| expand_with_home(value.trim(), &home))
        .or(default_strings)
        .map(|path| path.display().to_string());

    SettingsSnapshot {
        user_id,
        file_locking: read_bool(&lookup, ENV_FILE_LOCKING, DEFAULT_FILE_LOCKING),
        sharing: read_bool(&lookup, ENV_SHARING, DEFAULT_SHARING),
        group_dividers: read_bool(&lookup, ENV_GROUP_DIVIDERS, DEFAULT_GROUP_DIVIDERS),
        relative_style,
        strings_path,
    }
}

fn expand_with_home(value: &str, home: &Path) -> PathBuf {
    if value == "~" {
        return home.to_path_buf();
    }
    if let Some(rest) = value.strip_prefix("~/") {
        return home.join(rest);
    }
    PathBuf::from(value)
}

fn read_bool<F>(lookup: &F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
        .unwrap_or(default)
}
