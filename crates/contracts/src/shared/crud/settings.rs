use super::error::SettingsError;
use super::style::{StyleMap, StyleOverrides, StyleRegion};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

/// Настройки по умолчанию, встроенные в бинарник
const DEFAULT_SETTINGS: &str = r#"
title = ""
search_placeholder = "Search..."
empty_message = "No data available"
loading_message = "Loading..."
confirm_delete = true

[custom_styles]
"#;

/// Тексты, подтверждение удаления и переопределения стилей панели.
///
/// Все ключи необязательны; отсутствующие берут значения по умолчанию.
/// Ключи `custom_styles` - имена регионов (`container`, `searchInput`, ...).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PanelSettings {
    pub title: String,
    pub search_placeholder: String,
    pub empty_message: String,
    pub loading_message: String,
    pub confirm_delete: bool,
    pub custom_styles: BTreeMap<String, StyleMap>,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            title: String::new(),
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            loading_message: DEFAULT_LOADING_MESSAGE.to_string(),
            confirm_delete: true,
            custom_styles: BTreeMap::new(),
        }
    }
}

impl PanelSettings {
    pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Разбирает `contents` (TOML или JSON-объект), иначе встроенные настройки по умолчанию
    pub fn load(contents: Option<&str>) -> Result<Self, SettingsError> {
        match contents {
            Some(text) if text.trim_start().starts_with('{') => Self::from_json_str(text),
            Some(text) => Self::from_toml_str(text),
            None => Self::from_toml_str(DEFAULT_SETTINGS),
        }
    }

    /// Переопределения стилей по регионам.
    ///
    /// Неизвестные имена регионов пропускаются и возвращаются вторым
    /// элементом, остальные переопределения сохраняются.
    pub fn style_overrides(&self) -> (StyleOverrides, Vec<String>) {
        let mut overrides = StyleOverrides::new();
        let mut unknown = Vec::new();
        for (name, style) in &self.custom_styles {
            match StyleRegion::from_name(name) {
                Some(region) => {
                    overrides.insert(region, style.clone());
                }
                None => unknown.push(name.clone()),
            }
        }
        (overrides, unknown)
    }
}
