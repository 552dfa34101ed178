//! Именованные регионы стилей панели и слияние переопределений.
//!
//! Стили - это наборы inline CSS свойств. Переопределение региона
//! накладывается поверх стиля по умолчанию; значение переопределения побеждает по каждому свойству.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// CSS свойство -> значение
pub type StyleMap = BTreeMap<String, String>;

/// Частичные переопределения по регионам от вызывающей стороны
pub type StyleOverrides = BTreeMap<StyleRegion, StyleMap>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum StyleRegion {
    Container,
    Header,
    Title,
    Toolbar,
    SearchInput,
    Button,
    PrimaryButton,
    DangerButton,
    Form,
    FormGroup,
    Label,
    Input,
    FieldError,
    ErrorBanner,
    Table,
    HeaderCell,
    Row,
    Cell,
    ActionsCell,
    Empty,
    Loading,
    Count,
    Highlight,
}

impl StyleRegion {
    pub const ALL: [StyleRegion; 23] = [
        StyleRegion::Container,
        StyleRegion::Header,
        StyleRegion::Title,
        StyleRegion::Toolbar,
        StyleRegion::SearchInput,
        StyleRegion::Button,
        StyleRegion::PrimaryButton,
        StyleRegion::DangerButton,
        StyleRegion::Form,
        StyleRegion::FormGroup,
        StyleRegion::Label,
        StyleRegion::Input,
        StyleRegion::FieldError,
        StyleRegion::ErrorBanner,
        StyleRegion::Table,
        StyleRegion::HeaderCell,
        StyleRegion::Row,
        StyleRegion::Cell,
        StyleRegion::ActionsCell,
        StyleRegion::Empty,
        StyleRegion::Loading,
        StyleRegion::Count,
        StyleRegion::Highlight,
    ];

    /// Имя региона в настройках (`searchInput`, `headerCell`, ...)
    pub fn name(self) -> &'static str {
        match self {
            StyleRegion::Container => "container",
            StyleRegion::Header => "header",
            StyleRegion::Title => "title",
            StyleRegion::Toolbar => "toolbar",
            StyleRegion::SearchInput => "searchInput",
            StyleRegion::Button => "button",
            StyleRegion::PrimaryButton => "primaryButton",
            StyleRegion::DangerButton => "dangerButton",
            StyleRegion::Form => "form",
            StyleRegion::FormGroup => "formGroup",
            StyleRegion::Label => "label",
            StyleRegion::Input => "input",
            StyleRegion::FieldError => "fieldError",
            StyleRegion::ErrorBanner => "errorBanner",
            StyleRegion::Table => "table",
            StyleRegion::HeaderCell => "headerCell",
            StyleRegion::Row => "row",
            StyleRegion::Cell => "cell",
            StyleRegion::ActionsCell => "actionsCell",
            StyleRegion::Empty => "empty",
            StyleRegion::Loading => "loading",
            StyleRegion::Count => "count",
            StyleRegion::Highlight => "highlight",
        }
    }

    pub fn from_name(name: &str) -> Option<StyleRegion> {
        StyleRegion::ALL.iter().copied().find(|r| r.name() == name)
    }

    fn default_properties(self) -> &'static [(&'static str, &'static str)] {
        match self {
            StyleRegion::Container => &[
                ("padding", "20px"),
                ("background", "#ffffff"),
                ("border-radius", "8px"),
                ("box-shadow", "0 2px 4px rgba(0, 0, 0, 0.1)"),
                ("font-family", "system-ui, sans-serif"),
            ],
            StyleRegion::Header => &[
                ("display", "flex"),
                ("justify-content", "space-between"),
                ("align-items", "center"),
                ("margin-bottom", "16px"),
            ],
            StyleRegion::Title => &[("margin", "0"), ("font-size", "22px"), ("color", "#333")],
            StyleRegion::Toolbar => &[
                ("display", "flex"),
                ("gap", "8px"),
                ("align-items", "center"),
                ("margin-bottom", "12px"),
            ],
            StyleRegion::SearchInput => &[
                ("width", "250px"),
                ("padding", "6px 10px"),
                ("border", "1px solid #ddd"),
                ("border-radius", "4px"),
                ("font-size", "15px"),
            ],
            StyleRegion::Button => &[
                ("padding", "6px 12px"),
                ("border", "1px solid #ccc"),
                ("border-radius", "4px"),
                ("background", "#f5f5f5"),
                ("cursor", "pointer"),
            ],
            StyleRegion::PrimaryButton => &[
                ("padding", "6px 12px"),
                ("border", "none"),
                ("border-radius", "4px"),
                ("background", "#1976d2"),
                ("color", "#ffffff"),
                ("cursor", "pointer"),
            ],
            StyleRegion::DangerButton => &[
                ("padding", "4px 10px"),
                ("border", "none"),
                ("border-radius", "4px"),
                ("background", "#d32f2f"),
                ("color", "#ffffff"),
                ("cursor", "pointer"),
            ],
            StyleRegion::Form => &[
                ("padding", "16px"),
                ("margin-bottom", "16px"),
                ("border", "1px solid #e0e0e0"),
                ("border-radius", "6px"),
                ("background", "#fafafa"),
            ],
            StyleRegion::FormGroup => &[
                ("display", "flex"),
                ("flex-direction", "column"),
                ("gap", "4px"),
                ("margin-bottom", "12px"),
            ],
            StyleRegion::Label => &[("font-weight", "500"), ("font-size", "14px")],
            StyleRegion::Input => &[
                ("padding", "6px 10px"),
                ("border", "1px solid #ddd"),
                ("border-radius", "4px"),
                ("font-size", "14px"),
            ],
            StyleRegion::FieldError => &[("color", "#d32f2f"), ("font-size", "12px")],
            StyleRegion::ErrorBanner => &[
                ("padding", "10px 12px"),
                ("margin-bottom", "12px"),
                ("border", "1px solid #f5c2c7"),
                ("border-radius", "4px"),
                ("background", "#f8d7da"),
                ("color", "#842029"),
            ],
            StyleRegion::Table => &[("width", "100%"), ("border-collapse", "collapse")],
            StyleRegion::HeaderCell => &[
                ("text-align", "left"),
                ("padding", "8px"),
                ("border-bottom", "2px solid #e0e0e0"),
                ("background", "#f5f5f5"),
            ],
            StyleRegion::Row => &[("border-bottom", "1px solid #eeeeee")],
            StyleRegion::Cell => &[("padding", "8px")],
            StyleRegion::ActionsCell => &[
                ("padding", "8px"),
                ("display", "flex"),
                ("gap", "6px"),
            ],
            StyleRegion::Empty => &[
                ("padding", "16px"),
                ("text-align", "center"),
                ("color", "#888"),
            ],
            StyleRegion::Loading => &[
                ("padding", "16px"),
                ("text-align", "center"),
                ("color", "#666"),
            ],
            StyleRegion::Count => &[("font-size", "13px"), ("color", "#666")],
            StyleRegion::Highlight => &[
                ("background-color", "#ff9800"),
                ("color", "white"),
                ("padding", "1px 2px"),
                ("border-radius", "2px"),
            ],
        }
    }

    pub fn default_style(self) -> StyleMap {
        self.default_properties()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

/// Стили всех регионов после слияния
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStyles {
    regions: BTreeMap<StyleRegion, StyleMap>,
}

impl ResolvedStyles {
    pub fn get(&self, region: StyleRegion) -> Option<&StyleMap> {
        self.regions.get(&region)
    }

    /// Текст атрибута `style` для региона
    pub fn css(&self, region: StyleRegion) -> String {
        self.get(region)
            .map(|props| {
                props
                    .iter()
                    .map(|(k, v)| format!("{}: {};", k, v))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }
}

impl Default for ResolvedStyles {
    fn default() -> Self {
        resolve_styles(&StyleOverrides::new())
    }
}

/// `backgroundColor` -> `background-color`; kebab-case остаётся как есть
pub fn normalize_property(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub fn resolve_styles(overrides: &StyleOverrides) -> ResolvedStyles {
    let regions = StyleRegion::ALL
        .iter()
        .map(|&region| {
            let mut style = region.default_style();
            if let Some(custom) = overrides.get(&region) {
                for (prop, value) in custom {
                    style.insert(normalize_property(prop), value.clone());
                }
            }
            (region, style)
        })
        .collect();
    ResolvedStyles { regions }
}
