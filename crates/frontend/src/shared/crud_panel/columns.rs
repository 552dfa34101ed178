//! Описание колонок таблицы и полей формы

use contracts::shared::crud::{FieldKind, Record};
use leptos::prelude::*;

/// Колонка таблицы: какой ключ записи выводить и как
#[derive(Clone)]
pub struct ColumnDef {
    pub key: String,
    pub label: String,
    /// Свой рендер ячейки; без него выводится текст значения
    pub render: Option<Callback<Record, AnyView>>,
    pub sortable: bool,
}

impl ColumnDef {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            render: None,
            sortable: false,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn render_with(mut self, render: impl Fn(Record) -> AnyView + Send + Sync + 'static) -> Self {
        self.render = Some(Callback::new(render));
        self
    }
}

/// Одно поле формы добавления
#[derive(Clone)]
pub struct FieldDef {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<String>,
    /// Дополнительная проверка после проверки обязательности; текст `Err` выводится как есть
    pub validate: Option<Callback<String, Result<(), String>>>,
    pub default_value: Option<String>,
}

impl FieldDef {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: FieldKind::default(),
            required: false,
            placeholder: None,
            validate: None,
            default_value: None,
        }
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn validate_with(
        mut self,
        validate: impl Fn(String) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validate = Some(Callback::new(validate));
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// Ключи для поиска: все объявленные колонки
pub fn column_keys(columns: &[ColumnDef]) -> Vec<String> {
    columns.iter().map(|c| c.key.clone()).collect()
}
