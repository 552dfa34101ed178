use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Введённые значения формы по ключу поля
pub type FormValues = BTreeMap<String, String>;

/// Сообщения валидации по ключу поля
pub type FieldErrors = BTreeMap<String, String>;

/// HTML тип input для однострочных полей
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    #[default]
    Text,
    Email,
    Number,
    Password,
    Tel,
    Url,
    Date,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Number => "number",
            InputType::Password => "password",
            InputType::Tel => "tel",
            InputType::Url => "url",
            InputType::Date => "date",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

fn default_rows() -> u32 {
    3
}

/// Вид поля ввода. Список опций есть только у `Select`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Text {
        #[serde(default)]
        input_type: InputType,
    },
    Textarea {
        #[serde(default = "default_rows")]
        rows: u32,
    },
    Select {
        options: Vec<SelectOption>,
    },
}

impl Default for FieldKind {
    fn default() -> Self {
        FieldKind::Text {
            input_type: InputType::Text,
        }
    }
}

impl FieldKind {
    pub fn text() -> Self {
        Self::default()
    }

    pub fn input(input_type: InputType) -> Self {
        FieldKind::Text { input_type }
    }

    pub fn textarea() -> Self {
        FieldKind::Textarea {
            rows: default_rows(),
        }
    }

    pub fn select(options: Vec<SelectOption>) -> Self {
        FieldKind::Select { options }
    }
}
