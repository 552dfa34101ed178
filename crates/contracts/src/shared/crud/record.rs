use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Ключ атрибута-идентификатора, который есть у каждой записи
pub const ID_KEY: &str = "id";

/// Идентификатор записи: число или строка, без тега при сериализации
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(v) => write!(f, "{}", v),
            RecordId::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for RecordId {
    fn from(v: i64) -> Self {
        RecordId::Int(v)
    }
}

impl From<&str> for RecordId {
    fn from(v: &str) -> Self {
        RecordId::Text(v.to_string())
    }
}

impl From<String> for RecordId {
    fn from(v: String) -> Self {
        RecordId::Text(v)
    }
}

/// Строка данных вызывающей стороны: `id` и открытый набор атрибутов.
///
/// Сериализуется плоским JSON объектом, например
/// `{"id": 1, "name": "John Doe", "email": "john@example.com"}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub values: Map<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            values: Map::new(),
        }
    }

    /// Установка атрибута в стиле builder. Ключ `id` зарезервирован и игнорируется.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        if key != ID_KEY {
            self.values.insert(key.to_string(), value.into());
        }
        self
    }

    /// Сырое значение атрибута; `id` не входит в набор атрибутов
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Текст атрибута, `None` для отсутствующих и null значений
    pub fn cell_text(&self, key: &str) -> Option<String> {
        if key == ID_KEY {
            return Some(self.id.to_string());
        }
        self.values.get(key).and_then(value_to_text)
    }
}

/// Преобразует JSON значение в текст; у `null` текста нет
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
