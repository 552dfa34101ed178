//! Поиск и сортировка по спискам записей

use super::record::{value_to_text, Record, ID_KEY};
use serde_json::Value;
use std::cmp::Ordering;

/// Trait для типов, поддерживающих поиск по запросу в нижнем регистре
pub trait Searchable {
    /// True, если текст любого из `keys` содержит `filter_lower`
    fn matches_filter<K: AsRef<str>>(&self, filter_lower: &str, keys: &[K]) -> bool;
}

/// Trait для типов, поддерживающих сортировку по имени поля
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

impl Searchable for Record {
    fn matches_filter<K: AsRef<str>>(&self, filter_lower: &str, keys: &[K]) -> bool {
        keys.iter().any(|key| {
            self.cell_text(key.as_ref())
                .map(|text| text.to_lowercase().contains(filter_lower))
                .unwrap_or(false)
        })
    }
}

impl Sortable for Record {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        if field == ID_KEY {
            return self.id.cmp(&other.id);
        }
        let a = self.get(field).filter(|v| !v.is_null());
        let b = other.get(field).filter(|v| !v.is_null());
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => compare_values(a, b),
        }
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_f64(), b.as_f64()) {
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }
    let x = value_to_text(a).unwrap_or_default().to_lowercase();
    let y = value_to_text(b).unwrap_or_default().to_lowercase();
    x.cmp(&y)
}

/// Оставляет элементы, совпадающие с `query` по любому из `keys`, сохраняя порядок.
///
/// Совпадение - поиск подстроки без учёта регистра. Пустой запрос или
/// запрос из пробелов оставляет всё.
pub fn filter_records<T, K>(items: &[T], query: &str, keys: &[K]) -> Vec<T>
where
    T: Searchable + Clone,
    K: AsRef<str>,
{
    if query.trim().is_empty() {
        return items.to_vec();
    }

    let filter_lower = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&filter_lower, keys))
        .cloned()
        .collect()
}

/// Активная сортировка колонки
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub ascending: bool,
}

impl SortState {
    /// Следующее состояние после клика по заголовку `key`
    pub fn toggled(current: Option<&SortState>, key: &str) -> SortState {
        match current {
            Some(s) if s.key == key => SortState {
                key: key.to_string(),
                ascending: !s.ascending,
            },
            _ => SortState {
                key: key.to_string(),
                ascending: true,
            },
        }
    }

    pub fn indicator(&self, key: &str) -> &'static str {
        if self.key == key {
            if self.ascending {
                " ▲"
            } else {
                " ▼"
            }
        } else {
            " ⇅"
        }
    }
}

/// Стабильная сортировка по полю состояния
pub fn sort_records<T: Sortable>(items: &mut [T], sort: &SortState) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, &sort.key);
        if sort.ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::record::RecordId;

    fn people() -> Vec<Record> {
        vec![
            Record::new(1)
                .with("name", "John Doe")
                .with("email", "john@example.com"),
            Record::new(2)
                .with("name", "Jane Smith")
                .with("email", "jane@example.com"),
        ]
    }

    const KEYS: [&str; 2] = ["name", "email"];

    #[test]
    fn test_filter_by_name() {
        let filtered = filter_records(&people(), "John", &KEYS);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, RecordId::Int(1));
    }

    #[test]
    fn test_filter_is_case_insensitive_and_crosses_columns() {
        let filtered = filter_records(&people(), "JANE@", &KEYS);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, RecordId::Int(2));

        let filtered = filter_records(&people(), "example", &KEYS);
        assert_eq!(filtered, people());
    }

    #[test]
    fn test_blank_query_returns_everything_in_order() {
        let data = people();
        assert_eq!(filter_records(&data, "", &KEYS), data);
        assert_eq!(filter_records(&data, "   \t", &KEYS), data);
    }

    #[test]
    fn test_filter_is_idempotent_subset() {
        let data = people();
        for query in ["j", "doe", "example.com", "zzz", " "] {
            let once = filter_records(&data, query, &KEYS);
            let twice = filter_records(&once, query, &KEYS);
            assert_eq!(once, twice);
            assert!(once.iter().all(|r| data.contains(r)));
        }
    }

    #[test]
    fn test_null_values_are_skipped_per_column() {
        let data = vec![
            Record::new(1).with("name", Value::Null).with("email", "null@x.io"),
            Record::new(2).with("name", "Nully"),
        ];
        let filtered = filter_records(&data, "null", &KEYS);
        assert_eq!(filtered.len(), 2);

        let filtered = filter_records(&data, "nully", &["name"]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, RecordId::Int(2));
    }

    #[test]
    fn test_only_declared_keys_are_searched() {
        let data = vec![Record::new(1).with("name", "Ann").with("secret", "hidden")];
        assert!(filter_records(&data, "hidden", &["name"]).is_empty());
    }

    #[test]
    fn test_numbers_match_as_text() {
        let data = vec![Record::new(1).with("age", 42), Record::new(2).with("age", 7)];
        let filtered = filter_records(&data, "4", &["age"]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, RecordId::Int(1));
    }

    #[test]
    fn test_sort_toggle_cycle() {
        let first = SortState::toggled(None, "name");
        assert!(first.ascending);
        let second = SortState::toggled(Some(&first), "name");
        assert!(!second.ascending);
        let other = SortState::toggled(Some(&second), "email");
        assert_eq!(other.key, "email");
        assert!(other.ascending);
        assert_eq!(other.indicator("email"), " ▲");
        assert_eq!(other.indicator("name"), " ⇅");
    }

    #[test]
    fn test_sort_numbers_and_text() {
        let mut data = vec![
            Record::new(1).with("age", 30).with("name", "bob"),
            Record::new(2).with("age", 4).with("name", "Alice"),
            Record::new(3).with("name", "carl"),
        ];
        sort_records(&mut data, &SortState { key: "age".into(), ascending: true });
        let ids: Vec<_> = data.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, ["2", "1", "3"]);

        sort_records(&mut data, &SortState { key: "name".into(), ascending: false });
        let ids: Vec<_> = data.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut data = vec![
            Record::new(1).with("role", "user"),
            Record::new(2).with("role", "admin"),
            Record::new(3).with("role", "user"),
        ];
        sort_records(&mut data, &SortState { key: "role".into(), ascending: true });
        let ids: Vec<_> = data.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, ["2", "1", "3"]);
    }
}
