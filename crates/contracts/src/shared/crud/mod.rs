//! Модель данных и чистая логика CRUD-панели: записи, виды полей,
//! поиск/сортировка записей, регионы стилей и настройки панели.

pub mod error;
pub mod form;
pub mod list;
pub mod record;
pub mod settings;
pub mod style;

pub use error::{CallbackFailure, CallbackResult, SettingsError};
pub use form::{FieldErrors, FieldKind, FormValues, InputType, SelectOption};
pub use list::{filter_records, sort_records, Searchable, SortState, Sortable};
pub use record::{Record, RecordId};
pub use settings::PanelSettings;
pub use style::{resolve_styles, ResolvedStyles, StyleMap, StyleOverrides, StyleRegion};
