use super::columns::{column_keys, ColumnDef, FieldDef};
use super::form_state::{FormState, SubmitOutcome};
use contracts::shared::crud::{
    filter_records, sort_records, CallbackResult, FormValues, Record, SortState,
};
use leptos::prelude::*;

/// Локальное состояние панели: запрос, сортировка, форма и её видимость
#[derive(Clone, Copy)]
pub struct CrudPanelViewModel {
    pub data: Signal<Vec<Record>>,
    pub columns: StoredValue<Vec<ColumnDef>>,
    pub fields: StoredValue<Vec<FieldDef>>,
    pub search: RwSignal<String>,
    pub sort: RwSignal<Option<SortState>>,
    pub form: RwSignal<FormState>,
    pub show_form: RwSignal<bool>,
}

impl CrudPanelViewModel {
    pub fn new(data: Signal<Vec<Record>>, columns: Vec<ColumnDef>, fields: Vec<FieldDef>) -> Self {
        Self {
            data,
            columns: StoredValue::new(columns),
            fields: StoredValue::new(fields),
            search: RwSignal::new(String::new()),
            sort: RwSignal::new(None),
            form: RwSignal::new(FormState::new()),
            show_form: RwSignal::new(false),
        }
    }

    /// Отфильтрованные (и, при активной сортировке, отсортированные) записи
    pub fn visible_rows(&self) -> Vec<Record> {
        let query = self.search.get();
        let sort = self.sort.get();
        let keys = self.columns.with_value(|c| column_keys(c));
        self.data.with(|items| {
            let mut rows = filter_records(items, &query, &keys);
            if let Some(sort) = sort {
                sort_records(&mut rows, &sort);
            }
            rows
        })
    }

    pub fn toggle_sort(&self, key: &str) {
        self.sort
            .update(|s| *s = Some(SortState::toggled(s.as_ref(), key)));
    }

    /// Клик по заголовку сортируемой колонки; во время загрузки игнорируется
    pub fn click_header(&self, key: &str, disabled: bool) -> bool {
        if disabled {
            return false;
        }
        self.toggle_sort(key);
        true
    }

    pub fn set_field(&self, key: &str, value: String) {
        self.form.update(|f| f.set_value(key, value));
    }

    pub fn toggle_form(&self) {
        if self.show_form.get_untracked() {
            self.cancel_form();
        } else {
            self.show_form.set(true);
        }
    }

    pub fn cancel_form(&self) {
        self.form.update(|f| f.reset());
        self.show_form.set(false);
    }

    /// Проверяет форму и передаёт её в `on_add`
    pub fn submit(&self, on_add: Callback<FormValues, CallbackResult>) -> SubmitOutcome {
        let fields = self.fields.get_value();
        let mut state = self.form.get_untracked();
        let outcome = state.submit(&fields, |values| on_add.run(values));
        self.form.set(state);
        if outcome == SubmitOutcome::Added {
            self.show_form.set(false);
        }
        outcome
    }
}

pub fn count_label(count: usize) -> String {
    format!("Total: {}", count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::crud::RecordId;
    use std::sync::{Arc, Mutex};

    fn users() -> Vec<Record> {
        vec![
            Record::new(1)
                .with("name", "John Doe")
                .with("email", "john@example.com"),
            Record::new(2)
                .with("name", "Jane Smith")
                .with("email", "jane@example.com"),
            Record::new(3)
                .with("name", "Bob Johnson")
                .with("email", "bob@example.com"),
        ]
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("name", "Name").sortable(),
            ColumnDef::new("email", "Email"),
        ]
    }

    fn name_field() -> FieldDef {
        FieldDef::new("name", "Name").required()
    }

    fn view_model(data: Vec<Record>) -> CrudPanelViewModel {
        CrudPanelViewModel::new(RwSignal::new(data).into(), columns(), vec![name_field()])
    }

    fn ids(rows: &[Record]) -> Vec<RecordId> {
        rows.iter().map(|r| r.id.clone()).collect()
    }

    fn recording_on_add(
        result: fn() -> CallbackResult,
    ) -> (Callback<FormValues, CallbackResult>, Arc<Mutex<Vec<FormValues>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let on_add = Callback::new(move |values: FormValues| -> CallbackResult {
            sink.lock().unwrap().push(values);
            result()
        });
        (on_add, calls)
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(1), "Total: 1");
        assert_eq!(count_label(0), "Total: 0");
    }

    #[test]
    fn test_search_john_counts_one() {
        let owner = Owner::new();
        owner.set();
        let data = users().into_iter().take(2).collect();
        let vm = view_model(data);

        vm.search.set("John".to_string());
        let rows = vm.visible_rows();

        assert_eq!(ids(&rows), vec![RecordId::Int(1)]);
        assert_eq!(count_label(rows.len()), "Total: 1");
    }

    #[test]
    fn test_visible_rows_filter_then_sort() {
        let owner = Owner::new();
        owner.set();
        let vm = view_model(users());

        assert_eq!(
            ids(&vm.visible_rows()),
            vec![RecordId::Int(1), RecordId::Int(2), RecordId::Int(3)]
        );

        vm.search.set("john".to_string());
        assert_eq!(ids(&vm.visible_rows()), vec![RecordId::Int(1), RecordId::Int(3)]);

        vm.toggle_sort("name");
        assert_eq!(ids(&vm.visible_rows()), vec![RecordId::Int(3), RecordId::Int(1)]);

        vm.toggle_sort("name");
        assert_eq!(ids(&vm.visible_rows()), vec![RecordId::Int(1), RecordId::Int(3)]);
    }

    #[test]
    fn test_header_click_ignored_while_disabled() {
        let owner = Owner::new();
        owner.set();
        let vm = view_model(users());

        assert!(!vm.click_header("name", true));
        assert_eq!(vm.sort.get_untracked(), None);

        assert!(vm.click_header("name", false));
        assert_eq!(
            vm.sort.get_untracked(),
            Some(SortState {
                key: "name".to_string(),
                ascending: true
            })
        );
    }

    #[test]
    fn test_submit_added_collapses_form() {
        let owner = Owner::new();
        owner.set();
        let vm = view_model(users());
        let (on_add, calls) = recording_on_add(|| Ok(()));

        vm.toggle_form();
        vm.set_field("name", "Ann".to_string());
        assert_eq!(vm.submit(on_add), SubmitOutcome::Added);

        assert!(!vm.show_form.get_untracked());
        assert_eq!(vm.form.get_untracked(), FormState::new());
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0]["name"], "Ann");
    }

    #[test]
    fn test_submit_rejected_keeps_form_open() {
        let owner = Owner::new();
        owner.set();
        let vm = view_model(users());
        let (on_add, calls) = recording_on_add(|| Ok(()));

        vm.toggle_form();
        assert_eq!(vm.submit(on_add), SubmitOutcome::Rejected(1));

        assert!(vm.show_form.get_untracked());
        assert_eq!(
            vm.form.with_untracked(|f| f.error("name").map(str::to_string)),
            Some("Name is required".to_string())
        );
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_failed_callback_keeps_form_and_input() {
        let owner = Owner::new();
        owner.set();
        let vm = view_model(users());
        let (on_add, calls) = recording_on_add(|| Err(anyhow::anyhow!("duplicate")));

        vm.toggle_form();
        vm.set_field("name", "Ann".to_string());
        assert_eq!(vm.submit(on_add), SubmitOutcome::CallbackFailed);

        assert!(vm.show_form.get_untracked());
        assert_eq!(vm.form.with_untracked(|f| f.value(&name_field())), "Ann");
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_toggle_and_cancel_reset_form() {
        let owner = Owner::new();
        owner.set();
        let vm = view_model(users());
        assert!(!vm.show_form.get_untracked());

        vm.toggle_form();
        assert!(vm.show_form.get_untracked());
        vm.set_field("name", "Ann".to_string());

        vm.toggle_form();
        assert!(!vm.show_form.get_untracked());
        assert_eq!(vm.form.get_untracked(), FormState::new());

        vm.toggle_form();
        vm.set_field("name", "Bob".to_string());
        vm.cancel_form();
        assert!(!vm.show_form.get_untracked());
        assert_eq!(vm.form.with_untracked(|f| f.value(&name_field())), "");
    }
}
