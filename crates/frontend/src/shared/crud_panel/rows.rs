//! Заголовок и строки таблицы панели

use super::boundary::guard;
use super::columns::ColumnDef;
use super::search_bar::highlight_matches;
use super::view_model::CrudPanelViewModel;
use crate::shared::icons::icon;
use contracts::shared::crud::{CallbackResult, Record, RecordId, ResolvedStyles, StyleRegion};
use leptos::prelude::*;

pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this item?";

/// Действия над строкой от вызывающей стороны
#[derive(Clone, Copy)]
pub struct RowActions {
    pub on_edit: Option<Callback<Record, CallbackResult>>,
    pub on_delete: Option<Callback<RecordId, CallbackResult>>,
    pub render_actions: Option<Callback<Record, AnyView>>,
    pub confirm_delete: Signal<bool>,
}

impl RowActions {
    /// Выводится ли колонка действий вообще
    pub fn any(&self) -> bool {
        self.on_edit.is_some() || self.on_delete.is_some() || self.render_actions.is_some()
    }
}

/// Реактивные входы, общие для всех строк
#[derive(Clone, Copy)]
pub struct RowContext {
    pub query: Signal<String>,
    pub disabled: Signal<bool>,
    pub styles: StoredValue<ResolvedStyles>,
}

impl RowContext {
    fn css(&self, region: StyleRegion) -> String {
        self.styles.with_value(|s| s.css(region))
    }
}

/// Число колонок таблицы, включая колонку действий
pub fn column_span(columns: usize, has_actions: bool) -> usize {
    columns + usize::from(has_actions)
}

/// Вызывает `on_delete` для `id`, при необходимости сначала спрашивает `confirm`.
/// Возвращает, был ли вызван колбэк удаления.
pub fn delete_with_confirmation(
    id: RecordId,
    confirm_required: bool,
    confirm: impl FnOnce(&RecordId) -> bool,
    on_delete: impl FnOnce(RecordId) -> CallbackResult,
) -> bool {
    if confirm_required && !confirm(&id) {
        log::debug!("CrudPanel: delete of {} declined", id);
        return false;
    }
    guard("delete", on_delete(id));
    true
}

fn browser_confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn TableHeader(vm: CrudPanelViewModel, has_actions: bool, ctx: RowContext) -> impl IntoView {
    let header_css = ctx.css(StyleRegion::HeaderCell);
    let cells = vm.columns.with_value(|columns| {
        columns
            .iter()
            .map(|column| {
                let key = column.key.clone();
                let label = column.label.clone();
                if column.sortable {
                    let key_for_click = key.clone();
                    let disabled = ctx.disabled;
                    view! {
                        <th
                            style=format!("{} cursor: pointer; user-select: none;", header_css)
                            on:click=move |_| {
                                vm.click_header(&key_for_click, disabled.get_untracked());
                            }
                        >
                            {label}
                            <span style="color: #999;">
                                {move || vm.sort.with(|s| match s {
                                    Some(state) => state.indicator(&key),
                                    None => " ⇅",
                                })}
                            </span>
                        </th>
                    }
                    .into_any()
                } else {
                    view! { <th style=header_css.clone()>{label}</th> }.into_any()
                }
            })
            .collect::<Vec<_>>()
    });

    view! {
        <thead>
            <tr>
                {cells}
                {has_actions.then(|| view! { <th style=header_css.clone()>"Actions"</th> })}
            </tr>
        </thead>
    }
}

fn cell_view(column: &ColumnDef, record: &Record, ctx: RowContext) -> AnyView {
    if let Some(render) = column.render {
        return render.run(record.clone());
    }
    let text = record.cell_text(&column.key).unwrap_or_default();
    let highlight_css = ctx.css(StyleRegion::Highlight);
    let query = ctx.query;
    view! { <>{move || highlight_matches(&text, &query.get(), &highlight_css)}</> }.into_any()
}

fn actions_view(record: &Record, actions: RowActions, ctx: RowContext) -> AnyView {
    let disabled = ctx.disabled;

    let edit = actions.on_edit.map(|on_edit| {
        let record = record.clone();
        view! {
            <button
                type="button"
                style=ctx.css(StyleRegion::Button)
                disabled=move || disabled.get()
                on:click=move |_| {
                    guard("edit", on_edit.run(record.clone()));
                }
            >
                {icon("edit")}
                " Edit"
            </button>
        }
    });

    let delete = actions.on_delete.map(|on_delete| {
        let id = record.id.clone();
        let confirm_delete = actions.confirm_delete;
        view! {
            <button
                type="button"
                style=ctx.css(StyleRegion::DangerButton)
                disabled=move || disabled.get()
                on:click=move |_| {
                    delete_with_confirmation(
                        id.clone(),
                        confirm_delete.get_untracked(),
                        |_| browser_confirm(DELETE_CONFIRM_MESSAGE),
                        |id| on_delete.run(id),
                    );
                }
            >
                {icon("delete")}
                " Delete"
            </button>
        }
    });

    let extra = actions.render_actions.map(|render| render.run(record.clone()));

    view! {
        <td style=ctx.css(StyleRegion::ActionsCell)>
            {edit}
            {delete}
            {extra}
        </td>
    }
    .into_any()
}

/// Одно представление на запись; свой рендер действий вызывается один раз на запись
pub fn body_rows(
    records: Vec<Record>,
    columns: &[ColumnDef],
    actions: RowActions,
    ctx: RowContext,
) -> Vec<AnyView> {
    let row_css = ctx.css(StyleRegion::Row);
    let cell_css = ctx.css(StyleRegion::Cell);
    records
        .into_iter()
        .map(|record| {
            let cells = columns
                .iter()
                .map(|column| {
                    let content = cell_view(column, &record, ctx);
                    view! { <td style=cell_css.clone()>{content}</td> }
                })
                .collect::<Vec<_>>();
            let actions_cell = actions.any().then(|| actions_view(&record, actions, ctx));
            view! {
                <tr style=row_css.clone() data-id=record.id.to_string()>
                    {cells}
                    {actions_cell}
                </tr>
            }
            .into_any()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn context() -> RowContext {
        RowContext {
            query: RwSignal::new(String::new()).into(),
            disabled: RwSignal::new(false).into(),
            styles: StoredValue::new(ResolvedStyles::default()),
        }
    }

    #[test]
    fn test_declined_confirmation_skips_delete() {
        let calls = RefCell::new(Vec::new());
        let invoked = delete_with_confirmation(
            RecordId::Int(1),
            true,
            |_| false,
            |id| {
                calls.borrow_mut().push(id);
                Ok(())
            },
        );
        assert!(!invoked);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_confirmed_delete_runs_once_with_id() {
        let calls = RefCell::new(Vec::new());
        let invoked = delete_with_confirmation(
            RecordId::Int(2),
            true,
            |_| true,
            |id| {
                calls.borrow_mut().push(id);
                Ok(())
            },
        );
        assert!(invoked);
        assert_eq!(calls.into_inner(), vec![RecordId::Int(2)]);
    }

    #[test]
    fn test_delete_without_confirmation_never_asks() {
        let asked = RefCell::new(false);
        let invoked = delete_with_confirmation(
            RecordId::from("abc"),
            false,
            |_| {
                *asked.borrow_mut() = true;
                false
            },
            |_| Err(anyhow::anyhow!("locked")),
        );
        assert!(invoked);
        assert!(!*asked.borrow());
    }

    #[test]
    fn test_column_span() {
        assert_eq!(column_span(3, true), 4);
        assert_eq!(column_span(3, false), 3);
    }

    #[test]
    fn test_custom_actions_rendered_once_per_record() {
        let rendered = Arc::new(AtomicUsize::new(0));
        let counter = rendered.clone();
        let actions = RowActions {
            on_edit: None,
            on_delete: None,
            render_actions: Some(Callback::new(move |_record: Record| {
                counter.fetch_add(1, Ordering::SeqCst);
                ().into_any()
            })),
            confirm_delete: RwSignal::new(true).into(),
        };
        assert!(actions.any());

        let records = vec![
            Record::new(1).with("name", "John Doe"),
            Record::new(2).with("name", "Jane Smith"),
        ];
        let columns = vec![ColumnDef::new("name", "Name")];
        let rows = body_rows(records, &columns, actions, context());

        assert_eq!(rows.len(), 2);
        assert_eq!(rendered.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_no_actions_column_without_callbacks() {
        let actions = RowActions {
            on_edit: None,
            on_delete: None,
            render_actions: None,
            confirm_delete: RwSignal::new(true).into(),
        };
        assert!(!actions.any());
    }
}
