//! Таблица данных со встроенным поиском, формой добавления и действиями над строками.
//!
//! Данные и побочные эффекты принадлежат вызывающей стороне: панель фильтрует и
//! выводит `data`, предлагает новые записи через `on_add` и передаёт запросы
//! на редактирование/удаление. Локальное состояние (запрос, сортировка, форма) -
//! [`CrudPanelViewModel`].

pub mod boundary;
pub mod columns;
pub mod form_state;
pub mod form_view;
pub mod rows;
pub mod search_bar;
pub mod view_model;

pub use columns::{ColumnDef, FieldDef};
pub use form_state::{FormState, SubmitOutcome};
pub use view_model::CrudPanelViewModel;

use crate::shared::icons::icon;
use boundary::guard;
use contracts::shared::crud::settings::{
    DEFAULT_EMPTY_MESSAGE, DEFAULT_LOADING_MESSAGE, DEFAULT_SEARCH_PLACEHOLDER,
};
use contracts::shared::crud::{
    resolve_styles, CallbackResult, FormValues, Record, RecordId, StyleOverrides, StyleRegion,
};
use form_view::AddForm;
use leptos::prelude::*;
use rows::{body_rows, column_span, RowActions, RowContext, TableHeader};
use search_bar::SearchInput;
use view_model::count_label;

#[component]
pub fn CrudPanel(
    /// Заголовок
    #[prop(into)]
    title: String,
    /// Исходная коллекция; id должны быть уникальны
    #[prop(into)]
    data: Signal<Vec<Record>>,
    /// Колонки таблицы
    columns: Vec<ColumnDef>,
    /// Поля формы добавления
    form_fields: Vec<FieldDef>,
    /// Получает проверенные значения формы; без него формы добавления нет
    #[prop(optional)]
    on_add: Option<Callback<FormValues, CallbackResult>>,
    #[prop(optional)]
    on_edit: Option<Callback<Record, CallbackResult>>,
    #[prop(optional)]
    on_delete: Option<Callback<RecordId, CallbackResult>>,
    /// Перезагрузка на стороне вызывающего
    #[prop(optional)]
    on_refresh: Option<Callback<(), CallbackResult>>,
    /// Блокирует элементы управления и показывает сообщение загрузки
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    /// Баннер ошибки
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Дополнительные элементы строки, вызывается один раз на видимую запись
    #[prop(optional)]
    render_actions: Option<Callback<Record, AnyView>>,
    #[prop(optional)]
    custom_styles: StyleOverrides,
    /// Запрашивать подтверждение удаления (по умолчанию true)
    #[prop(optional, into)]
    confirm_delete: MaybeProp<bool>,
    #[prop(optional, into)]
    search_placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    empty_message: MaybeProp<String>,
    #[prop(optional, into)]
    loading_message: MaybeProp<String>,
) -> impl IntoView {
    let vm = CrudPanelViewModel::new(data, columns, form_fields);
    let styles = StoredValue::new(resolve_styles(&custom_styles));
    let css = move |region: StyleRegion| styles.with_value(|s| s.css(region));

    let is_loading = Signal::derive(move || loading.get().unwrap_or(false));
    let placeholder = Signal::derive(move || {
        search_placeholder
            .get()
            .unwrap_or_else(|| DEFAULT_SEARCH_PLACEHOLDER.to_string())
    });
    let empty_text =
        move || empty_message.get().unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string());
    let loading_text =
        move || loading_message.get().unwrap_or_else(|| DEFAULT_LOADING_MESSAGE.to_string());

    let actions = RowActions {
        on_edit,
        on_delete,
        render_actions,
        confirm_delete: Signal::derive(move || confirm_delete.get().unwrap_or(true)),
    };
    let has_actions = actions.any();
    let ctx = RowContext {
        query: vm.search.into(),
        disabled: is_loading,
        styles,
    };
    let span = column_span(vm.columns.with_value(|c| c.len()), has_actions);

    let rows = Memo::new(move |_| vm.visible_rows());

    let add_button = on_add.map(|_| {
        view! {
            <button
                type="button"
                style=css(StyleRegion::PrimaryButton)
                disabled=move || is_loading.get()
                on:click=move |_| vm.toggle_form()
            >
                {move || if vm.show_form.get() {
                    view! { "Cancel" }.into_any()
                } else {
                    view! { {icon("plus")} " Add New" }.into_any()
                }}
            </button>
        }
    });

    let refresh_button = on_refresh.map(|on_refresh| {
        view! {
            <button
                type="button"
                style=css(StyleRegion::Button)
                disabled=move || is_loading.get()
                on:click=move |_| {
                    guard("refresh", on_refresh.run(()));
                }
            >
                {icon("refresh")}
                " Refresh"
            </button>
        }
    });

    let add_form = move || {
        on_add.filter(|_| vm.show_form.get()).map(|on_add| {
            view! { <AddForm vm=vm on_add=on_add styles=styles disabled=is_loading /> }
        })
    };

    let table_body = move || {
        if is_loading.get() {
            view! {
                <tr>
                    <td colspan=span style=css(StyleRegion::Loading)>{loading_text()}</td>
                </tr>
            }
            .into_any()
        } else if rows.with(|r| r.is_empty()) {
            view! {
                <tr>
                    <td colspan=span style=css(StyleRegion::Empty)>{empty_text()}</td>
                </tr>
            }
            .into_any()
        } else {
            let records = rows.get();
            vm.columns
                .with_value(|columns| body_rows(records, columns, actions, ctx))
                .into_any()
        }
    };

    view! {
        <div style=css(StyleRegion::Container)>
            <div style=css(StyleRegion::Header)>
                <h2 style=css(StyleRegion::Title)>{title}</h2>
                <span style=css(StyleRegion::Count)>
                    {move || count_label(rows.with(|r| r.len()))}
                </span>
            </div>

            {move || error.get().map(|e| view! {
                <div style=css(StyleRegion::ErrorBanner) role="alert">{e}</div>
            })}

            <div style=css(StyleRegion::Toolbar)>
                <SearchInput
                    query=vm.search
                    placeholder=placeholder
                    disabled=is_loading
                    style=css(StyleRegion::SearchInput)
                />
                {add_button}
                {refresh_button}
            </div>

            {add_form}

            <table style=css(StyleRegion::Table)>
                <TableHeader vm=vm has_actions=has_actions ctx=ctx />
                <tbody>{table_body}</tbody>
            </table>
        </div>
    }
}
