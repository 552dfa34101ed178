use super::columns::FieldDef;
use super::view_model::CrudPanelViewModel;
use crate::shared::icons::icon;
use contracts::shared::crud::{
    CallbackResult, FieldKind, FormValues, ResolvedStyles, StyleRegion,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Форма добавления, построенная по описанию полей
#[component]
pub fn AddForm(
    vm: CrudPanelViewModel,
    on_add: Callback<FormValues, CallbackResult>,
    styles: StoredValue<ResolvedStyles>,
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let css = move |region: StyleRegion| styles.with_value(|s| s.css(region));

    let inputs = vm.fields.with_value(|fields| {
        fields
            .iter()
            .cloned()
            .map(|field| view! { <FieldInput vm=vm field=field styles=styles disabled=disabled /> })
            .collect::<Vec<_>>()
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit(on_add);
    };

    view! {
        <form style=css(StyleRegion::Form) on:submit=on_submit novalidate=true>
            {inputs}
            <div style="display: flex; gap: 8px;">
                <button
                    type="submit"
                    style=css(StyleRegion::PrimaryButton)
                    disabled=move || disabled.get()
                >
                    {icon("save")}
                    " Save"
                </button>
                <button
                    type="button"
                    style=css(StyleRegion::Button)
                    disabled=move || disabled.get()
                    on:click=move |_| vm.cancel_form()
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

/// Подпись, поле ввода и ошибка одного поля
#[component]
fn FieldInput(
    vm: CrudPanelViewModel,
    field: FieldDef,
    styles: StoredValue<ResolvedStyles>,
    disabled: Signal<bool>,
) -> impl IntoView {
    let css = move |region: StyleRegion| styles.with_value(|s| s.css(region));
    let input_id = format!("crud-field-{}", field.key);
    let key = field.key.clone();
    let placeholder = field.placeholder.clone().unwrap_or_default();

    let current = {
        let field = field.clone();
        move || vm.form.with(|f| f.value(&field))
    };

    let control = match field.kind.clone() {
        FieldKind::Text { input_type } => {
            let key = key.clone();
            view! {
                <input
                    id=input_id.clone()
                    type=input_type.as_str()
                    style=css(StyleRegion::Input)
                    placeholder=placeholder
                    prop:value=current
                    disabled=move || disabled.get()
                    on:input=move |ev| vm.set_field(&key, event_target_value(&ev))
                />
            }
            .into_any()
        }
        FieldKind::Textarea { rows } => {
            let key = key.clone();
            view! {
                <textarea
                    id=input_id.clone()
                    rows=rows
                    style=css(StyleRegion::Input)
                    placeholder=placeholder
                    prop:value=current
                    disabled=move || disabled.get()
                    on:input=move |ev| vm.set_field(&key, event_target_value(&ev))
                />
            }
            .into_any()
        }
        FieldKind::Select { options } => {
            let key = key.clone();
            let prompt = if placeholder.is_empty() {
                format!("Select {}", field.label)
            } else {
                placeholder
            };
            let option_views = options
                .into_iter()
                .map(|option| {
                    let current = current.clone();
                    let value = option.value.clone();
                    view! {
                        <option value=option.value selected=move || current() == value>
                            {option.label}
                        </option>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <select
                    id=input_id.clone()
                    style=css(StyleRegion::Input)
                    disabled=move || disabled.get()
                    on:change=move |ev| vm.set_field(&key, event_target_value(&ev))
                >
                    <option value="">{prompt}</option>
                    {option_views}
                </select>
            }
            .into_any()
        }
    };

    let error = move || {
        vm.form
            .with(|f| f.error(&key).map(str::to_string))
            .map(|message| view! { <span style=css(StyleRegion::FieldError)>{message}</span> })
    };

    view! {
        <div style=css(StyleRegion::FormGroup)>
            <label for=input_id style=css(StyleRegion::Label)>
                {field.label.clone()}
                {field.required.then(|| view! { <span style="color: #d32f2f;">" *"</span> })}
            </label>
            {control}
            {error}
        </div>
    }
}
