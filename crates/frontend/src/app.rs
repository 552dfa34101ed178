//! Демо: таблица пользователей поверх состояния в памяти

use crate::shared::crud_panel::{ColumnDef, CrudPanel, FieldDef};
use contracts::shared::crud::{
    CallbackResult, FieldKind, FormValues, InputType, PanelSettings, Record, RecordId, SelectOption,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const PANEL_SETTINGS: &str = include_str!("../panel.toml");

/// Имитация задержки перезагрузки
const REFRESH_DELAY_MS: u32 = 600;

fn sample_users() -> Vec<Record> {
    vec![
        Record::new(1)
            .with("name", "John Doe")
            .with("email", "john@example.com")
            .with("role", "admin")
            .with("created_at", "2024-03-15 14:02"),
        Record::new(2)
            .with("name", "Jane Smith")
            .with("email", "jane@example.com")
            .with("role", "user")
            .with("created_at", "2024-04-02 09:41"),
    ]
}

fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("name", "Name").sortable(),
        ColumnDef::new("email", "Email").render_with(|record: Record| {
            let email = record.cell_text("email").unwrap_or_default();
            view! { <a href=format!("mailto:{}", email)>{email.clone()}</a> }.into_any()
        }),
        ColumnDef::new("role", "Role").sortable(),
        ColumnDef::new("created_at", "Created").sortable(),
    ]
}

fn form_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("name", "Name")
            .required()
            .placeholder("Full name"),
        FieldDef::new("email", "Email")
            .kind(FieldKind::input(InputType::Email))
            .required()
            .placeholder("name@example.com")
            .validate_with(|value| {
                let valid = value
                    .split_once('@')
                    .map(|(user, domain)| !user.is_empty() && domain.contains('.'))
                    .unwrap_or(false);
                if valid {
                    Ok(())
                } else {
                    Err("Invalid email format".to_string())
                }
            }),
        FieldDef::new("role", "Role")
            .kind(FieldKind::select(vec![
                SelectOption::new("user", "User"),
                SelectOption::new("admin", "Admin"),
            ]))
            .default_value("user"),
        FieldDef::new("notes", "Notes").kind(FieldKind::textarea()),
    ]
}

fn record_from_form(values: FormValues) -> Record {
    let id = RecordId::Text(uuid::Uuid::new_v4().to_string());
    let created_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    values
        .into_iter()
        .fold(Record::new(id), |record, (key, value)| record.with(&key, value))
        .with("created_at", created_at)
}

#[component]
pub fn App() -> impl IntoView {
    let settings = PanelSettings::load(Some(PANEL_SETTINGS)).unwrap_or_else(|e| {
        log::warn!("{}; using default panel settings", e);
        PanelSettings::default()
    });
    let (custom_styles, unknown_regions) = settings.style_overrides();
    for name in unknown_regions {
        log::warn!("unknown style region '{}' ignored", name);
    }

    let users = RwSignal::new(sample_users());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (editing, set_editing) = signal::<Option<String>>(None);

    let on_add = Callback::new(move |values: FormValues| -> CallbackResult {
        let email = values.get("email").cloned().unwrap_or_default();
        let taken = users.with(|list| {
            list.iter()
                .any(|r| r.cell_text("email").as_deref() == Some(email.as_str()))
        });
        if taken {
            set_error.set(Some(format!("A user with email {} already exists", email)));
            anyhow::bail!("duplicate email {}", email);
        }
        users.update(|list| list.push(record_from_form(values)));
        set_error.set(None);
        Ok(())
    });

    let on_edit = Callback::new(move |record: Record| -> CallbackResult {
        log::info!("edit requested for user {}", record.id);
        set_editing.set(record.cell_text("name"));
        Ok(())
    });

    let on_delete = Callback::new(move |id: RecordId| -> CallbackResult {
        users.update(|list| list.retain(|r| r.id != id));
        log::info!("deleted user {}", id);
        Ok(())
    });

    let on_refresh = Callback::new(move |_: ()| -> CallbackResult {
        set_loading.set(true);
        Timeout::new(REFRESH_DELAY_MS, move || {
            users.set(sample_users());
            set_loading.set(false);
        })
        .forget();
        Ok(())
    });

    let render_actions = Callback::new(move |record: Record| {
        let name = record.cell_text("name").unwrap_or_default();
        view! {
            <button type="button" on:click=move |_| log::info!("viewing {}", name)>
                "View"
            </button>
        }
        .into_any()
    });

    view! {
        <CrudPanel
            title=settings.title.clone()
            data=users
            columns=columns()
            form_fields=form_fields()
            on_add=on_add
            on_edit=on_edit
            on_delete=on_delete
            on_refresh=on_refresh
            loading=loading
            error=error
            render_actions=render_actions
            custom_styles=custom_styles
            confirm_delete=settings.confirm_delete
            search_placeholder=settings.search_placeholder.clone()
            empty_message=settings.empty_message.clone()
            loading_message=settings.loading_message.clone()
        />
        {move || editing.get().map(|name| view! {
            <p style="max-width: 960px; margin: 0 auto; color: #555;">
                {format!("Editing: {}", name)}
            </p>
        })}
    }
}
