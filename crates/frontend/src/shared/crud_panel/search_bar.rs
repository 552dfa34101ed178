//! Поле поиска и подсветка совпадений

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Поле поиска, привязанное к запросу панели. Фильтрация на каждый ввод.
#[component]
pub fn SearchInput(
    /// Текущий запрос
    query: RwSignal<String>,
    #[prop(into)]
    placeholder: Signal<String>,
    #[prop(into)]
    disabled: Signal<bool>,
    #[prop(into)]
    style: String,
) -> impl IntoView {
    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder=move || placeholder.get()
                style=style
                prop:value=move || query.get()
                disabled=move || disabled.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            {move || if !query.get().is_empty() {
                view! {
                    <button
                        type="button"
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=move |_| query.set(String::new())
                        disabled=move || disabled.get()
                        title="Clear"
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Байтовые диапазоны `text`, совпадающие с `filter` без учёта регистра
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle = filter.to_lowercase();
    if needle.trim().is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        match match_at(text, pos, &needle) {
            Some(end) => {
                ranges.push((pos, end));
                pos = end;
            }
            None => {
                pos += text[pos..].chars().next().map(char::len_utf8).unwrap_or(1);
            }
        }
    }
    ranges
}

fn match_at(text: &str, start: usize, needle: &str) -> Option<usize> {
    let mut folded = String::new();
    for (offset, c) in text[start..].char_indices() {
        folded.extend(c.to_lowercase());
        if !needle.starts_with(folded.as_str()) {
            return None;
        }
        if folded.len() == needle.len() {
            return Some(start + offset + c.len_utf8());
        }
    }
    None
}

/// Оборачивает каждое совпадение `filter` в подсвеченный span
pub fn highlight_matches(text: &str, filter: &str, highlight_style: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <span style=highlight_style.to_string()>{text[start..end].to_string()}</span> }
                .into_any(),
        );
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}
