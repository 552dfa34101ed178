//! CrudPanel: таблица данных на Leptos с поиском, формой добавления и действиями над строками.
//! Точка входа wasm монтирует демо-приложение на её основе.

pub mod app;
pub mod shared;

pub use shared::crud_panel::{ColumnDef, CrudPanel, FieldDef};

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("mounting CrudPanel demo");
    leptos::mount::mount_to_body(app::App);
}
