//! Введённые значения и ошибки валидации формы добавления

use super::columns::FieldDef;
use contracts::shared::crud::{CallbackResult, FieldErrors, FormValues};
use leptos::prelude::*;

/// Результат попытки отправки
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Валидация не прошла; число полей с ошибкой
    Rejected(usize),
    /// `on_add` принял значения, форма сброшена
    Added,
    /// `on_add` вернул ошибку; введённые значения сохранены
    CallbackFailed,
}

/// Состояние формы: в `values` есть только отредактированные поля.
/// Нетронутые поля берут объявленное значение по умолчанию.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    values: FormValues,
    errors: FieldErrors,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Значение, показываемое в поле и отправляемое для `field`
    pub fn value(&self, field: &FieldDef) -> String {
        self.values
            .get(&field.key)
            .cloned()
            .or_else(|| field.default_value.clone())
            .unwrap_or_default()
    }

    /// Сохраняет ввод и сбрасывает ошибку только этого поля
    pub fn set_value(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
        self.errors.remove(key);
    }

    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
    }

    /// Итоговое значение каждого объявленного поля
    pub fn collect(&self, fields: &[FieldDef]) -> FormValues {
        fields
            .iter()
            .map(|f| (f.key.clone(), self.value(f)))
            .collect()
    }

    /// Проверка обязательности, затем собственный валидатор поля
    pub fn validate(&self, fields: &[FieldDef]) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in fields {
            let value = self.value(field);
            let blank = value.trim().is_empty();

            if blank {
                if field.required {
                    errors.insert(field.key.clone(), format!("{} is required", field.label));
                }
                continue;
            }

            if let Some(validate) = field.validate {
                if let Err(message) = validate.run(value) {
                    errors.insert(field.key.clone(), message);
                }
            }
        }
        errors
    }

    /// Проверяет форму и передаёт значения в `on_add`.
    ///
    /// При любой ошибке поля ничего не вызывается. При успехе значения и
    /// ошибки очищаются; при ошибке `on_add` ввод остаётся на месте.
    pub fn submit(
        &mut self,
        fields: &[FieldDef],
        on_add: impl FnOnce(FormValues) -> CallbackResult,
    ) -> SubmitOutcome {
        let errors = self.validate(fields);
        if !errors.is_empty() {
            let count = errors.len();
            log::debug!("CrudPanel: submit rejected, {} invalid field(s)", count);
            self.errors = errors;
            return SubmitOutcome::Rejected(count);
        }

        self.errors.clear();
        if super::boundary::guard("add", on_add(self.collect(fields))) {
            self.reset();
            SubmitOutcome::Added
        } else {
            SubmitOutcome::CallbackFailed
        }
    }
}
