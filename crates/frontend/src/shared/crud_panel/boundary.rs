//! Граница ошибок вокруг колбэков вызывающей стороны.
//!
//! Ошибка колбэка логируется и отбрасывается; панель продолжает работать, а
//! пользователь сообщения не видит. Чтобы показать ошибку, вызывающая сторона передаёт
//! текст `error` обратно в панель.

use contracts::shared::crud::{CallbackFailure, CallbackResult};

/// Возвращает `true`, если колбэк отработал успешно
pub fn guard(action: &'static str, result: CallbackResult) -> bool {
    match CallbackFailure::from_result(action, result) {
        None => true,
        Some(failure) => {
            log::error!("CrudPanel: {}", failure);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_passes_success() {
        assert!(guard("edit", Ok(())));
    }

    #[test]
    fn test_guard_swallows_failure() {
        assert!(!guard("delete", Err(anyhow::anyhow!("backend unavailable"))));
    }
}
