use thiserror::Error;

/// Тип результата колбэков панели
pub type CallbackResult = anyhow::Result<()>;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid panel settings (toml): {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid panel settings (json): {0}")]
    Json(#[from] serde_json::Error),
}

/// Колбэк, вернувший ошибку; панель логирует и отбрасывает её
#[derive(Debug, Error)]
#[error("{action} callback failed: {error:#}")]
pub struct CallbackFailure {
    pub action: &'static str,
    pub error: anyhow::Error,
}

impl CallbackFailure {
    pub fn from_result(action: &'static str, result: CallbackResult) -> Option<Self> {
        result.err().map(|error| Self { action, error })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_failure_message() {
        let failure =
            CallbackFailure::from_result("delete", Err(anyhow::anyhow!("record is locked")))
                .unwrap();
        assert_eq!(failure.to_string(), "delete callback failed: record is locked");
        assert!(CallbackFailure::from_result("add", Ok(())).is_none());
    }
}
