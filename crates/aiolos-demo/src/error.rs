use std::path::PathBuf;

use aiolos_panel::PanelSettingsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("settings error in {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: PanelSettingsError,
    },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("logging setup failed: {message}")]
    Logging { message: String },
}

impl DemoError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn settings(path: impl Into<PathBuf>, source: PanelSettingsError) -> Self {
        Self::Settings {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DemoError;
    use aiolos_panel::PanelSettingsError;

    #[test]
    fn invalid_argument_uses_usage_exit_code() {
        let error = DemoError::invalid("cycles must be at least 1");
        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.to_string(),
            "invalid argument: cycles must be at least 1"
        );
    }

    #[test]
    fn settings_error_names_the_file() {
        let error = DemoError::settings(
            "panel.toml",
            PanelSettingsError::Validation(vec!["initial.margins.top must be >= 0, got -1".into()]),
        );
        assert_eq!(error.exit_code(), 1);
        let text = error.to_string();
        assert!(text.contains("panel.toml"));
        assert!(text.contains("margins.top"));
    }
}
