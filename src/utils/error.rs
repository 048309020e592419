use thiserror::Error;

#[derive(Error, Debug)]
pub enum LicenseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Directory walk failed: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("License download failed: {message}")]
    DownloadError { message: String },

    #[error("Failed to process {path}: {source}")]
    FileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{failed} file(s) could not be processed")]
    PartialFailure { failed: usize },
}

impl LicenseError {
    pub fn file(path: &std::path::Path, source: std::io::Error) -> Self {
        LicenseError::FileError {
            path: path.display().to_string(),
            source,
        }
    }

    /// 給使用者看的簡短錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            LicenseError::MissingConfigError { field } => {
                format!("Please set up {} env var", field)
            }
            LicenseError::InvalidConfigValueError { field, reason, .. } => {
                format!("{} is invalid: {}", field, reason)
            }
            LicenseError::DownloadError { message } => {
                format!("Could not download license file: {}", message)
            }
            LicenseError::HttpError(e) => format!("Could not download license file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LicenseError::MissingConfigError { .. } => {
                "Export LICENSE_SNIPPET with the header text, using \\n between lines"
            }
            LicenseError::InvalidConfigValueError { .. } => {
                "Check the command-line argument and the LICENSE_* environment variables"
            }
            LicenseError::HttpError(_) | LicenseError::DownloadError { .. } => {
                "Check that LICENSE_URL is reachable, or add a LICENSE file manually"
            }
            LicenseError::IoError(_) | LicenseError::WalkError(_) | LicenseError::FileError { .. } => {
                "Check that the target path exists and is readable and writable"
            }
            LicenseError::PartialFailure { .. } => "Inspect the warnings above and re-run",
        }
    }
}

pub type Result<T> = std::result::Result<T, LicenseError>;
