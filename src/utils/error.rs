use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Menu data unavailable: {reason}")]
    DataUnavailable { reason: String },

    #[error("Unknown menu category: {category}")]
    UnknownCategory { category: String },

    #[error("Unknown menu filter: {filter}")]
    UnknownFilter { filter: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Reservation endpoint answered with status {status}")]
    SubmissionRejected { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid reservation field {field}: {reason}")]
    FormValidationError { field: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Selection,
    Network,
    Storage,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::DataUnavailable { .. } => ErrorCategory::Data,
            SiteError::UnknownCategory { .. } | SiteError::UnknownFilter { .. } => {
                ErrorCategory::Selection
            }
            SiteError::HttpError(_) | SiteError::SubmissionRejected { .. } => {
                ErrorCategory::Network
            }
            SiteError::IoError(_) | SiteError::SerializationError(_) => ErrorCategory::Storage,
            SiteError::ConfigValidationError { .. }
            | SiteError::MissingConfigError { .. }
            | SiteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SiteError::FormValidationError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // the page still renders a fixed message in place of the menu
            ErrorCategory::Data => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Selection | ErrorCategory::Input | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::DataUnavailable { .. } => {
                "Check that the menu data file exists and contains a non-empty JSON array".to_string()
            }
            SiteError::UnknownCategory { .. } => {
                "Pick one of the categories listed by the menu tabs".to_string()
            }
            SiteError::UnknownFilter { .. } => {
                "Pick one of the filters listed by the menu chips".to_string()
            }
            SiteError::HttpError(_) | SiteError::SubmissionRejected { .. } => {
                "Check the network connection and the reservation endpoint, then try again"
                    .to_string()
            }
            SiteError::IoError(_) | SiteError::SerializationError(_) => {
                "Check that the state directory is writable".to_string()
            }
            SiteError::ConfigValidationError { field, .. }
            | SiteError::MissingConfigError { field }
            | SiteError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
            SiteError::FormValidationError { field, .. } => {
                format!("Correct the '{}' field and submit again", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::DataUnavailable { .. } => "Failed to load menu data.".to_string(),
            SiteError::HttpError(_) | SiteError::SubmissionRejected { .. } => {
                "Something went wrong. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_unavailable_is_low_severity() {
        let err = SiteError::DataUnavailable {
            reason: "empty".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "Failed to load menu data.");
    }

    #[test]
    fn test_config_errors_name_the_field() {
        let err = SiteError::MissingConfigError {
            field: "reservation.endpoint".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("reservation.endpoint"));
    }
}
