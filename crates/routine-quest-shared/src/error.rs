//! Error types shared across Routine Quest services.
//!
//! [`AppError`] is the cross-service taxonomy: every kind carries a
//! human-readable message, a machine-readable `code` and an HTTP-style
//! status. The consuming service decides how to surface them; nothing here
//! logs, retries or recovers.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Code used for [`AppError::Validation`].
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
/// Code used for [`AppError::Auth`].
pub const AUTH_ERROR: &str = "AUTH_ERROR";
/// Code used for [`AppError::NotFound`].
pub const NOT_FOUND: &str = "NOT_FOUND";
/// Code used when a [`ConfigError`] crosses into the taxonomy.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

const DEFAULT_AUTH_MESSAGE: &str = "Authentication required";
const DEFAULT_RESOURCE: &str = "Resource";

/// Application error taxonomy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Generic error with caller-chosen code and status
    #[error("{message}")]
    App {
        message: String,
        code: String,
        status_code: u16,
    },

    /// Bad input (400)
    #[error("{0}")]
    Validation(String),

    /// Missing or invalid credentials (401)
    #[error("{0}")]
    Auth(String),

    /// Missing resource (404)
    #[error("{resource} not found")]
    NotFound { resource: String },
}

impl AppError {
    /// Generic error with the default status of 500.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::with_status(message, code, 500)
    }

    pub fn with_status(
        message: impl Into<String>,
        code: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self::App {
            message: message.into(),
            code: code.into(),
            status_code,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Auth error with the message "Authentication required".
    pub fn auth_default() -> Self {
        Self::auth(DEFAULT_AUTH_MESSAGE)
    }

    /// Not-found error; the message reads "{resource} not found".
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Not-found error for the generic "Resource".
    pub fn not_found_default() -> Self {
        Self::not_found(DEFAULT_RESOURCE)
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &str {
        match self {
            Self::App { code, .. } => code,
            Self::Validation(_) => VALIDATION_ERROR,
            Self::Auth(_) => AUTH_ERROR,
            Self::NotFound { .. } => NOT_FOUND,
        }
    }

    /// HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::App { status_code, .. } => *status_code,
            Self::Validation(_) => 400,
            Self::Auth(_) => 401,
            Self::NotFound { .. } => 404,
        }
    }

    /// Human-readable message, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Serializable form for crossing a service boundary.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            message: self.message(),
            code: self.code().to_string(),
            status_code: self.status_code(),
        }
    }
}

/// Wire representation of an [`AppError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub message: String,
    pub code: String,
    pub status_code: u16,
}

impl From<ErrorBody> for AppError {
    /// Rebuilds the specific kind when the code/status pair is one of the
    /// fixed ones, otherwise falls back to the generic kind.
    fn from(body: ErrorBody) -> Self {
        match (body.code.as_str(), body.status_code) {
            (VALIDATION_ERROR, 400) => Self::Validation(body.message),
            (AUTH_ERROR, 401) => Self::Auth(body.message),
            (NOT_FOUND, 404) => match body.message.strip_suffix(" not found") {
                Some(resource) => Self::not_found(resource),
                None => Self::with_status(body.message, body.code, body.status_code),
            },
            _ => Self::with_status(body.message, body.code, body.status_code),
        }
    }
}

/// Settings file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The home directory could not be resolved or created
    #[error("Failed to prepare config directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the settings file
    #[error("Failed to load settings from {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the settings file
    #[error("Failed to save settings to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for [`crate::Settings`]
    #[error("Failed to parse settings: {0}")]
    ParseFailed(#[from] toml::de::Error),

    /// Settings could not be rendered as TOML
    #[error("Failed to serialize settings: {0}")]
    SerializeFailed(#[from] toml::ser::Error),

    /// Unknown dotted key
    #[error("Unknown settings key: {0}")]
    UnknownKey(String),

    /// Value does not fit the key's type
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(err.to_string(), CONFIG_ERROR)
    }
}

/// Result type alias for AppError
pub type Result<T, E = AppError> = std::result::Result<T, E>;
