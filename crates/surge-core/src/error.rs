use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurgeError {
    #[error("URL for the load test is required")]
    EmptyUrl,

    #[error("Load test backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Form encoding error: {0}")]
    Encode(#[from] serde_html_form::ser::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SurgeError>;

/// JSON body of a failed API call: `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Message to show for a failed response, preferring the server's `error` field.
    pub fn message(status: u16, body: &str) -> String {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.error,
            Err(_) if body.trim().is_empty() => format!("HTTP {}", status),
            Err(_) => format!("HTTP {}: {}", status, body.trim()),
        }
    }
}
