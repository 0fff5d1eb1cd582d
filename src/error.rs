#[derive(Debug, thiserror::Error)]
pub enum DabsError {
    #[error("API error on {path} ({}): {reason}", status_label(.status))]
    Api {
        path: String,
        status: Option<u16>,
        reason: String,
    },

    #[error("{0}")]
    Validation(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DabsError {
    /// HTTP status of a failed API call, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            DabsError::Api { status, .. } => *status,
            _ => None,
        }
    }
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("status {}", code),
        None => "no response".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, DabsError>;
