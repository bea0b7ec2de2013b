use thiserror::Error;

#[derive(Error, Debug)]
pub enum WoofError {
    #[error("Request failed: {0}")]
    TransportFailure(#[source] reqwest::Error),

    #[error("Not 200 OK (status {status})")]
    NonSuccessStatus { status: reqwest::StatusCode },

    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Render failed: {0}")]
    RenderFailure(#[from] std::io::Error),

    #[error("Template rendering failed: {0}")]
    TemplateFailure(#[from] askama::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl WoofError {
    /// Short tag used as a structured field in the failure log line.
    pub fn kind(&self) -> &'static str {
        match self {
            WoofError::TransportFailure(_) => "transport_failure",
            WoofError::NonSuccessStatus { .. } => "non_success_status",
            WoofError::MalformedPayload(_) => "malformed_payload",
            WoofError::RenderFailure(_) => "render_failure",
            WoofError::TemplateFailure(_) => "template_failure",
            WoofError::InvalidConfigValueError { .. } => "invalid_config",
        }
    }
}

pub type Result<T> = std::result::Result<T, WoofError>;
