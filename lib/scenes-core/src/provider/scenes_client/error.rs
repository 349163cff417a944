use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;

use crate::schema::SchemaError;

#[derive(Debug, Error)]
pub enum ScenesClientError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("{context}: unexpected response format, `{guard}` failed")]
    UnexpectedResponseFormat {
        context: &'static str,
        guard: &'static str,
        expected: &'static str,
    },
    #[error("Remote API error: {0}")]
    RemoteApi(RemoteApiError),
    #[error("Malformed error response: {0}")]
    MalformedErrorEnvelope(RemoteApiError),
    #[error("Access token error: `{0}`")]
    AccessToken(anyhow::Error),
    #[error("Transport error: `{0}`")]
    Transport(anyhow::Error),
    #[error("Url error: `{0}`")]
    Url(#[from] url::ParseError),
}

/// Failure reported by the service, together with the HTTP status it arrived with
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("HTTP {status}: {error}")]
pub struct RemoteApiError {
    pub status: u16,
    pub error: ErrorEnvelope,
}

/// `error` member of a non-2xx response body
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    pub target: Option<String>,
    pub details: Option<Vec<ErrorDetail>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl Display for ErrorEnvelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.code.is_empty() {
            return f.write_str("<no error details>");
        }

        write!(f, "`{}` {}", self.code, self.message)?;
        if let Some(target) = &self.target {
            write!(f, " (target: {target})")?;
        }
        Ok(())
    }
}
