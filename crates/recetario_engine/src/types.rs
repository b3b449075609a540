use std::fmt;

use recetario_core::{FetchSeq, PdfRecord, Recipe};

/// Payload for a single upload transfer. The bytes live only for the
/// duration of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfUpload {
    pub title: String,
    pub description: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Decoded confirmation body from a successful upload. The service returns a
/// JSON object; its fields are not inspected beyond being well formed.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadReceipt {
    pub body: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure: connect, timeout, interrupted body.
    Network,
    /// The service answered with a non-success status.
    Status(u16),
    /// Success status but the body did not parse as the expected shape.
    Decode,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Network => write!(f, "network error"),
            ErrorKind::Status(code) => write!(f, "http status {code}"),
            ErrorKind::Decode => write!(f, "malformed response body"),
        }
    }
}

/// Completions reported by the engine back to the shell, tagged with the
/// sequence number of the fetch they answer.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    RecipesLoaded {
        seq: FetchSeq,
        result: Result<Vec<Recipe>, ApiError>,
    },
    PdfsLoaded {
        seq: FetchSeq,
        result: Result<Vec<PdfRecord>, ApiError>,
    },
    UploadFinished {
        result: Result<UploadReceipt, ApiError>,
    },
}
