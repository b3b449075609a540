use std::fmt;

use serde::Deserialize;

pub type RecipeId = i64;
pub type PdfId = i64;

/// Tag for an issued collection fetch. Completions carrying a sequence number
/// below the highest committed one are discarded (last-fetch-wins).
pub type FetchSeq = u64;

/// A catalog recipe as served by the remote service. Never mutated locally.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub category: String,
    pub ingredients: Vec<String>,
    pub steps: String,
    #[serde(default = "is_healthy_default")]
    pub is_healthy: bool,
}

fn is_healthy_default() -> bool {
    true
}

/// Metadata for a stored PDF document. The binary content stays on the
/// server; only the upload transfer ever holds bytes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PdfRecord {
    pub id: PdfId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Opaque token for a file the user picked; the core never opens it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
}

/// Unsaved form input for a pending upload. Reset to empty on success.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadDraft {
    pub title: String,
    pub description: String,
    pub file: Option<FileHandle>,
}

/// Lifecycle of a single remote operation. Owned by that operation alone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight)
    }

    /// The failure reason, if the operation failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            RequestState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Failure of a remote operation, as reported back to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    pub kind: RemoteErrorKind,
    pub message: String,
}

impl RemoteError {
    pub fn new(kind: RemoteErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    /// Transport failure or non-success response status.
    Network,
    /// Success status but the body did not parse as the expected shape.
    Decode,
}

/// Client-detected submission errors. Raised before any network traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFile,
    SubmissionInProgress,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFile => write!(f, "missing file"),
            ValidationError::SubmissionInProgress => {
                write!(f, "submission already in progress")
            }
        }
    }
}

/// Message shown when the upload transfer fails, whatever the transport
/// detail. The wording matches the service's user-facing locale.
pub const UPLOAD_FAILED_MESSAGE: &str = "Error al subir el PDF.";

/// Notice shown once after a successful upload.
pub const UPLOAD_SUCCESS_NOTICE: &str = "PDF subido con éxito";
