use crate::types::{FetchSeq, FileHandle, PdfRecord, Recipe, RemoteError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Shell finished mounting; kick off both initial collection loads.
    Started,
    /// User edited the draft title.
    TitleChanged(String),
    /// User edited the draft description.
    DescriptionChanged(String),
    /// User picked a file for the upload form.
    FileSelected(FileHandle),
    /// User removed the chosen file from the form.
    FileCleared,
    /// User submitted the upload form.
    SubmitClicked,
    /// Explicit request to reload the PDF list.
    RefreshPdfsRequested,
    /// Engine completion for a recipes fetch.
    RecipesFetched {
        seq: FetchSeq,
        result: Result<Vec<Recipe>, RemoteError>,
    },
    /// Engine completion for a PDF-list fetch.
    PdfsFetched {
        seq: FetchSeq,
        result: Result<Vec<PdfRecord>, RemoteError>,
    },
    /// Engine completion for an upload submission.
    UploadFinished { result: Result<(), RemoteError> },
}
