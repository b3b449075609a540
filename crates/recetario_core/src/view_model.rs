use crate::types::{PdfRecord, Recipe, RequestState, UploadDraft};

/// Read-only projection of one collection for a presentation layer.
///
/// `initial_load` stays true until the first fetch completes either way, so
/// a renderer can tell "still loading" from "loaded but empty".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionView<T> {
    pub items: Vec<T>,
    pub initial_load: bool,
    pub error: Option<String>,
}

/// Everything a presentation layer needs to render the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub recipes: CollectionView<Recipe>,
    pub pdfs: CollectionView<PdfRecord>,
    pub draft: UploadDraft,
    pub upload: RequestState,
    /// Transient message (upload outcome, rejected submission, refresh
    /// failure). Replaced or cleared by the next state transition.
    pub notice: Option<String>,
    pub dirty: bool,
}
