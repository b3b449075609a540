//! Recetario core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::AppState;
pub use types::{
    FetchSeq, FileHandle, PdfId, PdfRecord, Recipe, RecipeId, RemoteError, RemoteErrorKind,
    RequestState, UploadDraft, ValidationError, UPLOAD_FAILED_MESSAGE, UPLOAD_SUCCESS_NOTICE,
};
pub use update::update;
pub use view_model::{AppViewModel, CollectionView};
