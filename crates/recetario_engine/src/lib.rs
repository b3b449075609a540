//! Recetario engine: HTTP access to the catalog service and effect execution.
mod api;
mod engine;
mod types;

pub use api::{
    pdf_download_url, ApiSettings, CatalogApi, ReqwestCatalogApi, PDFS_PATH, RECIPES_PATH,
};
pub use engine::EngineHandle;
pub use types::{ApiError, EngineEvent, ErrorKind, PdfUpload, UploadReceipt};
