use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use url::Url;

use recetario_core::{PdfId, PdfRecord, Recipe};

use crate::types::{ApiError, ErrorKind, PdfUpload, UploadReceipt};

pub const RECIPES_PATH: &str = "/api/recipes";
pub const PDFS_PATH: &str = "/api/pdfs";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ApiSettings {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Read/write access to the remote catalog service.
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, ApiError>;
    async fn fetch_pdfs(&self) -> Result<Vec<PdfRecord>, ApiError>;
    async fn upload_pdf(&self, upload: PdfUpload) -> Result<UploadReceipt, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCatalogApi {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestCatalogApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ErrorKind::Network, err.to_string()))?;
        Ok(Self {
            client,
            base_url: settings.base_url,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|err| {
            ApiError::new(ErrorKind::Network, format!("bad endpoint {path}: {err}"))
        })
    }

    /// Loads a whole JSON collection; server order is preserved verbatim and
    /// no state is committed here, that is the caller's job.
    async fn load_collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let url = self.endpoint(path)?;
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {path} answered {status}");
            return Err(ApiError::new(
                ErrorKind::Status(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = response.bytes().await.map_err(map_transport_error)?;
        serde_json::from_slice(&bytes).map_err(|err| {
            ApiError::new(
                ErrorKind::Decode,
                format!("malformed collection body: {err}"),
            )
        })
    }
}

#[async_trait::async_trait]
impl CatalogApi for ReqwestCatalogApi {
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        self.load_collection(RECIPES_PATH).await
    }

    async fn fetch_pdfs(&self) -> Result<Vec<PdfRecord>, ApiError> {
        self.load_collection(PDFS_PATH).await
    }

    async fn upload_pdf(&self, upload: PdfUpload) -> Result<UploadReceipt, ApiError> {
        let url = self.endpoint(PDFS_PATH)?;
        log::debug!("POST {url} ({} bytes)", upload.bytes.len());
        let form = build_upload_form(upload)?;
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("upload rejected with {status}");
            return Err(ApiError::new(
                ErrorKind::Status(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = response.bytes().await.map_err(map_transport_error)?;
        let body = serde_json::from_slice(&bytes).map_err(|err| {
            ApiError::new(
                ErrorKind::Decode,
                format!("malformed upload confirmation: {err}"),
            )
        })?;
        Ok(UploadReceipt { body })
    }
}

/// Three parts, always: `title`, `description` (may be empty), `file`.
fn build_upload_form(upload: PdfUpload) -> Result<Form, ApiError> {
    let file = Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str("application/pdf")
        .map_err(|err| ApiError::new(ErrorKind::Network, err.to_string()))?;
    Ok(Form::new()
        .text("title", upload.title)
        .text("description", upload.description)
        .part("file", file))
}

/// Builds the download URL for a stored document. The client only constructs
/// the link; following it is left to the user.
pub fn pdf_download_url(base_url: &Url, id: PdfId) -> Result<Url, url::ParseError> {
    base_url.join(&format!("{PDFS_PATH}/{id}"))
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ErrorKind::Network, "request timed out");
    }
    ApiError::new(ErrorKind::Network, err.to_string())
}
