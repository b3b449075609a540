use std::sync::{mpsc, Arc};
use std::thread;

use recetario_core::FetchSeq;

use crate::api::{ApiSettings, CatalogApi, ReqwestCatalogApi};
use crate::types::{ApiError, EngineEvent, PdfUpload};

enum EngineCommand {
    FetchRecipes { seq: FetchSeq },
    FetchPdfs { seq: FetchSeq },
    SubmitUpload { upload: PdfUpload },
}

/// Handle to the IO thread. Commands are spawned as independent tasks on a
/// dedicated tokio runtime, so concurrent fetches complete in whatever order
/// the network dictates; completions arrive over `try_recv`.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let api = Arc::new(ReqwestCatalogApi::new(settings)?);
        Ok(Self::with_api(api))
    }

    /// Wires the command loop to a caller-supplied API implementation.
    pub fn with_api(api: Arc<dyn CatalogApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    log::error!("failed to start engine runtime: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = run_command(api.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch_recipes(&self, seq: FetchSeq) {
        let _ = self.cmd_tx.send(EngineCommand::FetchRecipes { seq });
    }

    pub fn fetch_pdfs(&self, seq: FetchSeq) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPdfs { seq });
    }

    pub fn submit_upload(&self, upload: PdfUpload) {
        let _ = self.cmd_tx.send(EngineCommand::SubmitUpload { upload });
    }

    /// Non-blocking poll for the next completion.
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn run_command(api: &dyn CatalogApi, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::FetchRecipes { seq } => EngineEvent::RecipesLoaded {
            seq,
            result: api.fetch_recipes().await,
        },
        EngineCommand::FetchPdfs { seq } => EngineEvent::PdfsLoaded {
            seq,
            result: api.fetch_pdfs().await,
        },
        EngineCommand::SubmitUpload { upload } => EngineEvent::UploadFinished {
            result: api.upload_pdf(upload).await,
        },
    }
}
