use crate::types::{
    FetchSeq, PdfRecord, Recipe, RemoteError, RequestState, UploadDraft,
};
use crate::view_model::{AppViewModel, CollectionView};

/// One remotely fetched collection: the committed items plus the bookkeeping
/// needed for the last-fetch-wins rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CollectionSlot<T> {
    items: Vec<T>,
    request: RequestState,
    issued_seq: FetchSeq,
    committed_seq: FetchSeq,
    loaded_once: bool,
}

impl<T> Default for CollectionSlot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            request: RequestState::Idle,
            issued_seq: 0,
            committed_seq: 0,
            loaded_once: false,
        }
    }
}

impl<T: Clone> CollectionSlot<T> {
    /// Registers a new in-flight fetch and returns its sequence tag.
    fn begin_fetch(&mut self) -> FetchSeq {
        self.issued_seq += 1;
        self.request = RequestState::InFlight;
        self.issued_seq
    }

    /// Applies a fetch completion. Returns false when the completion was
    /// discarded as stale and the state is unchanged.
    ///
    /// A success commits whenever its tag is at least the highest committed
    /// one, even if a newer fetch is still in flight; the slot then stays
    /// `InFlight` until that newest fetch settles. A failure only lands on
    /// the slot when it belongs to the newest issued fetch; the committed
    /// items are retained either way.
    fn apply(&mut self, seq: FetchSeq, result: Result<Vec<T>, RemoteError>) -> bool {
        if seq > self.issued_seq {
            return false;
        }
        match result {
            Ok(items) => {
                if seq < self.committed_seq {
                    return false;
                }
                self.items = items;
                self.committed_seq = seq;
                self.loaded_once = true;
                if seq == self.issued_seq {
                    self.request = RequestState::Succeeded;
                }
                true
            }
            Err(err) => {
                if seq < self.issued_seq {
                    return false;
                }
                self.loaded_once = true;
                self.request = RequestState::Failed(err.message);
                true
            }
        }
    }

    fn view(&self) -> CollectionView<T> {
        CollectionView {
            items: self.items.clone(),
            initial_load: !self.loaded_once,
            error: self.request.failure().map(ToOwned::to_owned),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    recipes: CollectionSlot<Recipe>,
    pdfs: CollectionSlot<PdfRecord>,
    draft: UploadDraft,
    upload: RequestState,
    notice: Option<String>,
    started: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            recipes: self.recipes.view(),
            pdfs: self.pdfs.view(),
            draft: self.draft.clone(),
            upload: self.upload.clone(),
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    /// Takes the dirty flag, so a shell can coalesce renders.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn started(&self) -> bool {
        self.started
    }

    pub(crate) fn mark_started(&mut self) {
        self.started = true;
    }

    pub(crate) fn begin_recipes_fetch(&mut self) -> FetchSeq {
        self.recipes.begin_fetch()
    }

    pub(crate) fn begin_pdfs_fetch(&mut self) -> FetchSeq {
        self.pdfs.begin_fetch()
    }

    pub(crate) fn apply_recipes(
        &mut self,
        seq: FetchSeq,
        result: Result<Vec<Recipe>, RemoteError>,
    ) -> bool {
        self.recipes.apply(seq, result)
    }

    pub(crate) fn apply_pdfs(
        &mut self,
        seq: FetchSeq,
        result: Result<Vec<PdfRecord>, RemoteError>,
    ) -> bool {
        self.pdfs.apply(seq, result)
    }

    pub(crate) fn draft(&self) -> &UploadDraft {
        &self.draft
    }

    pub(crate) fn draft_mut(&mut self) -> &mut UploadDraft {
        &mut self.draft
    }

    pub(crate) fn reset_draft(&mut self) {
        self.draft = UploadDraft::default();
    }

    pub(crate) fn upload(&self) -> &RequestState {
        &self.upload
    }

    pub(crate) fn set_upload(&mut self, state: RequestState) {
        self.upload = state;
    }

    pub(crate) fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub(crate) fn clear_notice(&mut self) {
        self.notice = None;
    }
}
