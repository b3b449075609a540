use crate::types::{
    RequestState, ValidationError, UPLOAD_FAILED_MESSAGE, UPLOAD_SUCCESS_NOTICE,
};
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// The transient notice only survives the transition that set it; every
/// incoming message clears it first.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    state.clear_notice();
    let effects = match msg {
        Msg::Started => {
            if state.started() {
                return (state, Vec::new());
            }
            state.mark_started();
            // Both initial loads are issued together; their completions are
            // independent and may arrive in either order.
            let recipes_seq = state.begin_recipes_fetch();
            let pdfs_seq = state.begin_pdfs_fetch();
            state.mark_dirty();
            vec![
                Effect::FetchRecipes { seq: recipes_seq },
                Effect::FetchPdfs { seq: pdfs_seq },
            ]
        }
        Msg::TitleChanged(title) => {
            state.draft_mut().title = title;
            state.mark_dirty();
            Vec::new()
        }
        Msg::DescriptionChanged(description) => {
            state.draft_mut().description = description;
            state.mark_dirty();
            Vec::new()
        }
        Msg::FileSelected(handle) => {
            state.draft_mut().file = Some(handle);
            state.mark_dirty();
            Vec::new()
        }
        Msg::FileCleared => {
            state.draft_mut().file = None;
            state.mark_dirty();
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::RefreshPdfsRequested => refresh_pdfs(&mut state),
        Msg::RecipesFetched { seq, result } => {
            if state.apply_recipes(seq, result) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PdfsFetched { seq, result } => {
            let failure = result.as_ref().err().map(|err| err.message.clone());
            if state.apply_pdfs(seq, result) {
                // A failed reload keeps the committed items; the reason is
                // surfaced as a notice on top of the slot state.
                if let Some(message) = failure {
                    state.set_notice(message);
                }
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::UploadFinished { result } => match result {
            Ok(()) => {
                state.set_upload(RequestState::Succeeded);
                state.reset_draft();
                state.set_notice(UPLOAD_SUCCESS_NOTICE);
                refresh_pdfs(&mut state)
            }
            Err(_) => {
                // Transport detail is logged by the shell; the state carries
                // the message the form renders directly.
                state.set_upload(RequestState::Failed(UPLOAD_FAILED_MESSAGE.to_string()));
                state.mark_dirty();
                Vec::new()
            }
        },
    };

    (state, effects)
}

/// Upload submission: validate, then hand the draft to the engine. The
/// `InFlight` state doubles as the guard against overlapping submissions.
fn submit(state: &mut AppState) -> Vec<Effect> {
    if state.upload().is_in_flight() {
        state.set_notice(ValidationError::SubmissionInProgress.to_string());
        state.mark_dirty();
        return Vec::new();
    }
    if state.draft().file.is_none() {
        state.set_upload(RequestState::Failed(
            ValidationError::MissingFile.to_string(),
        ));
        state.mark_dirty();
        return Vec::new();
    }
    state.set_upload(RequestState::InFlight);
    state.mark_dirty();
    vec![Effect::SubmitUpload {
        draft: state.draft().clone(),
    }]
}

fn refresh_pdfs(state: &mut AppState) -> Vec<Effect> {
    let seq = state.begin_pdfs_fetch();
    state.mark_dirty();
    vec![Effect::FetchPdfs { seq }]
}
