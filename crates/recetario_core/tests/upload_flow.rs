use std::sync::Once;

use recetario_core::{
    update, AppState, Effect, FileHandle, Msg, RemoteError, RemoteErrorKind, RequestState,
    UploadDraft, UPLOAD_FAILED_MESSAGE, UPLOAD_SUCCESS_NOTICE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn filled_draft(state: AppState) -> AppState {
    let (state, _) = update(state, Msg::TitleChanged("Tarta fit".to_string()));
    let (state, _) = update(state, Msg::DescriptionChanged("sin azúcar".to_string()));
    let (state, _) = update(
        state,
        Msg::FileSelected(FileHandle {
            name: "tarta.pdf".to_string(),
        }),
    );
    state
}

#[test]
fn valid_draft_submits_exactly_once() {
    init_logging();
    let state = filled_draft(AppState::new());

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(state.view().upload, RequestState::InFlight);
    assert_eq!(
        effects,
        vec![Effect::SubmitUpload {
            draft: UploadDraft {
                title: "Tarta fit".to_string(),
                description: "sin azúcar".to_string(),
                file: Some(FileHandle {
                    name: "tarta.pdf".to_string(),
                }),
            },
        }]
    );
}

#[test]
fn missing_file_fails_without_network() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::TitleChanged("Tarta fit".to_string()));

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(
        state.view().upload,
        RequestState::Failed("missing file".to_string())
    );
    // The draft is kept so the user can pick a file and retry.
    assert_eq!(state.view().draft.title, "Tarta fit");
}

#[test]
fn empty_title_is_data_not_a_blocker() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(
        state,
        Msg::FileSelected(FileHandle {
            name: "tarta.pdf".to_string(),
        }),
    );

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(state.view().upload, RequestState::InFlight);
    assert_eq!(effects.len(), 1);
}

#[test]
fn duplicate_submission_is_rejected_without_a_second_request() {
    init_logging();
    let state = filled_draft(AppState::new());
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(effects.len(), 1);

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    // The first submission is untouched; the rejection is only a notice.
    assert_eq!(state.view().upload, RequestState::InFlight);
    assert_eq!(
        state.view().notice,
        Some("submission already in progress".to_string())
    );
}

#[test]
fn success_resets_draft_and_refreshes_pdfs_once() {
    init_logging();
    let state = filled_draft(AppState::new());
    let (state, _) = update(state, Msg::SubmitClicked);

    let (state, effects) = update(state, Msg::UploadFinished { result: Ok(()) });

    let view = state.view();
    assert_eq!(view.upload, RequestState::Succeeded);
    assert_eq!(view.draft, UploadDraft::default());
    assert_eq!(view.notice, Some(UPLOAD_SUCCESS_NOTICE.to_string()));
    assert_eq!(effects, vec![Effect::FetchPdfs { seq: 1 }]);
}

#[test]
fn failure_keeps_draft_and_surfaces_upload_message() {
    init_logging();
    let state = filled_draft(AppState::new());
    let (state, _) = update(state, Msg::SubmitClicked);

    let (state, effects) = update(
        state,
        Msg::UploadFinished {
            result: Err(RemoteError::new(
                RemoteErrorKind::Network,
                "http status 500",
            )),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(
        view.upload,
        RequestState::Failed(UPLOAD_FAILED_MESSAGE.to_string())
    );
    assert_eq!(view.draft.title, "Tarta fit");
    assert_eq!(
        view.draft.file,
        Some(FileHandle {
            name: "tarta.pdf".to_string(),
        })
    );
}

#[test]
fn resubmit_after_failure_is_allowed() {
    init_logging();
    let state = filled_draft(AppState::new());
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::UploadFinished {
            result: Err(RemoteError::new(RemoteErrorKind::Network, "broken pipe")),
        },
    );

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(state.view().upload, RequestState::InFlight);
    assert_eq!(effects.len(), 1);
}

#[test]
fn clearing_the_file_invalidates_the_draft_again() {
    init_logging();
    let state = filled_draft(AppState::new());
    let (state, _) = update(state, Msg::FileCleared);

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(
        state.view().upload,
        RequestState::Failed("missing file".to_string())
    );
}
