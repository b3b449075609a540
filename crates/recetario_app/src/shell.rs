//! Interactive shell: dispatches messages through the pure core, executes
//! the resulting effects on the engine, and renders when state changed.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use url::Url;

use recetario_core::{
    update, AppState, Effect, FileHandle, Msg, RemoteError, RemoteErrorKind,
};
use recetario_engine::{ApiError, EngineEvent, EngineHandle, ErrorKind, PdfUpload};

use crate::render;

const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub fn run(engine: EngineHandle, base_url: Url) {
    let mut shell = Shell {
        state: AppState::new(),
        engine,
        base_url,
    };

    render::print_help();
    shell.dispatch(Msg::Started);

    let lines = spawn_stdin_reader();
    loop {
        while let Some(event) = shell.engine.try_recv() {
            shell.dispatch(msg_for_event(event));
        }
        match lines.try_recv() {
            Ok(line) => {
                if !shell.handle_command(line.trim()) {
                    break;
                }
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => break,
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    rx
}

struct Shell {
    state: AppState,
    engine: EngineHandle,
    base_url: Url,
}

impl Shell {
    /// Runs a message to quiescence: effects may synchronously produce
    /// follow-up messages (a draft file that cannot be read), which are
    /// applied before rendering.
    fn dispatch(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            for effect in effects {
                if let Some(follow_up) = self.run_effect(effect) {
                    queue.push_back(follow_up);
                }
            }
        }
        if self.state.consume_dirty() {
            render::render(&self.state.view(), &self.base_url);
        }
    }

    fn run_effect(&mut self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::FetchRecipes { seq } => {
                self.engine.fetch_recipes(seq);
                None
            }
            Effect::FetchPdfs { seq } => {
                self.engine.fetch_pdfs(seq);
                None
            }
            Effect::SubmitUpload { draft } => {
                let handle = draft.file?;
                match std::fs::read(&handle.name) {
                    Ok(bytes) => {
                        self.engine.submit_upload(PdfUpload {
                            title: draft.title,
                            description: draft.description,
                            file_name: base_name(&handle),
                            bytes,
                        });
                        None
                    }
                    Err(err) => {
                        log::warn!("could not read {}: {err}", handle.name);
                        Some(Msg::UploadFinished {
                            result: Err(RemoteError::new(
                                RemoteErrorKind::Network,
                                err.to_string(),
                            )),
                        })
                    }
                }
            }
        }
    }

    /// Returns false when the shell should exit.
    fn handle_command(&mut self, line: &str) -> bool {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        match command {
            "" => {}
            "quit" | "exit" => return false,
            "list" => render::render(&self.state.view(), &self.base_url),
            "refresh" => self.dispatch(Msg::RefreshPdfsRequested),
            "title" => self.dispatch(Msg::TitleChanged(rest.to_string())),
            "desc" => self.dispatch(Msg::DescriptionChanged(rest.to_string())),
            "file" => {
                let msg = if rest.is_empty() {
                    Msg::FileCleared
                } else {
                    Msg::FileSelected(FileHandle {
                        name: rest.to_string(),
                    })
                };
                self.dispatch(msg);
            }
            "submit" => self.dispatch(Msg::SubmitClicked),
            _ => render::print_help(),
        }
        true
    }
}

fn msg_for_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::RecipesLoaded { seq, result } => Msg::RecipesFetched {
            seq,
            result: result.map_err(to_remote_error),
        },
        EngineEvent::PdfsLoaded { seq, result } => Msg::PdfsFetched {
            seq,
            result: result.map_err(to_remote_error),
        },
        EngineEvent::UploadFinished { result } => {
            if let Err(err) = &result {
                log::warn!("upload failed: {err}");
            }
            Msg::UploadFinished {
                result: result.map(|_| ()).map_err(to_remote_error),
            }
        }
    }
}

fn to_remote_error(err: ApiError) -> RemoteError {
    let kind = match err.kind {
        ErrorKind::Decode => RemoteErrorKind::Decode,
        ErrorKind::Network | ErrorKind::Status(_) => RemoteErrorKind::Network,
    };
    RemoteError::new(kind, err.message)
}

fn base_name(handle: &FileHandle) -> String {
    Path::new(&handle.name)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| handle.name.clone())
}
