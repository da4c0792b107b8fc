use std::rc::Rc;

use dioxus::html::{FileData, HasFileData, MountedData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use tracing::{error, warn};
use ucheck_core::{InputMode, TaskRecord, UploadSelection, analyze, refresh_tasks};
use ucheck_io::{DragZone, HttpBackend, ModeToggle, TaskCard, UrlInput, blob, file};

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(app);
}

/// Root application component.
fn app() -> Element {
    rsx! {
        // Page styles, bundled into the binary.
        style { dangerous_inner_html: include_str!("../assets/ucheck.css") }

        UploadPage {}
    }
}

/// The upload form and the uploaded task list.
///
/// Owns all form state. The task list is refreshed once on mount and
/// again after every Analyze press; each refresh replaces the whole
/// list. Two refreshes in flight are not ordered: whichever finishes
/// last wins.
#[component]
fn UploadPage() -> Element {
    // --- Application state ---
    let backend = use_hook(HttpBackend::default);
    let mut selection = use_signal(UploadSelection::new);
    let tasks = use_signal(Vec::<TaskRecord>::new);
    let mut file_input = use_signal(|| Option::<Rc<MountedData>>::None);

    // --- Initial refresh ---
    {
        let backend = backend.clone();
        use_effect(move || {
            let backend = backend.clone();
            spawn(async move {
                match refresh_tasks(&backend).await {
                    Ok(records) => show_snapshot(tasks, records),
                    Err(e) => error!(error = %e, "task list refresh failed"),
                }
            });
        });
    }

    // Report URLs of the last snapshot outlive the page otherwise.
    use_drop(move || blob::revoke_report_urls(&tasks.peek()));

    // --- File selection (drop or picker) ---
    let on_files = move |files: Vec<FileData>| {
        spawn(async move {
            match file::read_first(&files).await {
                Ok(Some(chosen)) => selection.write().select_file(chosen),
                Ok(None) => {}
                Err(e) => warn!(error = %e, "could not read selected file"),
            }
        });
    };

    let open_picker = move |_: MouseEvent| {
        if let Some(ref input) = *file_input.peek() {
            file::open_file_picker(input);
        }
    };

    // --- Analyze ---
    let on_analyze = {
        let backend = backend.clone();
        move |_: MouseEvent| {
            let backend = backend.clone();
            let submission = selection.peek().submission();
            spawn(async move {
                let outcome = analyze(&backend, submission, move || selection.write().clear()).await;
                match outcome {
                    Ok(records) => show_snapshot(tasks, records),
                    Err(e) => error!(error = %e, "task list refresh failed"),
                }
            });
        }
    };

    let mode = selection.read().mode;
    let display_name = selection.read().display_name().to_owned();
    let url = selection.read().url.clone();

    // --- Layout ---
    rsx! {
        main { class: "page",
            section { class: "card",
                header { class: "card__header",
                    h1 { class: "card__title", "Welcome to UCheck Sandbox" }
                    p { class: "card__subtitle",
                        "This application helps to verify the authentication of file or URL upload. "
                        "You may drag or drop the file or upload manually."
                    }
                }

                div { class: "card__body upload-form",
                    ModeToggle {
                        mode,
                        on_change: move |m: InputMode| selection.write().set_mode(m),
                    }

                    if mode == InputMode::File {
                        DragZone {
                            on_drop: on_files,
                            on_click: open_picker,

                            Icon { class: "drop-zone__icon", width: 32, height: 32, icon: LdUpload }
                            p { class: "drop-zone__label", "{display_name}" }
                        }
                        input {
                            r#type: "file",
                            hidden: true,
                            onmounted: move |evt| file_input.set(Some(evt.data())),
                            onchange: move |evt: FormEvent| on_files(evt.files()),
                        }
                    } else {
                        UrlInput {
                            value: url,
                            on_input: move |text: String| selection.write().set_url(text),
                        }
                    }

                    button { class: "btn-primary", onclick: on_analyze, "Analyze" }
                }
            }

            section { class: "card",
                header { class: "card__header",
                    h2 { class: "card__title", "Uploaded task list" }
                    p { class: "card__subtitle",
                        "This is the list of tasks pending to be analyzed."
                    }
                }
                div { class: "card__body task-list",
                    for (index, record) in tasks().into_iter().enumerate() {
                        TaskCard { key: "{index}", record }
                    }
                }
            }
        }
    }
}

/// Replace the visible task list with a fresh snapshot and release the
/// report URLs of the one it replaces.
fn show_snapshot(mut tasks: Signal<Vec<TaskRecord>>, records: Vec<TaskRecord>) {
    let previous = std::mem::replace(&mut *tasks.write(), records);
    blob::revoke_report_urls(&previous);
}
