//! One entry of the uploaded task list.

use dioxus::prelude::*;
use ucheck_core::TaskRecord;

/// Card showing a task's name, timestamps, status and score.
///
/// The "Download Full Report" link is only rendered once a report has
/// been fetched; pending tasks show their score as "Pending".
#[component]
pub fn TaskCard(record: TaskRecord) -> Element {
    let download_name = record.report_file_name();
    let score_class = if record.score.is_pending() {
        "task-card__score task-card__score--pending"
    } else {
        "task-card__score"
    };

    rsx! {
        article { class: "task-card",
            header { class: "task-card__header",
                h3 { class: "task-card__title", "{record.file_name}" }
                p { class: "task-card__subtitle", "Created on: {record.added_on}" }
            }
            ul { class: "task-card__facts",
                li { "Category: {record.category}" }
                li { "Status: {record.status}" }
                li { class: score_class, "Score: {record.score}" }
            }
            if let Some(ref url) = record.report_url {
                a {
                    class: "task-card__download",
                    href: "{url}",
                    download: "{download_name}",
                    "Download Full Report"
                }
            }
        }
    }
}
