//! Dioxus UI components for ucheck.
//!
//! Provides the drag-and-drop zone, the file/URL mode toggle, the URL
//! field, and the task card used in the uploaded task list.

mod drag_zone;
mod mode_toggle;
mod task_card;
mod url_input;

pub use drag_zone::DragZone;
pub use mode_toggle::ModeToggle;
pub use task_card::TaskCard;
pub use url_input::UrlInput;
