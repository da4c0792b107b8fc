//! ucheck-io: Browser I/O and Dioxus component library.
//!
//! Talks to the sandbox service over `fetch`, turns report bytes into
//! Blob URLs, reads dropped or picked files, and provides the reusable
//! UI components of the ucheck upload page.

pub mod blob;
pub mod client;
pub mod components;
pub mod file;

pub use client::HttpBackend;
pub use components::{DragZone, ModeToggle, TaskCard, UrlInput};
