//! User-chosen files: reading them into memory and opening the picker.

use dioxus::html::{FileData, MountedData};
use ucheck_core::SelectedFile;
use wasm_bindgen::JsCast;

use crate::blob::BlobError;

/// Read a picked or dropped file into a [`SelectedFile`].
///
/// # Errors
///
/// Returns [`BlobError::JsError`] if the browser fails to read the file.
#[allow(clippy::future_not_send)] // WASM is single-threaded; FileData is !Send
pub async fn read_file(file: &FileData) -> Result<SelectedFile, BlobError> {
    let name = file.name();
    let bytes = file
        .read_bytes()
        .await
        .map_err(|e| BlobError::JsError(format!("failed to read {name}: {e}")))?;
    Ok(SelectedFile::new(name, bytes.to_vec()))
}

/// Read the first file of a list; `Ok(None)` for an empty list.
///
/// # Errors
///
/// Returns [`BlobError::JsError`] if the first file cannot be read.
#[allow(clippy::future_not_send)]
pub async fn read_first(files: &[FileData]) -> Result<Option<SelectedFile>, BlobError> {
    match files.first() {
        Some(file) => read_file(file).await.map(Some),
        None => Ok(None),
    }
}

/// Open the native file picker behind a mounted `<input type="file">`.
///
/// Does nothing outside the browser renderer.
pub fn open_file_picker(input: &MountedData) {
    if let Some(element) = input
        .downcast::<web_sys::Element>()
        .and_then(|el| el.dyn_ref::<web_sys::HtmlElement>())
    {
        element.click();
    }
}
