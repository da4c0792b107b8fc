//! Upload form state: input mode, chosen file and URL text.

use std::fmt;

/// Label shown in the drop zone before a file is chosen.
pub const DROP_ZONE_PLACEHOLDER: &str = "Drop zone (Click to manually upload)";

/// Which input the form submits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// Upload a local file through the drop zone or file picker.
    #[default]
    File,
    /// Submit a remote URL typed into the text field.
    Url,
}

impl InputMode {
    /// Both modes in display order.
    pub const ALL: [Self; 2] = [Self::File, Self::Url];

    /// Radio button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::File => "File upload",
            Self::Url => "URL upload",
        }
    }

    /// Radio button value attribute.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A local file read into memory, ready to be sent as a multipart part.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    #[must_use]
    pub const fn new(name: String, bytes: Vec<u8>) -> Self {
        Self { name, bytes }
    }
}

// File contents are elided; a sample can be megabytes.
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// What the Analyze button sends to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Multipart upload of a local file.
    File(SelectedFile),
    /// JSON `{url}` submission.
    Url(String),
}

/// All local form state of the upload page.
///
/// Only one of `file` / `url` is meaningful at a time, chosen by `mode`;
/// the other is kept so switching modes back and forth does not lose
/// what the user entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSelection {
    pub mode: InputMode,
    pub file: Option<SelectedFile>,
    pub url: String,
}

impl UploadSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// Store a chosen file, replacing any previous one.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }

    /// Store the first file of a picked or dropped list.
    ///
    /// An empty list leaves the selection untouched.
    pub fn select_first(&mut self, files: impl IntoIterator<Item = SelectedFile>) {
        if let Some(file) = files.into_iter().next() {
            self.select_file(file);
        }
    }

    /// Replace the URL text. No validation is applied.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Name of the chosen file, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|f| f.name.as_str())
    }

    /// Text for the drop zone label.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.file_name().unwrap_or(DROP_ZONE_PLACEHOLDER)
    }

    /// Build the submission for the current mode.
    ///
    /// Returns `None` in file mode when no file has been chosen. The URL
    /// is sent as typed, even when empty.
    #[must_use]
    pub fn submission(&self) -> Option<Submission> {
        match self.mode {
            InputMode::File => self.file.clone().map(Submission::File),
            InputMode::Url => Some(Submission::Url(self.url.clone())),
        }
    }

    /// Clear file and URL after a submit attempt. The mode is kept.
    pub fn clear(&mut self) {
        self.file = None;
        self.url.clear();
    }
}
