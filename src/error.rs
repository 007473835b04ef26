use std::fmt;

/// Why a paste attempt produced no document. None of these are fatal;
/// each clears the current document and surfaces as a one-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteError {
    /// No clipboard tool or backend exists in this environment
    ClipboardUnavailable,
    /// A clipboard backend exists but the read itself failed
    ReadFailed(String),
    /// Clipboard text was empty or whitespace-only; informational
    EmptyInput,
}

impl fmt::Display for PasteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasteError::ClipboardUnavailable => {
                write!(f, "Clipboard is not available (install wl-paste or xclip)")
            }
            PasteError::ReadFailed(reason) => write!(f, "Failed to read clipboard: {}", reason),
            PasteError::EmptyInput => write!(f, "Clipboard is empty"),
        }
    }
}
