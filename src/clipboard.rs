use crate::error::PasteError;

/// The clipboard-read collaborator. The app needs one read per paste
/// action; tests substitute a fake.
pub trait ClipboardRead {
    fn read_text(&mut self) -> Result<String, PasteError>;
}

/// System clipboard backed by command-line tools on Linux (more
/// reliable with terminal apps than library backends) and arboard
/// elsewhere.
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardRead for SystemClipboard {
    fn read_text(&mut self) -> Result<String, PasteError> {
        read_system_clipboard()
    }
}

#[cfg(target_os = "linux")]
fn read_system_clipboard() -> Result<String, PasteError> {
    use std::process::Command;

    // Wayland first, then X11
    let tools: [(&str, &[&str]); 3] = [
        ("wl-paste", &["--no-newline"]),
        ("xclip", &["-selection", "clipboard", "-o"]),
        ("xsel", &["--clipboard", "--output"]),
    ];

    let mut tool_found = false;
    for (cmd, args) in tools {
        match Command::new(cmd).args(args).output() {
            Ok(output) if output.status.success() => {
                return String::from_utf8(output.stdout)
                    .map_err(|_| PasteError::ReadFailed("clipboard is not valid UTF-8".to_string()));
            }
            Ok(_) => {
                // tool exists but the read failed (no display, empty selection, ...)
                tool_found = true;
            }
            Err(_) => {}
        }
    }

    if tool_found {
        Err(PasteError::ReadFailed("clipboard tool reported an error".to_string()))
    } else {
        Err(PasteError::ClipboardUnavailable)
    }
}

#[cfg(not(target_os = "linux"))]
fn read_system_clipboard() -> Result<String, PasteError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|_| PasteError::ClipboardUnavailable)?;
    clipboard
        .get_text()
        .map_err(|e| PasteError::ReadFailed(e.to_string()))
}
