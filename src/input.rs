use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util;

pub fn is_escape(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// What a keystroke in edit mode resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKeyResult {
    Continue,
    Commit,
    Cancel,
}

/// Line editor over the working edit value.
/// Note: cursor is a CHARACTER index, not a byte index
#[derive(Debug, Default)]
pub struct EditLine {
    pub buffer: String,
    pub cursor: usize,
}

impl EditLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing with the cell's current content, cursor at the end
    pub fn begin(&mut self, initial: String) {
        self.cursor = util::char_count(&initial);
        self.buffer = initial;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditKeyResult {
        if is_escape(key) {
            return EditKeyResult::Cancel;
        }

        match key.code {
            KeyCode::Enter => return EditKeyResult::Commit,
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    if let Some(buf) = util::remove_char_at(&self.buffer, self.cursor) {
                        self.buffer = buf;
                    }
                }
            }
            KeyCode::Delete => {
                if let Some(buf) = util::remove_char_at(&self.buffer, self.cursor) {
                    self.buffer = buf;
                }
            }
            KeyCode::Char(c) => {
                self.buffer = util::insert_char_at(&self.buffer, self.cursor, c);
                self.cursor += 1;
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => {
                self.cursor = std::cmp::min(self.cursor + 1, util::char_count(&self.buffer));
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = util::char_count(&self.buffer),
            _ => {}
        }

        EditKeyResult::Continue
    }
}
