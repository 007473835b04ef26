use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, poll, Event, KeyCode, KeyEvent};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use crate::clipboard::ClipboardRead;
use crate::config::Config;
use crate::document::Document;
use crate::error::PasteError;
use crate::fileio;
use crate::input::{EditKeyResult, EditLine};
use crate::mode::Mode;
use crate::parse;
use crate::serialize;
use crate::store::EditStore;
use crate::ui;
use crate::viewstate::ViewState;

pub struct App {
    pub store: EditStore,
    pub view: ViewState,
    pub mode: Mode,
    pub config: Config,
    pub export_path: PathBuf,
    pub edit_line: EditLine,
    pub message: Option<String>,
    pub should_quit: bool,
    clipboard: Box<dyn ClipboardRead>,
}

impl App {
    pub fn new(config: Config, export_path: PathBuf, clipboard: Box<dyn ClipboardRead>) -> Self {
        Self {
            store: EditStore::new(),
            view: ViewState::new(),
            mode: Mode::Normal,
            config,
            export_path,
            edit_line: EditLine::new(),
            message: None,
            should_quit: false,
            clipboard,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| ui::render(f, self))?;

            if poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    self.message = None;
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Edit => self.handle_edit_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('p') => self.paste_from_clipboard(),
            KeyCode::Char('e') => self.export(),
            KeyCode::Up | KeyCode::Char('k') => self.view.move_up(self.store.document()),
            KeyCode::Down | KeyCode::Char('j') => self.view.move_down(self.store.document()),
            KeyCode::Left | KeyCode::Char('h') => self.view.move_left(self.store.document()),
            KeyCode::Right | KeyCode::Char('l') => self.view.move_right(self.store.document()),
            KeyCode::Char('g') => self.view.move_to_top(self.store.document()),
            KeyCode::Char('G') => self.view.move_to_bottom(self.store.document()),
            KeyCode::Tab | KeyCode::Char(']') => self.view.next_table(self.store.document()),
            KeyCode::BackTab | KeyCode::Char('[') => self.view.prev_table(self.store.document()),
            KeyCode::Enter | KeyCode::Char('i') => self.begin_edit(),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match self.edit_line.handle_key(key) {
            EditKeyResult::Continue => {
                self.store.set_edit_value(self.edit_line.buffer.clone());
            }
            EditKeyResult::Commit => {
                self.store.set_edit_value(self.edit_line.buffer.clone());
                self.store.commit_edit();
                self.edit_line.clear();
                self.mode = Mode::Normal;
            }
            EditKeyResult::Cancel => {
                self.store.cancel_edit();
                self.edit_line.clear();
                self.mode = Mode::Normal;
            }
        }
    }

    /// Enter edit mode on the selected cell. Declined silently when the
    /// selection does not land on a cell (empty document).
    fn begin_edit(&mut self) {
        if self.store.start_edit(self.view.table, self.view.row, self.view.col) {
            self.edit_line.begin(self.store.edit_value().to_string());
            self.mode = Mode::Edit;
        }
    }

    /// Read the clipboard and replace the document with whatever parses
    /// out of it. Every failure clears the document.
    pub fn paste_from_clipboard(&mut self) {
        match self.clipboard.read_text() {
            Ok(text) => self.paste_text(&text),
            Err(e) => {
                error!(error = %e, "clipboard read failed");
                self.clear_with_message(e.to_string());
            }
        }
    }

    /// Shared entry for clipboard pastes and file input
    pub fn paste_text(&mut self, text: &str) {
        if text.trim().is_empty() {
            info!("paste skipped, input empty");
            self.clear_with_message(PasteError::EmptyInput.to_string());
            return;
        }

        let document = parse::parse_document(text);
        if document.is_empty() {
            self.clear_with_message("No tables found in pasted text".to_string());
            return;
        }

        info!(
            tables = document.table_count(),
            cells = document.cell_count(),
            "pasted document"
        );
        self.message = Some(format!("Pasted {} table(s)", document.table_count()));
        self.store.replace_document(document);
        self.view.reset();
    }

    fn clear_with_message(&mut self, message: String) {
        self.store.replace_document(Document::default());
        self.view.reset();
        self.message = Some(message);
    }

    /// Serialize the document and hand it to the file-save collaborator
    pub fn export(&mut self) {
        if self.store.document().is_empty() {
            self.message = Some("Nothing to export".to_string());
            return;
        }

        let text = serialize::serialize_document(self.store.document());
        match fileio::save_text_as_file(&text, &self.export_path, fileio::CSV_MIME) {
            Ok(()) => {
                self.store.mark_exported();
                self.message = Some(format!("Exported to {}", self.export_path.display()));
            }
            Err(e) => {
                error!(error = %e, path = %self.export_path.display(), "export failed");
                self.message = Some(format!("Export failed: {}", e));
            }
        }
    }
}
