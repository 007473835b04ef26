mod app;
mod clipboard;
mod config;
mod document;
mod error;
mod fileio;
mod input;
mod mode;
mod parse;
mod serialize;
mod store;
mod ui;
mod util;
mod viewstate;

use std::fs::File;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use app::App;
use clipboard::SystemClipboard;
use config::Config;

struct Args {
    output: Option<PathBuf>,
    file: Option<PathBuf>,
}

/// Parse command line arguments
fn parse_args() -> Args {
    let argv: Vec<String> = std::env::args().collect();
    let mut output: Option<PathBuf> = None;
    let mut file: Option<PathBuf> = None;

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "-o" | "--output" => {
                if i + 1 < argv.len() {
                    output = Some(PathBuf::from(&argv[i + 1]));
                    i += 2;
                } else {
                    eprintln!("Error: --output requires an argument");
                    std::process::exit(1);
                }
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            arg if arg.starts_with('-') => {
                eprintln!("Unknown option: {}", arg);
                std::process::exit(1);
            }
            _ => {
                file = Some(PathBuf::from(&argv[i]));
                i += 1;
            }
        }
    }

    Args { output, file }
}

fn print_help() {
    eprintln!("clipgrid - view and edit multi-table CSV pasted from the clipboard");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    clipgrid [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("ARGS:");
    eprintln!("    FILE                  Read initial tables from a file instead of pasting");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -o, --output <FILE>   Export target (default: export.csv, or config)");
    eprintln!("    -h, --help            Print this help message");
    eprintln!();
    eprintln!("KEYS:");
    eprintln!("    p      paste tables from the clipboard");
    eprintln!("    e      export all tables to the output file");
    eprintln!("    Enter  edit the selected cell (Enter commits, Esc cancels)");
    eprintln!("    Tab/]  next table, BackTab/[ previous table");
    eprintln!("    q      quit");
}

/// Logs go to a file; the alternate screen owns the terminal
fn init_logging() {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("clipgrid");
    let _ = std::fs::create_dir_all(&log_dir);

    if let Ok(file) = File::create(log_dir.join("clipgrid.log")) {
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }
}

/// Restore the terminal before the default panic output runs
fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        if let Some(location) = info.location() {
            error!(file = location.file(), line = location.line(), "panic occured");
        } else {
            error!("panic occured");
        }

        default_hook(info);
    }));
}

fn main() -> io::Result<()> {
    let args = parse_args();
    init_logging();
    info!("clipgrid started");

    install_panic_hook();

    let config = Config::load();
    let export_path = args
        .output
        .clone()
        .unwrap_or_else(|| config.export_file.clone());

    let mut app = App::new(config, export_path, Box::new(SystemClipboard::new()));

    if let Some(path) = args.file {
        match fileio::load_text(&path) {
            Ok(text) => app.paste_text(&text),
            Err(e) => {
                eprintln!("Cannot read {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}
