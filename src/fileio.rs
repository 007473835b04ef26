use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

/// Content type the export is produced as. A disk file carries no
/// transport type, so this only shows up in the log.
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// The file-save collaborator: write export text to disk.
/// Fire-and-forget from the core's point of view; the caller only
/// surfaces the error message.
pub fn save_text_as_file(text: &str, path: &Path, mime: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;

    info!(path = %path.display(), mime, bytes = text.len(), "export written");
    Ok(())
}

/// Read a file as if its contents had been pasted
pub fn load_text(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.csv");

        save_text_as_file("a,b\n1,2", &path, CSV_MIME).unwrap();
        assert_eq!(load_text(&path).unwrap(), "a,b\n1,2");
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.csv");

        save_text_as_file("old", &path, CSV_MIME).unwrap();
        save_text_as_file("new", &path, CSV_MIME).unwrap();
        assert_eq!(load_text(&path).unwrap(), "new");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(load_text(&dir.path().join("nope.csv")).is_err());
    }

    #[test]
    fn test_save_to_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("export.csv");
        assert!(save_text_as_file("x", &path, CSV_MIME).is_err());
    }
}
