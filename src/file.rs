// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use crate::config::options::ExportFormat;
use crate::error::{Error, Result};
use crate::record::{Field, Review};

/// Row-at-a-time writer for extracted reviews.
/// The header row is written on creation, so an empty run still yields a valid table.
pub struct ReviewSink {
    path: PathBuf,
    writer: csv::Writer<BufWriter<File>>,
    rows: usize,
}

impl ReviewSink {
    /// Create/truncate `path` and write the header row.
    pub fn create(path: &Path, format: ExportFormat) -> Result<Self> {
        ensure_parent(path)?;
        let file = File::create(path)?;
        let mut writer = csv::WriterBuilder::new()
            .delimiter(format.delim())
            .from_writer(BufWriter::new(file));
        writer.write_record(Field::headers())?;

        Ok(Self { path: path.to_path_buf(), writer, rows: 0 })
    }

    /// Write one review. Only the fixed columns are written; cells are ASCII-normalized.
    /// `Error::Encoding` means the row was rejected and nothing was written.
    pub fn write(&mut self, review: &Review) -> Result<()> {
        let row = ascii_row(&review.url, review.to_row())?;
        self.writer.write_record(&row)?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush everything to disk. Returns the path written to.
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush()?;
        Ok(self.path)
    }
}

/// Guard on the output encoding. `Review::to_row` already folds every cell
/// to ASCII, so this only trips if a row is built some other way.
fn ascii_row(url: &str, row: Vec<String>) -> Result<Vec<String>> {
    if row.iter().all(|cell| cell.is_ascii()) {
        Ok(row)
    } else {
        Err(Error::Encoding { url: s!(url) })
    }
}

/// Make sure the directory `path` would live in exists.
pub fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_ascii_row_is_rejected_whole() {
        let row = vec![s!("Café"), s!("http://b/1/")];
        assert!(matches!(ascii_row("http://b/1/", row), Err(Error::Encoding { .. })));

        let row = vec![s!("Caf "), s!("http://b/1/")];
        assert_eq!(ascii_row("http://b/1/", row.clone()).unwrap(), row);
    }
}
