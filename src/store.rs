// src/store.rs
//
// Local URL list: one review URL per line. Discovery appends to it; the
// extraction phase reads it back.

use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::file::ensure_parent;

#[derive(Debug)]
pub struct UrlStore {
    path: PathBuf,
    known: Vec<String>,
    fresh: Vec<String>,
    seen: HashSet<String>,
}

impl UrlStore {
    /// Read the list at `path`. A missing file is an empty store.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => s!(),
            Err(e) => return Err(e),
        };

        let mut store = Self {
            path: path.to_path_buf(),
            known: Vec::new(),
            fresh: Vec::new(),
            seen: HashSet::new(),
        };
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if store.seen.insert(s!(line)) {
                store.known.push(s!(line));
            }
        }
        logd!("url store: {} urls from {}", store.known.len(), path.display());
        Ok(store)
    }

    /// Queue `url` unless it is already known or queued. Returns whether it was new.
    pub fn insert(&mut self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() || self.seen.contains(url) {
            return false;
        }
        self.seen.insert(s!(url));
        self.fresh.push(s!(url));
        true
    }

    /// Append queued URLs to the file. Returns how many were written.
    pub fn persist(&mut self) -> io::Result<usize> {
        if self.fresh.is_empty() {
            return Ok(0);
        }
        ensure_parent(&self.path)?;

        let needs_newline = ends_mid_line(&self.path)?;

        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut out = BufWriter::new(file);
        if needs_newline {
            writeln!(out)?;
        }
        for url in &self.fresh {
            writeln!(out, "{url}")?;
        }
        out.flush()?;

        let n = self.fresh.len();
        self.known.append(&mut self.fresh);
        Ok(n)
    }

    /// Known URLs, then anything queued since the last `persist`.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.known.iter().chain(self.fresh.iter()).map(String::as_str)
    }

    pub fn fresh(&self) -> &[String] {
        &self.fresh
    }

    pub fn len(&self) -> usize {
        self.known.len() + self.fresh.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Whether the file's last byte is something other than `\n`.
/// Missing and empty files do not.
fn ends_mid_line(path: &Path) -> io::Result<bool> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
