// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use crate::csv::write_row;
use crate::error::{Error, Result};

/// Ensure parent dir exists; create/truncate file; optionally write header.
/// Returns the open writer, positioned after the header.
pub fn write_rows_start(
    path: &Path,
    headers: Option<&[&str]>,
    sep: char,
) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path).map_err(|e| Error::io(path, e))?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    if let Some(h) = headers {
        write_row(&mut out, h, sep).map_err(|e| Error::io(path, e))?;
    }
    Ok(out)
}

pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    // Saved pages are not always UTF-8; keep what we can.
    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

pub fn flush(path: &Path, w: &mut impl Write) -> Result<()> {
    w.flush().map_err(|e| Error::io(path, e))
}
