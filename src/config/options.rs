// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub input: InputOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputOptions {
    /// Extracted course tables, one per department, processed in order.
    pub paths: Vec<PathBuf>,
    /// Forced input delimiter; `None` picks by file extension.
    pub format: Option<ExportFormat>,
}

impl InputOptions {
    pub fn delim_for(&self, path: &Path) -> char {
        self.format
            .unwrap_or_else(|| ExportFormat::from_path(path))
            .delim()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportType {
    /// One file, one row per meeting.
    Single,
    /// `courses.<ext>` + `meetings.<ext>` in a directory.
    Split,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }

    /// `.tsv` / `.tab` means tabs; anything else is read as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("tsv") | Some("tab") => ExportFormat::Tsv,
            _ => ExportFormat::Csv,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::Single,
            out_path: OutputPath::default(),
            include_headers: false,
        }
    }
}

impl ExportOptions {
    /// File path for `Single`, directory for `Split`.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        match self.export_type {
            ExportType::Single => {
                let stem = self.out_path.file_stem.to_string_lossy();
                path.push(format!("{}.{}", stem, self.format.ext()));
            }
            ExportType::Split => { /* directory only */ }
        }
        path
    }

    /// Path of one member file of a split export.
    pub fn split_file(&self, stem: &str) -> PathBuf {
        self.out_path.dir.join(format!("{}.{}", stem, self.format.ext()))
    }

    /// Parse user text into dir + stem. A pasted extension is ignored; the
    /// format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        match self.export_type {
            ExportType::Single => {
                let p = Path::new(s);
                if let Some(parent) = p.parent() {
                    self.out_path.dir = parent.to_path_buf();
                }
                if let Some(stem) = p.file_stem() {
                    self.out_path.file_stem = stem.to_os_string();
                }
            }
            ExportType::Split => {
                self.out_path.dir = PathBuf::from(s);
            }
        }
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_single_path() {
        let e = ExportOptions::default();
        assert_eq!(e.out_path(), PathBuf::from("out").join("schedule.csv"));
    }

    #[test]
    fn format_controls_extension() {
        let mut e = ExportOptions::default();
        e.set_path("data/fall.txt");
        e.format = ExportFormat::Tsv;
        assert_eq!(e.out_path(), PathBuf::from("data").join("fall.tsv"));
        assert_eq!(e.delim(), '\t');
    }

    #[test]
    fn split_is_a_directory() {
        let mut e = ExportOptions { export_type: ExportType::Split, ..Default::default() };
        e.set_path("dump");
        assert_eq!(e.out_path(), PathBuf::from("dump"));
        assert_eq!(e.split_file(COURSES_FILE), PathBuf::from("dump").join("courses.csv"));
    }

    #[test]
    fn input_delim_by_extension() {
        let mut i = InputOptions::default();
        assert_eq!(i.delim_for(Path::new("cmpe.TSV")), '\t');
        assert_eq!(i.delim_for(Path::new("cmpe.csv")), ',');
        assert_eq!(i.delim_for(Path::new("cmpe")), ',');
        i.format = Some(ExportFormat::Tsv);
        assert_eq!(i.delim_for(Path::new("cmpe.csv")), '\t');
    }
}
