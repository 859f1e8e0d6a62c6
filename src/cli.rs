// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::config::options::{ExportFormat, ExportType, RunOptions};
use crate::error::Result;
use crate::progress::Progress;
use crate::runner;
use crate::schedule::resolve_hours;
use crate::semester::Semester;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

/// Turn extracted course-schedule tables into (day, hour, room) meetings.
#[derive(Debug, Parser)]
#[command(name = "course_sched", version, about)]
pub struct Args {
    /// Extracted schedule tables (CSV/TSV), one per department.
    #[arg(required_unless_present = "hours")]
    pub inputs: Vec<PathBuf>,

    /// Semester label, e.g. 2026/2027-1 (default: from today's date).
    #[arg(long)]
    pub semester: Option<Semester>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Input delimiter (default: by file extension).
    #[arg(long, value_enum)]
    pub input_format: Option<Format>,

    /// Write courses.<ext> + meetings.<ext> into a directory.
    #[arg(long)]
    pub split: bool,

    /// Emit a header line in every output file.
    #[arg(long)]
    pub include_headers: bool,

    /// Output file (or directory with --split).
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Resolve one hour code and exit (needs --count).
    #[arg(long, requires = "count")]
    pub hours: Option<String>,

    /// Number of periods for --hours.
    #[arg(long, requires = "hours")]
    pub count: Option<usize>,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Append logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn run_options(&self) -> RunOptions {
        let mut opts = RunOptions::default();
        opts.input.paths = self.inputs.clone();
        opts.input.format = self.input_format.map(Into::into);

        opts.export.format = self.format.into();
        opts.export.include_headers = self.include_headers;
        if self.split {
            opts.export.export_type = ExportType::Split;
        }
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts
    }
}

/// Prints one line per table.
struct LineProgress {
    total: usize,
    done: usize,
}

impl Progress for LineProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, path: &Path, records: usize, meetings: usize) {
        self.done += 1;
        println!(
            "{:>2}/{:<2} : {:<40} {records:>5} courses {meetings:>5} meetings",
            self.done, self.total, path.display()
        );
    }
}

/// `--hours CODE --count N`: print the reading or "no parse".
pub fn hours_line(code: &str, count: usize) -> String {
    match resolve_hours(code, count) {
        Some(hs) => {
            let parts: Vec<String> = hs.iter().map(|h| h.to_string()).collect();
            format!("[{}]", parts.join(","))
        }
        None => "no parse".to_string(),
    }
}

pub fn run(args: &Args) -> Result<()> {
    if let (Some(code), Some(count)) = (&args.hours, args.count) {
        println!("{}", hours_line(code, count));
        return Ok(());
    }

    let semester = args.semester.unwrap_or_else(Semester::current);
    let opts = args.run_options();
    let mut progress = LineProgress { total: 0, done: 0 };

    let summary = runner::run(&opts, semester, Some(&mut progress))?;
    let s = &summary.stats;
    println!(
        "{} rows, {} courses, {} meetings, {} rows without meetings, {} short rows skipped",
        s.rows, s.records, s.meetings, s.discarded(), s.short_rows
    );
    for (why, n) in &s.discards {
        println!("  {why:<14} {n}");
    }
    for p in &summary.files_written {
        println!("Wrote {}", p.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_line_formats() {
        assert_eq!(hours_line("1112", 2), "[11,12]");
        assert_eq!(hours_line("", 0), "[]");
        assert_eq!(hours_line("10", 2), "no parse");
    }

    #[test]
    fn args_to_options() {
        let args = Args::parse_from([
            "course_sched", "--split", "--format", "tsv", "--include-headers",
            "-o", "dump", "--semester", "2025/2026-2", "cmpe.csv", "ee.tsv",
        ]);
        assert_eq!(args.semester.map(|s| s.to_string()).as_deref(), Some("2025/2026-2"));
        let opts = args.run_options();
        assert_eq!(opts.input.paths.len(), 2);
        assert_eq!(opts.export.export_type, ExportType::Split);
        assert_eq!(opts.export.out_path(), PathBuf::from("dump"));
        assert_eq!(opts.export.split_file("meetings"), PathBuf::from("dump").join("meetings.tsv"));
    }

    #[test]
    fn hours_mode_needs_no_inputs() {
        let args = Args::try_parse_from(["course_sched", "--hours", "123", "--count", "3"]).unwrap();
        assert!(args.inputs.is_empty());
        assert!(Args::try_parse_from(["course_sched"]).is_err());
        assert!(Args::try_parse_from(["course_sched", "--semester", "nope", "a.csv"]).is_err());
    }

    #[test]
    fn count_without_hours_is_rejected() {
        assert!(Args::try_parse_from(["course_sched", "--count", "3", "a.csv"]).is_err());
    }
}
