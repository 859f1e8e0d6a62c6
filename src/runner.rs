// src/runner.rs
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{
    config::{consts::MIN_COLS, options::{InputOptions, RunOptions}},
    course::{CollectStats, CourseCollector, CourseRow},
    csv::{detect_headers, parse_rows},
    error::Result,
    file::read_text,
    progress::Progress,
    semester::Semester,
    sink::{FileSink, MeetingSink},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub stats: CollectStats,
}

/// Top-level runner: read every input table, collect, write per `opts.export`.
pub fn run(
    opts: &RunOptions,
    semester: Semester,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut sink = FileSink::create(&opts.export)?;
    let stats = run_into(&opts.input, semester, &mut sink, progress)?;
    let files_written = sink.finish()?;
    Ok(RunSummary { files_written, stats })
}

/// Same as `run`, into any sink. The sink is not finished here.
pub fn run_into(
    input: &InputOptions,
    semester: Semester,
    sink: &mut dyn MeetingSink,
    mut progress: Option<&mut dyn Progress>,
) -> Result<CollectStats> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(input.paths.len());
        p.log(&format!("Semester {semester}"));
    }

    let result = collect_tables(input, semester, sink, progress.as_deref_mut());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn collect_tables<'p>(
    input: &InputOptions,
    semester: Semester,
    sink: &mut dyn MeetingSink,
    mut progress: Option<&mut (dyn Progress + 'p)>,
) -> Result<CollectStats> {
    let mut total = CollectStats::default();
    for path in &input.paths {
        let text = read_text(path)?;
        let stats = process_table(&text, input.delim_for(path), path, semester, sink)?;

        info!(
            path = %path.display(), records = stats.records,
            meetings = stats.meetings, discarded = stats.discarded(),
            short_rows = stats.short_rows, "table done"
        );
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(path, stats.records, stats.meetings);
        }
        total.absorb(&stats);
    }
    Ok(total)
}

/// One extracted table (one department) → sink.
///
/// Each table starts a fresh collector: a section row never inherits a
/// course from another department's table. Rows too short to hold a course
/// (footnotes, stray captions) are skipped and counted.
pub fn process_table(
    text: &str,
    sep: char,
    path: &Path,
    semester: Semester,
    sink: &mut dyn MeetingSink,
) -> Result<CollectStats> {
    let (_, rows) = detect_headers(parse_rows(text, sep));
    if rows.is_empty() {
        warn!(path = %path.display(), "no course rows");
    }

    let mut collector = CourseCollector::new();
    for cells in &rows {
        let Some(row) = CourseRow::from_cells(cells.as_slice()) else {
            warn!(
                path = %path.display(), expected = MIN_COLS, found = cells.len(),
                first = cells.first().map(String::as_str).unwrap_or(""),
                "short row, skipped"
            );
            collector.skip_short();
            continue;
        };
        if let Some(record) = collector.push(&row) {
            sink.course(semester, &record)?;
        }
    }
    Ok(collector.into_stats())
}
