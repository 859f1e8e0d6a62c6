// src/sink.rs
//
// Where course records go once a table has been collected.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use tracing::info;

use crate::config::consts::{COURSES_FILE, MEETINGS_FILE};
use crate::config::options::{ExportOptions, ExportType};
use crate::course::CourseRecord;
use crate::csv::write_row;
use crate::error::{Error, Result};
use crate::file::{flush, write_rows_start};
use crate::semester::Semester;

pub static SINGLE_HEADERS: [&str; 8] =
    ["Semester", "Code", "Name", "Type", "Instructor", "Day", "Hour", "Room"];
pub static COURSES_HEADERS: [&str; 6] = ["Id", "Semester", "Code", "Name", "Type", "Instructor"];
pub static MEETINGS_HEADERS: [&str; 4] = ["Course", "Day", "Hour", "Room"];

/// Consumer of collected records.
pub trait MeetingSink {
    fn course(&mut self, semester: Semester, record: &CourseRecord) -> Result<()>;

    /// Flush everything; returns the files written, if any.
    fn finish(&mut self) -> Result<Vec<PathBuf>> {
        Ok(Vec::new())
    }
}

/// Keeps records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<(Semester, CourseRecord)>,
}

impl MeetingSink for MemorySink {
    fn course(&mut self, semester: Semester, record: &CourseRecord) -> Result<()> {
        self.records.push((semester, record.clone()));
        Ok(())
    }
}

struct Target {
    path: PathBuf,
    out: BufWriter<File>,
}

impl Target {
    fn open(path: PathBuf, headers: Option<&[&str]>, sep: char) -> Result<Self> {
        let out = write_rows_start(&path, headers, sep)?;
        Ok(Self { path, out })
    }

    fn row(&mut self, cells: &[&str], sep: char) -> Result<()> {
        write_row(&mut self.out, cells, sep).map_err(|e| Error::io(&self.path, e))
    }
}

enum Layout {
    Single(Target),
    Split { courses: Target, meetings: Target, next_id: u64 },
}

/// Writes CSV/TSV per `ExportOptions`.
pub struct FileSink {
    sep: char,
    layout: Layout,
}

impl FileSink {
    pub fn create(export: &ExportOptions) -> Result<Self> {
        let sep = export.delim();
        let hdr = |h: &'static [&'static str]| export.include_headers.then_some(h);

        let layout = match export.export_type {
            ExportType::Single => {
                Layout::Single(Target::open(export.out_path(), hdr(&SINGLE_HEADERS[..]), sep)?)
            }
            ExportType::Split => Layout::Split {
                courses: Target::open(export.split_file(COURSES_FILE), hdr(&COURSES_HEADERS[..]), sep)?,
                meetings: Target::open(export.split_file(MEETINGS_FILE), hdr(&MEETINGS_HEADERS[..]), sep)?,
                next_id: 1,
            },
        };
        Ok(Self { sep, layout })
    }
}

impl MeetingSink for FileSink {
    fn course(&mut self, semester: Semester, record: &CourseRecord) -> Result<()> {
        let sep = self.sep;
        let sem = semester.to_string();

        match &mut self.layout {
            Layout::Single(t) => {
                let course = [
                    sem.as_str(), record.code.as_str(), record.name.as_str(),
                    record.kind.as_str(), record.instructor.as_str(),
                ];
                // A course without meetings still gets one row, blank meeting cells.
                if record.meetings.is_empty() {
                    t.row(&[&course[..], &["", "", ""][..]].concat(), sep)?;
                }
                for m in &record.meetings {
                    let hour = m.hour.to_string();
                    t.row(&[&course[..], &[m.day.code(), hour.as_str(), m.room.as_str()][..]].concat(), sep)?;
                }
            }
            Layout::Split { courses, meetings, next_id } => {
                let id = next_id.to_string();
                *next_id += 1;
                courses.row(&[
                    id.as_str(), sem.as_str(), record.code.as_str(), record.name.as_str(),
                    record.kind.as_str(), record.instructor.as_str(),
                ], sep)?;
                for m in &record.meetings {
                    let hour = m.hour.to_string();
                    meetings.row(&[id.as_str(), m.day.code(), hour.as_str(), m.room.as_str()], sep)?;
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<PathBuf>> {
        let targets: Vec<&mut Target> = match &mut self.layout {
            Layout::Single(t) => vec![t],
            Layout::Split { courses, meetings, .. } => vec![courses, meetings],
        };
        let mut written = Vec::with_capacity(targets.len());
        for t in targets {
            flush(&t.path, &mut t.out)?;
            info!(path = %t.path.display(), "written");
            written.push(t.path.clone());
        }
        Ok(written)
    }
}
