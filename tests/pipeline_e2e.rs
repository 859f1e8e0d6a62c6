// tests/pipeline_e2e.rs
//
// Extracted tables on disk → runner → export files.
//
use std::fs;
use std::path::PathBuf;

use course_sched::config::options::{ExportFormat, ExportType, RunOptions};
use course_sched::progress::Progress;
use course_sched::{runner, Semester, Term};

const CMPE: &str = "\
Code,Sec,Name,Cr,Ects,Instr,Days,Hours,Rooms
CMPE 150.01,,INTRO. TO COMPUTING,3,6,STAFF,MWF,123,ETA Z23
,,PS,0,0,TA,Th,9,BM A2
CMPE 300.01,,ANALYSIS OF ALGORITHMS,3,7,\"YILDIZ, A.\",TTh,1112,NH 101 NH 101
CMPE 491.01,,SENIOR PROJECT,3,8,STAFF,TBA,,
";

const EE: &str = "EE 201.01\t\tCIRCUITS\t4\t7\tSTAFF\tMWF\t123\tETA A1 ETA A2\n";

fn write(dir: &std::path::Path, name: &str, text: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, text).unwrap();
    p
}

#[derive(Default)]
struct Count {
    begun: usize,
    done: usize,
    finished: bool,
}

impl Progress for Count {
    fn begin(&mut self, total: usize) { self.begun = total; }
    fn item_done(&mut self, _p: &std::path::Path, _r: usize, _m: usize) { self.done += 1; }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn single_file_export() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = RunOptions::default();
    opts.input.paths = vec![write(tmp.path(), "cmpe.csv", CMPE), write(tmp.path(), "ee.tsv", EE)];
    opts.export.include_headers = true;
    opts.export.set_path(&tmp.path().join("out").join("all.csv").to_string_lossy());

    let mut progress = Count::default();
    let sem = Semester::new(2026, Term::Fall);
    let summary = runner::run(&opts, sem, Some(&mut progress)).unwrap();

    assert_eq!(progress.begun, 2);
    assert_eq!(progress.done, 2);
    assert!(progress.finished);

    // 3 + 1 + 2 meetings; the senior project and EE 201 keep no meetings.
    assert_eq!(summary.stats.records, 5);
    assert_eq!(summary.stats.meetings, 6);
    assert_eq!(summary.stats.discarded(), 2);

    let text = fs::read_to_string(&summary.files_written[0]).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Semester,Code,Name,Type,Instructor,Day,Hour,Room");
    // One row per meeting, plus one blank-meeting row per course without any.
    assert_eq!(lines.len(), 1 + 6 + 2);
    assert!(lines.contains(&"2026/2027-1,CMPE 491.01,SENIOR PROJECT,LECTURE,STAFF,,,"));
    assert!(lines.contains(&"2026/2027-1,EE 201.01,CIRCUITS,LECTURE,STAFF,,,"));
    assert!(lines.contains(&"2026/2027-1,CMPE 150.01,INTRO. TO COMPUTING,PS,TA,Th,9,BM A2"));
    assert!(lines.contains(&"2026/2027-1,CMPE 300.01,ANALYSIS OF ALGORITHMS,LECTURE,\"YILDIZ, A.\",Th,12,NH 101"));
}

#[test]
fn short_rows_do_not_stop_the_run() {
    let tmp = tempfile::tempdir().unwrap();
    let ee = format!("{EE}Footnote: labs TBA\n");
    let mut opts = RunOptions::default();
    opts.input.paths = vec![write(tmp.path(), "ee.tsv", &ee), write(tmp.path(), "cmpe.csv", CMPE)];
    opts.export.set_path(&tmp.path().join("all.csv").to_string_lossy());

    let summary = runner::run(&opts, Semester::new(2026, Term::Fall), None).unwrap();
    assert_eq!(summary.stats.short_rows, 1);
    assert_eq!(summary.stats.records, 5);

    let text = fs::read_to_string(&summary.files_written[0]).unwrap();
    assert!(text.lines().any(|l| l.starts_with("2026/2027-1,CMPE 150.01,")));
}

#[test]
fn split_export_tsv() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = RunOptions::default();
    opts.input.paths = vec![write(tmp.path(), "cmpe.csv", CMPE)];
    opts.export.format = ExportFormat::Tsv;
    opts.export.export_type = ExportType::Split;
    opts.export.set_path(&tmp.path().join("db").to_string_lossy());

    let summary = runner::run(&opts, Semester::new(2025, Term::Spring), None).unwrap();
    assert_eq!(summary.files_written.len(), 2);

    let courses = fs::read_to_string(tmp.path().join("db").join("courses.tsv")).unwrap();
    let meetings = fs::read_to_string(tmp.path().join("db").join("meetings.tsv")).unwrap();

    assert_eq!(courses.lines().count(), 4);
    assert!(courses.lines().any(|l| l == "4\t2025/2026-2\tCMPE 491.01\tSENIOR PROJECT\tLECTURE\tSTAFF"));
    assert_eq!(meetings.lines().filter(|l| l.starts_with("3\t")).count(), 2);
    assert!(!meetings.lines().any(|l| l.starts_with("4\t")));
}

#[test]
fn missing_input_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = RunOptions::default();
    opts.input.paths = vec![tmp.path().join("nope.csv")];
    opts.export.set_path(&tmp.path().join("x.csv").to_string_lossy());
    let err = runner::run(&opts, Semester::new(2026, Term::Fall), None).unwrap_err();
    assert!(err.to_string().contains("nope.csv"));
}
