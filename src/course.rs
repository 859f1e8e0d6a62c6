// src/course.rs
//
// Course rows → course records.
//
// The schedule table lists a course definition row (code + name in the
// first cells) followed by zero or more section rows (PS, LAB, ...) whose
// code cell is empty. Section rows belong to the last definition seen.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::consts::*;
use crate::text::sanitize::clean_cell;
use crate::schedule::{try_align, Meeting};

/// The cells of one table row the pipeline cares about, already cleaned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseRow {
    pub code: String,
    /// Course name on definition rows, section type on section rows.
    pub name_or_type: String,
    pub instructor: String,
    pub days: String,
    pub hours: String,
    pub rooms: String,
}

impl CourseRow {
    /// Pick and clean the cells by column. `None` if the row is too short.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Option<Self> {
        if cells.len() < MIN_COLS {
            return None;
        }
        let cell = |i: usize| clean_cell(cells[i].as_ref());
        Some(Self {
            code: cell(COL_CODE),
            name_or_type: cell(COL_NAME_OR_TYPE),
            instructor: cell(COL_INSTRUCTOR),
            days: cell(COL_DAYS),
            hours: cell(COL_HOURS),
            rooms: cell(COL_ROOMS),
        })
    }

    pub fn is_definition(&self) -> bool {
        !self.code.is_empty()
    }
}

/// One offering (lecture or section) with its meetings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseRecord {
    pub code: String,
    pub name: String,
    pub kind: String,
    pub instructor: String,
    pub meetings: Vec<Meeting>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectStats {
    pub rows: usize,
    pub records: usize,
    pub meetings: usize,
    /// Section rows seen before any course definition.
    pub orphans: usize,
    /// Rows with too few cells to read a course from.
    pub short_rows: usize,
    /// Rows whose meetings were dropped, by reason label.
    pub discards: BTreeMap<&'static str, usize>,
}

impl CollectStats {
    pub fn discarded(&self) -> usize {
        self.discards.values().sum()
    }

    pub fn absorb(&mut self, other: &CollectStats) {
        self.rows += other.rows;
        self.records += other.records;
        self.meetings += other.meetings;
        self.orphans += other.orphans;
        self.short_rows += other.short_rows;
        for (k, v) in &other.discards {
            *self.discards.entry(*k).or_default() += v;
        }
    }
}

/// Walks rows in page order, carrying the current course across sections.
#[derive(Debug, Default)]
pub struct CourseCollector {
    current: Option<(String, String)>, // (code, name)
    stats: CollectStats,
}

impl CourseCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: &CourseRow) -> Option<CourseRecord> {
        self.stats.rows += 1;

        let kind = if row.is_definition() {
            self.current = Some((row.code.clone(), row.name_or_type.clone()));
            LECTURE_TYPE.to_string()
        } else {
            row.name_or_type.clone()
        };

        let Some((code, name)) = self.current.clone() else {
            self.stats.orphans += 1;
            warn!(kind = %kind, "section row before any course definition, skipped");
            return None;
        };

        let meetings = match try_align(&row.days, &row.hours, &row.rooms) {
            Ok(m) => m,
            Err(why) => {
                debug!(
                    code = %code, kind = %kind,
                    days = %row.days, hours = %row.hours, rooms = %row.rooms,
                    %why, "meetings discarded"
                );
                *self.stats.discards.entry(why.label()).or_default() += 1;
                Vec::new()
            }
        };

        self.stats.records += 1;
        self.stats.meetings += meetings.len();

        Some(CourseRecord { code, name, kind, instructor: row.instructor.clone(), meetings })
    }

    /// Count a row that could not be read as a course row.
    pub fn skip_short(&mut self) {
        self.stats.rows += 1;
        self.stats.short_rows += 1;
    }

    pub fn stats(&self) -> &CollectStats {
        &self.stats
    }

    pub fn into_stats(self) -> CollectStats {
        self.stats
    }
}

/// Convenience: collect a whole table in one go.
pub fn collect_all<'a, I>(rows: I) -> (Vec<CourseRecord>, CollectStats)
where
    I: IntoIterator<Item = &'a CourseRow>,
{
    let mut c = CourseCollector::new();
    let records = rows.into_iter().filter_map(|r| c.push(r)).collect();
    (records, c.into_stats())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{Day, Hour};
    use pretty_assertions::assert_eq;

    fn row(cells: [&str; 9]) -> CourseRow {
        CourseRow::from_cells(&cells).unwrap()
    }

    #[test]
    fn short_rows_are_rejected() {
        assert!(CourseRow::from_cells(&["CMPE 150", "01"]).is_none());
    }

    #[test]
    fn cells_are_cleaned() {
        let r = row(["CMPE 150.01", "", "INTRO.&nbsp;TO COMPUTING", "", "", "Gökhan  Şahin", "MW", "12", " ETA Z23 "]);
        assert_eq!(r.code, "CMPE 150.01");
        assert_eq!(r.name_or_type, "INTRO. TO COMPUTING");
        assert_eq!(r.instructor, "Gokhan Sahin");
        assert_eq!(r.rooms, "ETA Z23");
    }

    #[test]
    fn sections_inherit_the_definition() {
        let rows = vec![
            row(["CMPE 150.01", "", "INTRO", "", "", "STAFF", "MWF", "123", "A10"]),
            row(["", "", "PS", "", "", "TA", "Th", "9", "B1."]),
        ];
        let (recs, stats) = collect_all(&rows);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].kind, "LECTURE");
        assert_eq!(recs[1].code, "CMPE 150.01");
        assert_eq!(recs[1].name, "INTRO");
        assert_eq!(recs[1].kind, "PS");
        assert_eq!(
            recs[1].meetings,
            vec![Meeting::new(Day::Thu, Hour::new(9).unwrap(), "B1.")]
        );
        assert_eq!(stats.meetings, 4);
        assert_eq!(stats.discarded(), 0);
    }

    #[test]
    fn discarded_rows_keep_their_record() {
        let rows = vec![
            row(["CMPE 491", "", "PROJECT", "", "", "STAFF", "TBA", "", ""]),
            row(["CMPE 300", "", "ALGO", "", "", "X", "MWF", "123", "A B C D"]),
        ];
        let (recs, stats) = collect_all(&rows);
        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|r| r.meetings.is_empty()));
        assert_eq!(stats.discards.get("no-schedule"), Some(&1));
        assert_eq!(stats.discards.get("room-mismatch"), Some(&1));
    }

    #[test]
    fn orphan_sections_are_skipped() {
        let rows = vec![row(["", "", "LAB", "", "", "TA", "M", "5", "BM A2"])];
        let (recs, stats) = collect_all(&rows);
        assert!(recs.is_empty());
        assert_eq!(stats.orphans, 1);
        assert_eq!(stats.records, 0);
    }

    #[test]
    fn stats_absorb() {
        let mut a = CollectStats { rows: 2, records: 2, meetings: 3, ..Default::default() };
        a.discards.insert("no-parse", 1);
        let mut b = CollectStats { rows: 1, records: 1, short_rows: 1, ..Default::default() };
        b.discards.insert("no-parse", 2);
        a.absorb(&b);
        assert_eq!(a.rows, 3);
        assert_eq!(a.short_rows, 1);
        assert_eq!(a.discards.get("no-parse"), Some(&3));
    }
}
