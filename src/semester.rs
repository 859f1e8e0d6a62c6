// src/semester.rs
//
// Academic terms as the registration site names them: "2026/2027-1" is the
// fall of the 2026/2027 year, "-2" spring, "-3" summer.
//
// The current semester depends on the clock, so it is never baked in as a
// default; callers ask for it (or parse one) and pass it along.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    Fall = 1,
    Spring = 2,
    Summer = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Semester {
    /// First calendar year of the academic year (2026 for 2026/2027).
    pub start_year: i32,
    pub term: Term,
}

impl Semester {
    pub fn new(start_year: i32, term: Term) -> Self {
        Self { start_year, term }
    }

    /// Fall runs September to January, spring February to June, summer
    /// July and August.
    pub fn for_month(month: u32, year: i32) -> Self {
        match month {
            9..=12 => Self::new(year, Term::Fall),
            1 => Self::new(year - 1, Term::Fall),
            2..=6 => Self::new(year - 1, Term::Spring),
            _ => Self::new(year - 1, Term::Summer),
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_month(date.month(), date.year())
    }

    pub fn current() -> Self {
        Self::for_date(Local::now().date_naive())
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}-{}", self.start_year, self.start_year + 1, self.term as u8)
    }
}

impl FromStr for Semester {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || Error::Semester(s.to_string());

        let (years, term) = s.trim().split_once('-').ok_or_else(bad)?;
        let (first, second) = years.split_once('/').ok_or_else(bad)?;
        let first: i32 = first.parse().map_err(|_| bad())?;
        let second: i32 = second.parse().map_err(|_| bad())?;
        if second != first + 1 {
            return Err(bad());
        }
        let term = match term {
            "1" => Term::Fall,
            "2" => Term::Spring,
            "3" => Term::Summer,
            _ => return Err(bad()),
        };
        Ok(Self::new(first, term))
    }
}
