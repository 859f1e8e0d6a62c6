// src/schedule/types.rs
use std::fmt;

/// One class period on the daily grid, 1..=13.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour(u8);

impl Hour {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 13;

    pub fn new(period: u8) -> Option<Self> {
        (Self::FIRST..=Self::LAST).contains(&period).then_some(Self(period))
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weekday as the registration site abbreviates it.
/// `T` is Tuesday, `Th` is Thursday.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Day {
    pub const ALL: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "M" => Some(Day::Mon),
            "T" => Some(Day::Tue),
            "W" => Some(Day::Wed),
            "Th" => Some(Day::Thu),
            "F" => Some(Day::Fri),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Day::Mon => "M",
            Day::Tue => "T",
            Day::Wed => "W",
            Day::Thu => "Th",
            Day::Fri => "F",
        }
    }

    /// 1-based weekday number (Mon = 1).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One scheduled session of a course row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Meeting {
    pub day: Day,
    pub hour: Hour,
    pub room: String,
}

impl Meeting {
    pub fn new(day: Day, hour: Hour, room: impl Into<String>) -> Self {
        Self { day, hour, room: room.into() }
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.day, self.hour, self.room)
    }
}
