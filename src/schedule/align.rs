// src/schedule/align.rs
//
// Meeting alignment: days x hours x rooms for one course row.

use std::fmt;

use tracing::debug;

use crate::config::consts::NO_SCHEDULE;
use super::hours::resolve_hours;
use super::tokens::{split_days, split_rooms};
use super::types::{Day, Meeting};

/// Why a row's meetings were dropped.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Discard {
    /// Empty day/hour cell or the "TBA" placeholder.
    NoSchedule,
    /// A day token outside M/T/W/Th/F.
    UnknownDay(String),
    /// The hour code has no reading for the number of days.
    NoParse,
    /// Room count differs from day count and the rooms disagree.
    RoomMismatch { days: usize, rooms: usize },
}

impl Discard {
    /// Short, stable label for counters and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Discard::NoSchedule => "no-schedule",
            Discard::UnknownDay(_) => "unknown-day",
            Discard::NoParse => "no-parse",
            Discard::RoomMismatch { .. } => "room-mismatch",
        }
    }
}

impl fmt::Display for Discard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discard::NoSchedule => write!(f, "no fixed schedule"),
            Discard::UnknownDay(code) => write!(f, "unknown day code {code:?}"),
            Discard::NoParse => write!(f, "hour code does not fit the day count"),
            Discard::RoomMismatch { days, rooms } => {
                write!(f, "{rooms} differing rooms for {days} days")
            }
        }
    }
}

/// Align one row, reporting why it was dropped if it was.
pub fn try_align(day_text: &str, hour_text: &str, room_text: &str) -> Result<Vec<Meeting>, Discard> {
    if day_text.is_empty() || day_text == NO_SCHEDULE || hour_text.is_empty() {
        return Err(Discard::NoSchedule);
    }

    let days = split_days(day_text)
        .into_iter()
        .map(|code| Day::from_code(code).ok_or_else(|| Discard::UnknownDay(code.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    let hours = resolve_hours(hour_text, days.len()).ok_or(Discard::NoParse)?;

    let mut rooms = split_rooms(room_text);
    if rooms.len() != days.len() {
        match rooms.first().copied() {
            Some(first) if rooms.iter().all(|&r| r == first) => {
                rooms = vec![first; days.len()];
            }
            _ => {
                return Err(Discard::RoomMismatch { days: days.len(), rooms: rooms.len() });
            }
        }
    }

    Ok(days
        .into_iter()
        .zip(hours)
        .zip(rooms)
        .map(|((day, hour), room)| Meeting::new(day, hour, room))
        .collect())
}

/// Align one row; any inconsistency yields no meetings.
pub fn align(day_text: &str, hour_text: &str, room_text: &str) -> Vec<Meeting> {
    match try_align(day_text, hour_text, room_text) {
        Ok(meetings) => meetings,
        Err(why) => {
            debug!(day = day_text, hour = hour_text, room = room_text, %why, "meetings discarded");
            Vec::new()
        }
    }
}
