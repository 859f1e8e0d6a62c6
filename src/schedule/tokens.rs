// src/schedule/tokens.rs
//
// Day and room tokenizers for one schedule row.

use std::sync::OnceLock;

use regex::Regex;

// A day token starts at an uppercase letter and runs up to the next one:
// "MWTh" -> M, W, Th.
fn re_day() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Z][^A-Z]*").unwrap())
}

// A room is a run of letters/dots, optionally one space, then an
// alphanumeric/dot suffix: "B1.", "Z23", "ETA Z23", "NH 101".
fn re_room() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-zA-Z.]+\s?[a-zA-Z\d.]*").unwrap())
}

/// Raw day codes in source order, trimmed. Text before the first uppercase
/// letter is ignored.
pub fn split_days(text: &str) -> Vec<&str> {
    re_day().find_iter(text).map(|m| m.as_str().trim()).collect()
}

/// Room labels in source order.
pub fn split_rooms(text: &str) -> Vec<&str> {
    re_room().find_iter(text).map(|m| m.as_str().trim_end()).collect()
}
