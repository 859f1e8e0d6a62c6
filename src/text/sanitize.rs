// src/text/sanitize.rs
//
// Cell cleanup on the row-supplier side. The schedule parser assumes plain
// ASCII with single spaces; everything that makes that true lives here.

use deunicode::deunicode_with_tofu;

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Transliterate to ASCII. Turkish letters, Latin diacritics and the other
/// scripts `deunicode` knows fold to their closest ASCII spelling; chars it
/// has no reading for are dropped.
pub fn to_ascii(s: &str) -> String {
    if s.is_ascii() {
        return s.to_string();
    }
    deunicode_with_tofu(&s.replace('\u{a0}', " "), "")
}

/// Everything a raw table cell needs before parsing.
pub fn clean_cell(s: &str) -> String {
    normalize_ws(&to_ascii(&normalize_entities(s)))
}
