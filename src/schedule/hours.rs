// src/schedule/hours.rs
//
// Hour-code disambiguation.
//
// The schedule page prints the periods of a row back to back with no
// separator: "1112" is either [1,1,1,2], [1,1,12], [1,11,2], [11,1,2] or
// [11,12]. The number of day tokens fixes how many periods there are, and
// that count picks the reading.
//
// Readings at each position, in order of preference:
//   2..9      single digit
//   10        "1" followed by "0" (no other reading)
//   1         "1" alone
//   11..13    "1" + next digit, only if "1" alone cannot complete the row
//
// Rather than recursing, we fill a feasibility table over
// (position, periods still wanted) from the end of the string and then walk
// it forward, taking the first reading whose remainder is feasible. That is
// the same answer a prioritized backtracking search gives, in
// O(len * count) and without stack growth.

use tracing::debug;

use crate::config::consts::MAX_HOURS;
use super::types::Hour;

/// Resolve `code` into exactly `count` periods.
///
/// `None` means no consistent reading exists. `Some(vec![])` is the valid
/// result for an empty code with `count == 0`.
pub fn resolve_hours(code: &str, count: usize) -> Option<Vec<Hour>> {
    let b = code.as_bytes();
    let n = b.len();

    if n == 0 && count == 0 {
        return Some(Vec::new());
    }
    if n == 0 || count == 0 {
        return None;
    }
    if count > MAX_HOURS {
        debug!(code, count, "hour count above limit, refusing");
        return None;
    }
    // Each period takes one or two characters.
    if count > n || n > 2 * count {
        return None;
    }

    let table = Feasible::build(b, count);
    if !table.get(0, count) {
        return None;
    }

    let mut out = Vec::with_capacity(count);
    let (mut pos, mut left) = (0usize, count);
    while left > 0 {
        let (period, width) = readings(b, pos)
            .into_iter()
            .flatten()
            .find(|&(_, w)| table.get(pos + w, left - 1))?;
        out.push(Hour::new(period)?);
        pos += width;
        left -= 1;
    }
    debug_assert_eq!(pos, n);
    Some(out)
}

/// Candidate (period, width) readings at `pos`, most preferred first.
fn readings(b: &[u8], pos: usize) -> [Option<(u8, usize)>; 2] {
    let next = b.get(pos + 1).copied();
    match b.get(pos).copied() {
        Some(d @ b'2'..=b'9') => [Some((d - b'0', 1)), None],
        Some(b'1') => match next {
            Some(b'0') => [Some((10, 2)), None],
            Some(d @ b'1'..=b'3') => [Some((1, 1)), Some((10 + d - b'0', 2))],
            _ => [Some((1, 1)), None],
        },
        _ => [None, None],
    }
}

/// `ok[pos][k]`: can `b[pos..]` be read as exactly `k` periods?
struct Feasible {
    cols: usize,
    ok: Vec<bool>,
}

impl Feasible {
    fn build(b: &[u8], count: usize) -> Self {
        let n = b.len();
        let cols = count + 1;
        let mut ok = vec![false; (n + 1) * cols];
        ok[n * cols] = true;

        for pos in (0..n).rev() {
            for k in 1..=count {
                ok[pos * cols + k] = readings(b, pos)
                    .into_iter()
                    .flatten()
                    .any(|(_, w)| pos + w <= n && ok[(pos + w) * cols + k - 1]);
            }
        }
        Self { cols, ok }
    }

    #[inline]
    fn get(&self, pos: usize, k: usize) -> bool {
        self.ok.get(pos * self.cols + k).copied().unwrap_or(false)
    }
}
