// src/schedule/mod.rs
//! Schedule-cell parsing: the part of the pipeline that turns the three raw
//! schedule cells of a course row (days, hour code, rooms) into meetings.
//!
//! Everything here is pure and allocation-local; call it from any thread.
//!
//! ```text
//! days  "MWF"          → tokens::split_days   → [M, W, F]
//! hours "123"          → hours::resolve_hours("123", 3) → [1, 2, 3]
//! rooms "Z23 Z23 A10"  → tokens::split_rooms  → [Z23, Z23, A10]
//!                      → align::try_align     → [(M,1,Z23), (W,2,Z23), (F,3,A10)]
//! ```

pub mod align;
pub mod hours;
pub mod tokens;
pub mod types;

pub use align::{align, try_align, Discard};
pub use hours::resolve_hours;
pub use types::{Day, Hour, Meeting};
