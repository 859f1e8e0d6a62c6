// src/lib.rs

pub mod config;
pub mod text;
pub mod error;
pub mod schedule;

pub mod course;
pub mod csv;
pub mod file;
pub mod log;
pub mod progress;
pub mod runner;
pub mod semester;
pub mod sink;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
pub use schedule::{align, resolve_hours, try_align, Day, Discard, Hour, Meeting};
pub use semester::{Semester, Term};
