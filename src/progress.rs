// src/progress.rs
use std::path::Path;

/// Progress reporting for long runs (many department tables).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of input tables.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one input table has been fully processed.
    fn item_done(&mut self, _path: &Path, _records: usize, _meetings: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
