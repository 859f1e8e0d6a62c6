// src/config/consts.rs

// Schedule cells
pub const NO_SCHEDULE: &str = "TBA";
pub const MAX_HOURS: usize = 64; // far above any real week; bounds the hour table

// Course table layout (cell indexes after extraction)
pub const COL_CODE: usize = 0;
pub const COL_NAME_OR_TYPE: usize = 2;
pub const COL_INSTRUCTOR: usize = 5;
pub const COL_DAYS: usize = 6;
pub const COL_HOURS: usize = 7;
pub const COL_ROOMS: usize = 8;
pub const MIN_COLS: usize = COL_ROOMS + 1;
pub const LECTURE_TYPE: &str = "LECTURE";
pub const HEADER_FIRST_CELL: &str = "Code";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "schedule";
pub const COURSES_FILE: &str = "courses";
pub const MEETINGS_FILE: &str = "meetings";

// Logging
pub const LOG_ENV: &str = "COURSE_SCHED_LOG";
