// src/text/mod.rs

pub mod sanitize;
