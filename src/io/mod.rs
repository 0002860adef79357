/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Reading and writing atomic configurations
//!
//! Extended XYZ is the usual exchange format for training configurations;
//! JSON files hold a serialized [`Configuration`](crate::config::Configuration).

pub mod errors;
pub mod extxyz;
pub mod json;

pub use errors::{IoError, Result};
pub use extxyz::{parse_extxyz, read_extxyz, write_extxyz};
pub use json::{read_json, write_json};

use std::path::Path;

use crate::config::Configuration;

/// Read a configuration, choosing the format from the file extension
///
/// `.xyz` and `.extxyz` are read as extended XYZ, `.json` as JSON.
pub fn read_configuration<P: AsRef<Path>>(path: P) -> Result<Configuration> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("xyz") | Some("extxyz") => read_extxyz(path),
        Some("json") => read_json(path),
        _ => Err(IoError::UnsupportedFormat(path.display().to_string())),
    }
}
