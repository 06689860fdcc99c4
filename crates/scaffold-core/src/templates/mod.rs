//! Unit file templates and writing
//!
//! This module provides:
//! - The fixed contents of the four files in a unit
//! - The concurrent write batch and its report

pub mod content;
pub mod writer;

pub use content::{UnitFile, VARIABLES_FILE};
pub use writer::{write_unit_files, FileWrite, UnitReport};
