//! Case folding for grammar keyword files.
//!
//! This module handles:
//! - Locating the quoted literal on a line and expanding it
//! - Mapping `.g4.in` sources to their outputs and streaming them line by line

pub mod file;
pub mod line;

pub use file::{SOURCE_SUFFIX, is_source_file, make_insensitive};
pub use line::rewrite_line;
