//! g4-casefold - rewrites ANTLRv4 keyword files to match case-insensitively.
//!
//! Each quoted literal in a `.g4.in` file is replaced by a sequence of
//! bracket expressions, one per character, so `'select'` becomes
//! `[Ss][Ee][Ll][Ee][Cc][Tt]`. The result is written next to the source
//! with the trailing `.in` removed.
//!
//! # Example
//!
//! ```
//! use g4_casefold::fold::rewrite_line;
//!
//! assert_eq!(
//! 	rewrite_line("SELECT: 'select'; // keyword\n"),
//! 	"SELECT: [Ss][Ee][Ll][Ee][Cc][Tt]; // keyword\n"
//! );
//! ```

pub mod error;
pub mod fold;

pub use error::{CaseFoldError, Result};
