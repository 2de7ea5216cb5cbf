use std::path::PathBuf;

/// Library-level structured errors for g4-casefold.
///
/// The binary wraps these with `anyhow` to attach per-file context.
#[derive(Debug, thiserror::Error)]
pub enum CaseFoldError {
	#[error("Unrecognized file-type for {path}")]
	UnrecognizedFileType { path: PathBuf },

	#[error("Failed to open source file: {path}")]
	OpenSource {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to create output file: {path}")]
	CreateOutput {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed while rewriting {path}")]
	Transform {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using CaseFoldError.
pub type Result<T> = std::result::Result<T, CaseFoldError>;
