use crate::error::{CaseFoldError, Result};
use crate::fold::line::rewrite_line;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Required suffix for source files.
pub const SOURCE_SUFFIX: &str = ".g4.in";

/// Check whether a path names a keyword source file.
pub fn is_source_file(path: &Path) -> bool {
	path.as_os_str().to_string_lossy().ends_with(SOURCE_SUFFIX)
}

/// Output path for a source file: the same path without the trailing `.in`.
pub fn output_path(source: &Path) -> Result<PathBuf> {
	if !is_source_file(source) {
		return Err(CaseFoldError::UnrecognizedFileType {
			path: source.to_path_buf(),
		});
	}

	Ok(source.with_extension(""))
}

/// Stream lines from `reader` to `writer`, rewriting each one.
///
/// Lines keep whatever terminator they had in the source.
pub fn fold_lines<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> io::Result<()> {
	let mut line = String::new();

	loop {
		line.clear();
		if reader.read_line(&mut line)? == 0 {
			break;
		}

		writer.write_all(rewrite_line(&line).as_bytes())?;
	}

	writer.flush()
}

/// Rewrite a `.g4.in` file into its sibling `.g4` file.
///
/// Returns the path of the file that was written.
pub fn make_insensitive(source: &Path) -> Result<PathBuf> {
	let target = output_path(source)?;

	let input = File::open(source).map_err(|e| CaseFoldError::OpenSource {
		path: source.to_path_buf(),
		source: e,
	})?;

	let output = File::create(&target).map_err(|e| CaseFoldError::CreateOutput {
		path: target.clone(),
		source: e,
	})?;

	fold_lines(BufReader::new(input), BufWriter::new(output)).map_err(|e| {
		CaseFoldError::Transform {
			path: source.to_path_buf(),
			source: e,
		}
	})?;

	Ok(target)
}
