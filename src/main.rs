use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use g4_casefold::fold::{SOURCE_SUFFIX, is_source_file, make_insensitive};

const BIN_NAME: &str = "g4-casefold";

#[derive(Parser)]
#[command(name = BIN_NAME)]
#[command(
	author,
	version,
	about = "Converts ANTLRv4 keyword file(s) to be case-insensitive"
)]
struct Cli {
	/// Keyword files to convert; each must end in .g4.in
	#[arg(
		value_name = "FILE",
		trailing_var_arg = true,
		allow_hyphen_values = true
	)]
	files: Vec<PathBuf>,
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	if cli.files.is_empty() {
		print_usage();
		return ExitCode::FAILURE;
	}

	for file in &cli.files {
		if !is_source_file(file) {
			println!(
				"WARNING:  Unrecognized file-type for {}, skipping.",
				file.display()
			);
			continue;
		}

		// Report and move on to the next file
		if let Err(e) = handle_file(file) {
			eprintln!("error: {e:#}");
		}
	}

	ExitCode::SUCCESS
}

fn print_usage() {
	println!("usage: {BIN_NAME} file1{SOURCE_SUFFIX} [file2{SOURCE_SUFFIX} ...]");
	println!("\tConverts the ANTLRv4 keyword file(s) to be case-insensitive.");
}

fn handle_file(source: &Path) -> Result<()> {
	make_insensitive(source)
		.with_context(|| format!("Failed to convert {}", source.display()))?;
	Ok(())
}
