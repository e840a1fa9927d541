//! Clean command - remove saved reports

use std::fs;
use std::path::Path;

use anyhow::Result;
use colored::*;

use crate::storage;
use crate::ui;

pub fn run(directory: &Path, recursive: bool, auto_confirm: bool) -> Result<()> {
	use std::io::{self, Write};

	ui::info("Scanning for saved reports...");

	let reports = storage::scan(directory, recursive);

	if reports.is_empty() {
		ui::success("No reports found");
		return Ok(());
	}

	ui::warn(&format!("Found {} report(s)", reports.len()));

	for path in &reports {
		println!("  {}", path.display().to_string().dimmed());
	}

	if !auto_confirm {
		print!("\nDelete these reports? [y/N]: ");
		io::stdout().flush()?;

		let mut input = String::new();
		io::stdin().read_line(&mut input)?;

		if !input.trim().eq_ignore_ascii_case("y") {
			ui::info("Cancelled");
			return Ok(());
		}
	}

	let mut deleted = 0;
	let mut errors = 0;

	for path in reports {
		match fs::remove_file(&path) {
			Ok(_) => deleted += 1,
			Err(e) => {
				ui::error(&format!("Failed to delete {}: {}", path.display(), e));
				errors += 1;
			}
		}
	}

	ui::success(&format!("Deleted {} report(s)", deleted));
	if errors > 0 {
		ui::warn(&format!("{} errors", errors));
	}

	Ok(())
}
