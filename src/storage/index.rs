//! Report discovery and scanning

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::{REPORT_DIR, REPORT_EXT};
use crate::storage::Report;

/// Find all report files under `.prism` directories below `root`
pub fn scan(root: &Path, recursive: bool) -> Vec<PathBuf> {
	// Non-recursive still descends into root/.prism itself
	let max_depth = if recursive { usize::MAX } else { 2 };

	WalkDir::new(root)
		.max_depth(max_depth)
		.into_iter()
		.filter_map(|entry| entry.ok())
		.filter(|entry| {
			let path = entry.path();
			path.extension().and_then(|s| s.to_str()) == Some(REPORT_EXT)
				&& path
					.parent()
					.and_then(|p| p.file_name())
					.map(|name| name == REPORT_DIR)
					.unwrap_or(false)
		})
		.map(|entry| entry.into_path())
		.collect()
}

/// Most recently created report under `root`
pub fn latest(root: &Path, recursive: bool) -> Option<(PathBuf, Report)> {
	scan(root, recursive)
		.into_iter()
		.filter_map(|path| {
			let report = super::report::load(&path).ok()?;
			Some((path, report))
		})
		.max_by(|(_, a), (_, b)| a.created().cmp(b.created()))
}
