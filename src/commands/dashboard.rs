//! Dashboard command - explore explanations in the browser

use anyhow::Result;
use std::path::Path;

use crate::core::TextBatch;
use crate::dashboard::Dashboard;
use crate::explain::Method;
use crate::storage::{self, Report};
use crate::ui;

use super::explain::{build_explainer, gather_inputs, resolve_labels};

#[allow(clippy::too_many_arguments)]
pub fn run(
	texts: &[String],
	file: Option<&Path>,
	methods: &str,
	samples: usize,
	seed: u64,
	labels: &[String],
	directory: &Path,
	latest: bool,
	addr: &str,
	no_open: bool,
) -> Result<()> {
	ui::log::print_logo();

	let report = if latest {
		load_latest(directory)
	} else {
		explain_fresh(texts, file, methods, samples, seed, labels, directory)?
	};

	Dashboard::new(report).show(addr, !no_open)
}

fn load_latest(directory: &Path) -> Report {
	match storage::latest(directory, true) {
		Some((path, report)) => {
			if !report.is_current_version() {
				ui::warn("Report was written by an older version");
			}
			ui::info(&format!("Serving saved report: {}", ui::path_link(&path, 50)));
			report
		}
		None => {
			ui::error("No saved reports found. Run 'prism explain' first.");
			std::process::exit(1);
		}
	}
}

fn explain_fresh(
	texts: &[String],
	file: Option<&Path>,
	methods: &str,
	samples: usize,
	seed: u64,
	labels: &[String],
	directory: &Path,
) -> Result<Report> {
	let inputs = gather_inputs(texts, file)?;
	if inputs.is_empty() {
		ui::error("No input texts. Pass TEXT arguments, --file, or --latest");
		std::process::exit(1);
	}

	let methods = Method::parse_list(methods)?;
	let labels = resolve_labels(labels);

	ui::info(&format!("Explaining {} input(s)", inputs.len()));

	let (explainer, model_tag) = build_explainer(&methods, samples, seed, None, &labels, None)?;

	let batch = TextBatch::from(inputs.clone());
	let predictions = explainer.predictions(&batch)?;
	let explanations = explainer.explain(&batch)?;

	let report = Report::new(model_tag, labels, inputs, predictions, explanations);

	// Persist so --latest can reopen this session later
	let path = storage::save(&report, directory)?;
	ui::info(&format!("Report saved: {}", ui::path_link(&path, 50)));

	Ok(report)
}
