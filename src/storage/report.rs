//! Report file format and I/O
//!
//! One report archives one explain run: the inputs, the model's predictions,
//! and every explanation grouped by method. Reports are keyed by content, so
//! re-running the same inputs against the same model overwrites in place.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{REPORT_DIR, REPORT_EXT};
use crate::core::{ExplanationSet, Prediction, ReportKey};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
	version: String,
	created: String,
	model_tag: String,
	labels: Vec<String>,
	inputs: Vec<String>,
	predictions: Vec<Prediction>,
	explanations: ExplanationSet,
}

impl Report {
	pub fn new(
		model_tag: String,
		labels: Vec<String>,
		inputs: Vec<String>,
		predictions: Vec<Prediction>,
		explanations: ExplanationSet,
	) -> Self {
		Self {
			version: VERSION.to_string(),
			created: Utc::now().to_rfc3339(),
			model_tag,
			labels,
			inputs,
			predictions,
			explanations,
		}
	}

	pub fn inputs(&self) -> &[String] {
		&self.inputs
	}

	pub fn predictions(&self) -> &[Prediction] {
		&self.predictions
	}

	pub fn explanations(&self) -> &ExplanationSet {
		&self.explanations
	}

	pub fn labels(&self) -> &[String] {
		&self.labels
	}

	pub fn model_tag(&self) -> &str {
		&self.model_tag
	}

	pub fn created(&self) -> &str {
		&self.created
	}

	pub fn is_current_version(&self) -> bool {
		self.version == VERSION
	}

	pub fn key(&self) -> ReportKey {
		let methods: Vec<String> = self.explanations.methods().map(String::from).collect();
		ReportKey::compute(&self.inputs, &methods, &self.model_tag)
	}
}

/// Save report to disk, returning the written path
pub fn save(report: &Report, dir: &Path) -> Result<PathBuf> {
	let report_path = build_path(dir, &report.key());

	if let Some(parent) = report_path.parent() {
		fs::create_dir_all(parent).context("Failed to create .prism directory")?;
	}

	let bytes = rmp_serde::to_vec(report).context("Failed to serialize report")?;
	fs::write(&report_path, bytes).context("Failed to write report")?;

	Ok(report_path)
}

/// Load report from disk
pub fn load(report_path: &Path) -> Result<Report> {
	let bytes = fs::read(report_path).context("Failed to read report")?;
	rmp_serde::from_slice(&bytes).context("Failed to deserialize report")
}

/// Build report path from key
pub fn build_path(dir: &Path, key: &ReportKey) -> PathBuf {
	dir.join(REPORT_DIR)
		.join(format!("{}.{}", key.as_str(), REPORT_EXT))
}
