//! Shared perturbation plumbing
//!
//! Every engine scores masked variants of one instance on one class column.
//! Perturbed inputs run through the model in fixed-size chunks so a large
//! sample count never builds an oversized batch.

use anyhow::{bail, Result};

use crate::config::PREDICT_BATCH;
use crate::core::Segments;
use crate::explain::PredictSource;

/// Score masked variants of one instance on the target-class column
pub fn score_masks(
	source: &PredictSource,
	segments: &Segments,
	masks: &[Vec<bool>],
	target: usize,
) -> Result<Vec<f32>> {
	let texts: Vec<String> = masks.iter().map(|mask| segments.mask(mask)).collect();
	score_texts(source, &texts, target)
}

/// Score raw texts on the target-class column, chunked through the model
pub fn score_texts(source: &PredictSource, texts: &[String], target: usize) -> Result<Vec<f32>> {
	let mut out = Vec::with_capacity(texts.len());

	for chunk in texts.chunks(PREDICT_BATCH) {
		let scores = source.predict(chunk)?;

		if scores.rows() != chunk.len() {
			bail!(
				"Model returned {} rows for {} inputs",
				scores.rows(),
				chunk.len()
			);
		}
		if target >= scores.classes() {
			bail!(
				"Target class {} out of range ({} classes)",
				target,
				scores.classes()
			);
		}

		for row in 0..scores.rows() {
			out.push(scores.get(row, target));
		}
	}

	Ok(out)
}

/// Empty explanation for an instance that segments to zero tokens
pub fn empty_explanation(
	method: &'static str,
	text: &str,
	target: usize,
) -> crate::core::LocalExplanation {
	crate::core::LocalExplanation {
		method: method.to_string(),
		text: text.to_string(),
		tokens: Vec::new(),
		scores: Vec::new(),
		target,
		label: String::new(),
		confidence: 0.0,
		baseline: 0.0,
	}
}
