//! Attribution values produced by the explainer engines
//!
//! A `LocalExplanation` attributes one instance's target-class score to its
//! word tokens. An `ExplanationSet` groups the per-instance explanations of
//! a batch by explainer-method name.

use colored::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::BAR_WIDTH;
use crate::ui;

/// Per-instance attribution of the target-class score to word tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalExplanation {
	/// Explainer-method name that produced this explanation
	pub method: String,
	/// Original input text
	pub text: String,
	/// Word tokens, in input order
	pub tokens: Vec<String>,
	/// One signed score per token (positive supports the target class)
	pub scores: Vec<f32>,
	/// Explained class index
	pub target: usize,
	/// Human-readable label of the target class
	pub label: String,
	/// Model probability for the target class on the unperturbed input
	pub confidence: f32,
	/// Score of the all-masked input (SHAP/occlusion) or surrogate intercept (LIME)
	pub baseline: f32,
}

impl LocalExplanation {
	/// Top `n` tokens by absolute score, descending
	pub fn top_tokens(&self, n: usize) -> Vec<(&str, f32)> {
		let mut pairs: Vec<_> = self
			.tokens
			.iter()
			.zip(self.scores.iter())
			.map(|(t, s)| (t.as_str(), *s))
			.collect();
		pairs.sort_by(|a, b| {
			b.1.abs()
				.partial_cmp(&a.1.abs())
				.unwrap_or(std::cmp::Ordering::Equal)
		});
		pairs.into_iter().take(n).collect()
	}

	/// Render to the terminal: signed bars, green supporting, red opposing
	pub fn render(&self, max_tokens: usize) {
		let preview = preview(&self.text, 70);
		println!(
			"  {} {}",
			format!("\"{}\"", preview).bright_white(),
			format!("→ {} ({:.1}%)", self.label, self.confidence * 100.0).dimmed()
		);

		if self.tokens.is_empty() {
			println!("    {}", "(no tokens)".dimmed());
			return;
		}

		let top = self.top_tokens(max_tokens);
		let max_abs = top
			.iter()
			.map(|(_, s)| s.abs())
			.fold(f32::MIN_POSITIVE, f32::max);
		let width = top.iter().map(|(t, _)| t.chars().count()).max().unwrap_or(0);

		for (token, score) in top {
			let len = ((score.abs() / max_abs) * BAR_WIDTH as f32).ceil() as usize;
			let bar = "█".repeat(len.max(1));
			let bar = if score >= 0.0 {
				bar.bright_green()
			} else {
				bar.bright_red()
			};

			// Pad before coloring so ANSI codes don't break the column
			let padded = format!("{:width$}", token, width = width);
			println!(
				"    {}  {} {}",
				padded.bright_white(),
				bar,
				format!("{:+.3}", score).dimmed()
			);
		}
	}
}

fn preview(text: &str, max_chars: usize) -> String {
	if text.chars().count() <= max_chars {
		text.to_string()
	} else {
		let cut: String = text.chars().take(max_chars).collect();
		format!("{}…", cut)
	}
}

/// Explanations of one batch, grouped by explainer-method name
///
/// Iteration order is deterministic (sorted by method name).
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ExplanationSet {
	methods: BTreeMap<String, Vec<LocalExplanation>>,
}

impl ExplanationSet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, method: impl Into<String>, explanations: Vec<LocalExplanation>) {
		self.methods.insert(method.into(), explanations);
	}

	pub fn get(&self, method: &str) -> Option<&[LocalExplanation]> {
		self.methods.get(method).map(|v| v.as_slice())
	}

	pub fn methods(&self) -> impl Iterator<Item = &str> {
		self.methods.keys().map(|k| k.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &[LocalExplanation])> {
		self.methods.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
	}

	pub fn is_empty(&self) -> bool {
		self.methods.is_empty()
	}

	/// Render every method's explanations to the terminal
	pub fn render(&self, max_tokens: usize) {
		for (method, explanations) in self.iter() {
			ui::header(&format!("─── {} ───", method));
			for explanation in explanations {
				println!();
				explanation.render(max_tokens);
			}
			println!();
		}
	}
}
