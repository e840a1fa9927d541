//! Explain command - attribute predictions to input tokens

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use crate::config;
use crate::core::{ScoreMatrix, TextBatch};
use crate::explain::{Method, NlpExplainer, TaskMode};
use crate::models::Models;
use crate::storage::{self, Report};
use crate::ui;

#[allow(clippy::too_many_arguments)]
pub fn run(
	texts: &[String],
	file: Option<&Path>,
	methods: &str,
	samples: usize,
	seed: u64,
	top_k: usize,
	target: Option<&str>,
	labels: &[String],
	directory: &Path,
	no_save: bool,
) -> Result<()> {
	let start = Instant::now();

	let inputs = gather_inputs(texts, file)?;
	if inputs.is_empty() {
		ui::error("No input texts. Pass TEXT arguments or --file");
		std::process::exit(1);
	}

	let methods = Method::parse_list(methods)?;
	let labels = resolve_labels(labels);

	ui::info(&format!(
		"Explaining {} input(s) with {}",
		inputs.len(),
		methods
			.iter()
			.map(|m| m.name())
			.collect::<Vec<_>>()
			.join(", ")
	));

	let (explainer, model_tag) =
		build_explainer(&methods, samples, seed, target, &labels, None)?;

	let batch = TextBatch::from(inputs.clone());
	let predictions = explainer.predictions(&batch)?;
	let explanations = explainer.explain(&batch)?;

	explanations.render(top_k);

	if !no_save {
		let report = Report::new(model_tag, labels, inputs, predictions, explanations);
		let path = storage::save(&report, directory)?;
		ui::info(&format!("Report saved: {}", ui::path_link(&path, 50)));
	}

	ui::success(&format!("Done in {:.1}s", start.elapsed().as_secs_f32()));

	Ok(())
}

/// Wire the ONNX classifier into the facade
///
/// Returns the configured explainer plus the model tag for report identity.
pub(crate) fn build_explainer(
	methods: &[Method],
	samples: usize,
	seed: u64,
	target: Option<&str>,
	labels: &[String],
	mode: Option<TaskMode>,
) -> Result<(NlpExplainer, String)> {
	let models = Models::new()?;
	let model_tag = models.model_tag();
	let models = Mutex::new(models);

	let mut builder = NlpExplainer::builder()
		.mode(mode.unwrap_or(TaskMode::Classification))
		.methods(methods.iter().copied())
		.predict(move |texts: &[String]| {
			let mut models = models
				.lock()
				.map_err(|_| anyhow::anyhow!("Model lock poisoned"))?;
			models.predict(texts)
		})
		.postprocess(ScoreMatrix::softmax)
		.labels(labels.iter().cloned())
		.samples(samples)
		.seed(seed);

	if let Some(target) = target {
		builder = builder.target(resolve_target(target, labels)?);
	}

	Ok((builder.build()?, model_tag))
}

/// Collect inputs from positional arguments and an optional file
pub(crate) fn gather_inputs(texts: &[String], file: Option<&Path>) -> Result<Vec<String>> {
	let mut inputs: Vec<String> = texts.to_vec();

	if let Some(path) = file {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read {}", path.display()))?;
		inputs.extend(
			content
				.lines()
				.map(str::trim)
				.filter(|line| !line.is_empty())
				.map(String::from),
		);
	}

	Ok(inputs)
}

pub(crate) fn resolve_labels(labels: &[String]) -> Vec<String> {
	if labels.is_empty() {
		config::DEFAULT_LABELS.iter().map(|s| s.to_string()).collect()
	} else {
		labels.to_vec()
	}
}

/// Accept a label name or a bare class index
fn resolve_target(target: &str, labels: &[String]) -> Result<usize> {
	if let Some(class) = labels.iter().position(|l| l.eq_ignore_ascii_case(target)) {
		return Ok(class);
	}
	target
		.parse::<usize>()
		.with_context(|| format!("Unknown target class: {}", target))
}
