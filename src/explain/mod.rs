//! # Explainer Facade
//!
//! `NlpExplainer` dispatches explanation requests by method name to the
//! attribution engines. It owns the model-inference callable plus its
//! pre/post-processing adapters, computes default targets from the model's
//! own predictions, and returns an `ExplanationSet` keyed by method name.

pub mod lime;
pub mod occlusion;
pub mod perturb;
pub mod shap;

pub use lime::LimeExplainer;
pub use occlusion::OcclusionExplainer;
pub use shap::ShapExplainer;

use anyhow::{bail, Context, Result};

use crate::config::{DEFAULT_SAMPLES, DEFAULT_SEED, LIME_KERNEL_WIDTH, LIME_RIDGE};
use crate::core::{ExplanationSet, LocalExplanation, Prediction, ScoreMatrix, TextBatch};

pub type PredictFn = dyn Fn(&[String]) -> Result<ScoreMatrix> + Send + Sync;
pub type PreprocessFn = dyn Fn(&str) -> String + Send + Sync;
pub type PostprocessFn = dyn Fn(ScoreMatrix) -> ScoreMatrix + Send + Sync;

/// Task mode identifier
///
/// Regression treats the model output as a single score column; targets are
/// pinned to column 0 and class labels are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskMode {
	#[default]
	Classification,
	Regression,
}

/// Explainer-method identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Method {
	Shap,
	Lime,
	Occlusion,
}

impl Method {
	pub fn name(&self) -> &'static str {
		match self {
			Method::Shap => "shap",
			Method::Lime => "lime",
			Method::Occlusion => "occlusion",
		}
	}

	/// Parse a comma-separated method list, e.g. "shap,lime"
	pub fn parse_list(list: &str) -> Result<Vec<Method>> {
		list.split(',')
			.map(str::trim)
			.filter(|s| !s.is_empty())
			.map(str::parse)
			.collect()
	}

	/// Dispatch seam: construct the engine registered under this name
	fn build(&self, options: &ExplainOptions) -> Box<dyn Explainer> {
		match self {
			Method::Shap => Box::new(ShapExplainer::new(options.samples, options.seed)),
			Method::Lime => Box::new(LimeExplainer::new(
				options.samples,
				options.seed,
				options.kernel_width,
				options.ridge,
			)),
			Method::Occlusion => Box::new(OcclusionExplainer::new()),
		}
	}
}

impl std::str::FromStr for Method {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_ascii_lowercase().as_str() {
			"shap" => Ok(Method::Shap),
			"lime" => Ok(Method::Lime),
			"occlusion" => Ok(Method::Occlusion),
			other => bail!("Unknown explainer method: {}", other),
		}
	}
}

impl std::fmt::Display for Method {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// Tunables shared by the sampling engines
#[derive(Debug, Clone)]
pub struct ExplainOptions {
	pub samples: usize,
	pub seed: u64,
	pub kernel_width: f64,
	pub ridge: f64,
}

impl Default for ExplainOptions {
	fn default() -> Self {
		Self {
			samples: DEFAULT_SAMPLES,
			seed: DEFAULT_SEED,
			kernel_width: LIME_KERNEL_WIDTH,
			ridge: LIME_RIDGE,
		}
	}
}

/// The model-inference callable with its adapters
///
/// `predict` composes preprocessing (per input string), the wrapped model
/// call, and postprocessing (on the score matrix) — engines and the facade
/// only ever see post-processed scores.
pub struct PredictSource {
	predict: Box<PredictFn>,
	preprocess: Option<Box<PreprocessFn>>,
	postprocess: Option<Box<PostprocessFn>>,
}

impl PredictSource {
	pub fn predict(&self, texts: &[String]) -> Result<ScoreMatrix> {
		let scores = match &self.preprocess {
			Some(pre) => {
				let prepared: Vec<String> = texts.iter().map(|t| pre(t)).collect();
				(self.predict)(&prepared)?
			}
			None => (self.predict)(texts)?,
		};

		Ok(match &self.postprocess {
			Some(post) => post(scores),
			None => scores,
		})
	}
}

/// A local-explanation engine, dispatched by `Method`
pub trait Explainer {
	fn name(&self) -> &'static str;

	/// Explain every instance of `batch` for its class in `targets`
	///
	/// Returns one explanation per instance, in batch order.
	fn explain(
		&self,
		source: &PredictSource,
		batch: &TextBatch,
		targets: &[usize],
	) -> Result<Vec<LocalExplanation>>;
}

/// Explainer facade for NLP models
pub struct NlpExplainer {
	mode: TaskMode,
	methods: Vec<Method>,
	source: PredictSource,
	labels: Vec<String>,
	target: Option<usize>,
	options: ExplainOptions,
}

impl NlpExplainer {
	pub fn builder() -> NlpExplainerBuilder {
		NlpExplainerBuilder::new()
	}

	pub fn methods(&self) -> &[Method] {
		&self.methods
	}

	/// Run the model once, returning per-instance predictions
	pub fn predictions(&self, batch: &TextBatch) -> Result<Vec<Prediction>> {
		if batch.is_empty() {
			return Ok(Vec::new());
		}

		let scores = self.source.predict(batch.as_slice())?;

		// Predictions always report the model's own winner, even when a
		// target override directs the explanations elsewhere.
		let targets = match self.mode {
			TaskMode::Classification => scores.argmax_rows(),
			TaskMode::Regression => vec![0; scores.rows()],
		};

		Ok(targets
			.iter()
			.enumerate()
			.map(|(row, &class)| Prediction::new(class, self.label(class), scores.get(row, class)))
			.collect())
	}

	/// Generate explanations for every configured method
	pub fn explain(&self, batch: &TextBatch) -> Result<ExplanationSet> {
		let mut set = ExplanationSet::new();
		if batch.is_empty() {
			return Ok(set);
		}

		let scores = self
			.source
			.predict(batch.as_slice())
			.context("Model prediction failed")?;
		let targets = self.targets(&scores);

		for method in &self.methods {
			crate::ui::debug(&format!("Running {} explainer", method.name()));
			let engine = method.build(&self.options);
			let mut explanations = engine
				.explain(&self.source, batch, &targets)
				.with_context(|| format!("{} explainer failed", method.name()))?;

			for explanation in &mut explanations {
				explanation.label = self.label(explanation.target);
			}
			set.insert(method.name(), explanations);
		}

		Ok(set)
	}

	fn targets(&self, scores: &ScoreMatrix) -> Vec<usize> {
		match (self.mode, self.target) {
			(TaskMode::Regression, _) => vec![0; scores.rows()],
			(TaskMode::Classification, Some(class)) => vec![class; scores.rows()],
			(TaskMode::Classification, None) => scores.argmax_rows(),
		}
	}

	fn label(&self, class: usize) -> String {
		self.labels
			.get(class)
			.cloned()
			.unwrap_or_else(|| format!("class-{}", class))
	}
}

/// Builder for `NlpExplainer`
#[derive(Default)]
pub struct NlpExplainerBuilder {
	mode: TaskMode,
	methods: Vec<Method>,
	predict: Option<Box<PredictFn>>,
	preprocess: Option<Box<PreprocessFn>>,
	postprocess: Option<Box<PostprocessFn>>,
	labels: Vec<String>,
	target: Option<usize>,
	options: ExplainOptions,
}

impl NlpExplainerBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn mode(mut self, mode: TaskMode) -> Self {
		self.mode = mode;
		self
	}

	pub fn methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
		self.methods = methods.into_iter().collect();
		self
	}

	pub fn predict<F>(mut self, predict: F) -> Self
	where
		F: Fn(&[String]) -> Result<ScoreMatrix> + Send + Sync + 'static,
	{
		self.predict = Some(Box::new(predict));
		self
	}

	pub fn preprocess<F>(mut self, preprocess: F) -> Self
	where
		F: Fn(&str) -> String + Send + Sync + 'static,
	{
		self.preprocess = Some(Box::new(preprocess));
		self
	}

	pub fn postprocess<F>(mut self, postprocess: F) -> Self
	where
		F: Fn(ScoreMatrix) -> ScoreMatrix + Send + Sync + 'static,
	{
		self.postprocess = Some(Box::new(postprocess));
		self
	}

	pub fn labels<I, S>(mut self, labels: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.labels = labels.into_iter().map(Into::into).collect();
		self
	}

	/// Explain this class for every instance instead of the predicted one
	pub fn target(mut self, class: usize) -> Self {
		self.target = Some(class);
		self
	}

	pub fn samples(mut self, samples: usize) -> Self {
		self.options.samples = samples;
		self
	}

	pub fn seed(mut self, seed: u64) -> Self {
		self.options.seed = seed;
		self
	}

	pub fn build(self) -> Result<NlpExplainer> {
		let Some(predict) = self.predict else {
			bail!("NlpExplainer requires a predict function");
		};
		if self.methods.is_empty() {
			bail!("NlpExplainer requires at least one explainer method");
		}

		// Collapse duplicates, keeping first-seen order
		let mut methods = Vec::new();
		for method in self.methods {
			if !methods.contains(&method) {
				methods.push(method);
			}
		}

		Ok(NlpExplainer {
			mode: self.mode,
			methods,
			source: PredictSource {
				predict,
				preprocess: self.preprocess,
				postprocess: self.postprocess,
			},
			labels: self.labels,
			target: self.target,
			options: self.options,
		})
	}
}
