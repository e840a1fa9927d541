//! # Prism Library
//!
//! Local explanations for NLP classifiers. Prism wraps any text model behind
//! a predict callable, dispatches to SHAP/LIME-style attribution engines by
//! method name, and renders the results in the terminal or a web dashboard.
//!
//! ```no_run
//! use prism::core::{ScoreMatrix, TextBatch};
//! use prism::explain::{Method, NlpExplainer, TaskMode};
//!
//! # fn main() -> anyhow::Result<()> {
//! let batch = TextBatch::from(vec![
//! 	"What a great movie! if you have no taste".to_string(),
//! ]);
//!
//! let explainer = NlpExplainer::builder()
//! 	.mode(TaskMode::Classification)
//! 	.methods([Method::Shap, Method::Lime])
//! 	.predict(|texts: &[String]| {
//! 		// any per-class scoring function works here
//! 		Ok(ScoreMatrix::zeros(texts.len(), 2))
//! 	})
//! 	.postprocess(ScoreMatrix::softmax)
//! 	.build()?;
//!
//! let explanations = explainer.explain(&batch)?;
//! explanations.render(10);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod explain;
pub mod models;
pub mod runtime;
pub mod storage;
pub mod ui;
