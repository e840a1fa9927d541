//! Lazy model loading coordinator

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config;
use crate::core::ScoreMatrix;

pub struct Models {
	classifier: Option<super::classifier::Classifier>,
	classifier_path: PathBuf,
	tokenizer_path: PathBuf,
}

impl Models {
	pub fn new() -> Result<Self> {
		let classifier_path = config::get_classifier_path().context(format!(
			"Classifier model not found. Ensure {} exists",
			config::CLASSIFIER_MODEL
		))?;
		let tokenizer_path = config::get_tokenizer_path().context(format!(
			"Tokenizer not found. Ensure {} exists",
			config::TOKENIZER
		))?;

		// Verify files actually exist
		if !classifier_path.exists() {
			anyhow::bail!(
				"Classifier model file does not exist: {}",
				classifier_path.display()
			);
		}
		if !tokenizer_path.exists() {
			anyhow::bail!(
				"Tokenizer file does not exist: {}",
				tokenizer_path.display()
			);
		}

		Ok(Self {
			classifier: None,
			classifier_path,
			tokenizer_path,
		})
	}

	pub fn predict(&mut self, texts: &[String]) -> Result<ScoreMatrix> {
		if self.classifier.is_none() {
			crate::ui::debug(&format!(
				"Loading classifier: {}",
				self.classifier_path.display()
			));
			self.classifier = Some(super::classifier::Classifier::load(
				&self.classifier_path,
				&self.tokenizer_path,
			)?);
			crate::ui::success("Classifier loaded");
		}

		self.classifier.as_mut().unwrap().predict(texts)
	}

	/// Model identity for report keys (file stem of the classifier)
	pub fn model_tag(&self) -> String {
		self.classifier_path
			.file_stem()
			.and_then(|s| s.to_str())
			.unwrap_or("classifier")
			.to_string()
	}
}
