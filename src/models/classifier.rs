//! Sequence-classification model (ONNX) with its tokenizer

use anyhow::{Context, Result};
use ort::session::Session;
use std::path::Path;
use tokenizers::Tokenizer;

use crate::config::LOGITS_OUTPUT;
use crate::core::ScoreMatrix;

pub struct Classifier {
	session: Session,
	tokenizer: Tokenizer,
}

impl Classifier {
	pub fn load(model_path: &Path, tokenizer_path: &Path) -> Result<Self> {
		let session = crate::runtime::create_session(model_path)
			.context("Failed to load classifier model")?;

		let tokenizer = Tokenizer::from_file(tokenizer_path)
			.map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;

		Ok(Self { session, tokenizer })
	}

	/// Raw logits for a batch of texts, one row per input
	///
	/// Inputs are padded to the batch max length; empty strings still get a
	/// single padded position so the batch stays rectangular.
	pub fn predict(&mut self, texts: &[String]) -> Result<ScoreMatrix> {
		if texts.is_empty() {
			return Ok(ScoreMatrix::zeros(0, 0));
		}

		let encodings = self
			.tokenizer
			.encode_batch(texts.to_vec(), true)
			.map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))?;

		let batch = texts.len();
		let max_len = encodings
			.iter()
			.map(|e| e.get_ids().len())
			.max()
			.unwrap_or(1)
			.max(1);

		let mut input_ids: Vec<i64> = Vec::with_capacity(batch * max_len);
		let mut attention_mask: Vec<i64> = Vec::with_capacity(batch * max_len);

		for encoding in &encodings {
			let ids = encoding.get_ids();
			for &id in ids {
				input_ids.push(id as i64);
				attention_mask.push(1);
			}
			for _ in ids.len()..max_len {
				input_ids.push(0);
				attention_mask.push(0);
			}
		}

		let shape = vec![batch, max_len];
		let ids = ort::value::Value::from_array((shape.clone(), input_ids))?;
		let mask = ort::value::Value::from_array((shape, attention_mask))?;

		let outputs = self
			.session
			.run(ort::inputs!["input_ids" => ids, "attention_mask" => mask])?;

		extract_logits(&outputs, batch)
	}
}

fn extract_logits(outputs: &ort::session::SessionOutputs, batch: usize) -> Result<ScoreMatrix> {
	let logits = outputs
		.get(LOGITS_OUTPUT)
		.context("No logits output found")?;

	let (shape, data) = logits.try_extract_tensor::<f32>()?;
	let dims: Vec<usize> = shape.iter().map(|&x| x as usize).collect();

	match dims.as_slice() {
		[rows, classes] if *rows == batch => ScoreMatrix::from_flat(*rows, *classes, data.to_vec()),
		_ => anyhow::bail!("Unexpected logits shape: {:?}", dims),
	}
}
