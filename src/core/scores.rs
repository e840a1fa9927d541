//! Model output matrices and predictions

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

/// Per-class model scores: one row per instance, one column per class
///
/// Raw model output is typically logits; `softmax` turns the matrix into
/// row-wise probabilities and is the usual postprocess adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix(Array2<f32>);

impl ScoreMatrix {
	pub fn new(scores: Array2<f32>) -> Self {
		Self(scores)
	}

	pub fn zeros(rows: usize, classes: usize) -> Self {
		Self(Array2::zeros((rows, classes)))
	}

	/// Build from a flat row-major buffer
	pub fn from_flat(rows: usize, classes: usize, data: Vec<f32>) -> anyhow::Result<Self> {
		let array = Array2::from_shape_vec((rows, classes), data)
			.map_err(|e| anyhow::anyhow!("Score matrix shape mismatch: {}", e))?;
		Ok(Self(array))
	}

	pub fn rows(&self) -> usize {
		self.0.nrows()
	}

	pub fn classes(&self) -> usize {
		self.0.ncols()
	}

	pub fn row(&self, index: usize) -> ArrayView1<'_, f32> {
		self.0.row(index)
	}

	pub fn get(&self, row: usize, class: usize) -> f32 {
		self.0[[row, class]]
	}

	pub fn inner(&self) -> &Array2<f32> {
		&self.0
	}

	/// Row-wise softmax (numerically stable)
	pub fn softmax(self) -> Self {
		let mut out = self.0;
		for mut row in out.rows_mut() {
			let max = row.iter().copied().fold(f32::NEG_INFINITY, f32::max);
			let mut sum = 0.0;
			for v in row.iter_mut() {
				*v = (*v - max).exp();
				sum += *v;
			}
			if sum > 0.0 {
				for v in row.iter_mut() {
					*v /= sum;
				}
			}
		}
		Self(out)
	}

	/// Index of the highest-scoring class per row
	pub fn argmax_rows(&self) -> Vec<usize> {
		self.0
			.rows()
			.into_iter()
			.map(|row| {
				row.iter()
					.enumerate()
					.max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
					.map(|(i, _)| i)
					.unwrap_or(0)
			})
			.collect()
	}
}

/// Winning class of one instance, with its human-readable label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
	pub class: usize,
	pub label: String,
	pub confidence: f32,
}

impl Prediction {
	pub fn new(class: usize, label: impl Into<String>, confidence: f32) -> Self {
		Self {
			class,
			label: label.into(),
			confidence,
		}
	}
}

impl std::fmt::Display for Prediction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} ({:.1}%)", self.label, self.confidence * 100.0)
	}
}
