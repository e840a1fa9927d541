//! Locally weighted linear surrogate (LIME-style)
//!
//! Draw random binary masks around the instance, weight each perturbed
//! sample by an exponential kernel over cosine distance in mask space, and
//! fit a ridge regression of the target-class score on the mask bits. The
//! fitted coefficients are the token attributions; the intercept is the
//! reported baseline.

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::core::{LocalExplanation, Segments, TextBatch};
use crate::explain::{perturb, Explainer, PredictSource};

pub struct LimeExplainer {
	samples: usize,
	seed: u64,
	kernel_width: f64,
	ridge: f64,
}

impl LimeExplainer {
	pub fn new(samples: usize, seed: u64, kernel_width: f64, ridge: f64) -> Self {
		Self {
			samples: samples.max(2),
			seed,
			kernel_width,
			ridge,
		}
	}
}

impl Explainer for LimeExplainer {
	fn name(&self) -> &'static str {
		"lime"
	}

	fn explain(
		&self,
		source: &PredictSource,
		batch: &TextBatch,
		targets: &[usize],
	) -> Result<Vec<LocalExplanation>> {
		let mut explanations = Vec::with_capacity(batch.len());

		for (index, text) in batch.iter().enumerate() {
			let target = targets[index];
			let segments = Segments::split(text);
			let n = segments.len();

			if n == 0 {
				explanations.push(perturb::empty_explanation(self.name(), text, target));
				continue;
			}

			let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(index as u64));

			// First sample is always the unperturbed instance
			let mut masks = Vec::with_capacity(self.samples);
			masks.push(vec![true; n]);
			for _ in 1..self.samples {
				masks.push((0..n).map(|_| rng.random_bool(0.5)).collect());
			}

			let scores = perturb::score_masks(source, &segments, &masks, target)?;
			let full = scores[0];

			let weights: Vec<f64> = masks.iter().map(|mask| self.kernel(mask)).collect();
			let coefficients = fit_ridge(&masks, &scores, &weights, self.ridge)?;

			explanations.push(LocalExplanation {
				method: self.name().to_string(),
				text: text.to_string(),
				tokens: segments.tokens().to_vec(),
				scores: coefficients[1..].iter().map(|&c| c as f32).collect(),
				target,
				label: String::new(),
				confidence: full,
				baseline: coefficients[0] as f32,
			});
		}

		Ok(explanations)
	}
}

impl LimeExplainer {
	/// Exponential kernel over cosine distance between the mask and the
	/// all-ones vector: sim = sqrt(|mask| / n)
	fn kernel(&self, mask: &[bool]) -> f64 {
		let kept = mask.iter().filter(|&&b| b).count() as f64;
		let similarity = (kept / mask.len() as f64).sqrt();
		let distance = 1.0 - similarity;
		(-distance * distance / (self.kernel_width * self.kernel_width)).exp()
	}
}

/// Weighted ridge fit via the normal equations
///
/// Returns `[intercept, coef_0, .., coef_{n-1}]`. The intercept is left
/// unpenalized.
fn fit_ridge(masks: &[Vec<bool>], scores: &[f32], weights: &[f64], ridge: f64) -> Result<Vec<f64>> {
	let n = masks[0].len();
	let dim = n + 1;

	// XᵀWX and XᵀWy, with X = [1 | mask bits]
	let mut xtwx = vec![vec![0f64; dim]; dim];
	let mut xtwy = vec![0f64; dim];

	for ((mask, &score), &weight) in masks.iter().zip(scores.iter()).zip(weights.iter()) {
		let mut row = Vec::with_capacity(dim);
		row.push(1.0);
		row.extend(mask.iter().map(|&b| if b { 1.0 } else { 0.0 }));

		for i in 0..dim {
			let wxi = weight * row[i];
			for j in i..dim {
				xtwx[i][j] += wxi * row[j];
			}
			xtwy[i] += wxi * score as f64;
		}
	}

	// Mirror the upper triangle and add the ridge penalty
	for i in 0..dim {
		for j in 0..i {
			xtwx[i][j] = xtwx[j][i];
		}
		if i > 0 {
			xtwx[i][i] += ridge;
		}
	}

	solve(xtwx, xtwy)
}

/// Gaussian elimination with partial pivoting
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
	let dim = b.len();

	for col in 0..dim {
		let pivot = (col..dim)
			.max_by(|&x, &y| {
				a[x][col]
					.abs()
					.partial_cmp(&a[y][col].abs())
					.unwrap_or(std::cmp::Ordering::Equal)
			})
			.unwrap_or(col);

		if a[pivot][col].abs() < 1e-12 {
			bail!("Surrogate system is singular; increase the sample count");
		}

		a.swap(col, pivot);
		b.swap(col, pivot);

		for row in (col + 1)..dim {
			let factor = a[row][col] / a[col][col];
			if factor == 0.0 {
				continue;
			}
			for k in col..dim {
				a[row][k] -= factor * a[col][k];
			}
			b[row] -= factor * b[col];
		}
	}

	let mut x = vec![0f64; dim];
	for row in (0..dim).rev() {
		let mut sum = b[row];
		for col in (row + 1)..dim {
			sum -= a[row][col] * x[col];
		}
		x[row] = sum / a[row][row];
	}

	Ok(x)
}
