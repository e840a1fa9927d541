//! Sampling permutation Shapley attribution
//!
//! The Štrumbelj–Kononenko estimator: walk random token permutations,
//! scoring the growing coalition after each insertion, and average each
//! token's marginal contribution. Contributions telescope within one
//! permutation, so the mean attributions sum to `f(x) − f(∅)`.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::core::{LocalExplanation, Segments, TextBatch};
use crate::explain::{perturb, Explainer, PredictSource};

pub struct ShapExplainer {
	samples: usize,
	seed: u64,
}

impl ShapExplainer {
	pub fn new(samples: usize, seed: u64) -> Self {
		Self {
			samples: samples.max(1),
			seed,
		}
	}
}

impl Explainer for ShapExplainer {
	fn name(&self) -> &'static str {
		"shap"
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

			// Anchor scores: unperturbed input and all-masked baseline
			let anchors =
				perturb::score_texts(source, &[text.to_string(), String::new()], target)?;
			let full = anchors[0];
			let empty = anchors[1];

			let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(index as u64));
			let mut phi = vec![0f64; n];

			for _ in 0..self.samples {
				let order = shuffled(n, &mut rng);

				// Coalition masks, one per insertion step
				let mut keep = vec![false; n];
				let mut masks = Vec::with_capacity(n);
				for &token in &order {
					keep[token] = true;
					masks.push(keep.clone());
				}

				let scores = perturb::score_masks(source, &segments, &masks, target)?;

				let mut previous = empty;
				for (step, &token) in order.iter().enumerate() {
					phi[token] += (scores[step] - previous) as f64;
					previous = scores[step];
				}
			}

			let scores: Vec<f32> = phi
				.iter()
				.map(|sum| (sum / self.samples as f64) as f32)
				.collect();

			explanations.push(LocalExplanation {
				method: self.name().to_string(),
				text: text.to_string(),
				tokens: segments.tokens().to_vec(),
				scores,
				target,
				label: String::new(),
				confidence: full,
				baseline: empty,
			});
		}

		Ok(explanations)
	}
}

/// Fisher–Yates shuffle of 0..n
fn shuffled(n: usize, rng: &mut StdRng) -> Vec<usize> {
	let mut order: Vec<usize> = (0..n).collect();
	for i in (1..n).rev() {
		let j = rng.random_range(0..=i);
		order.swap(i, j);
	}
	order
}
