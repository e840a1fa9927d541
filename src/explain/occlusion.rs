//! Leave-one-out occlusion attribution
//!
//! Deterministic single-token ablation: each token's score is the drop in
//! the target-class score when that token alone is masked. Cheap (n + 1
//! model evaluations) and a useful sanity baseline next to the sampling
//! engines.

use anyhow::Result;

use crate::core::{LocalExplanation, Segments, TextBatch};
use crate::explain::{perturb, Explainer, PredictSource};

#[derive(Default)]
pub struct OcclusionExplainer;

impl OcclusionExplainer {
	pub fn new() -> Self {
		Self
	}
}

impl Explainer for OcclusionExplainer {
	fn name(&self) -> &'static str {
		"occlusion"
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

			// Full input first, then one mask per ablated token
			let mut masks = Vec::with_capacity(n + 1);
			masks.push(vec![true; n]);
			for token in 0..n {
				let mut keep = vec![true; n];
				keep[token] = false;
				masks.push(keep);
			}

			let scored = perturb::score_masks(source, &segments, &masks, target)?;
			let full = scored[0];
			let scores: Vec<f32> = scored[1..].iter().map(|&masked| full - masked).collect();

			explanations.push(LocalExplanation {
				method: self.name().to_string(),
				text: text.to_string(),
				tokens: segments.tokens().to_vec(),
				scores,
				target,
				label: String::new(),
				confidence: full,
				baseline: full,
			});
		}

		Ok(explanations)
	}
}
