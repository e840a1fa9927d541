//! Content-based report identity

use xxhash_rust::xxh3::Xxh3;

/// Content key for an explain run (16-character hex string)
///
/// Computed over the inputs, the method list, and the model tag, so the same
/// run always maps to the same report file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportKey(String);

impl ReportKey {
	pub fn compute(inputs: &[String], methods: &[String], model_tag: &str) -> Self {
		let mut hasher = Xxh3::new();
		for input in inputs {
			hasher.update(input.as_bytes());
			hasher.update(&[0x1f]);
		}
		for method in methods {
			hasher.update(method.as_bytes());
			hasher.update(&[0x1f]);
		}
		hasher.update(model_tag.as_bytes());

		Self(format!("{:016x}", hasher.digest()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn short(&self) -> &str {
		&self.0[..8]
	}
}

impl std::fmt::Display for ReportKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}
