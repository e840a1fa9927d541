//! Input text values and word-level segmentation
//!
//! `TextBatch` is the value handed to the explainer facade: an ordered
//! sequence of input strings. `Segments` is the perturbation unit every
//! attribution engine works on — whitespace-delimited words with punctuation
//! left attached, so scores stay readable for humans.

use serde::{Deserialize, Serialize};

/// Ordered batch of input strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBatch(Vec<String>);

impl TextBatch {
	pub fn new() -> Self {
		Self(Vec::new())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		self.0.get(index).map(|s| s.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|s| s.as_str())
	}

	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	pub fn into_inner(self) -> Vec<String> {
		self.0
	}
}

impl From<Vec<String>> for TextBatch {
	fn from(texts: Vec<String>) -> Self {
		Self(texts)
	}
}

impl From<&[&str]> for TextBatch {
	fn from(texts: &[&str]) -> Self {
		Self(texts.iter().map(|s| s.to_string()).collect())
	}
}

impl FromIterator<String> for TextBatch {
	fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// Word-level segmentation of one input string
///
/// Masking works by omission: a masked word is simply absent from the
/// reassembled string, which keeps the scheme independent of any particular
/// model vocabulary. Masking everything yields the empty string, the
/// baseline input for the sampling engines.
#[derive(Debug, Clone)]
pub struct Segments {
	tokens: Vec<String>,
}

impl Segments {
	/// Split on whitespace, keeping punctuation attached to its word
	pub fn split(text: &str) -> Self {
		Self {
			tokens: text.split_whitespace().map(|t| t.to_string()).collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	/// Reassemble the string keeping only tokens where `keep` is true
	///
	/// `keep` must have one entry per token.
	pub fn mask(&self, keep: &[bool]) -> String {
		debug_assert_eq!(keep.len(), self.tokens.len());

		let mut out = String::with_capacity(self.tokens.iter().map(|t| t.len() + 1).sum());
		for (token, &kept) in self.tokens.iter().zip(keep.iter()) {
			if kept {
				if !out.is_empty() {
					out.push(' ');
				}
				out.push_str(token);
			}
		}
		out
	}
}
