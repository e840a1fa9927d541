//! Core domain types

pub mod attribution;
pub mod key;
pub mod scores;
pub mod text;

pub use attribution::{ExplanationSet, LocalExplanation};
pub use key::ReportKey;
pub use scores::{Prediction, ScoreMatrix};
pub use text::{Segments, TextBatch};
