//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

static CUSTOM_MODEL_DIR: OnceLock<PathBuf> = OnceLock::new();
static CUSTOM_CLASSIFIER: OnceLock<PathBuf> = OnceLock::new();
static CUSTOM_TOKENIZER: OnceLock<PathBuf> = OnceLock::new();

// === Model Files ===
pub const CLASSIFIER_MODEL: &str = "classifier_q4f16.onnx";
pub const TOKENIZER: &str = "tokenizer.json";

// === Model Parameters ===
pub const LOGITS_OUTPUT: &str = "logits";
pub const DEFAULT_LABELS: &[&str] = &["negative", "positive"];

// === Storage ===
pub const REPORT_DIR: &str = ".prism";
pub const REPORT_EXT: &str = "msgpack";

// === Explainer Defaults ===
pub const DEFAULT_METHODS: &str = "shap,lime";
pub const DEFAULT_SAMPLES: usize = 256;
pub const DEFAULT_SEED: u64 = 42;
pub const PREDICT_BATCH: usize = 32;
pub const LIME_KERNEL_WIDTH: f64 = 0.25;
pub const LIME_RIDGE: f64 = 1e-3;

// === Rendering Defaults ===
pub const DEFAULT_TOP_K: usize = 10;
pub const BAR_WIDTH: usize = 20;

// === Dashboard ===
pub const DASHBOARD_ADDR: &str = "127.0.0.1:7860";

pub fn set_model_dir(path: PathBuf) {
	let _ = CUSTOM_MODEL_DIR.set(path);
}

pub fn set_classifier_model(path: PathBuf) {
	let _ = CUSTOM_CLASSIFIER.set(path);
}

pub fn set_tokenizer(path: PathBuf) {
	let _ = CUSTOM_TOKENIZER.set(path);
}

/// Get models directory (same dir as executable, or PRISM_MODELS_DIR env var)
pub fn models_dir() -> Option<PathBuf> {
	// Check custom model dir first
	if let Some(custom) = CUSTOM_MODEL_DIR.get() {
		crate::ui::debug(&format!("Using custom model dir: {}", custom.display()));
		return Some(custom.clone());
	}

	// Check environment variable first
	if let Ok(env_path) = std::env::var("PRISM_MODELS_DIR") {
		let path = PathBuf::from(&env_path);
		if path.is_dir() {
			crate::ui::debug(&format!("Using PRISM_MODELS_DIR: {}", env_path));
			return Some(path);
		}
	}

	// Check next to executable
	if let Ok(exe) = std::env::current_exe() {
		if let Some(dir) = exe.parent() {
			let models = dir.join("models");
			if models.is_dir() {
				crate::ui::debug(&format!("Found models at: {}", models.display()));
				return Some(models);
			}
		}
	}

	None
}

pub fn get_classifier_path() -> Option<PathBuf> {
	if let Some(custom) = CUSTOM_CLASSIFIER.get() {
		return Some(custom.clone());
	}
	models_dir().map(|d| d.join(CLASSIFIER_MODEL))
}

pub fn get_tokenizer_path() -> Option<PathBuf> {
	if let Some(custom) = CUSTOM_TOKENIZER.get() {
		return Some(custom.clone());
	}
	models_dir().map(|d| d.join(TOKENIZER))
}
