//! Execution provider selection

use anyhow::{Context, Result};
use ort::ep::ExecutionProvider;
use ort::session::builder::SessionBuilder;
use ort::session::{builder::GraphOptimizationLevel, Session};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crate::ui;

pub use crate::cli::Provider;

static SELECTED_PROVIDER: OnceLock<Provider> = OnceLock::new();
static PROVIDER_LOGGED: AtomicBool = AtomicBool::new(false);

pub fn set_provider(provider: Provider) {
	let _ = SELECTED_PROVIDER.set(provider);
}

fn get_provider() -> Provider {
	SELECTED_PROVIDER.get().copied().unwrap_or(Provider::Auto)
}

fn log_provider_once(message: &str) {
	if !PROVIDER_LOGGED.swap(true, Ordering::Relaxed) {
		ui::info(message);
	}
}

pub fn create_session(model_path: &Path) -> Result<Session> {
	let mut builder = Session::builder().context("Failed to create session builder")?;

	match get_provider() {
		Provider::Auto => register_best(&mut builder),
		Provider::Cpu => log_provider_once("Using CPU execution provider (forced)"),
		Provider::Cuda => {
			if !try_register::<ort::ep::CUDA>(&mut builder, "CUDA") {
				ui::error("CUDA requested but unavailable, falling back to CPU");
			}
		}
		Provider::Tensorrt => {
			if !try_register::<ort::ep::TensorRT>(&mut builder, "TensorRT") {
				ui::error("TensorRT requested but unavailable, falling back to CPU");
			}
		}
		Provider::Coreml => {
			#[cfg(target_os = "macos")]
			if !try_register::<ort::ep::CoreML>(&mut builder, "CoreML") {
				ui::error("CoreML requested but unavailable, falling back to CPU");
			}
			#[cfg(not(target_os = "macos"))]
			ui::error("CoreML only available on macOS, falling back to CPU");
		}
		Provider::Xnnpack => {
			if !try_register::<ort::ep::XNNPACK>(&mut builder, "XNNPACK") {
				ui::error("XNNPACK requested but unavailable, falling back to CPU");
			}
		}
	}

	builder
		.with_optimization_level(GraphOptimizationLevel::Level3)
		.map_err(|e| anyhow::anyhow!(e.to_string()))?
		.with_intra_threads(4)
		.map_err(|e| anyhow::anyhow!(e.to_string()))?
		.commit_from_file(model_path)
		.context("Failed to load model")
}

fn register_best(builder: &mut SessionBuilder) {
	if try_register::<ort::ep::TensorRT>(builder, "TensorRT") {
		return;
	}
	if try_register::<ort::ep::CUDA>(builder, "CUDA") {
		return;
	}

	#[cfg(target_os = "macos")]
	if try_register::<ort::ep::CoreML>(builder, "CoreML") {
		return;
	}

	if try_register::<ort::ep::XNNPACK>(builder, "XNNPACK") {
		return;
	}

	log_provider_once("Using CPU execution provider");
}

fn try_register<E: ExecutionProvider + Default>(builder: &mut SessionBuilder, name: &str) -> bool {
	ui::debug(&format!("Trying provider: {}", name));

	let provider = E::default();
	if !provider.is_available().unwrap_or(false) {
		ui::debug(&format!("{} not available", name));
		return false;
	}

	match provider.register(builder) {
		Ok(_) => {
			log_provider_once(&format!("Using {} execution provider", name));
			true
		}
		Err(e) => {
			ui::debug(&format!("{} registration failed: {}", name, e));
			false
		}
	}
}
