use clap::builder::styling::{AnsiColor, Color, Style};
use clap::{builder::Styles, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{DASHBOARD_ADDR, DEFAULT_METHODS, DEFAULT_SAMPLES, DEFAULT_SEED, DEFAULT_TOP_K};

/// Execution provider for ONNX Runtime
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Provider {
	/// Auto-detect best available (TensorRT → CUDA → CoreML → CPU)
	#[default]
	Auto,
	/// CPU only
	Cpu,
	/// NVIDIA CUDA GPU
	Cuda,
	/// NVIDIA TensorRT (optimized inference)
	Tensorrt,
	/// Apple CoreML (macOS only)
	Coreml,
	/// XNNPACK (optimized CPU)
	Xnnpack,
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.usage(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "prism",
	author,
	version,
	about = "Local SHAP/LIME-style explanations for NLP classifiers",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {prism} {explain} {explain_args}   {explain_desc}
  {prism} {explain} {explain_file_args}          {explain_file_desc}
  {prism} {dashboard} {dashboard_args}                     {dashboard_desc}
  {prism} {clean} {clean_args}                            {clean_desc}",
		title = "Examples:".bright_blue().bold(),
		prism = "prism".bright_blue(),
		explain = "explain".yellow(),
		explain_args = "\"Great movie!\" -m shap,lime",
		explain_desc = "Explain one review".dimmed(),
		explain_file_args = "-f reviews.txt -n 512",
		explain_file_desc = "Explain a file of inputs".dimmed(),
		dashboard = "dashboard".yellow(),
		dashboard_args = "--latest",
		dashboard_desc = "Open the last report in the browser".dimmed(),
		clean = "clean".yellow(),
		clean_args = "-d ./reviews -y",
		clean_desc = "Delete saved reports".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Execution provider: auto, cpu, cuda, tensorrt, coreml, xnnpack
	#[arg(short = 'p', long = "provider", global = true, default_value = "auto")]
	pub provider: Provider,

	/// Directory containing the classifier model and tokenizer
	#[arg(long = "models-dir", global = true, value_name = "DIR")]
	pub models_dir: Option<PathBuf>,

	/// Path to the classifier ONNX model
	#[arg(long = "model", global = true, value_name = "PATH")]
	pub model: Option<PathBuf>,

	/// Path to the tokenizer file
	#[arg(long = "tokenizer", global = true, value_name = "PATH")]
	pub tokenizer: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Explain classifier predictions for input texts
	Explain {
		/// Input texts to explain
		#[arg(value_name = "TEXT")]
		texts: Vec<String>,

		/// Read inputs from a file, one per line
		#[arg(short = 'f', long = "file", value_name = "PATH")]
		file: Option<PathBuf>,

		/// Explainer methods (comma-separated: shap, lime, occlusion)
		#[arg(short = 'm', long = "methods", default_value = DEFAULT_METHODS)]
		methods: String,

		/// Perturbation samples per instance
		#[arg(short = 'n', long = "samples", default_value_t = DEFAULT_SAMPLES)]
		samples: usize,

		/// Seed for the sampling engines
		#[arg(long = "seed", default_value_t = DEFAULT_SEED)]
		seed: u64,

		/// Tokens to display per explanation
		#[arg(short = 'k', long = "top", default_value_t = DEFAULT_TOP_K)]
		top_k: usize,

		/// Explain this class (label name or index) instead of the prediction
		#[arg(short = 't', long = "target", value_name = "CLASS")]
		target: Option<String>,

		/// Class labels (comma-separated, e.g. "negative,positive")
		#[arg(long = "labels", value_delimiter = ',')]
		labels: Vec<String>,

		/// Directory for saved reports
		#[arg(short = 'd', long = "dir", default_value = ".")]
		directory: PathBuf,

		/// Skip writing a report
		#[arg(long = "no-save")]
		no_save: bool,
	},

	/// Explore explanations in the browser
	Dashboard {
		/// Input texts to explain (omit with --latest to reuse a saved report)
		#[arg(value_name = "TEXT")]
		texts: Vec<String>,

		/// Read inputs from a file, one per line
		#[arg(short = 'f', long = "file", value_name = "PATH")]
		file: Option<PathBuf>,

		/// Explainer methods (comma-separated: shap, lime, occlusion)
		#[arg(short = 'm', long = "methods", default_value = DEFAULT_METHODS)]
		methods: String,

		/// Perturbation samples per instance
		#[arg(short = 'n', long = "samples", default_value_t = DEFAULT_SAMPLES)]
		samples: usize,

		/// Seed for the sampling engines
		#[arg(long = "seed", default_value_t = DEFAULT_SEED)]
		seed: u64,

		/// Class labels (comma-separated, e.g. "negative,positive")
		#[arg(long = "labels", value_delimiter = ',')]
		labels: Vec<String>,

		/// Directory for saved reports
		#[arg(short = 'd', long = "dir", default_value = ".")]
		directory: PathBuf,

		/// Serve the most recent saved report instead of explaining
		#[arg(long = "latest")]
		latest: bool,

		/// Bind address for the dashboard server
		#[arg(long = "addr", default_value = DASHBOARD_ADDR)]
		addr: String,

		/// Don't open the browser automatically
		#[arg(long = "no-open")]
		no_open: bool,
	},

	/// Delete saved reports
	Clean {
		/// Directory to clean
		#[arg(short = 'd', long = "dir", default_value = ".")]
		directory: PathBuf,

		/// Also clean nested directories
		#[arg(short = 'r', long = "recursive")]
		recursive: bool,

		/// Skip the confirmation prompt
		#[arg(short = 'y', long = "yes")]
		auto_confirm: bool,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
