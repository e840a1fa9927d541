//! Prism - local explanations for NLP classifiers
//!
//! A command-line tool that attributes a classifier's predictions to input
//! tokens using SHAP- and LIME-style perturbation engines, with terminal
//! rendering and an embedded web dashboard.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use prism::cli::{Cli, Command};
use prism::commands;
use prism::config;
use prism::runtime::set_provider;
use prism::ui;

fn main() -> Result<()> {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);
	set_provider(cli.provider);

	if let Some(dir) = cli.models_dir {
		config::set_model_dir(dir);
	}
	if let Some(path) = cli.model {
		config::set_classifier_model(path);
	}
	if let Some(path) = cli.tokenizer {
		config::set_tokenizer(path);
	}

	match cli.command {
		Command::Explain {
			texts,
			file,
			methods,
			samples,
			seed,
			top_k,
			target,
			labels,
			directory,
			no_save,
		} => {
			print_header();
			commands::explain::run(
				&texts,
				file.as_deref(),
				&methods,
				samples,
				seed,
				top_k,
				target.as_deref(),
				&labels,
				&directory,
				no_save,
			)
		}
		Command::Dashboard {
			texts,
			file,
			methods,
			samples,
			seed,
			labels,
			directory,
			latest,
			addr,
			no_open,
		} => {
			print_header();
			commands::dashboard::run(
				&texts,
				file.as_deref(),
				&methods,
				samples,
				seed,
				&labels,
				&directory,
				latest,
				&addr,
				no_open,
			)
		}
		Command::Clean {
			directory,
			recursive,
			auto_confirm,
		} => {
			print_header();
			commands::clean::run(&directory, recursive, auto_confirm)
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help().unwrap();
				} else {
					eprintln!("Unknown subcommand: {}", sub);
					cmd.print_help().unwrap();
				}
			} else {
				cmd.print_help().unwrap();
			}
			Ok(())
		}
	}
}

fn print_header() {
	println!();
	println!(
		"{}",
		format!("─── Prism v{} ───", env!("CARGO_PKG_VERSION"))
			.bright_blue()
			.bold()
	);
}
