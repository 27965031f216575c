//! banter-qa
//!
//! Command-line interface for BaNTER beam-perturbation validation.

#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::struct_excessive_bools)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use banter_cli::{
    ValidateConfig, execute_comparison, execute_validation, list_scenarios, num_workers_default,
    show_paths,
};
use banter_runner::SignFilter;

#[derive(Parser)]
#[command(name = "banter-qa")]
#[command(about = "BaNTER beam-perturbation validation runner", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate perturbation levels against the BaNTER null test
    Validate {
        /// Perturbation levels to validate (all discoverable pairs when
        /// omitted); levels start with a sign, so pass them after `--`
        #[arg(value_name = "LEVEL", allow_hyphen_values = true)]
        perturbations: Vec<String>,

        /// Paths file mapping analysis names to chain directories
        #[arg(long)]
        paths_file: Option<PathBuf>,

        /// Base directory for chains/data/results
        #[arg(long, default_value = ".")]
        base_dir: PathBuf,

        /// Chains directory (defaults to <base-dir>/chains)
        #[arg(long)]
        chains_dir: Option<PathBuf>,

        /// Only validate narrowed-FWHM (negative) levels
        #[arg(long, conflicts_with = "only_positive")]
        only_negative: bool,

        /// Only validate widened-FWHM (positive) levels
        #[arg(long)]
        only_positive: bool,

        /// Validate scenarios across a thread pool
        #[arg(long)]
        parallel: bool,

        /// Worker threads for --parallel
        #[arg(long, default_value_t = num_workers_default())]
        workers: usize,

        /// Print the per-scenario evidence breakdown
        #[arg(long)]
        detailed: bool,

        /// Suppress per-scenario progress output
        #[arg(long, short)]
        quiet: bool,

        /// Prefer the importance-sampling evidence estimate
        #[arg(long)]
        importance_sampling: bool,

        /// Write a JSON report (relative paths land in results/)
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,

        /// Write a markdown report (relative paths land in results/)
        #[arg(long, value_name = "FILE")]
        markdown: Option<PathBuf>,
    },

    /// Compare the evidences of two chains directly
    Compare {
        /// Chain root of model 1 (numerator)
        chain_1: PathBuf,

        /// Chain root of model 2 (denominator)
        chain_2: PathBuf,

        /// Display name of model 1
        #[arg(long, default_value = "Model 1")]
        name_1: String,

        /// Display name of model 2
        #[arg(long, default_value = "Model 2")]
        name_2: String,

        /// Prefer the importance-sampling evidence estimate
        #[arg(long)]
        importance_sampling: bool,

        /// Suppress progress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// List the perturbation levels discoverable from the catalog
    Scenarios {
        /// Paths file mapping analysis names to chain directories
        #[arg(long)]
        paths_file: Option<PathBuf>,
    },

    /// Resolve and print the managed directory layout
    Paths {
        /// Base directory for chains/data/results
        #[arg(long, default_value = ".")]
        base_dir: PathBuf,

        /// Chains directory (defaults to <base-dir>/chains)
        #[arg(long)]
        chains_dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            perturbations,
            paths_file,
            base_dir,
            chains_dir,
            only_negative,
            only_positive,
            parallel,
            workers,
            detailed,
            quiet,
            importance_sampling,
            json,
            markdown,
        } => {
            let filter = if only_negative {
                SignFilter::NegativeOnly
            } else if only_positive {
                SignFilter::PositiveOnly
            } else {
                SignFilter::All
            };
            let config = ValidateConfig {
                perturbations,
                paths_file,
                base_dir,
                chains_dir,
                filter,
                parallel,
                workers,
                detailed,
                quiet,
                importance_sampling,
                json_out: json,
                markdown_out: markdown,
            };
            match execute_validation(&config) {
                Ok(outcome) if outcome.summary.fail == 0 && outcome.summary.error == 0 => {
                    ExitCode::SUCCESS
                }
                Ok(_) => ExitCode::FAILURE,
                Err(message) => {
                    eprintln!("{message}");
                    ExitCode::FAILURE
                }
            }
        }

        Commands::Compare {
            chain_1,
            chain_2,
            name_1,
            name_2,
            importance_sampling,
            quiet,
        } => {
            let comparison = execute_comparison(
                &chain_1,
                &chain_2,
                &name_1,
                &name_2,
                importance_sampling,
                quiet,
            );
            if comparison.succeeded() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }

        Commands::Scenarios { paths_file } => match list_scenarios(paths_file.as_deref()) {
            Ok(listing) => {
                print!("{listing}");
                ExitCode::SUCCESS
            }
            Err(message) => {
                eprintln!("{message}");
                ExitCode::FAILURE
            }
        },

        Commands::Paths {
            base_dir,
            chains_dir,
        } => match show_paths(&base_dir, chains_dir.as_deref()) {
            Ok(description) => {
                print!("{description}");
                ExitCode::SUCCESS
            }
            Err(message) => {
                eprintln!("{message}");
                ExitCode::FAILURE
            }
        },
    }
}
