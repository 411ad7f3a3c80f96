//! jdlgen CLI - JDL to Kotlin entity model generator
//!
//! Commands:
//! - `jdlgen generate` - Build the generation plan and write template contexts
//! - `jdlgen check` - Build the plan and print a per-module summary
//! - `jdlgen types` - Print the effective type mapping table

use clap::{Parser, Subcommand};
use jdlgen_core::CodegenError;
use jdlgen_logging::{LogLevel, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;

mod check;
mod generate;
mod inputs;
mod sink;
mod types_cmd;

#[derive(Parser)]
#[command(name = "jdlgen")]
#[command(author, version, about = "Entity model generator for JDL sources", long_about = None)]
struct Cli {
    /// Log at debug level, ignoring the configured level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the generation plan and write it to the output directory
    Generate {
        /// JDL JSON export(s) (default: every *.json in the configured input directory)
        #[arg(short, long, num_args = 1..)]
        jdl: Vec<PathBuf>,

        /// Output directory (default: configured output directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Path to jdlgen.toml (default: ./jdlgen.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Build the generation plan without writing anything
    Check {
        /// JDL JSON export(s) (default: every *.json in the configured input directory)
        #[arg(short, long, num_args = 1..)]
        jdl: Vec<PathBuf>,

        /// Path to jdlgen.toml (default: ./jdlgen.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the effective JDL type mapping table
    Types {
        /// Path to jdlgen.toml (default: ./jdlgen.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    });

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            jdl,
            out_dir,
            config,
        } => {
            let config = inputs::load_config(config, cli.verbose)?;
            generate::run(&config, jdl, out_dir)?;
        }
        Commands::Check { jdl, config } => {
            let config = inputs::load_config(config, cli.verbose)?;
            check::run(&config, jdl)?;
        }
        Commands::Types { config } => {
            let config = inputs::load_config(config, cli.verbose)?;
            types_cmd::run(&config);
        }
    }

    Ok(())
}

/// Process exit code: the pipeline error's code, or 1 for anything else
fn exit_code(error: &anyhow::Error) -> u8 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<CodegenError>())
        .map_or(1, CodegenError::error_code)
}
