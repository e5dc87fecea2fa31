//! Encode, decode and inspect gonum matrix blobs.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use matrix_cli::commands;
use matrix_cli::config::CliConfig;

#[derive(Parser)]
#[clap(name = "matrix-cli")]
#[clap(about = "Encode, decode and inspect gonum-compatible matrix blobs")]
struct Cli {
    /// Optional TOML config file
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (overrides the configured filter)
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a CSV file into a binary blob
    Encode {
        input: PathBuf,
        output: PathBuf,
        /// Read one value per line and write an n x 1 blob
        #[clap(long)]
        vector: bool,
    },

    /// Convert a binary blob into CSV
    Decode {
        input: PathBuf,
        /// Write CSV here instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,
        /// Decode as a flat vector of length `rows`
        #[clap(long)]
        vector: bool,
    },

    /// Print the header and size checks of a blob
    Inspect {
        input: PathBuf,
        /// Emit JSON instead of text
        #[clap(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(&config.log_filter)
            .with_context(|| format!("invalid log filter {:?}", config.log_filter))?
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "loaded configuration");

    match cli.command {
        Command::Encode {
            input,
            output,
            vector,
        } => {
            let summary = commands::encode_csv(&input, &output, vector)?;
            println!(
                "wrote {}x{} ({} bytes) to {}",
                summary.rows,
                summary.cols,
                summary.bytes,
                output.display()
            );
        }
        Command::Decode {
            input,
            output,
            vector,
        } => {
            let csv = commands::decode_to_csv(&input, vector, config.strict_magic)?;
            match output {
                Some(path) => fs::write(&path, csv)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => print!("{}", csv),
            }
        }
        Command::Inspect { input, json } => {
            let report = commands::inspect(&input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", commands::render_inspection(&report));
            }
        }
    }

    Ok(())
}
