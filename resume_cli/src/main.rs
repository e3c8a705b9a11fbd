//! Resume CLI - extract candidate fields from a resume document
//!
//! Prints JSON on stdout; logs go to stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use resume_cli::{commands, DEFAULT_LOG_FILTER};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-cli")]
#[command(about = "Extract name, email, phone, skills and education from a resume", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a resume (.pdf, .txt, .md) and print the extracted fields
    Parse {
        /// Path to the resume file
        path: PathBuf,
        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Parse a resume and report the skills missing for a career domain
    Gap {
        /// Path to the resume file
        path: PathBuf,
        /// Career domain, e.g. "Data Science"
        #[arg(short, long)]
        domain: String,
        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// List the known career domains
    Domains,
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER));

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Parse { path, pretty } => commands::run_parse(&path, pretty)?,
        Commands::Gap {
            path,
            domain,
            pretty,
        } => commands::run_gap(&path, &domain, pretty)?,
        Commands::Domains => commands::run_domains(false)?,
    };

    println!("{}", output);
    Ok(())
}
