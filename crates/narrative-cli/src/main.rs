//! Lead Script Generator CLI
//!
//! Turns a table of raw leads into prioritized, personalized outreach scripts.
//!
//! ## Commands
//!
//! - `generate`: classify every lead and render its scripts
//! - `profiles`: show the Company DNA profiles and the priority guide

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use narrative_agents::{BatchRunner, OutreachParams};
use narrative_cli::{init_tracing, read_table, resolve_output_path, write_rows, NarrativeConfig};
use narrative_core::{Priority, ProfileTable};
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "narrative")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lead Script Generator: personalized outreach scripts from raw leads", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true, env = "NARRATIVE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate scripts for every lead in a JSON table
    Generate {
        /// JSON array of lead rows (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file or directory (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Name used in email signatures
        #[arg(long)]
        sender: Option<String>,

        /// What you help companies achieve
        #[arg(long)]
        value_prop: Option<String>,

        /// Read Company DNA from each row's `company_dna` column instead of detecting it
        #[arg(long)]
        no_auto_detect: bool,
    },

    /// Show Company DNA profiles and the priority guide
    Profiles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.json, level);

    let config = NarrativeConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Generate {
            input,
            output,
            sender,
            value_prop,
            no_auto_detect,
        } => {
            let mut params = config.outreach.clone();
            if let Some(sender) = sender {
                params.sender_name = sender;
            }
            if let Some(value_prop) = value_prop {
                params.value_prop = value_prop;
            }
            if no_auto_detect {
                params.auto_detect = false;
            }

            cmd_generate(config, &params, input, output)
        }
        Commands::Profiles => cmd_profiles(),
    }
}

fn cmd_generate(
    config: NarrativeConfig,
    params: &OutreachParams,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let runner = BatchRunner::new(config.rules, ProfileTable::standard());

    let table = read_table(input.as_deref())?;
    let report = runner
        .run_json(&table, params)
        .context("Lead table is not a list of key/value rows")?;

    let destination = resolve_output_path(output.as_deref(), report.generated_at);
    write_rows(&report.rows, destination.as_deref())?;

    for priority in Priority::ALL {
        info!("{}: {}", priority, report.summary.count(priority));
    }
    match destination {
        Some(path) => info!(
            "Generated scripts for {} leads → {}",
            report.summary.total,
            path.display()
        ),
        None => info!("Generated scripts for {} leads", report.summary.total),
    }

    Ok(())
}

fn cmd_profiles() -> Result<()> {
    println!("Priority guide");
    for priority in Priority::ALL {
        println!("  {:<14} {}", priority.label(), priority.description());
    }

    println!();
    println!("Company DNA profiles");
    for (archetype, profile) in ProfileTable::standard().iter() {
        println!("  {}", archetype);
        println!("    Tone:        {}", profile.tone);
        println!("    Pain points: {}", profile.pain_points.join(", "));
        println!("    Values:      {}", profile.values.join(", "));
    }

    Ok(())
}
