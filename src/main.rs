use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kernel_grouper::config::GrouperConfig;
use kernel_grouper::manifest::Manifest;
use kernel_grouper::{Group, StrategyRegistry};

/// Separator printed after every group in text output
const GROUP_SEPARATOR: &str = "---------------------------------";

#[derive(Parser)]
#[command(name = "kernel-grouper")]
#[command(version, about = "Group distribution kernel packages into build units")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/kernel-grouper/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Group a package listing with the named strategy
    Group {
        /// Strategy name (see `strategies`)
        strategy: String,
        /// File with one package URL per line (defaults to stdin)
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List available strategies
    Strategies,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Group members one per line, groups separated by dashes
    Text,
    /// Checksum-keyed manifest
    Json,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("KERNEL_GROUPER_LOG")
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GrouperConfig::resolve(cli.config.as_deref()).context("loading config")?;
    let registry = StrategyRegistry::new(&config);

    match cli.command {
        Command::Group {
            strategy,
            input,
            format,
        } => {
            let artifacts = match input {
                Some(path) => {
                    let file = std::fs::File::open(&path)
                        .with_context(|| format!("opening {}", path.display()))?;
                    read_artifacts(BufReader::new(file))
                }
                None => read_artifacts(io::stdin().lock()),
            }
            .context("loading package URLs")?;

            info!("Read {} packages", artifacts.len());

            let groups = registry
                .group(&strategy, &artifacts)
                .context("grouping packages")?;

            let mut out = io::stdout().lock();
            match format {
                Format::Text => write_text(&mut out, &groups)?,
                Format::Json => {
                    let manifest = Manifest::from_groups(&strategy, groups);
                    serde_json::to_writer_pretty(&mut out, &manifest)?;
                    writeln!(out)?;
                }
            }
        }
        Command::Strategies => {
            let mut out = io::stdout().lock();
            for name in registry.names() {
                writeln!(out, "{}", name)?;
            }
        }
    }

    Ok(())
}

fn read_artifacts(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut artifacts = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            artifacts.push(trimmed.to_string());
        }
    }
    Ok(artifacts)
}

fn write_text(out: &mut impl Write, groups: &[Group]) -> io::Result<()> {
    for group in groups {
        for artifact in group {
            writeln!(out, "{}", artifact)?;
        }
        writeln!(out, "{}", GROUP_SEPARATOR)?;
    }
    Ok(())
}
