//! chipin-replay: run the page reducers without a browser.
//!
//!   chipin-replay run demo.script [--save events.json] [--live]
//!   chipin-replay replay [events.json]
//!   chipin-replay settle Ann=10 Bob=0 Cy=35.5

use anyhow::{bail, Context};
use chipin_core::models::{parse_amount, Contribution};
use chipin_core::script::parse_script;
use chipin_core::{EventQueue, PageConfig, PageState};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

mod driver;
mod report;

#[derive(Parser)]
#[command(name = "chipin-replay", version, about = "Drive the chipin page from scripts and event logs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a command script against a fresh page
    Run {
        script: PathBuf,
        /// Save the processed event log here
        #[arg(long)]
        save: Option<PathBuf>,
        /// Honor `wait` lines in real time with a live one-second ticker
        #[arg(long)]
        live: bool,
    },
    /// Rebuild the page from a saved event log (default: CHIPIN_EVENT_LOG)
    Replay { log: Option<PathBuf> },
    /// Settle NAME=AMOUNT contributions and print the paybacks
    Settle {
        #[arg(required = true)]
        contributions: Vec<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chipin_replay=info,chipin_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PageConfig::from_env().context("reading CHIPIN_* configuration")?;

    match cli.command {
        Command::Run { script, save, live } => {
            let source = std::fs::read_to_string(&script)
                .with_context(|| format!("reading script {}", script.display()))?;
            let steps = parse_script(&source).with_context(|| format!("parsing {}", script.display()))?;
            info!(steps = steps.len(), live, "running script");

            let (state, queue) = if live {
                driver::run_live(&config, steps).await
            } else {
                driver::run_simulated(&config, &steps)
            };
            print!("{}", report::render(&state));

            if let Some(path) = save {
                queue
                    .save_json(&path)
                    .with_context(|| format!("saving event log {}", path.display()))?;
                info!(events = queue.processed().len(), path = %path.display(), "event log saved");
            }
        }
        Command::Replay { log } => {
            let path = log.unwrap_or_else(|| config.event_log_path.clone());
            let events = EventQueue::load_json(&path)
                .with_context(|| format!("loading event log {}", path.display()))?;
            info!(events = events.len(), "replaying");
            let mut queue = EventQueue::from_log(events);
            let state = queue.process(&PageState::new(&config));
            print!("{}", report::render(&state));
        }
        Command::Settle { contributions } => {
            let pool = contributions
                .iter()
                .map(|arg| parse_contribution(arg))
                .collect::<anyhow::Result<Vec<_>>>()?;
            print!("{}", report::render_settlement(&pool));
        }
    }

    Ok(())
}

fn parse_contribution(arg: &str) -> anyhow::Result<Contribution> {
    let Some((name, amount)) = arg.rsplit_once('=') else {
        bail!("expected NAME=AMOUNT, got {:?}", arg);
    };
    if name.trim().is_empty() {
        bail!("missing name in {:?}", arg);
    }
    Ok(Contribution::new(name.trim(), parse_amount(amount)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contribution_args_split_on_last_equals() {
        let c = parse_contribution("A=B=12").unwrap();
        assert_eq!(c.name, "A=B");
        assert_eq!(c.amount, 12.0);
        assert_eq!(parse_contribution("Cy=abc").unwrap().amount, 0.0);
        assert!(parse_contribution("Cy").is_err());
        assert!(parse_contribution("=5").is_err());
    }
}
