//! `ccnta-shell`: drive the application shell from the command line.
//!
//! ```text
//! ccnta-shell [--config FILE] [--json] [--metrics] <COMMAND>
//!   routes               print the compiled route tree
//!   menu [--path PATH]   render the side navigation
//!   navigate <PATH>...   navigate through the paths in order
//!   session              read paths from stdin until EOF or Ctrl-C
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

use ccnta_shell::config::{load_config, ShellConfig};
use ccnta_shell::lifecycle::{signals, start, Shutdown};
use ccnta_shell::navigation::render::render_menu;
use ccnta_shell::observability::{logging, metrics};
use ccnta_shell::{NavigationOutcome, Shell};

#[derive(Parser)]
#[command(name = "ccnta-shell", version)]
#[command(about = "Application shell with side navigation and lazy routes", long_about = None)]
struct Cli {
    /// TOML configuration; built-in navigation and routes when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print snapshots as JSON
    #[arg(long)]
    json: bool,

    /// Print Prometheus metrics before exiting
    #[arg(long)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table
    Routes,
    /// Render the side navigation, optionally after navigating to PATH
    Menu {
        #[arg(long)]
        path: Option<String>,
    },
    /// Navigate through each path in order, printing every outcome
    Navigate {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Read one path per line from stdin; paths may supersede each other
    Session,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ShellConfig::default(),
    };
    logging::init_logging(&config.observability);

    let prometheus = metrics::init_from_config(&config.observability);

    let shell = start(config)?;

    match cli.command {
        Commands::Routes => print!("{}", shell.routes()),
        Commands::Menu { path } => {
            if let Some(path) = path {
                let outcome = shell.navigate(&path).await;
                if !outcome.is_mounted() {
                    print_outcome(&shell, &path, &outcome, cli.json);
                }
            }
            let snapshot = shell.snapshot();
            if cli.json {
                print_json(&snapshot.menu);
            } else {
                print!("{}", render_menu(&snapshot.menu, shell.icons()));
            }
        }
        Commands::Navigate { paths } => {
            for path in paths {
                let outcome = shell.navigate(&path).await;
                print_outcome(&shell, &path, &outcome, cli.json);
            }
        }
        Commands::Session => run_session(shell, cli.json).await?,
    }

    if let Some(handle) = prometheus.filter(|_| cli.metrics) {
        print!("{}", handle.render());
    }

    Ok(())
}

async fn run_session(shell: Shell, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let shutdown = Shutdown::new();
    tokio::spawn(signals::listen_for_interrupt(shutdown.clone()));

    let mut signal = shutdown.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut navigations = JoinSet::new();

    loop {
        tokio::select! {
            _ = signal.wait() => break,
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let path = line.trim().to_string();
                if path.is_empty() {
                    continue;
                }
                let shell = shell.clone();
                navigations.spawn(async move {
                    let outcome = shell.navigate(&path).await;
                    print_outcome(&shell, &path, &outcome, json);
                });
            }
        }
    }

    if shutdown.is_triggered() {
        navigations.abort_all();
    }
    while navigations.join_next().await.is_some() {}

    tracing::info!("Session ended");
    Ok(())
}

fn print_outcome(shell: &Shell, path: &str, outcome: &NavigationOutcome, json: bool) {
    match (outcome, json) {
        (NavigationOutcome::Mounted(snapshot), true) => print_json(snapshot.as_ref()),
        (NavigationOutcome::Mounted(snapshot), false) => {
            println!("{}", snapshot.render_text(shell.icons()));
        }
        (NavigationOutcome::Superseded, true) => {
            print_json(&serde_json::json!({ "path": path, "outcome": "superseded" }));
        }
        (NavigationOutcome::Superseded, false) => println!("{}: superseded", path),
        (NavigationOutcome::Failed(e), true) => print_json(&serde_json::json!({
            "path": path,
            "outcome": "failed",
            "error": e.to_string(),
        })),
        (NavigationOutcome::Failed(e), false) => println!("{}: {}", path, e),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => tracing::error!(error = %e, "Failed to serialize output"),
    }
}
