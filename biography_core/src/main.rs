//! Command-line front end.
//!
//! ```text
//! biography <graph.json> show <ID>
//! biography <graph.json> all
//! biography <graph.json> index
//! biography <graph.json> summary <ID>
//! ```
//!
//! Every command takes `--config <file>`. Logging goes to stderr and follows
//! `RUST_LOG`.

use std::path::PathBuf;
use std::process::ExitCode;

use biography_core::{build_index, BiographyComposer, BiographyConfig, PersonSummary};
use biography_core::{Evaluator, Result};
use clap::{Parser as ClapParser, Subcommand};
use record_graph::{RecordGraph, RecordId};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, ClapParser)]
#[command(name = "biography")]
#[command(about = "Write narrative biographies from a genealogical record graph")]
struct Cli {
    /// Record graph as JSON, partitioned by record keyword
    graph: PathBuf,

    /// TOML configuration with locale rules, place rules and phrases
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the biography of one individual
    Show {
        /// Individual identifier, e.g. @I1@
        id: String,
    },
    /// Print the biography of every individual
    All,
    /// Print the individual index as JSON
    Index,
    /// Print a person summary as JSON
    Summary {
        /// Individual identifier, e.g. @I1@
        id: String,
    },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("biography_core=info,record_graph=warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).compact().init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "biography failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => BiographyConfig::from_file(path)?,
        None => BiographyConfig::default(),
    };
    let composer = BiographyComposer::new(config)?;
    let graph = RecordGraph::from_json(&std::fs::read_to_string(&cli.graph)?)?;
    info!(records = graph.len(), file = %cli.graph.display(), "loaded graph");

    match &cli.command {
        Commands::Show { id } => Ok(composer.compose(&graph, &RecordId::new(id.as_str()))?.to_text()),
        Commands::All => {
            let texts: Vec<String> = composer
                .compose_all(&graph)?
                .iter()
                .map(|biography| format!("<!-- {} -->\n{}", biography.individual, biography.to_text()))
                .collect();
            Ok(texts.join("\n\n"))
        }
        Commands::Index => {
            let ctx = composer.context(composer.config().default_locale);
            Ok(serde_json::to_string_pretty(&build_index(&graph, ctx)?)?)
        }
        Commands::Summary { id } => {
            let individual = graph.by_id(&RecordId::new(id.as_str()))?;
            let ctx = composer.context(composer.select_locale(individual));
            let summary = PersonSummary::build(&Evaluator::new(&graph, ctx), individual, 1)?;
            summary.to_json()
        }
    }
}
