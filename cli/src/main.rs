//! CLI entrypoint for knowledge-cascade
//!
//! Wires the in-memory adapters together: one agent per domain sharing a
//! seeded library and network store, a peer directory of in-process
//! handles, and a resolving agent for the requested domain.

use anyhow::{bail, Result};
use cascade_application::{
    Agent, DomainLibrary, EscalationObserver, NetworkClient, NoObserver, ResolveOptions,
};
use cascade_domain::{Domain, Query, Solution, Tier};
use cascade_infrastructure::{
    ConfigLoader, InMemoryDomainLibrary, InMemoryNetworkStore, KnowledgeFile, LocalPeer,
    StaticPeerDirectory,
};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cascade", about = "Hierarchical confidence-escalation knowledge resolver")]
struct Cli {
    /// The question to resolve
    question: Option<String>,

    /// Responsibility domain of the answering agent
    #[arg(short, long, default_value = "knowledge")]
    domain: String,

    /// Domain hints attached to the query (may repeat)
    #[arg(long = "hint")]
    hints: Vec<String>,

    /// Knowledge seed file (TOML) for the library and network store
    #[arg(short, long)]
    knowledge: Option<PathBuf>,

    /// Explicit config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Caller deadline in milliseconds (lowers the configured budget)
    #[arg(long)]
    deadline_ms: Option<u64>,

    /// Emit the solution as JSON
    #[arg(long)]
    json: bool,

    /// Suppress per-tier progress output
    #[arg(short, long)]
    quiet: bool,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Colored per-tier progress printed as the walk happens
struct ConsoleObserver;

impl EscalationObserver for ConsoleObserver {
    fn on_tier_start(&self, tier: Tier) {
        eprintln!("{} consulting {} tier", "→".dimmed(), tier.to_string().cyan());
    }

    fn on_tier_complete(&self, tier: Tier, solution: &Solution) {
        eprintln!(
            "{} {} tier answered with confidence {}",
            "✓".dimmed(),
            tier,
            format!("{:.2}", solution.confidence).yellow()
        );
    }

    fn on_short_circuit(&self, tier: Tier, confidence: f64) {
        eprintln!(
            "{} threshold met at {} ({:.2})",
            "●".green(),
            tier.to_string().cyan(),
            confidence
        );
    }

    fn on_budget_exhausted(&self, last_tier: Tier) {
        eprintln!(
            "{} budget exhausted before {}",
            "◌".red(),
            last_tier.to_string().cyan()
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let Some(question) = cli.question else {
        bail!("A question is required.");
    };

    let domain: Domain = cli
        .domain
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let file_config = ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(*e))?;
    let config = file_config.resolver.to_resolver_config();
    config.validate()?;

    // === Dependency Injection ===
    let library = Arc::new(InMemoryDomainLibrary::new());
    let network = Arc::new(InMemoryNetworkStore::new());

    if let Some(path) = &cli.knowledge {
        let seeds = KnowledgeFile::from_path(path)?;
        seeds.seed(&library, &network);
        info!(
            library = seeds.library.len(),
            network = seeds.network.len(),
            "seeded knowledge"
        );
    }

    // One shallow-answering agent per other domain; their own peer tiers
    // are never reached (collaboration is one hop), so an empty directory
    // is all they need.
    let mut directory = StaticPeerDirectory::new();
    for peer_domain in Domain::ALL {
        if peer_domain == domain {
            continue;
        }
        let peer_agent = Arc::new(Agent::new(
            peer_domain,
            config.clone(),
            Arc::clone(&library) as Arc<dyn DomainLibrary>,
            Arc::new(StaticPeerDirectory::new()),
            Arc::clone(&network) as Arc<dyn NetworkClient>,
        ));
        directory = directory.register(Arc::new(LocalPeer::new(peer_agent)));
    }

    let agent = Agent::new(
        domain,
        config,
        library,
        Arc::new(directory),
        network,
    );

    let mut query = Query::new(question);
    for hint in &cli.hints {
        query = query.with_hint(hint.parse().map_err(|e: String| anyhow::anyhow!(e))?);
    }

    let mut options = ResolveOptions::default();
    if let Some(ms) = cli.deadline_ms {
        options = options.with_deadline(Duration::from_millis(ms));
    }

    let solution = if cli.quiet {
        agent.resolve_with(&query, &options, &NoObserver).await?
    } else {
        agent.resolve_with(&query, &options, &ConsoleObserver).await?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
        return Ok(());
    }

    println!();
    if solution.has_recommendation() {
        println!("{}", "Recommendation".bold());
        println!("  {}", solution.recommendation);
    } else {
        println!("{}", "No recommendation found".bold());
    }
    println!(
        "\n{}  {:.2}   {}  {}",
        "confidence".dimmed(),
        solution.confidence,
        "source".dimmed(),
        solution.tier.to_string().cyan()
    );
    if !solution.reasoning.is_empty() {
        println!("\n{}", "Reasoning".bold());
        for statement in &solution.reasoning {
            println!("  - {}", statement);
        }
    }

    Ok(())
}
