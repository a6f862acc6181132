//! Claims Analytics - command-line front end
//!
//! Loads the data files and prints query results as plain text.
//!
//! - `analytics-cli summary` - One sample result per query (the default)
//! - `analytics-cli closed-claims` - A single query
//! - `analytics-cli --data-dir /srv/data open-claims --agent 24 --min-severity 5`

use std::fmt::Display;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::{AgentId, ClaimHandlerId, DisasterId};
use domain_analytics::QueryEngine;
use infra_store::{DataFiles, DatasetLoader};
use interface_api::config::ApiConfig;

/// Disaster claims analytics over the JSON data files
#[derive(Parser)]
#[command(name = "analytics-cli", version, about, long_about = None)]
struct Cli {
    /// Directory holding the data files (default: ANALYTICS_DATA_DIR or "data")
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one sample result per query.
    Summary,

    /// Number of closed claims.
    ClosedClaims,

    /// Number of claims assigned to a claim handler.
    HandlerClaims {
        #[arg(long)]
        id: ClaimHandlerId,
    },

    /// Average claim cost of a claim handler.
    HandlerAverage {
        #[arg(long)]
        id: ClaimHandlerId,
    },

    /// Number of disasters in a state.
    StateDisasters {
        #[arg(long)]
        state: String,
    },

    /// State with the most disasters.
    MostDisasters,

    /// State with the fewest disasters.
    LeastDisasters,

    /// Most spoken non-English agent language in a state.
    AgentLanguage {
        #[arg(long)]
        state: String,
    },

    /// Total claim cost of a disaster.
    DisasterCost {
        #[arg(long)]
        id: DisasterId,
    },

    /// Claims per square mile of a disaster's impact area.
    DisasterDensity {
        #[arg(long)]
        id: DisasterId,
    },

    /// Number of disasters declared after their end date.
    DeclaredAfterEnd,

    /// Open claims of an agent at or above a severity.
    OpenClaims {
        #[arg(long)]
        agent: AgentId,

        #[arg(long, allow_negative_numbers = true)]
        min_severity: i32,
    },

    /// Total claim cost per agent.
    AgentCosts,

    /// The three months with the highest claim cost.
    TopMonths,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = ApiConfig::from_env().context("invalid ANALYTICS_* configuration")?;
    init_tracing(&config.log_level);

    let data_dir = cli.data_dir.unwrap_or(config.data_dir);
    let dataset = DatasetLoader::load(&DataFiles::in_dir(&data_dir))
        .with_context(|| format!("failed to load data from {}", data_dir.display()))?;
    let engine = QueryEngine::new(dataset);

    match cli.command.unwrap_or(Commands::Summary) {
        Commands::Summary => print_summary(&engine),
        Commands::ClosedClaims => println!("{}", engine.count_closed_claims()),
        Commands::HandlerClaims { id } => println!("{}", engine.count_claims_for_handler(id)),
        Commands::HandlerAverage { id } => {
            println!("{}", or_none(engine.average_claim_cost_for_handler(id)))
        }
        Commands::StateDisasters { state } => {
            println!("{}", engine.count_disasters_for_state(&state))
        }
        Commands::MostDisasters => println!("{}", or_none(engine.state_with_most_disasters())),
        Commands::LeastDisasters => println!("{}", or_none(engine.state_with_least_disasters())),
        Commands::AgentLanguage { state } => {
            println!("{}", engine.most_spoken_agent_language_by_state(&state))
        }
        Commands::DisasterCost { id } => {
            println!("{}", or_none(engine.total_claim_cost_for_disaster(id)))
        }
        Commands::DisasterDensity { id } => {
            println!("{}", or_none(engine.disaster_claim_density(id)))
        }
        Commands::DeclaredAfterEnd => {
            println!("{}", engine.count_disasters_declared_after_end_date())
        }
        Commands::OpenClaims { agent, min_severity } => {
            let outcome = engine.num_open_claims_for_agent_and_severity(agent, min_severity);
            println!("{}", or_none(outcome.as_sentinel()))
        }
        Commands::AgentCosts => {
            for (agent, total) in engine.total_claim_cost_by_agent() {
                println!("{}\t{}", agent, total);
            }
        }
        Commands::TopMonths => {
            for month in engine.top_three_months_by_claim_cost() {
                println!("{}", month);
            }
        }
    }
    Ok(())
}

/// Runs every query once, using the first record of each kind as input
fn print_summary(engine: &QueryEngine) {
    let dataset = engine.dataset();
    println!(
        "Loaded {} agents, {} claim handlers, {} claims, {} disasters",
        dataset.agents().len(),
        dataset.claim_handlers().len(),
        dataset.claims().len(),
        dataset.disasters().len()
    );

    println!("Closed claims: {}", engine.count_closed_claims());
    println!("Disasters declared after end: {}", engine.count_disasters_declared_after_end_date());
    println!("Most disasters: {}", or_none(engine.state_with_most_disasters()));
    println!("Least disasters: {}", or_none(engine.state_with_least_disasters()));

    if let Some(handler) = dataset.claim_handlers().first() {
        println!(
            "Claim handler {}: {} claims, average cost {}",
            handler.id,
            engine.count_claims_for_handler(handler.id),
            or_none(engine.average_claim_cost_for_handler(handler.id))
        );
    }

    if let Some(disaster) = dataset.disasters().first() {
        println!(
            "Disaster {} ({}): {} disasters in state, total cost {}, density {}",
            disaster.id,
            disaster.state,
            engine.count_disasters_for_state(&disaster.state),
            or_none(engine.total_claim_cost_for_disaster(disaster.id)),
            or_none(engine.disaster_claim_density(disaster.id))
        );
    }

    if let Some(agent) = dataset.agents().first() {
        let language = engine.most_spoken_agent_language_by_state(&agent.state);
        println!(
            "Agent {}: open claims at severity 1+ {}, language of {} {:?}",
            agent.id,
            or_none(engine.num_open_claims_for_agent_and_severity(agent.id, 1).as_sentinel()),
            agent.state,
            language
        );
    }

    let totals = engine.total_claim_cost_by_agent();
    if let Some((agent, total)) = totals.iter().max_by_key(|(_, total)| **total) {
        println!("Highest agent claim cost: {} {}", agent, total);
    }

    println!("Top months: {}", engine.top_three_months_by_claim_cost().join(", "));
}

fn or_none<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
