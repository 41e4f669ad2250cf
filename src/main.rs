//! AEGIS - EVE Online Combat Intelligence CLI
//!
//! # Usage
//!
//! ```bash
//! # Score a fleet composition against the builtin doctrine catalog
//! aegis fleet --ships 12003,12003,12003,12003,12003,11987
//!
//! # Score a fleet from a JSON file (array of hull type ids)
//! aegis fleet --file fleet.json --roles ship_roles.json
//!
//! # Classify a single ship fit into a role record
//! aegis classify --fit fit.json
//!
//! # Battle report for a solar system from a killmail export
//! aegis battles --killmails killmails.json --system 30002187 --lookback-days 14
//! ```
//!
//! # Environment Variables
//!
//! - `AEGIS_CONFIG`: Path to an analysis_config.toml overriding thresholds
//! - `RUST_LOG`: Logging level (default: info)

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use aegis_intel::analysis::{BattleReporter, FleetAnalyzer};
use aegis_intel::config::{self, AnalysisConfig};
use aegis_intel::doctrine::DoctrineCatalog;
use aegis_intel::providers::{JsonKillmailProvider, StaticShipRoleRepository};
use aegis_intel::roles::classify_modules;
use aegis_intel::types::{FittedModule, ShipClass, Subject};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "aegis")]
#[command(about = "AEGIS EVE Online Combat Intelligence Engine")]
#[command(version)]
struct CliArgs {
    /// Path to an analysis_config.toml (overrides AEGIS_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to a doctrine catalog TOML (defaults to the builtin catalog)
    #[arg(long, global = true)]
    doctrines: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a fleet composition and print the threat report
    Fleet {
        /// Comma-separated hull type ids, duplicates meaningful
        #[arg(long, value_delimiter = ',')]
        ships: Vec<u32>,

        /// JSON file with an array of hull type ids (alternative to --ships)
        #[arg(long)]
        file: Option<PathBuf>,

        /// JSON file with precomputed ship role records
        #[arg(long)]
        roles: Option<PathBuf>,
    },
    /// Classify a single ship fit into a role record
    Classify {
        /// JSON file: {"ship_type_id", "ship_class", "modules": [{"slot_flag", "type_id", "type_name"}]}
        #[arg(long)]
        fit: PathBuf,
    },
    /// Cluster a killmail export into classified battles
    Battles {
        /// JSON file with an array of killmail events
        #[arg(long)]
        killmails: PathBuf,

        /// Report battles for a solar system id
        #[arg(long)]
        system: Option<u32>,

        /// Report battles for a character id
        #[arg(long)]
        character: Option<u64>,

        /// Report battles for a corporation id (export must be corp-scoped)
        #[arg(long)]
        corporation: Option<u64>,

        /// Lookback window in days
        #[arg(long)]
        lookback_days: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();

    let analysis_config = match &args.config {
        Some(path) => AnalysisConfig::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AnalysisConfig::load(),
    };
    config::init(analysis_config);

    let catalog = Arc::new(match &args.doctrines {
        Some(path) => DoctrineCatalog::load_from_file(path)
            .with_context(|| format!("failed to load doctrine catalog from {}", path.display()))?,
        None => DoctrineCatalog::builtin(),
    });

    match args.command {
        Command::Fleet { ships, file, roles } => run_fleet(catalog, ships, file, roles),
        Command::Classify { fit } => run_classify(&fit),
        Command::Battles {
            killmails,
            system,
            character,
            corporation,
            lookback_days,
        } => run_battles(killmails, system, character, corporation, lookback_days).await,
    }
}

fn run_fleet(
    catalog: Arc<DoctrineCatalog>,
    ships: Vec<u32>,
    file: Option<PathBuf>,
    roles: Option<PathBuf>,
) -> Result<()> {
    let fleet: Vec<u32> = if let Some(path) = file {
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read fleet file {}", path.display()))?;
        serde_json::from_str(&contents).context("fleet file must be a JSON array of type ids")?
    } else {
        ships
    };
    if fleet.is_empty() {
        bail!("no ships given: pass --ships or --file");
    }

    let repository = Arc::new(match roles {
        Some(path) => StaticShipRoleRepository::load_from_file(&path)?,
        None => StaticShipRoleRepository::default(),
    });

    let analyzer = FleetAnalyzer::new(catalog, repository);
    let report = analyzer.analyze_fleet_composition(&fleet)?;
    info!(
        fleet_size = report.fleet_size,
        threat = report.threat_score,
        "composition analysis complete"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// On-disk shape of a ship fit for `aegis classify`.
#[derive(serde::Deserialize)]
struct FitFile {
    ship_type_id: u32,
    #[serde(default)]
    ship_class: ShipClass,
    modules: Vec<FittedModule>,
}

fn run_classify(fit_path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(fit_path)
        .with_context(|| format!("failed to read fit file {}", fit_path.display()))?;
    let fit: FitFile = serde_json::from_str(&contents).context(
        "fit file must be a JSON object with ship_type_id, ship_class, and modules",
    )?;

    let record = classify_modules(&fit.modules, fit.ship_class).into_record(fit.ship_type_id);
    info!(
        ship_type_id = record.ship_type_id,
        primary_role = %record.primary_role,
        "fit classified"
    );
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

async fn run_battles(
    killmails: PathBuf,
    system: Option<u32>,
    character: Option<u64>,
    corporation: Option<u64>,
    lookback_days: Option<u32>,
) -> Result<()> {
    let subject = match (system, character, corporation) {
        (Some(id), None, None) => Subject::SolarSystem(id),
        (None, Some(id), None) => Subject::Character(id),
        (None, None, Some(id)) => Subject::Corporation(id),
        _ => bail!("pass exactly one of --system, --character, --corporation"),
    };
    let lookback = lookback_days.unwrap_or_else(|| config::get().clustering.lookback_days);

    let provider = JsonKillmailProvider::load_from_file(&killmails)?;
    let battles = BattleReporter::battles_for_subject(&provider, subject, lookback).await?;
    println!("{}", serde_json::to_string_pretty(&battles)?);
    Ok(())
}
