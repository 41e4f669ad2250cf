//! AEGIS: EVE Online Combat Intelligence
//!
//! Derives higher-level combat intelligence from raw killmail events:
//!
//! - **Battle Detection**: clusters killmails into discrete battles by
//!   system + time proximity and classifies their scale and intensity
//! - **Module Role Classifier**: maps a ship's fit to confidence over six
//!   tactical roles (tackle, logistics, ewar, dps, command, support)
//! - **Doctrine Matcher**: scores fleet compositions against a catalog of
//!   known doctrine templates
//! - **Threat Scorer**: combines fleet size, role balance, and doctrine
//!   confidence into a bounded [0, 10] threat assessment

pub mod config;
pub mod types;
pub mod roles;
pub mod battles;
pub mod doctrine;
pub mod threat;
pub mod analysis;
pub mod providers;

// Re-export analysis configuration
pub use config::AnalysisConfig;

// Re-export commonly used types
pub use types::{
    BattleCluster, BattleType, DoctrineClassification, DoctrinePattern, FleetCompositionResult,
    IntensityLevel, KillmailEvent, MatchQuality, RoleDistribution, ShipRole, ShipRoleRecord,
    Subject, ThreatLevel,
};

// Re-export the engine entry points
pub use analysis::{AnalysisError, BattleReporter, FleetAnalyzer};
pub use battles::BattleClusterer;
pub use doctrine::{DoctrineCatalog, DoctrineMatcher};
pub use roles::{classify_modules, ModuleClassification};

// Re-export provider seams
pub use providers::{
    JsonKillmailProvider, KillmailProvider, ShipRoleRepository, StaticShipRoleRepository,
};
