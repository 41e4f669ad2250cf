//! Shared data structures for the combat intelligence pipeline
//!
//! This module defines the core types flowing through the engine:
//! - Ingestion: KillmailEvent, FittedModule (normalized at the boundary)
//! - Role analysis: ShipRole, RoleDistribution, ShipRoleRecord
//! - Battle detection: BattleCluster, BattleType, IntensityLevel
//! - Doctrine matching: DoctrinePattern, DoctrineClassification
//! - Final output: FleetCompositionResult

mod killmail;
mod roles;
mod battle;
mod doctrine;
mod composition;

pub use killmail::*;
pub use roles::*;
pub use battle::*;
pub use doctrine::*;
pub use composition::*;
