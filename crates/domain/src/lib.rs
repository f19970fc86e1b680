//! PTU Sheet Backend domain.
//!
//! Record types stored by the backend (edges, features, classes,
//! trainer sheets) plus the pure stat math that derives action points,
//! hit points, and evasion from stored attributes. No I/O lives here.

pub mod entities;
pub mod ids;
pub mod stats;

pub use entities::{
    ActionPoints, BasicInfo, Build, Class, CombatStat, CombatStats, DerivedStats, Edge, Evasion,
    Feature, Prerequisite, Progression, Skills, Trainer,
};
pub use ids::DocId;
pub use stats::{ap_max, evasion_from_stat, stat_current, trainer_hp_max};
