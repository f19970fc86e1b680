//! Stored record types.

mod class;
mod edge;
mod feature;
mod prerequisite;
mod trainer;

pub use class::Class;
pub use edge::Edge;
pub use feature::Feature;
pub use prerequisite::Prerequisite;
pub use trainer::{
    ActionPoints, BasicInfo, Build, CombatStat, CombatStats, DerivedStats, Evasion, Progression,
    Skills, Trainer,
};
