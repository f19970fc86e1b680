//! Trainer character sheet - the root aggregate entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::stats::{ap_max, evasion_from_stat, stat_current, trainer_hp_max};

/// Identity and demographic fields. Only the name is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl BasicInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Level and experience tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub level: i64,
    pub exp_current: i64,
    pub exp_to_next: i64,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            level: 0,
            exp_current: 0,
            exp_to_next: 10,
        }
    }
}

/// Action point pool. `current` is seeded from the derived maximum at
/// creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionPoints {
    pub current: i64,
    pub bound: i64,
    pub drained: i64,
}

/// One combat stat block. The effective value is
/// `base + allocated + bonus`; `stage` is a battle-only modifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatStat {
    pub base: i64,
    pub allocated: i64,
    pub bonus: i64,
    pub stage: i64,
}

impl CombatStat {
    pub fn with_base(base: i64) -> Self {
        Self {
            base,
            ..Default::default()
        }
    }
}

/// The six fixed combat stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatStats {
    pub hp: CombatStat,
    pub attack: CombatStat,
    pub defense: CombatStat,
    pub special_attack: CombatStat,
    pub special_defense: CombatStat,
    pub speed: CombatStat,
}

impl Default for CombatStats {
    fn default() -> Self {
        Self {
            hp: CombatStat::with_base(10),
            attack: CombatStat::with_base(5),
            defense: CombatStat::with_base(5),
            special_attack: CombatStat::with_base(5),
            special_defense: CombatStat::with_base(5),
            speed: CombatStat::with_base(5),
        }
    }
}

/// The seventeen fixed skill ranks, all zero for a fresh sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub acrobatics: i64,
    #[serde(default)]
    pub athletics: i64,
    #[serde(default)]
    pub combat: i64,
    #[serde(default)]
    pub intimidate: i64,
    #[serde(default)]
    pub stealth: i64,
    #[serde(default)]
    pub survival: i64,
    #[serde(default)]
    pub general_education: i64,
    #[serde(default)]
    pub medicine_education: i64,
    #[serde(default)]
    pub occult_education: i64,
    #[serde(default)]
    pub pokemon_education: i64,
    #[serde(default)]
    pub technology_education: i64,
    #[serde(default)]
    pub guile: i64,
    #[serde(default)]
    pub perception: i64,
    #[serde(default)]
    pub charm: i64,
    #[serde(default)]
    pub command: i64,
    #[serde(default)]
    pub focus: i64,
    #[serde(default)]
    pub intuition: i64,
}

/// Evasion values derived from the defensive stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Evasion {
    pub physical: i64,
    pub special: i64,
    pub speed: i64,
}

/// Values computed from level and combat stats. Never hand-edited;
/// always recomputed whole so it cannot drift from its inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub ap_max: i64,
    pub hp_max: i64,
    pub evasion: Evasion,
}

impl DerivedStats {
    pub fn compute(progression: &Progression, combat_stats: &CombatStats) -> Self {
        let level = progression.level;
        Self {
            ap_max: ap_max(level),
            hp_max: trainer_hp_max(level, stat_current(&combat_stats.hp)),
            evasion: Evasion {
                physical: evasion_from_stat(stat_current(&combat_stats.defense)),
                special: evasion_from_stat(stat_current(&combat_stats.special_defense)),
                speed: evasion_from_stat(stat_current(&combat_stats.speed)),
            },
        }
    }
}

/// References to the build components picked for this sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Build {
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub edges: Vec<String>,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub pokemon: Vec<String>,
}

/// A complete trainer sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainer {
    pub basic_info: BasicInfo,
    pub progression: Progression,
    pub action_points: ActionPoints,
    pub combat_stats: CombatStats,
    pub skills: Skills,
    pub derived: DerivedStats,
    pub build: Build,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trainer {
    /// Build a fresh level-0 sheet with default stat blocks.
    ///
    /// Derived stats are computed from the defaults, and the current
    /// AP pool starts at the freshly computed maximum rather than a
    /// stale literal.
    pub fn new_level0(basic_info: BasicInfo, now: DateTime<Utc>) -> Self {
        let progression = Progression::default();
        let combat_stats = CombatStats::default();
        let derived = DerivedStats::compute(&progression, &combat_stats);
        Self {
            basic_info,
            progression,
            action_points: ActionPoints {
                current: derived.ap_max,
                bound: 0,
                drained: 0,
            },
            combat_stats,
            skills: Skills::default(),
            derived,
            build: Build::default(),
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Recompute the derived block from the current progression and
    /// combat stats.
    pub fn recompute_derived(&mut self) {
        self.derived = DerivedStats::compute(&self.progression, &self.combat_stats);
    }
}
