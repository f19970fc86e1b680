//! Stat formulas.
//!
//! Pure, total functions over the stored attribute blocks. Every
//! derived value is recomputed from scratch whenever level or a combat
//! stat changes; nothing here patches incrementally.

use crate::entities::CombatStat;

/// Effective value of a combat stat.
///
/// `stage` is excluded: it is a battle-only temporary modifier and not
/// part of the persisted current value.
pub fn stat_current(stat: &CombatStat) -> i64 {
    stat.base + stat.allocated + stat.bonus
}

/// Maximum action points at a given trainer level.
pub fn ap_max(level: i64) -> i64 {
    5 + level / 5
}

/// Maximum trainer hit points.
pub fn trainer_hp_max(level: i64, hp_stat_current: i64) -> i64 {
    level * 2 + hp_stat_current * 3 + 10
}

/// Evasion granted by a defensive stat, capped at 6.
pub fn evasion_from_stat(stat_value: i64) -> i64 {
    (stat_value / 5).min(6)
}
