//! Difficulty module - the level-to-sequence-length curve
//!
//! The curve grows the sequence by one tile every `levels_per_increase`
//! levels up to `max_sequence_length`, then from `late_level_threshold`
//! onward adds one more tile every `late_extra_interval` levels up to
//! `late_sequence_cap`. The two caps differ on purpose: 8 is the
//! effective ceiling below level 15, 9 from level 15 on.

/// Difficulty curve parameters. Constants at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyConfig {
    pub base_sequence_length: usize,
    pub max_sequence_length: usize,
    pub levels_per_increase: u32,
    pub late_level_threshold: u32,
    pub late_extra_interval: u32,
    pub late_sequence_cap: usize,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            base_sequence_length: 3,
            max_sequence_length: 8,
            levels_per_increase: 2,
            late_level_threshold: 15,
            late_extra_interval: 5,
            late_sequence_cap: 9,
        }
    }
}

/// Sequence length required at a given level (1-based).
pub fn required_length(level: u32, config: &DifficultyConfig) -> usize {
    let level = level.max(1);
    let additional = ((level - 1) / config.levels_per_increase) as usize;
    let base = (config.base_sequence_length + additional).min(config.max_sequence_length);

    if level >= config.late_level_threshold {
        let extra = ((level - config.late_level_threshold) / config.late_extra_interval) as usize;
        (base + extra).min(config.late_sequence_cap)
    } else {
        base
    }
}
