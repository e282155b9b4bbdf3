//! Difficulty tiers: how many key colors a level gets

use serde::{Deserialize, Serialize};

use super::{KeyColor, PALETTE};
use crate::consts::{
    TIER_1_KEY_COUNT, TIER_1_MAX_LEVEL, TIER_2_KEY_COUNT, TIER_2_MAX_LEVEL, TIER_3_KEY_COUNT,
};

/// Level bands and the number of colors active in each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBands {
    /// Last level of the first band
    pub tier1_max_level: u32,
    /// Last level of the second band; deeper levels fall in the third
    pub tier2_max_level: u32,
    /// Colors per band, clamped to the palette size
    pub key_counts: [usize; 3],
}

impl Default for TierBands {
    fn default() -> Self {
        Self {
            tier1_max_level: TIER_1_MAX_LEVEL,
            tier2_max_level: TIER_2_MAX_LEVEL,
            key_counts: [TIER_1_KEY_COUNT, TIER_2_KEY_COUNT, TIER_3_KEY_COUNT],
        }
    }
}

impl TierBands {
    /// Number of active colors on `level_number`
    pub fn key_count(&self, level_number: u32) -> usize {
        let count = if level_number <= self.tier1_max_level {
            self.key_counts[0]
        } else if level_number <= self.tier2_max_level {
            self.key_counts[1]
        } else {
            self.key_counts[2]
        };
        count.min(PALETTE.len())
    }

    /// Active colors on `level_number`: a prefix of the palette
    pub fn colors_for_level(&self, level_number: u32) -> &'static [KeyColor] {
        &PALETTE[..self.key_count(level_number)]
    }
}

/// Number of active colors on `level_number` with the default bands
pub fn key_count(level_number: u32) -> usize {
    TierBands::default().key_count(level_number)
}

/// Active colors on `level_number` with the default bands
pub fn colors_for_level(level_number: u32) -> &'static [KeyColor] {
    TierBands::default().colors_for_level(level_number)
}
