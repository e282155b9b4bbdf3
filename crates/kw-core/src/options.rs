//! Placement options
//!
//! Read from an rc-style file:
//!
//! ```text
//! # keyward options
//! OPTIONS=max_attempts:20,min_level:2
//! OPTIONS=tier_key_counts:2/3/4
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    MAX_PLACEMENT_ATTEMPTS, MIN_KEY_LEVEL, TIER_1_KEY_COUNT, TIER_1_MAX_LEVEL, TIER_2_KEY_COUNT,
    TIER_2_MAX_LEVEL, TIER_3_KEY_COUNT,
};
use crate::keys::{KeyColor, TierBands};

/// Tunables for key and door placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementOptions {
    /// Attempts before giving up on a level
    pub max_attempts: u32,
    /// Shallowest level that gets keys and doors
    pub min_level: u32,
    pub tier1_max_level: u32,
    pub tier2_max_level: u32,
    /// Colors per tier band
    pub tier_key_counts: [usize; 3],
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            min_level: MIN_KEY_LEVEL,
            tier1_max_level: TIER_1_MAX_LEVEL,
            tier2_max_level: TIER_2_MAX_LEVEL,
            tier_key_counts: [TIER_1_KEY_COUNT, TIER_2_KEY_COUNT, TIER_3_KEY_COUNT],
        }
    }
}

impl PlacementOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for (idx, line) in contents.lines().enumerate() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some(opts) = line.strip_prefix("OPTIONS=") else {
                return Err(OptionsError::Parse {
                    line: idx + 1,
                    text: line.to_string(),
                });
            };
            for opt in opts.split(',') {
                let opt = opt.trim();
                if !opt.is_empty() {
                    options.parse_option(opt)?;
                }
            }
        }

        if options.tier2_max_level < options.tier1_max_level {
            return Err(OptionsError::InvalidValue(
                "tier2_max_level".to_string(),
                options.tier2_max_level.to_string(),
            ));
        }

        Ok(options)
    }

    /// Parse a single `name:value` option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        let (name, value) = opt
            .split_once(':')
            .or_else(|| opt.split_once('='))
            .map(|(n, v)| (n.trim(), v.trim()))
            .ok_or_else(|| OptionsError::MissingValue(opt.to_string()))?;
        self.set_option(name, value)
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());

        match name {
            "max_attempts" => {
                self.max_attempts = value.parse().map_err(|_| invalid())?;
                if self.max_attempts == 0 {
                    return Err(invalid());
                }
            }
            "min_level" => self.min_level = value.parse().map_err(|_| invalid())?,
            "tier1_max_level" => self.tier1_max_level = value.parse().map_err(|_| invalid())?,
            "tier2_max_level" => self.tier2_max_level = value.parse().map_err(|_| invalid())?,
            "tier_key_counts" => {
                let counts: Vec<usize> = value
                    .split('/')
                    .map(|c| c.trim().parse::<usize>().map_err(|_| invalid()))
                    .collect::<Result<_, _>>()?;
                self.tier_key_counts = counts.try_into().map_err(|_| invalid())?;
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Save options to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        std::fs::write(path, self.to_config_string())?;
        Ok(())
    }

    /// Render as a config string that `parse_config` reads back
    pub fn to_config_string(&self) -> String {
        let [t1, t2, t3] = self.tier_key_counts;
        let lines = [
            "# keyward options".to_string(),
            format!(
                "OPTIONS=max_attempts:{},min_level:{}",
                self.max_attempts, self.min_level
            ),
            format!(
                "OPTIONS=tier1_max_level:{},tier2_max_level:{}",
                self.tier1_max_level, self.tier2_max_level
            ),
            format!("OPTIONS=tier_key_counts:{t1}/{t2}/{t3}"),
        ];
        lines.join("\n")
    }

    pub fn tiers(&self) -> TierBands {
        TierBands {
            tier1_max_level: self.tier1_max_level,
            tier2_max_level: self.tier2_max_level,
            key_counts: self.tier_key_counts,
        }
    }

    /// Number of colors on `level_number`
    pub fn key_count(&self, level_number: u32) -> usize {
        self.tiers().key_count(level_number)
    }

    /// Colors active on `level_number`
    pub fn colors_for_level(&self, level_number: u32) -> &'static [KeyColor] {
        self.tiers().colors_for_level(level_number)
    }
}

/// Errors from reading or writing options
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error on line {line}: {text}")]
    Parse { line: usize, text: String },

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}
