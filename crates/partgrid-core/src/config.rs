use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Tunables for randomized part placement, loadable from RON.
///
/// Missing fields fall back to the values in `constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Footprint extent as [length, width] before orientation is applied.
    #[serde(default = "default_part_size")]
    pub part_size: [i32; 2],
    /// Minimum separation between same-orientation parts (inclusive reject).
    #[serde(default = "default_minimum_distance")]
    pub minimum_distance: i32,
    /// Nominal part height, carried on each placed part.
    #[serde(default = "default_height")]
    pub height: i32,
    /// Seed for the candidate sampler.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Candidates tried per placement before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Restart the sampler from `seed` before every placement, so each search
    /// replays the same candidate sequence.
    #[serde(default)]
    pub reseed_per_part: bool,
}

fn default_part_size() -> [i32; 2] {
    [PART_LENGTH, PART_WIDTH]
}

fn default_minimum_distance() -> i32 {
    MINIMUM_DISTANCE
}

fn default_height() -> i32 {
    PART_HEIGHT
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            part_size: default_part_size(),
            minimum_distance: default_minimum_distance(),
            height: default_height(),
            seed: default_seed(),
            max_attempts: default_max_attempts(),
            reseed_per_part: false,
        }
    }
}

impl PlacementConfig {
    /// Parse a RON document and validate it.
    pub fn load_from_str(ron_str: &str) -> Result<Self, ConfigError> {
        let options = ron::Options::default();
        let config: PlacementConfig = options
            .from_str(ron_str)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty RON.
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let [length, width] = self.part_size;
        if length <= 0 || width <= 0 {
            return Err(ConfigError::Invalid(format!(
                "part_size must be positive, got {length}x{width}"
            )));
        }
        match length.checked_mul(width) {
            Some(voxels) if voxels <= MAX_PART_VOXELS => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "part_size {length}x{width} exceeds {MAX_PART_VOXELS} voxels"
                )))
            }
        }
        if self.minimum_distance < 0 {
            return Err(ConfigError::Invalid(format!(
                "minimum_distance must not be negative, got {}",
                self.minimum_distance
            )));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid("max_attempts must be at least 1".into()));
        }
        Ok(())
    }

    /// Footprint extent as a vector: x = length, y = width.
    pub fn size(&self) -> IVec2 {
        IVec2::from_array(self.part_size)
    }
}
