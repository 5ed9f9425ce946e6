//! Single source of truth for placement defaults.
//! `PlacementConfig::default()` reads these; a RON config may override them.

/// Footprint length of a configurable part in voxels (before orientation is applied).
pub const PART_LENGTH: i32 = 6;

/// Footprint width of a configurable part in voxels.
pub const PART_WIDTH: i32 = 2;

/// Upper bound on voxels in one footprint (length * width) accepted from config.
pub const MAX_PART_VOXELS: i32 = 65_536;

/// Nominal part height. Carried on the part, never used by placement geometry.
pub const PART_HEIGHT: i32 = 6;

/// Minimum separation between same-orientation parts, in voxels.
pub const MINIMUM_DISTANCE: i32 = 6;

/// Seed for the candidate sampler when none is configured.
pub const DEFAULT_SEED: u64 = 5;

/// Attempt budget for a single randomized placement.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

/// Separator between coordinate entries in a serialized part.
pub const ENTRY_SEPARATOR: char = ';';

/// Separator between the three axis values of one coordinate entry.
pub const AXIS_SEPARATOR: char = '_';
