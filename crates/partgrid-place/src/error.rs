use glam::IVec3;
use partgrid_core::error::{ConfigError, FormatError};
use thiserror::Error;

/// Why a single candidate footprint was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("too close to an existing part with the same orientation")]
    TooClose,

    #[error("voxel {0} is outside the grid")]
    OutOfBounds(IVec3),

    #[error("voxel {0} is inactive")]
    Inactive(IVec3),

    #[error("voxel {0} is already occupied")]
    Occupied(IVec3),
}

/// Errors surfaced by part placement and reconstruction.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("candidate rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("grid {0} has no voxels to sample from")]
    GridTooSmall(IVec3),

    #[error("no valid placement found after {attempts} attempts")]
    Exhausted { attempts: u32 },

    #[error("part has no occupied coordinates")]
    EmptyPart,
}
