use glam::IVec3;
use partgrid_place::PlacementError;

/// Errors that can occur during layout save/load operations.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to parse layout RON: {0}")]
    Parse(String),

    #[error("failed to serialize layout: {0}")]
    Serialize(String),

    #[error("layout was saved for grid {expected}, current grid is {actual}")]
    GridSizeMismatch { expected: IVec3, actual: IVec3 },

    #[error("part record {index} could not be restored: {source}")]
    Record {
        index: usize,
        #[source]
        source: PlacementError,
    },
}
