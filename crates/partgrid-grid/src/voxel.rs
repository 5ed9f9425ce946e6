use partgrid_core::types::{GridCoord, PartId};

/// One grid cell.
///
/// `is_active` is owned by whoever builds the grid; placement only reads it.
/// `is_occupied` and `owner` are written when a part claims the cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voxel {
    /// Position of this voxel in grid-space.
    pub coord: GridCoord,
    /// Whether parts may be placed here at all.
    pub is_active: bool,
    /// Whether a part already claims this voxel.
    pub is_occupied: bool,
    /// The claiming part. Non-owning: resolve through the part registry.
    pub owner: Option<PartId>,
}

impl Voxel {
    /// Create an active, unoccupied voxel.
    pub fn new_active(coord: GridCoord) -> Self {
        Self {
            coord,
            is_active: true,
            is_occupied: false,
            owner: None,
        }
    }

    /// Create an inactive voxel (never placeable).
    pub fn new_inactive(coord: GridCoord) -> Self {
        Self {
            is_active: false,
            ..Self::new_active(coord)
        }
    }

    /// Active and not yet claimed.
    pub fn is_available(&self) -> bool {
        self.is_active && !self.is_occupied
    }

    /// Claim this voxel for `part`.
    pub fn occupy(&mut self, part: PartId) {
        self.is_occupied = true;
        self.owner = Some(part);
    }
}
