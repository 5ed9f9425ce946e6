use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Newtype for part identifiers handed out by the part registry.
///
/// Voxels store this instead of a reference to the part, so the grid never
/// owns parts and parts never own voxels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartId(pub u32);

impl PartId {
    /// Position of this part in the registry's storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Grid coordinate in voxel-space.
pub type GridCoord = IVec3;
