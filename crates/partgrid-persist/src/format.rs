use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Serialized form of one placed part.
///
/// `orientation` holds the orientation name and `occupied` the occupied
/// coordinates as `x_y_z` entries joined by `;`, reference first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRecord {
    pub orientation: String,
    pub occupied: String,
    #[serde(default = "default_height")]
    pub height: i32,
}

fn default_height() -> i32 {
    partgrid_core::constants::PART_HEIGHT
}

/// A saved set of parts together with the grid extent they were placed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub grid_size: [i32; 3],
    #[serde(default)]
    pub parts: Vec<PartRecord>,
}

impl Layout {
    pub fn grid_size(&self) -> IVec3 {
        IVec3::from_array(self.grid_size)
    }
}
