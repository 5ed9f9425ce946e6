use glam::{IVec2, IVec3, Vec3};
use partgrid_core::format::encode_coordinates;
use partgrid_core::math::centroid;
use partgrid_core::orientation::PartOrientation;
use partgrid_core::types::PartId;
use partgrid_grid::{Voxel, VoxelGrid};

/// A configurable part that has claimed voxels on the grid.
///
/// Built only by the placer or the rebuild path, after every occupied
/// coordinate has been validated and claimed.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurablePart {
    id: PartId,
    orientation: PartOrientation,
    size: IVec2,
    occupied: Vec<IVec3>,
    /// Grid storage indices, 1:1 with `occupied`.
    voxels: Vec<usize>,
    center: Vec3,
    height: i32,
}

impl ConfigurablePart {
    pub(crate) fn new(
        id: PartId,
        orientation: PartOrientation,
        size: IVec2,
        occupied: Vec<IVec3>,
        voxels: Vec<usize>,
        height: i32,
    ) -> Self {
        debug_assert_eq!(occupied.len(), voxels.len());
        let center = centroid(&occupied);
        Self {
            id,
            orientation,
            size,
            occupied,
            voxels,
            center,
            height,
        }
    }

    pub fn id(&self) -> PartId {
        self.id
    }

    pub fn orientation(&self) -> PartOrientation {
        self.orientation
    }

    /// Anchor voxel; always the first occupied coordinate.
    pub fn reference(&self) -> IVec3 {
        self.occupied[0]
    }

    /// Nominal footprint extent (length, width).
    pub fn size(&self) -> IVec2 {
        self.size
    }

    /// Occupied coordinates in footprint order.
    pub fn occupied(&self) -> &[IVec3] {
        &self.occupied
    }

    /// Grid storage indices of the occupied voxels.
    pub fn voxel_indices(&self) -> &[usize] {
        &self.voxels
    }

    /// Resolve the occupied voxels against the grid they were claimed on.
    pub fn voxels<'g>(&'g self, grid: &'g VoxelGrid) -> impl Iterator<Item = &'g Voxel> + 'g {
        self.voxels.iter().filter_map(move |&i| grid.voxel(i))
    }

    /// Centroid of the occupied coordinates.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Configurable parts can always be moved by later design steps.
    pub fn is_static(&self) -> bool {
        false
    }

    pub fn voxel_count(&self) -> usize {
        self.occupied.len()
    }

    /// Occupied coordinates in the `x_y_z;...` serialized form.
    pub fn encoded_coordinates(&self) -> String {
        encode_coordinates(&self.occupied)
    }
}
