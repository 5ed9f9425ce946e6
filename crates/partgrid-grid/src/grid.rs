use crate::voxel::Voxel;
use glam::IVec3;
use partgrid_core::math::{coord_from_index, linear_index};
use partgrid_core::types::{GridCoord, PartId};

/// Fixed-size 3D voxel grid. Voxels are stored x-fastest in a flat vector.
pub struct VoxelGrid {
    size: IVec3,
    voxels: Vec<Voxel>,
}

impl VoxelGrid {
    /// Create a grid with every voxel active and unoccupied.
    /// Negative extents are clamped to zero.
    pub fn new(size: IVec3) -> Self {
        Self::with_activity(size, |_| true)
    }

    /// Create a grid, deciding each voxel's active flag with `is_active`.
    pub fn with_activity(size: IVec3, mut is_active: impl FnMut(GridCoord) -> bool) -> Self {
        let size = size.max(IVec3::ZERO);
        let count = (size.x as usize) * (size.y as usize) * (size.z as usize);
        let voxels = (0..count)
            .map(|i| {
                let coord = coord_from_index(i, size);
                if is_active(coord) {
                    Voxel::new_active(coord)
                } else {
                    Voxel::new_inactive(coord)
                }
            })
            .collect();

        log::debug!("Created voxel grid {size} ({count} voxels)");
        Self { size, voxels }
    }

    /// Grid extent per axis.
    pub fn size(&self) -> IVec3 {
        self.size
    }

    /// Check if a coordinate lies inside `[0, size)` on every axis.
    pub fn in_bounds(&self, coord: GridCoord) -> bool {
        linear_index(coord, self.size).is_some()
    }

    /// Linear storage index of a coordinate, or None when out of bounds.
    pub fn index_of(&self, coord: GridCoord) -> Option<usize> {
        linear_index(coord, self.size)
    }

    /// Get a voxel by coordinate. None when out of bounds.
    pub fn voxel_at(&self, coord: GridCoord) -> Option<&Voxel> {
        self.index_of(coord).map(|i| &self.voxels[i])
    }

    /// Get a mutable voxel by coordinate.
    pub fn voxel_at_mut(&mut self, coord: GridCoord) -> Option<&mut Voxel> {
        let index = self.index_of(coord)?;
        self.voxels.get_mut(index)
    }

    /// Get a voxel by linear storage index.
    pub fn voxel(&self, index: usize) -> Option<&Voxel> {
        self.voxels.get(index)
    }

    /// Set a voxel's active flag. Returns false if the coordinate is out of bounds.
    pub fn set_active(&mut self, coord: GridCoord, active: bool) -> bool {
        match self.voxel_at_mut(coord) {
            Some(voxel) => {
                voxel.is_active = active;
                true
            }
            None => false,
        }
    }

    /// In bounds, active and unoccupied.
    pub fn is_available(&self, coord: GridCoord) -> bool {
        self.voxel_at(coord).is_some_and(Voxel::is_available)
    }

    /// Claim a voxel for `part`. Returns its storage index, or None when out of bounds.
    pub fn occupy(&mut self, coord: GridCoord, part: PartId) -> Option<usize> {
        let index = self.index_of(coord)?;
        self.voxels[index].occupy(part);
        Some(index)
    }

    /// Iterator over all voxels in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Voxel> {
        self.voxels.iter()
    }

    /// Total number of voxels.
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Whether the grid has no voxels.
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Get counts: (total, active, occupied)
    pub fn occupancy_counts(&self) -> (usize, usize, usize) {
        let mut active = 0usize;
        let mut occupied = 0usize;
        for voxel in &self.voxels {
            if voxel.is_active {
                active += 1;
            }
            if voxel.is_occupied {
                occupied += 1;
            }
        }
        (self.voxels.len(), active, occupied)
    }
}
