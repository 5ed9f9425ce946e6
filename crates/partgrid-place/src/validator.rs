use glam::IVec3;
use partgrid_grid::VoxelGrid;

use crate::error::Rejection;

/// Check that every coordinate of `footprint` is inside the grid, active and unoccupied.
/// Reports the first failing coordinate in footprint order.
pub fn check_footprint(footprint: &[IVec3], grid: &VoxelGrid) -> Result<(), Rejection> {
    let max = grid.size() - IVec3::ONE;
    for &coord in footprint {
        if coord.cmpgt(max).any() || coord.cmplt(IVec3::ZERO).any() {
            return Err(Rejection::OutOfBounds(coord));
        }
        let voxel = grid.voxel_at(coord).ok_or(Rejection::OutOfBounds(coord))?;
        if voxel.is_occupied {
            return Err(Rejection::Occupied(coord));
        }
        if !voxel.is_active {
            return Err(Rejection::Inactive(coord));
        }
    }
    Ok(())
}

/// Boolean form of `check_footprint`.
pub fn is_placeable(footprint: &[IVec3], grid: &VoxelGrid) -> bool {
    check_footprint(footprint, grid).is_ok()
}
