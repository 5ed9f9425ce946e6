//! Rebuild parts from already-known voxel coordinates, bypassing the search.

use std::collections::HashSet;

use glam::{IVec2, IVec3};
use partgrid_core::config::PlacementConfig;
use partgrid_core::format::parse_coordinates;
use partgrid_core::orientation::PartOrientation;
use partgrid_core::types::PartId;
use partgrid_grid::VoxelGrid;

use crate::error::{PlacementError, Rejection};
use crate::registry::PartRegistry;
use crate::validator::check_footprint;

/// Rebuild a part from an ordered coordinate list.
///
/// The first coordinate becomes the reference. Every coordinate is checked
/// (in bounds, active, unoccupied, listed once) before any voxel is claimed,
/// so a failed rebuild leaves the grid as it was.
pub fn rebuild_part(
    grid: &mut VoxelGrid,
    registry: &mut PartRegistry,
    orientation: PartOrientation,
    coords: &[IVec3],
    size: IVec2,
    height: i32,
) -> Result<PartId, PlacementError> {
    if coords.is_empty() {
        return Err(PlacementError::EmptyPart);
    }

    let mut seen = HashSet::with_capacity(coords.len());
    if let Some(&repeated) = coords.iter().find(|c| !seen.insert(**c)) {
        return Err(Rejection::Occupied(repeated).into());
    }
    check_footprint(coords, grid)?;

    let id = registry.claim(grid, orientation, size, coords.to_vec(), height)?;
    log::debug!(
        "Rebuilt {orientation} part {id} from {} coordinates",
        coords.len()
    );
    Ok(id)
}

/// Parse an orientation name and a `x_y_z;...` list, then rebuild the part.
pub fn rebuild_from_strings(
    grid: &mut VoxelGrid,
    registry: &mut PartRegistry,
    orientation_name: &str,
    coordinates: &str,
    height: i32,
    config: &PlacementConfig,
) -> Result<PartId, PlacementError> {
    let orientation = PartOrientation::from_name(orientation_name)?;
    let coords = parse_coordinates(coordinates)?;
    rebuild_part(grid, registry, orientation, &coords, config.size(), height)
}
