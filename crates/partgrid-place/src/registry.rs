use glam::{IVec2, IVec3};
use partgrid_core::orientation::PartOrientation;
use partgrid_core::types::{GridCoord, PartId};
use partgrid_grid::VoxelGrid;

use crate::error::Rejection;
use crate::part::ConfigurablePart;

/// Owns every placed part. Voxels refer back to parts by `PartId`.
#[derive(Debug, Default)]
pub struct PartRegistry {
    parts: Vec<ConfigurablePart>,
}

impl PartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next claimed part will receive.
    pub fn next_id(&self) -> PartId {
        PartId(self.parts.len() as u32)
    }

    /// Claim `occupied` on the grid and register the resulting part.
    ///
    /// Callers validate the footprint first; a coordinate outside the grid
    /// here means that validation was skipped.
    pub(crate) fn claim(
        &mut self,
        grid: &mut VoxelGrid,
        orientation: PartOrientation,
        size: IVec2,
        occupied: Vec<IVec3>,
        height: i32,
    ) -> Result<PartId, Rejection> {
        if let Some(&outside) = occupied.iter().find(|c| !grid.in_bounds(**c)) {
            return Err(Rejection::OutOfBounds(outside));
        }

        let id = self.next_id();
        let voxels = occupied
            .iter()
            .map(|&coord| grid.occupy(coord, id).ok_or(Rejection::OutOfBounds(coord)))
            .collect::<Result<Vec<_>, _>>()?;

        self.parts.push(ConfigurablePart::new(
            id,
            orientation,
            size,
            occupied,
            voxels,
            height,
        ));
        Ok(id)
    }

    pub fn get(&self, id: PartId) -> Option<&ConfigurablePart> {
        self.parts.get(id.index())
    }

    /// Resolve the part owning the voxel at `coord`, if any.
    pub fn owner_of(&self, grid: &VoxelGrid, coord: GridCoord) -> Option<&ConfigurablePart> {
        grid.voxel_at(coord)
            .and_then(|v| v.owner)
            .and_then(|id| self.get(id))
    }

    /// Iterator over all parts in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigurablePart> {
        self.parts.iter()
    }

    /// Parts sharing `orientation`, in placement order.
    pub fn with_orientation(
        &self,
        orientation: PartOrientation,
    ) -> impl Iterator<Item = &ConfigurablePart> {
        self.parts
            .iter()
            .filter(move |p| p.orientation() == orientation)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::compute_footprint;
    use glam::Vec3;

    const PART_SIZE: IVec2 = IVec2::new(6, 2);

    #[test]
    fn test_claim_assigns_sequential_ids() {
        let mut grid = VoxelGrid::new(IVec3::new(10, 2, 10));
        let mut registry = PartRegistry::new();

        let a = registry
            .claim(
                &mut grid,
                PartOrientation::Horizontal,
                PART_SIZE,
                compute_footprint(PartOrientation::Horizontal, IVec3::ZERO, PART_SIZE),
                6,
            )
            .expect("fits");
        let b = registry
            .claim(
                &mut grid,
                PartOrientation::Vertical,
                PART_SIZE,
                compute_footprint(PartOrientation::Vertical, IVec3::new(0, 1, 0), PART_SIZE),
                6,
            )
            .expect("fits");

        assert_eq!(a, PartId(0));
        assert_eq!(b, PartId(1));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.with_orientation(PartOrientation::Vertical).count(), 1);
    }

    #[test]
    fn test_claim_links_voxels() {
        let mut grid = VoxelGrid::new(IVec3::new(10, 2, 10));
        let mut registry = PartRegistry::new();
        let footprint =
            compute_footprint(PartOrientation::Horizontal, IVec3::new(1, 0, 1), PART_SIZE);
        let id = registry
            .claim(&mut grid, PartOrientation::Horizontal, PART_SIZE, footprint.clone(), 6)
            .expect("fits");

        let part = registry.get(id).expect("registered");
        assert_eq!(part.reference(), IVec3::new(1, 0, 1));
        assert_eq!(part.voxel_indices().len(), part.occupied().len());
        assert_eq!(part.center(), Vec3::new(3.5, 0.0, 1.5));
        assert!(!part.is_static());

        for (voxel, coord) in part.voxels(&grid).zip(&footprint) {
            assert_eq!(voxel.coord, *coord);
            assert!(voxel.is_occupied);
            assert_eq!(voxel.owner, Some(id));
        }
        assert_eq!(
            registry.owner_of(&grid, IVec3::new(6, 0, 2)).map(|p| p.id()),
            Some(id)
        );
        assert!(registry.owner_of(&grid, IVec3::new(7, 0, 2)).is_none());
    }

    #[test]
    fn test_claim_outside_grid_mutates_nothing() {
        let mut grid = VoxelGrid::new(IVec3::new(4, 1, 4));
        let mut registry = PartRegistry::new();
        let footprint = compute_footprint(PartOrientation::Horizontal, IVec3::ZERO, PART_SIZE);

        let result = registry.claim(&mut grid, PartOrientation::Horizontal, PART_SIZE, footprint, 6);
        assert_eq!(result, Err(Rejection::OutOfBounds(IVec3::new(4, 0, 0))));
        assert!(registry.is_empty());
        assert_eq!(grid.occupancy_counts().2, 0);
    }
}
