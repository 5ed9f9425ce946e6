use partgrid_grid::VoxelGrid;
use partgrid_place::PartRegistry;

use crate::error::PersistError;
use crate::format::{Layout, PartRecord};

/// Capture every registered part, in placement order.
pub fn snapshot(registry: &PartRegistry, grid: &VoxelGrid) -> Layout {
    let parts = registry
        .iter()
        .map(|part| PartRecord {
            orientation: part.orientation().name().to_string(),
            occupied: part.encoded_coordinates(),
            height: part.height(),
        })
        .collect();

    Layout {
        grid_size: grid.size().to_array(),
        parts,
    }
}

/// Serialize a layout to pretty RON.
pub fn save_layout(layout: &Layout) -> Result<String, PersistError> {
    ron::ser::to_string_pretty(layout, ron::ser::PrettyConfig::default())
        .map_err(|e| PersistError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{IVec2, IVec3};
    use partgrid_core::orientation::PartOrientation;
    use partgrid_place::rebuild_part;

    #[test]
    fn test_snapshot_records_parts_in_order() {
        let mut grid = VoxelGrid::new(IVec3::new(8, 2, 8));
        let mut registry = PartRegistry::new();
        let size = IVec2::new(6, 2);
        rebuild_part(
            &mut grid,
            &mut registry,
            PartOrientation::Vertical,
            &[IVec3::new(0, 0, 0), IVec3::new(0, 0, 1)],
            size,
            4,
        )
        .expect("free voxels");
        rebuild_part(
            &mut grid,
            &mut registry,
            PartOrientation::Horizontal,
            &[IVec3::new(3, 1, 3)],
            size,
            6,
        )
        .expect("free voxel");

        let layout = snapshot(&registry, &grid);
        assert_eq!(layout.grid_size, [8, 2, 8]);
        assert_eq!(
            layout.parts,
            vec![
                PartRecord {
                    orientation: "Vertical".into(),
                    occupied: "0_0_0;0_0_1".into(),
                    height: 4,
                },
                PartRecord {
                    orientation: "Horizontal".into(),
                    occupied: "3_1_3".into(),
                    height: 6,
                },
            ]
        );
    }

    #[test]
    fn test_save_empty_layout() {
        let grid = VoxelGrid::new(IVec3::new(3, 3, 3));
        let text = save_layout(&snapshot(&PartRegistry::new(), &grid)).expect("serialize");
        assert!(text.contains("grid_size"));
    }
}
