use partgrid_core::config::PlacementConfig;
use partgrid_core::types::PartId;
use partgrid_grid::VoxelGrid;
use partgrid_place::{rebuild_from_strings, PartRegistry};

use crate::error::PersistError;
use crate::format::Layout;

/// Parse a layout from RON text.
pub fn load_layout(ron_str: &str) -> Result<Layout, PersistError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| PersistError::Parse(e.to_string()))
}

/// Rebuild every part of `layout` on `grid`, in record order.
///
/// Aborts at the first record that cannot be rebuilt. Parts restored before
/// the failing record stay on the grid.
pub fn restore(
    layout: &Layout,
    grid: &mut VoxelGrid,
    registry: &mut PartRegistry,
    config: &PlacementConfig,
) -> Result<Vec<PartId>, PersistError> {
    if layout.grid_size() != grid.size() {
        return Err(PersistError::GridSizeMismatch {
            expected: layout.grid_size(),
            actual: grid.size(),
        });
    }

    let mut ids = Vec::with_capacity(layout.parts.len());
    for (index, record) in layout.parts.iter().enumerate() {
        let id = rebuild_from_strings(
            grid,
            registry,
            &record.orientation,
            &record.occupied,
            record.height,
            config,
        )
        .map_err(|source| PersistError::Record { index, source })?;
        ids.push(id);
    }

    log::info!("Restored {} parts from layout", ids.len());
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PartRecord;
    use crate::save::{save_layout, snapshot};
    use glam::IVec3;
    use partgrid_place::{PartPlacer, PlacementError};

    #[test]
    fn test_save_load_roundtrip() {
        let config = PlacementConfig::default();
        let mut grid = VoxelGrid::new(IVec3::new(24, 3, 24));
        let mut registry = PartRegistry::new();
        PartPlacer::new(config.clone())
            .expect("valid config")
            .place_many(&mut grid, &mut registry, 3)
            .expect("roomy grid");

        let text = save_layout(&snapshot(&registry, &grid)).expect("serialize");
        let layout = load_layout(&text).expect("parse");
        assert_eq!(layout.parts.len(), 3);

        let mut fresh_grid = VoxelGrid::new(IVec3::new(24, 3, 24));
        let mut fresh_registry = PartRegistry::new();
        let ids = restore(&layout, &mut fresh_grid, &mut fresh_registry, &config)
            .expect("restore");
        assert_eq!(ids.len(), 3);

        for (original, restored) in registry.iter().zip(fresh_registry.iter()) {
            assert_eq!(original.occupied(), restored.occupied());
            assert_eq!(original.orientation(), restored.orientation());
            assert_eq!(original.center(), restored.center());
        }
        assert_eq!(grid.occupancy_counts(), fresh_grid.occupancy_counts());
    }

    #[test]
    fn test_load_hand_written_layout() {
        let text = r#"(
            grid_size: (10, 10, 10),
            parts: [
                (orientation: "Horizontal", occupied: "2_0_3;3_0_3;4_0_3;2_0_4;3_0_4;4_0_4"),
            ],
        )"#;
        let layout = load_layout(text).expect("parse");
        assert_eq!(layout.parts[0].height, 6);

        let mut grid = VoxelGrid::new(IVec3::new(10, 10, 10));
        let mut registry = PartRegistry::new();
        restore(&layout, &mut grid, &mut registry, &PlacementConfig::default())
            .expect("restore");
        assert_eq!(grid.occupancy_counts().2, 6);
    }

    #[test]
    fn test_grid_size_mismatch_rejected() {
        let layout = Layout {
            grid_size: [5, 5, 5],
            parts: Vec::new(),
        };
        let mut grid = VoxelGrid::new(IVec3::new(6, 5, 5));
        let result = restore(
            &layout,
            &mut grid,
            &mut PartRegistry::new(),
            &PlacementConfig::default(),
        );
        assert!(matches!(result, Err(PersistError::GridSizeMismatch { .. })));
    }

    #[test]
    fn test_bad_record_reports_index() {
        let layout = Layout {
            grid_size: [5, 5, 5],
            parts: vec![
                PartRecord {
                    orientation: "Vertical".into(),
                    occupied: "0_0_0".into(),
                    height: 6,
                },
                PartRecord {
                    orientation: "Sideways".into(),
                    occupied: "1_0_0".into(),
                    height: 6,
                },
            ],
        };
        let mut grid = VoxelGrid::new(IVec3::new(5, 5, 5));
        let mut registry = PartRegistry::new();
        let result = restore(&layout, &mut grid, &mut registry, &PlacementConfig::default());
        assert!(matches!(
            result,
            Err(PersistError::Record {
                index: 1,
                source: PlacementError::Format(_)
            })
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(load_layout("{{"), Err(PersistError::Parse(_))));
    }
}
