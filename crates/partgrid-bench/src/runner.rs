use std::time::Instant;

use glam::IVec3;
use partgrid_core::config::PlacementConfig;
use partgrid_grid::VoxelGrid;
use partgrid_place::{PartPlacer, PartRegistry, PlacementError};

use crate::report::{PartSummary, PlacementReport};

/// One batch placement request.
pub struct RunConfig {
    pub grid_size: IVec3,
    pub part_count: usize,
    pub placement: PlacementConfig,
}

/// Grid, registry and report produced by a run.
pub struct RunOutcome {
    pub grid: VoxelGrid,
    pub registry: PartRegistry,
    pub report: PlacementReport,
    /// Set when the batch stopped before `part_count` parts were placed.
    pub error: Option<PlacementError>,
}

/// Place `part_count` parts on a fresh, fully active grid.
pub fn run(config: &RunConfig) -> Result<RunOutcome, PlacementError> {
    let mut placer = PartPlacer::new(config.placement.clone())?;
    let mut grid = VoxelGrid::new(config.grid_size);
    let mut registry = PartRegistry::new();

    log::info!(
        "Placing {} parts on grid {} (seed {})",
        config.part_count,
        config.grid_size,
        config.placement.seed
    );

    let start = Instant::now();
    let mut error = None;
    for _ in 0..config.part_count {
        if let Err(e) = placer.place(&mut grid, &mut registry) {
            error = Some(e);
            break;
        }
    }
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let (_, _, occupied_voxels) = grid.occupancy_counts();
    let report = PlacementReport {
        grid_size: config.grid_size.to_array(),
        seed: config.placement.seed,
        requested: config.part_count,
        placed: registry.len(),
        attempts: placer.attempts_total(),
        occupied_voxels,
        elapsed_ms,
        parts: registry.iter().map(PartSummary::from_part).collect(),
    };

    Ok(RunOutcome {
        grid,
        registry,
        report,
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_places_requested_parts() {
        let outcome = run(&RunConfig {
            grid_size: IVec3::new(24, 3, 24),
            part_count: 3,
            placement: PlacementConfig::default(),
        })
        .expect("valid config");

        assert!(outcome.error.is_none());
        assert_eq!(outcome.report.placed, 3);
        assert_eq!(outcome.report.occupied_voxels, 36);
        assert_eq!(outcome.report.parts.len(), outcome.registry.len());
        assert!(outcome.report.attempts >= 3);
    }

    #[test]
    fn test_run_reports_failure() {
        let outcome = run(&RunConfig {
            grid_size: IVec3::new(4, 2, 4),
            part_count: 1,
            placement: PlacementConfig {
                max_attempts: 20,
                ..Default::default()
            },
        })
        .expect("valid config");

        // A 6x2 part cannot fit on a 4x4 floor
        assert!(matches!(
            outcome.error,
            Some(PlacementError::Exhausted { attempts: 20 })
        ));
        assert_eq!(outcome.report.placed, 0);
        assert_eq!(outcome.report.attempts, 20);
        assert_eq!(outcome.grid.occupancy_counts().2, 0);
    }
}
