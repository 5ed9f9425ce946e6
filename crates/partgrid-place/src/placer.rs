use glam::{IVec2, IVec3};
use partgrid_core::config::PlacementConfig;
use partgrid_core::orientation::PartOrientation;
use partgrid_core::types::PartId;
use partgrid_grid::VoxelGrid;

use crate::error::{PlacementError, Rejection};
use crate::footprint::Candidate;
use crate::registry::PartRegistry;
use crate::sampler::CandidateSampler;
use crate::spacing::is_far_enough;
use crate::validator::check_footprint;

/// Places configurable parts by rejection sampling.
///
/// Each attempt draws an orientation and anchor, builds the footprint, checks
/// spacing against same-orientation parts, then checks bounds and voxel
/// availability. The first candidate passing both is committed to the grid.
/// Placements are strictly sequential: a part's voxels are claimed before the
/// next search starts, so later spacing checks see it.
pub struct PartPlacer {
    config: PlacementConfig,
    sampler: CandidateSampler,
    /// Candidates drawn across all `place` calls, failed searches included.
    attempts_total: u64,
}

impl PartPlacer {
    /// Validate `config` and seed the sampler.
    pub fn new(config: PlacementConfig) -> Result<Self, PlacementError> {
        config.validate()?;
        let sampler = CandidateSampler::new(config.seed);
        Ok(Self {
            config,
            sampler,
            attempts_total: 0,
        })
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Candidates drawn by all `place` calls so far, including exhausted ones.
    pub fn attempts_total(&self) -> u64 {
        self.attempts_total
    }

    fn part_size(&self) -> IVec2 {
        self.config.size()
    }

    /// Search for a valid placement and commit it.
    ///
    /// Gives up after `max_attempts` candidates with `PlacementError::Exhausted`;
    /// the grid and registry are untouched in that case.
    ///
    /// The sampler is seeded once in `new`, so the candidates drawn for a part
    /// depend on how many earlier searches consumed. Set `reseed_per_part` to
    /// restart from `seed` on every call instead.
    pub fn place(
        &mut self,
        grid: &mut VoxelGrid,
        registry: &mut PartRegistry,
    ) -> Result<PartId, PlacementError> {
        if self.config.reseed_per_part {
            self.sampler = CandidateSampler::new(self.config.seed);
        }
        let max_attempts = self.config.max_attempts;
        let mut too_close = 0u32;
        let mut blocked = 0u32;

        for attempt in 1..=max_attempts {
            let (orientation, reference) = self.sampler.sample(grid.size())?;
            let candidate = Candidate::new(orientation, reference, self.part_size());

            match self.evaluate(&candidate, grid, registry) {
                Ok(()) => {
                    let id = self.commit(candidate, grid, registry)?;
                    self.attempts_total += attempt as u64;
                    log::debug!(
                        "Part {id} found after {attempt} attempts ({too_close} too close, {blocked} blocked)"
                    );
                    return Ok(id);
                }
                Err(Rejection::TooClose) => too_close += 1,
                Err(_) => blocked += 1,
            }
        }

        self.attempts_total += max_attempts as u64;
        log::warn!(
            "Placement exhausted after {max_attempts} attempts ({too_close} too close, {blocked} blocked)"
        );
        Err(PlacementError::Exhausted {
            attempts: max_attempts,
        })
    }

    /// Place `count` parts one after another. Stops at the first failure.
    pub fn place_many(
        &mut self,
        grid: &mut VoxelGrid,
        registry: &mut PartRegistry,
        count: usize,
    ) -> Result<Vec<PartId>, PlacementError> {
        let mut placed = Vec::with_capacity(count);
        for _ in 0..count {
            placed.push(self.place(grid, registry)?);
        }
        Ok(placed)
    }

    /// Try exactly one candidate at a chosen orientation and anchor.
    pub fn place_at(
        &mut self,
        grid: &mut VoxelGrid,
        registry: &mut PartRegistry,
        orientation: PartOrientation,
        reference: IVec3,
    ) -> Result<PartId, PlacementError> {
        let candidate = Candidate::new(orientation, reference, self.part_size());
        self.evaluate(&candidate, grid, registry)?;
        self.commit(candidate, grid, registry)
    }

    /// Spacing first, then bounds and availability.
    fn evaluate(
        &self,
        candidate: &Candidate,
        grid: &VoxelGrid,
        registry: &PartRegistry,
    ) -> Result<(), Rejection> {
        let same_orientation = registry.with_orientation(candidate.orientation);
        if !is_far_enough(candidate, same_orientation, self.config.minimum_distance) {
            return Err(Rejection::TooClose);
        }
        check_footprint(&candidate.footprint, grid)
    }

    fn commit(
        &self,
        candidate: Candidate,
        grid: &mut VoxelGrid,
        registry: &mut PartRegistry,
    ) -> Result<PartId, PlacementError> {
        let id = registry.claim(
            grid,
            candidate.orientation,
            self.part_size(),
            candidate.footprint,
            self.config.height,
        )?;
        log::info!(
            "Placed {} part {id} at {}",
            candidate.orientation,
            candidate.reference
        );
        Ok(id)
    }
}
