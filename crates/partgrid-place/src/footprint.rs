use glam::{IVec2, IVec3};
use partgrid_core::orientation::PartOrientation;

/// Coordinates a part of `size` would occupy when anchored at `reference`.
///
/// `size.x` is the part length and `size.y` its width. Horizontal parts run
/// `size.x` along x and `size.y` along z. Vertical parts swap which extent
/// bounds which loop but keep the same `(x, z)` offsets, so the result is not
/// a rotation of the horizontal footprint. Output is x-major, z-minor, and
/// element 0 is always `reference`. The y axis is never offset.
pub fn compute_footprint(orientation: PartOrientation, reference: IVec3, size: IVec2) -> Vec<IVec3> {
    let (outer, inner) = match orientation {
        PartOrientation::Horizontal => (size.x, size.y),
        PartOrientation::Vertical => (size.y, size.x),
    };

    let capacity = (outer.max(0) as usize)
        .checked_mul(inner.max(0) as usize)
        .unwrap_or(0);
    let mut footprint = Vec::with_capacity(capacity);
    for dx in 0..outer {
        for dz in 0..inner {
            footprint.push(reference + IVec3::new(dx, 0, dz));
        }
    }
    footprint
}

/// A sampled orientation and anchor together with the footprint they produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub orientation: PartOrientation,
    pub reference: IVec3,
    pub footprint: Vec<IVec3>,
}

impl Candidate {
    pub fn new(orientation: PartOrientation, reference: IVec3, size: IVec2) -> Self {
        Self {
            orientation,
            reference,
            footprint: compute_footprint(orientation, reference, size),
        }
    }
}
