use partgrid_core::orientation::PartOrientation;

use crate::footprint::Candidate;
use crate::part::ConfigurablePart;

/// Check that `candidate` keeps `minimum_distance` from every existing part
/// with the same orientation.
///
/// Horizontal parts conflict when they share an x column and their reference
/// z values are within `minimum_distance` (inclusive). Vertical parts use the
/// same rule with z rows and reference x values. Parts with different
/// orientations are never compared.
pub fn is_far_enough<'a>(
    candidate: &Candidate,
    existing: impl IntoIterator<Item = &'a ConfigurablePart>,
    minimum_distance: i32,
) -> bool {
    existing
        .into_iter()
        .filter(|part| part.orientation() == candidate.orientation)
        .all(|part| !conflicts(candidate, part, minimum_distance))
}

fn conflicts(candidate: &Candidate, part: &ConfigurablePart, minimum_distance: i32) -> bool {
    let (shares_line, gap) = match candidate.orientation {
        PartOrientation::Horizontal => (
            candidate
                .footprint
                .iter()
                .any(|c| part.occupied().iter().any(|e| e.x == c.x)),
            (candidate.reference.z - part.reference().z).abs(),
        ),
        PartOrientation::Vertical => (
            candidate
                .footprint
                .iter()
                .any(|c| part.occupied().iter().any(|e| e.z == c.z)),
            (candidate.reference.x - part.reference().x).abs(),
        ),
    };
    shares_line && gap <= minimum_distance
}
