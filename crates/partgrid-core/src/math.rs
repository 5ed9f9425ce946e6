use glam::{IVec3, Vec3};

/// Arithmetic mean of a set of voxel coordinates. Empty input yields the origin.
pub fn centroid(coords: &[IVec3]) -> Vec3 {
    if coords.is_empty() {
        return Vec3::ZERO;
    }
    let sum = coords
        .iter()
        .fold(Vec3::ZERO, |acc, c| acc + c.as_vec3());
    sum / coords.len() as f32
}

/// Linear index of `coord` in an x-fastest grid of `size`. None if outside `[0, size)`.
pub fn linear_index(coord: IVec3, size: IVec3) -> Option<usize> {
    if coord.cmplt(IVec3::ZERO).any() || coord.cmpge(size).any() {
        return None;
    }
    let (x, y, z) = (coord.x as usize, coord.y as usize, coord.z as usize);
    let (sx, sy) = (size.x as usize, size.y as usize);
    Some(x + y * sx + z * sx * sy)
}

/// Inverse of `linear_index` for an index known to be in range.
pub fn coord_from_index(index: usize, size: IVec3) -> IVec3 {
    let sx = size.x as usize;
    let sy = size.y as usize;
    IVec3::new(
        (index % sx) as i32,
        ((index / sx) % sy) as i32,
        (index / (sx * sy)) as i32,
    )
}
