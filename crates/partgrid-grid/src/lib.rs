pub mod grid;
pub mod voxel;

pub use grid::VoxelGrid;
pub use voxel::Voxel;
