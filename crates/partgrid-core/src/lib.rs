pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod math;
pub mod orientation;
pub mod types;

pub use config::PlacementConfig;
pub use error::{ConfigError, FormatError};
pub use orientation::PartOrientation;
pub use types::{GridCoord, PartId};
