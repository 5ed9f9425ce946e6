use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// How a configurable part lays its footprint out on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PartOrientation {
    Horizontal = 0,
    Vertical = 1,
}

/// Both orientations, indexed by their discriminant.
pub const ALL_ORIENTATIONS: [PartOrientation; 2] =
    [PartOrientation::Horizontal, PartOrientation::Vertical];

impl PartOrientation {
    /// Parse a serialized orientation name. Case-sensitive; unknown names fail.
    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        match name {
            "Horizontal" => Ok(PartOrientation::Horizontal),
            "Vertical" => Ok(PartOrientation::Vertical),
            other => Err(FormatError::UnknownOrientation(other.to_string())),
        }
    }

    /// Name used in serialized parts. Inverse of `from_name`.
    pub fn name(self) -> &'static str {
        match self {
            PartOrientation::Horizontal => "Horizontal",
            PartOrientation::Vertical => "Vertical",
        }
    }
}

impl std::fmt::Display for PartOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
