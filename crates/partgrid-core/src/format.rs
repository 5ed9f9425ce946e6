//! Serialized coordinate lists: `x_y_z` entries joined by `;`.
//!
//! Example: `"2_0_3;3_0_3;4_0_3"`. This string is the only bit-exact
//! persistence boundary for a part's occupied voxels.

use glam::IVec3;

use crate::constants::{AXIS_SEPARATOR, ENTRY_SEPARATOR};
use crate::error::FormatError;

/// Parse a serialized coordinate list. Every entry must hold exactly three integers.
pub fn parse_coordinates(input: &str) -> Result<Vec<IVec3>, FormatError> {
    input.split(ENTRY_SEPARATOR).map(parse_coordinate).collect()
}

/// Parse one `x_y_z` entry.
pub fn parse_coordinate(entry: &str) -> Result<IVec3, FormatError> {
    let malformed = |reason: String| FormatError::MalformedCoordinate {
        entry: entry.to_string(),
        reason,
    };

    let axes: Vec<&str> = entry.split(AXIS_SEPARATOR).collect();
    if axes.len() != 3 {
        return Err(malformed(format!("expected 3 values, found {}", axes.len())));
    }

    let mut values = [0i32; 3];
    for (value, axis) in values.iter_mut().zip(&axes) {
        *value = axis
            .trim()
            .parse()
            .map_err(|e| malformed(format!("'{axis}': {e}")))?;
    }

    Ok(IVec3::from_array(values))
}

/// Encode coordinates in the serialized list format. Inverse of `parse_coordinates`.
pub fn encode_coordinates(coords: &[IVec3]) -> String {
    let mut out = String::new();
    for (i, c) in coords.iter().enumerate() {
        if i > 0 {
            out.push(ENTRY_SEPARATOR);
        }
        out.push_str(&format!("{}{AXIS_SEPARATOR}{}{AXIS_SEPARATOR}{}", c.x, c.y, c.z));
    }
    out
}
