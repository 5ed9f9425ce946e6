use std::path::Path;

use partgrid_place::ConfigurablePart;

/// Summary of one placed part.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PartSummary {
    pub id: u32,
    pub orientation: String,
    pub reference: [i32; 3],
    pub center: [f32; 3],
    pub occupied: String,
}

impl PartSummary {
    pub fn from_part(part: &ConfigurablePart) -> Self {
        Self {
            id: part.id().0,
            orientation: part.orientation().name().to_string(),
            reference: part.reference().to_array(),
            center: part.center().to_array(),
            occupied: part.encoded_coordinates(),
        }
    }
}

/// Result of one batch placement run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PlacementReport {
    pub grid_size: [i32; 3],
    pub seed: u64,
    pub requested: usize,
    pub placed: usize,
    pub attempts: u64,
    pub occupied_voxels: usize,
    pub elapsed_ms: f64,
    pub parts: Vec<PartSummary>,
}

/// Save a report to a JSON file.
pub fn save_report(path: &Path, report: &PlacementReport) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Format placed parts as a markdown table.
pub fn format_markdown(report: &PlacementReport) -> String {
    let mut out = String::new();
    out.push_str("| Part | Orientation | Reference | Center |\n");
    out.push_str("|------|-------------|-----------|--------|\n");

    for p in &report.parts {
        out.push_str(&format!(
            "| {} | {} | ({}, {}, {}) | ({:.1}, {:.1}, {:.1}) |\n",
            p.id,
            p.orientation,
            p.reference[0],
            p.reference[1],
            p.reference[2],
            p.center[0],
            p.center[1],
            p.center[2],
        ));
    }

    out
}

/// One-paragraph summary of a run.
pub fn format_summary(report: &PlacementReport) -> String {
    format!(
        "Placed {}/{} parts on {}x{}x{} grid (seed {}): {} attempts, {} voxels occupied, {:.2} ms\n",
        report.placed,
        report.requested,
        report.grid_size[0],
        report.grid_size[1],
        report.grid_size[2],
        report.seed,
        report.attempts,
        report.occupied_voxels,
        report.elapsed_ms,
    )
}
