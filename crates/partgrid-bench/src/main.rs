use std::path::PathBuf;
use std::process;

use glam::IVec3;
use partgrid_bench::report;
use partgrid_bench::runner::{self, RunConfig};
use partgrid_core::config::PlacementConfig;
use partgrid_persist::{save_layout, snapshot};

fn usage() {
    eprintln!("Usage: place-runner [OPTIONS]");
    eprintln!("  --size <x,y,z>       Grid extent (default: 20,4,20)");
    eprintln!("  --parts <n>          Parts to place (default: 4)");
    eprintln!("  --seed <n>           Sampler seed (overrides config)");
    eprintln!("  --config <path>      Placement config RON file");
    eprintln!("  --output <path>      Write JSON report");
    eprintln!("  --layout <path>      Write RON layout of placed parts");
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    process::exit(1);
}

fn parse_size(value: &str) -> Option<IVec3> {
    let axes: Option<Vec<i32>> = value.split(',').map(|v| v.trim().parse().ok()).collect();
    match axes?.as_slice() {
        [x, y, z] => Some(IVec3::new(*x, *y, *z)),
        _ => None,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut grid_size = IVec3::new(20, 4, 20);
    let mut part_count = 4usize;
    let mut seed: Option<u64> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut layout_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        if matches!(flag, "--help" | "-h") {
            usage();
            process::exit(0);
        }
        i += 1;
        let Some(value) = args.get(i) else {
            fail(&format!("Missing value for {flag}"));
        };
        match flag {
            "--size" => {
                grid_size = parse_size(value)
                    .unwrap_or_else(|| fail(&format!("invalid --size value: {value}")));
            }
            "--parts" => {
                part_count = value
                    .parse()
                    .unwrap_or_else(|_| fail(&format!("invalid --parts value: {value}")));
            }
            "--seed" => {
                seed = Some(
                    value
                        .parse()
                        .unwrap_or_else(|_| fail(&format!("invalid --seed value: {value}"))),
                );
            }
            "--config" => config_path = Some(PathBuf::from(value)),
            "--output" => output_path = Some(PathBuf::from(value)),
            "--layout" => layout_path = Some(PathBuf::from(value)),
            other => {
                usage();
                fail(&format!("Unknown argument: {other}"));
            }
        }
        i += 1;
    }

    let mut placement = match &config_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .unwrap_or_else(|e| fail(&format!("failed to read {}: {e}", path.display())));
            PlacementConfig::load_from_str(&text).unwrap_or_else(|e| fail(&e.to_string()))
        }
        None => PlacementConfig::default(),
    };
    if let Some(seed) = seed {
        placement.seed = seed;
    }

    let outcome = runner::run(&RunConfig {
        grid_size,
        part_count,
        placement,
    })
    .unwrap_or_else(|e| fail(&e.to_string()));

    println!("\n## Placement Results\n");
    println!("{}", report::format_markdown(&outcome.report));
    print!("{}", report::format_summary(&outcome.report));

    if let Some(ref path) = output_path {
        match report::save_report(path, &outcome.report) {
            Ok(()) => log::info!("Saved report to {}", path.display()),
            Err(e) => fail(&format!("failed to save report: {e}")),
        }
    }

    if let Some(ref path) = layout_path {
        let layout = snapshot(&outcome.registry, &outcome.grid);
        let written = save_layout(&layout)
            .map_err(|e| e.to_string())
            .and_then(|text| std::fs::write(path, text).map_err(|e| e.to_string()));
        match written {
            Ok(()) => log::info!("Saved layout to {}", path.display()),
            Err(e) => fail(&format!("failed to save layout: {e}")),
        }
    }

    if let Some(e) = outcome.error {
        eprintln!("ERROR: {e}");
        process::exit(1);
    }

    log::info!("Placement complete.");
}
