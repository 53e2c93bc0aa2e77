use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use granule_bench::report;
use granule_bench::runner::BenchmarkRunner;
use granule_bench::scenes::Scene;
use granule_core::config::SimConfig;
use granule_core::material::MaterialTable;
use granule_rules::{defaults, loader, validator};
use granule_sim::ElementTable;

const DEFAULT_TICKS: u32 = 120;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut scene_names: Vec<String> = Vec::new();
    let mut config_path: Option<PathBuf> = None;
    let mut material_paths: Vec<PathBuf> = Vec::new();
    let mut seed: Option<u64> = None;
    let mut baseline_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut regression_threshold = 10.0f64;
    let mut tick_count = DEFAULT_TICKS;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--scene" => scene_names.push(value(&args, &mut i, flag).to_string()),
            "--config" => config_path = Some(PathBuf::from(value(&args, &mut i, flag))),
            "--materials" => material_paths.push(PathBuf::from(value(&args, &mut i, flag))),
            "--seed" => seed = Some(parse(&args, &mut i, flag)),
            "--ticks" => tick_count = parse(&args, &mut i, flag),
            "--baseline" => baseline_path = Some(PathBuf::from(value(&args, &mut i, flag))),
            "--output" => output_path = Some(PathBuf::from(value(&args, &mut i, flag))),
            "--regression-threshold" => regression_threshold = parse(&args, &mut i, flag),
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = load_config(config_path.as_deref());
    if let Some(seed) = seed {
        config.seed = seed;
    }
    let elements = load_elements(&material_paths);

    let scenes: Vec<Scene> = if scene_names.is_empty() {
        Scene::ALL.to_vec()
    } else {
        scene_names
            .iter()
            .map(|name| {
                Scene::from_name(name).unwrap_or_else(|| {
                    eprintln!("Unknown scene '{name}'");
                    process::exit(1);
                })
            })
            .collect()
    };

    let runner = BenchmarkRunner::new(config, elements, tick_count);
    let results: Vec<_> = scenes.into_iter().map(|s| runner.run_scene(s)).collect();

    println!("\n## Simulation Results\n");
    println!("{}", report::format_markdown(&results));
    println!("## Final Tallies\n");
    println!("{}", report::format_counts(&results));

    if let Some(ref path) = output_path {
        let baseline = report::Baseline {
            timestamp: run_timestamp(),
            results: results.clone(),
        };
        if let Err(e) = report::save_baseline(path, &baseline) {
            log::error!("Failed to save baseline to {}: {e}", path.display());
            process::exit(1);
        }
        log::info!("Saved baseline to {}", path.display());
    }

    if let Some(ref path) = baseline_path {
        if let Some(baseline) = report::load_baseline(path) {
            let regressions = report::compare(&results, &baseline, regression_threshold);
            println!(
                "{}",
                report::format_comparison(&regressions, regression_threshold)
            );
            if !regressions.is_empty() {
                eprintln!(
                    "ERROR: {} regressions detected, exiting with code 1",
                    regressions.len()
                );
                process::exit(1);
            }
        } else {
            log::warn!("Baseline file not found: {}", path.display());
        }
    }

    log::info!("Run complete.");
}

fn print_usage() {
    eprintln!("Usage: granule-run [OPTIONS]");
    eprintln!("  --scene <name>                 pile, rain, forge or boundary (repeatable; default: all)");
    eprintln!("  --ticks <n>                    Ticks per scene (default: {DEFAULT_TICKS})");
    eprintln!("  --seed <n>                     Override the config seed");
    eprintln!("  --config <path>                Simulation config RON");
    eprintln!("  --materials <path>             Material table RON (repeatable; default: built-in)");
    eprintln!("  --output <path>                Save current results as JSON baseline");
    eprintln!("  --baseline <path>              Load baseline JSON for comparison");
    eprintln!("  --regression-threshold <pct>   Regression threshold percentage (default: 10)");
}

/// The argument following `flag`, advancing the cursor past it.
fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> &'a str {
    *i += 1;
    match args.get(*i) {
        Some(v) => v.as_str(),
        None => {
            eprintln!("Missing value for {flag}");
            process::exit(1);
        }
    }
}

fn parse<T: FromStr>(args: &[String], i: &mut usize, flag: &str) -> T {
    let raw = value(args, i, flag);
    raw.parse().unwrap_or_else(|_| {
        eprintln!("invalid {flag} value: {raw}");
        process::exit(1);
    })
}

fn load_config(path: Option<&Path>) -> SimConfig {
    let loaded = match path {
        Some(path) => loader::read_source(path).and_then(|src| loader::load_config_from_str(&src)),
        None => defaults::default_config(),
    };
    loaded.unwrap_or_else(|e| {
        log::error!("{e}");
        process::exit(1);
    })
}

fn load_elements(paths: &[PathBuf]) -> ElementTable {
    let loaded = if paths.is_empty() {
        defaults::default_materials()
    } else {
        paths
            .iter()
            .map(|p| loader::read_source(p))
            .collect::<Result<Vec<String>, _>>()
            .and_then(|sources| {
                let refs: Vec<&str> = sources.iter().map(String::as_str).collect();
                loader::load_all_materials(&refs)
            })
    };
    let materials: MaterialTable = loaded.unwrap_or_else(|e| {
        log::error!("{e}");
        process::exit(1);
    });

    if let Err(errors) = validator::validate_materials(&materials) {
        for e in &errors {
            log::error!("Material validation error: {e}");
        }
        log::error!("Material validation failed with {} errors", errors.len());
        process::exit(1);
    }

    let elements = ElementTable::from_materials(&materials).unwrap_or_else(|e| {
        log::error!("{e}");
        process::exit(1);
    });
    log::info!("Loaded {} elements", elements.len());
    for element in elements.iter() {
        log::debug!(
            "  {} '{}' #{:06x}",
            element.id().0,
            element.name(),
            element.color()
        );
    }
    elements
}

/// Seconds since the epoch, without pulling in a date crate.
fn run_timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("run-{secs}")
}
