// Scenario Runner - Load and execute scenario YAML files
//
// Usage:
//   cargo run --bin scenario_runner scenarios/baseline.yaml
//   cargo run --bin scenario_runner scenarios/  (runs all .yaml files in directory)
//   cargo run --bin scenario_runner scenarios/baseline.yaml --seed 0x1234...

mod social;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use jin_gen::jg_random::parse_seed_hex;
use log::{error, LevelFilter};
use simple_logger::SimpleLogger;
use social::{SocialRunner, SocialSimConfig};

/// Scenario file format
#[derive(Debug, serde::Deserialize)]
struct ScenarioFile {
    /// Scenario metadata
    #[serde(default)]
    meta: ScenarioMeta,

    /// Run configuration; omitted keys keep their defaults
    #[serde(default)]
    config: SocialSimConfig,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ScenarioMeta {
    name: Option<String>,
    description: Option<String>,
    hypothesis: Option<String>,
}

fn main() {
    if let Err(e) = SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
    {
        eprintln!("logger: {}", e);
    }

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 && !(args.len() == 4 && args[2] == "--seed") {
        eprintln!("Usage: {} <scenario.yaml | directory/> [--seed SEED_HEX]", args[0]);
        eprintln!("\nExamples:");
        eprintln!("  {} scenarios/baseline.yaml", args[0]);
        eprintln!("  {} scenarios/", args[0]);
        eprintln!("  {} scenarios/baseline.yaml --seed 0x123456...", args[0]);
        process::exit(1);
    }

    let path = Path::new(&args[1]);

    let seed = if args.len() == 4 {
        match parse_seed_hex(&args[3]) {
            Ok(seed) => Some(seed),
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    } else {
        None
    };

    let ok = if path.is_file() {
        run_scenario_file(path, seed)
    } else if path.is_dir() {
        run_scenario_directory(path, seed)
    } else {
        eprintln!("Error: Path does not exist: {}", path.display());
        false
    };

    if !ok {
        process::exit(1);
    }
}

fn scenario_files(dir: &Path) -> Vec<PathBuf> {
    let mut scenarios = Vec::new();

    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            let ext = path.extension().and_then(|s| s.to_str());
            if ext == Some("yaml") || ext == Some("yml") {
                scenarios.push(path);
            }
        }
    }

    scenarios.sort();
    scenarios
}

fn run_scenario_directory(dir: &Path, seed: Option<[u8; 32]>) -> bool {
    let scenarios = scenario_files(dir);

    if scenarios.is_empty() {
        eprintln!("No .yaml files found in {}", dir.display());
        return false;
    }

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  SCENARIO RUNNER - Multiple Scenarios                 ║");
    println!("╚════════════════════════════════════════════════════════╝\n");
    println!("Found {} scenario(s) to run\n", scenarios.len());

    let mut all_ok = true;
    for (i, scenario_path) in scenarios.iter().enumerate() {
        println!("\n{}/{} Running: {}\n", i + 1, scenarios.len(), scenario_path.display());
        all_ok &= run_scenario_file(scenario_path, seed);
    }

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  All scenarios complete!                               ║");
    println!("╚════════════════════════════════════════════════════════╝\n");
    all_ok
}

fn load_scenario(path: &Path) -> Result<ScenarioFile, String> {
    let yaml_content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    serde_yaml::from_str(&yaml_content)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

fn run_scenario_file(path: &Path, seed: Option<[u8; 32]>) -> bool {
    println!("Loading scenario from: {}", path.display());

    let scenario = match load_scenario(path) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("{}", e);
            return false;
        }
    };

    println!("\n╔════════════════════════════════════════════════════════╗");
    let name = scenario.meta.name.clone().unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    println!("║  {}", name);
    println!("╚════════════════════════════════════════════════════════╝\n");

    if let Some(ref desc) = scenario.meta.description {
        println!("{}\n", desc);
    }

    if let Some(ref hypothesis) = scenario.meta.hypothesis {
        println!("Hypothesis:");
        println!("  {}\n", hypothesis);
    }

    let mut config = scenario.config;
    config.seed = seed;

    println!("Configuration:");
    println!("  {}", config.summary());
    println!("  Sample interval: {}", config.metrics.sample_interval);
    println!("\nStarting simulation...\n");

    match SocialRunner::new(config).run() {
        Ok(result) => {
            result.print_summary();
            println!("\n✓ Scenario complete!\n");
            result.violation.is_none()
        }
        Err(e) => {
            error!("{}: {}", path.display(), e);
            false
        }
    }
}
