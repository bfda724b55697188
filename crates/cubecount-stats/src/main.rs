use std::path::PathBuf;
use std::process;

use cubecount_core::config::GeneratorConfig;
use cubecount_stats::{report, sampler};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut samples = 10_000u32;
    let mut seed = 0x5eed_cafe_u64;
    let mut output_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--samples" => {
                i += 1;
                samples = parse_value(&args, i, "--samples");
            }
            "--seed" => {
                i += 1;
                seed = parse_value(&args, i, "--seed");
            }
            "--output" => {
                i += 1;
                output_path = Some(PathBuf::from(value(&args, i, "--output")));
            }
            "--help" | "-h" => {
                eprintln!("Usage: structure-stats [OPTIONS]");
                eprintln!("  --samples <n>     Structures to generate (default: 10000)");
                eprintln!("  --seed <n>        Random seed (default: 1592642302)");
                eprintln!("  --output <path>   Save statistics as JSON");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = GeneratorConfig::default();
    log::info!(
        "Sampling {} structures (base {}..={}, seed {})...",
        samples,
        config.base_min,
        config.base_max,
        seed
    );
    let stats = sampler::sample(&config, samples, seed);

    println!("\n## Structure Statistics\n");
    println!("{}", report::format_markdown(&stats));

    if let Some(ref path) = output_path {
        if let Err(e) = report::save_report(path, &stats) {
            eprintln!("ERROR: failed to save report to {}: {e}", path.display());
            process::exit(1);
        }
        log::info!("Saved report to {}", path.display());
    }

    if !stats.violations.is_empty() {
        eprintln!(
            "ERROR: {} structures violate generator invariants, exiting with code 1",
            stats.violations.len()
        );
        process::exit(1);
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(v) => v,
        None => {
            eprintln!("Missing value for {flag}");
            process::exit(1);
        }
    }
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let raw = value(args, i, flag);
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Invalid {flag} value: {raw}");
            process::exit(1);
        }
    }
}
