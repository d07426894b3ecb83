//! Headless balance simulator.
//!
//! Plays seeded sessions with the autopilot and reports how far it got.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                   # 100 runs, random seeds
//!   cargo run --bin simulate -- -n 20 -s 42    # 20 reproducible runs
//!   cargo run --bin simulate -- --json         # Machine-readable output

use jump_runner::core::config::Tuning;
use jump_runner::sim::autopilot::{play_session, SessionSummary};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::env;
use std::path::PathBuf;

struct SimArgs {
    runs: u32,
    seed: Option<u64>,
    max_ticks: u64,
    config: Option<PathBuf>,
    json: bool,
}

impl Default for SimArgs {
    fn default() -> Self {
        Self {
            runs: 100,
            seed: None,
            max_ticks: 20_000,
            config: None,
            json: false,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    tuning: &'a Tuning,
    runs: &'a [SessionSummary],
    mean_score: f64,
    best_score: u64,
    mean_ticks: f64,
    mean_passed: f64,
    collisions: usize,
}

impl<'a> Report<'a> {
    fn new(tuning: &'a Tuning, runs: &'a [SessionSummary]) -> Self {
        let n = runs.len().max(1) as f64;
        Self {
            tuning,
            runs,
            mean_score: runs.iter().map(|r| r.score as f64).sum::<f64>() / n,
            best_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            mean_ticks: runs.iter().map(|r| r.ticks as f64).sum::<f64>() / n,
            mean_passed: runs.iter().map(|r| r.obstacles_passed as f64).sum::<f64>() / n,
            collisions: runs.iter().filter(|r| r.collided).count(),
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let sim = parse_args(&args);

    let tuning = match Tuning::resolve(sim.config.as_deref()) {
        Ok((tuning, _)) => tuning,
        Err(e) => {
            eprintln!("Failed to load tuning: {}", e);
            std::process::exit(1);
        }
    };

    let base_seed = sim.seed.unwrap_or_else(rand::random);
    let summaries: Vec<SessionSummary> = (0..sim.runs as u64)
        .map(|i| {
            let seed = base_seed.wrapping_add(i);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            play_session(seed, &tuning, sim.max_ticks, &mut rng)
        })
        .collect();
    let report = Report::new(&tuning, &summaries);

    if sim.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("╔═══════════════════════════════════════════════╗");
    println!("║           JUMP RUNNER SIMULATOR               ║");
    println!("╚═══════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:       {}", sim.runs);
    println!("  Base seed:  {}", base_seed);
    println!("  Max ticks:  {}", sim.max_ticks);
    println!();

    for run in &summaries {
        println!(
            "  seed {:>20}  ticks {:>6}  score {:>6}  passed {:>4}  speed {:>5.2}  {}",
            run.seed,
            run.ticks,
            run.score,
            run.obstacles_passed,
            run.final_speed,
            if run.collided { "crashed" } else { "survived" }
        );
    }

    println!();
    println!("Summary:");
    println!("  Mean score:   {:.1}", report.mean_score);
    println!("  Best score:   {}", report.best_score);
    println!("  Mean ticks:   {:.1}", report.mean_ticks);
    println!("  Mean passed:  {:.1}", report.mean_passed);
    println!("  Crashed:      {}/{}", report.collisions, summaries.len());
}

fn parse_args(args: &[String]) -> SimArgs {
    let mut sim = SimArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    sim.runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    sim.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    sim.max_ticks = args[i + 1].parse().unwrap_or(20_000);
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    sim.config = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--json" => {
                sim.json = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    sim
}

fn print_help() {
    println!("Jump Runner Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of sessions (default: 100)");
    println!("    -s, --seed <S>      Base seed; run i uses S + i");
    println!("    -t, --ticks <T>     Max ticks per session (default: 20,000)");
    println!("    -c, --config <P>    Tuning JSON file");
    println!("    --json              Print the report as JSON");
    println!("    -h, --help          Show this help");
}
