//! Command-line parsing for the interactive binary.

use std::path::PathBuf;

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Play,
    PrintConfig,
    Version,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub command: CliCommand,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            command: CliCommand::Play,
            seed: None,
            config: None,
            log_file: None,
        }
    }
}

fn value_for<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", flag))
}

/// Parse `std::env::args()` (program name first).
pub fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--seed" => {
                let raw = value_for(args, i, "--seed")?;
                let seed = raw
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", raw))?;
                options.seed = Some(seed);
                i += 1;
            }
            "-c" | "--config" => {
                options.config = Some(PathBuf::from(value_for(args, i, "--config")?));
                i += 1;
            }
            "--log-file" => {
                options.log_file = Some(PathBuf::from(value_for(args, i, "--log-file")?));
                i += 1;
            }
            "--print-config" => options.command = CliCommand::PrintConfig,
            "-v" | "--version" => options.command = CliCommand::Version,
            "-h" | "--help" => options.command = CliCommand::Help,
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

pub fn help_text() -> String {
    [
        "Jump Runner - terminal side-scrolling runner",
        "",
        "Usage: jump-runner [OPTIONS]",
        "",
        "Options:",
        "  -s, --seed <N>        Seed obstacle generation (reproducible runs)",
        "  -c, --config <PATH>   Load tuning from a JSON file",
        "      --log-file <PATH> Write logs to PATH (level from RUST_LOG, default info)",
        "      --print-config    Print the active tuning as JSON and exit",
        "  -v, --version         Show version information",
        "  -h, --help            Show this help message",
        "",
        "Controls:",
        "  Space / Up / click    Jump",
        "  R / Enter             Restart after a crash",
        "  Q / Esc               Quit",
    ]
    .join("\n")
}
