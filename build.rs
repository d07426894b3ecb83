//! Stamps the commit and build date into `jump-runner --version`.
//!
//! Release builds can pin both with `JUMP_RUNNER_COMMIT` and
//! `JUMP_RUNNER_BUILD_DATE`; otherwise git and the clock are asked.

use std::env;
use std::process::Command;

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!hash.is_empty()).then_some(hash)
}

fn main() {
    let commit = env::var("JUMP_RUNNER_COMMIT")
        .ok()
        .or_else(git_short_hash)
        .unwrap_or_else(|| "unknown".to_string());
    let date = env::var("JUMP_RUNNER_BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());

    println!("cargo:rustc-env=JR_BUILD_COMMIT={}", commit);
    println!("cargo:rustc-env=JR_BUILD_DATE={}", date);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=JUMP_RUNNER_COMMIT");
    println!("cargo:rerun-if-env-changed=JUMP_RUNNER_BUILD_DATE");
}
