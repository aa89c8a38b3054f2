//! Launcher CLI for the containerized log-to-Gantt pipeline.
//!
//! Prepares `input/` and `output/`, requires `input/logs.json`, then hands
//! control to the container orchestration command and reports where the
//! artifacts land. Takes no flags or arguments: behavior is fixed.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use launcher::io::compose::ComposeOrchestrator;
use launcher::io::config::{CONFIG_FILE, LauncherConfig, load_config};
use launcher::io::layout::{LOGS_FILE, PipelinePaths};
use launcher::launch::{LaunchOutcome, launch};
use launcher::{artifacts, exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "launcher",
    version,
    about = "Build and run the containerized log-to-Gantt pipeline"
)]
struct Cli {}

fn main() {
    Cli::parse();
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let root = std::env::current_dir()?;
    let config = load_config(&root.join(CONFIG_FILE))?;
    let paths = PipelinePaths::new(root, &config);

    match launch(&paths, &config, &ComposeOrchestrator)? {
        LaunchOutcome::MissingInput => Ok(report_missing_input(&config)),
        LaunchOutcome::Completed { .. } => Ok(report_completion(&config)),
    }
}

fn report_missing_input(config: &LauncherConfig) -> i32 {
    let expected = Path::new(&config.input_dir).join(LOGS_FILE);
    println!("No log export found at {}.", expected.display());
    println!("Place your JSONL logs there and re-run.");
    exit_codes::INVALID
}

fn report_completion(config: &LauncherConfig) -> i32 {
    let output_dir = Path::new(&config.output_dir);
    for artifact in &artifacts::EXPECTED {
        println!(
            "{}: {}",
            artifact.label,
            artifact.path_under(output_dir).display()
        );
    }
    exit_codes::OK
}
