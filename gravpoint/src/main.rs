use gravpoint::{ScenarioConfig, Scenario};
use gravpoint::{run_2d, run_headless};
use gravpoint::bench_frames;

use clap::Parser;
use anyhow::Result;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Level file inside the scenarios directory
    #[arg(short, long, default_value = "level5.yaml")]
    file_name: String,

    /// Step the level for this many frames without a window
    #[arg(long)]
    headless: Option<u64>,

    /// Time the frame loop on synthetic fields and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    ScenarioConfig::load(&config_path)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_frames();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg);

    match args.headless {
        Some(frames) => run_headless(scenario, frames),
        None => run_2d(scenario),
    }

    Ok(())
}
