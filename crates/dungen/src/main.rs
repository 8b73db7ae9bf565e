//! dungen: command-line dungeon layout generator
//!
//! Runs one or more generation passes and prints the last one.

mod args;
mod error;
mod render;

use std::process::ExitCode;

use clap::Parser;
use dg_core::{DungeonGenerator, DungeonRng};
use log::info;

use args::Args;
use error::CliError;

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dungen: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = args.generator_config()?;
    let rng = match args.seed {
        Some(seed) => DungeonRng::new(seed),
        None => DungeonRng::from_entropy(),
    };
    info!("seed {}", rng.seed());

    let mut generator = DungeonGenerator::new(config, rng)?;
    for _ in 0..args.passes.max(1) {
        generator.regenerate()?;
    }

    let Some(dungeon) = generator.current() else {
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(dungeon)?);
        return Ok(());
    }

    print!("{}", render::ascii_map(dungeon));
    println!();
    print!("{}", render::room_table(dungeon));
    println!(
        "seed {}  rooms {}  floor {}  walls {}",
        dungeon.rng_seed,
        dungeon.rooms().len(),
        dungeon.floor.len(),
        dungeon.walls.len()
    );
    for diagnostic in &dungeon.diagnostics {
        println!("warning: {}", diagnostic);
    }

    Ok(())
}
