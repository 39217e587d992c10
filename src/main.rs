//! `rover-fleet` command line.
//!
//! ```bash
//! # Run a mission file and print the final poses
//! rover-fleet run mission.txt --render
//!
//! # Generate random scenes
//! rover-fleet random --seed 7 --rounds 3
//! ```

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rover_fleet::playground::{random_commands, random_fleet};
use rover_fleet::{Error, FleetConfig, MissionReport, Scenario};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a mission file
    Run {
        /// Mission file: grid size, then pose/command line pairs
        file: PathBuf,

        /// Also print the field map
        #[arg(short, long)]
        render: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build random fleets and drive them with random commands
    Random {
        /// RNG seed; random if omitted
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of command rounds per fleet
        #[arg(short, long, default_value_t = 5)]
        rounds: usize,
    },
}

fn main() {
    let args = Args::parse();

    let config = match args.config.as_deref().map(FleetConfig::from_file).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if let Err(e) = run(args.command, config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command, config: FleetConfig) -> Result<(), Error> {
    match command {
        Command::Run { file, render, json } => {
            log::info!("Running mission: {}", file.display());
            let fleet = Scenario::from_file(&file)?.execute(&config)?;
            let report = MissionReport::from_fleet(&fleet);
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{report}");
            }
            if render {
                println!("\n{}", fleet.render_checked()?);
            }
        }
        Command::Random { seed, rounds } => {
            let seed = seed.unwrap_or_else(rand::random);
            log::info!("Random scene with seed {seed}");
            let mut rng = StdRng::seed_from_u64(seed);
            let mut fleet = random_fleet(&mut rng, config)?;
            println!("{fleet}\n");
            for _ in 0..rounds {
                for (id, commands) in random_commands(&mut rng, &mut fleet)? {
                    println!(">Rover {id}: {commands}");
                }
            }
            println!("\n{fleet}");
        }
    }
    Ok(())
}
