//! Brick Breaker headless driver
//!
//! Runs a session against a seeded random key stream and prints the final
//! snapshot as JSON. Useful for soak runs and for checking determinism.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;

    use brick_breaker::input::PaddleCommand;
    use brick_breaker::sim::{GameEvent, SimulationState, tick};
    use brick_breaker::{GameConfig, Key, PaddleControl};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    /// Chance per tick that the simulated player presses or releases a key
    const KEY_EDGE_CHANCE: f64 = 0.05;

    /// Run a headless Brick Breaker session and print the final snapshot
    #[derive(Debug, Parser)]
    #[command(name = "brick-breaker", version)]
    pub struct Args {
        /// JSON config file (defaults are used when omitted)
        #[arg(long, value_name = "PATH")]
        pub config: Option<PathBuf>,
        /// Seed for the simulated key stream
        #[arg(long, default_value_t = 1)]
        pub seed: u64,
        /// Number of ticks to run
        #[arg(long, default_value_t = 3600)]
        pub ticks: u64,
    }

    pub fn run(args: Args) -> ExitCode {
        let config = match &args.config {
            Some(path) => match GameConfig::load(path) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("{e}");
                    return ExitCode::FAILURE;
                }
            },
            None => GameConfig::default(),
        };

        log::info!("Running {} ticks with seed {}", args.ticks, args.seed);

        let mut rng = Pcg32::seed_from_u64(args.seed);
        let mut control = PaddleControl::new();
        let mut state = SimulationState::new(config);
        let mut snapshot = None;
        let (mut clears, mut misses) = (0u32, 0u32);

        for _ in 0..args.ticks {
            if rng.random_bool(KEY_EDGE_CHANCE) {
                let key = if rng.random_bool(0.5) { Key::Left } else { Key::Right };
                if control.command() == PaddleCommand::Stop {
                    control.key_down(key);
                } else {
                    control.key_up(key);
                }
            }

            let input = control.tick_input(state.paddle.speed);
            let snap = tick(&mut state, &input);
            for event in &snap.events {
                match event {
                    GameEvent::RoundCleared => {
                        clears += 1;
                        log::info!("Round cleared at tick {}", snap.tick);
                    }
                    GameEvent::Miss => {
                        misses += 1;
                        log::debug!("Miss at tick {}", snap.tick);
                    }
                    _ => {}
                }
            }
            snapshot = Some(snap);
        }

        log::info!("Finished: {clears} clears, {misses} misses");

        let Some(snapshot) = snapshot else {
            return ExitCode::SUCCESS;
        };
        match snapshot.to_json() {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Failed to serialize snapshot: {e}");
                ExitCode::FAILURE
            }
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;

    let args = headless::Args::parse();
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");
    headless::run(args)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly on the web
}
