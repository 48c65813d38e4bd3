//! Block Breaker headless runner
//!
//! Plays the simulation without a window, driven by the autopilot unless
//! `--manual` is given, and reports the final score.
//!
//! Example:
//!   RUST_LOG=info cargo run -- --seed 7 --ticks 20000 --quality low

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Result, bail};
    use clap::Parser;

    use block_breaker::persistence::{FileStore, KeyValueStore};
    use block_breaker::sim::GamePhase;
    use block_breaker::{Game, QualityPreset, Settings};

    #[derive(Parser, Debug)]
    #[command(author, version, about = "Run Block Breaker headless", long_about = None)]
    struct Args {
        /// RNG seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many ticks even if the run is still going
        #[arg(long, default_value_t = 36_000)]
        ticks: u64,
        /// Directory holding the high score and settings file
        #[arg(long, default_value = ".")]
        store_dir: PathBuf,
        /// Quality preset (low, medium, high); saved for later runs
        #[arg(long)]
        quality: Option<String>,
        /// No autopilot; the paddle stays put
        #[arg(long)]
        manual: bool,
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();
        log::info!("Block Breaker (native) starting...");

        let seed = args.seed.unwrap_or_else(rand::random);
        let store = FileStore::in_dir(&args.store_dir);
        // The game falls back to defaults quietly; say so up front
        if let Err(err) = store.get(Settings::STORAGE_KEY) {
            log::warn!("Store at {:?} unusable: {}", store.path(), err);
        }

        let mut game = Game::new(store, seed);
        if let Some(name) = args.quality.as_deref() {
            let Some(quality) = QualityPreset::parse(name) else {
                bail!("unknown --quality {name}");
            };
            game.update_settings(Settings {
                quality,
                ..game.settings().clone()
            });
        }
        game.idle_mode = !args.manual;

        let mut ticks = 0;
        while ticks < args.ticks && game.state.phase == GamePhase::Playing {
            game.step();
            ticks += 1;
        }

        let hud = game.hud();
        match hud.game_over_text() {
            Some(text) => println!("{text}"),
            None => println!(
                "Stopped after {} ticks - Score: {} - Lives: {} - Level: {}",
                ticks, hud.score, hud.lives, hud.level
            ),
        }
        log::info!("Seed {} ran {} ticks, high score {}", seed, ticks, game.high_score());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `block_breaker::Game` directly
}
