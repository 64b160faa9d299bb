//! Brick Breaker entry point
//!
//! Runs a headless session: the paddle follows the ball (autopilot) unless
//! `--idle` parks it at its start position.
//!
//! Usage: `brick-breaker [--idle] [config.json]`

use std::path::PathBuf;

use clap::Parser;

use brick_breaker::consts::{DEMO_MAX_SECS, SIM_DT};
use brick_breaker::headless::track_ball;
use brick_breaker::sim::{GameEvent, GameState};
use brick_breaker::{GameConfig, Headless, platform};

#[derive(Parser, Debug)]
#[command(name = "brick-breaker")]
#[command(about = "Play a headless breakout session and report the outcome")]
struct Args {
    /// Leave the paddle at its start position instead of following the ball
    #[arg(long)]
    idle: bool,

    /// JSON config file (defaults are used when omitted)
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("Brick Breaker (headless) starting...");

    let idle = args.idle;
    let config = GameConfig::load_or_default(args.config.as_deref());
    let mut driver = Headless::new(GameState::new(&config));

    let max_frames = (DEMO_MAX_SECS / SIM_DT) as u64;
    for _ in 0..max_frames {
        let pointer = if idle {
            None
        } else {
            Some(track_ball(&driver.state))
        };

        for event in driver.frame(SIM_DT, pointer) {
            match event {
                GameEvent::BrickRemoved { id } => {
                    log::info!("Brick {} cleared ({} left)", id, driver.state.bricks_remaining());
                }
                GameEvent::Lost => platform::notify_loss(&driver.state),
                other => log::debug!("{:?}", other),
            }
        }

        if driver.state.is_over() {
            break;
        }
    }

    let state = &driver.state;
    println!(
        "{:.1}s played: {} bricks cleared, {} remaining, {} wall bounces, {} body bounces",
        state.elapsed,
        state.bricks_removed,
        state.bricks_remaining(),
        state.wall_bounces,
        state.object_bounces
    );
}
