use clap::Args;
use valentine_core::decor;
use valentine_core::{Artwork, Clock, Config, Countdown, Phase, SystemClock};

use super::assets_for;
use crate::render::{self, Scene, DEFAULT_WIDTH};

#[derive(Args)]
pub struct PreviewArgs {
    /// Number of times "No" was chosen
    #[arg(long, default_value = "0")]
    declines: u32,
    /// Show the success screen
    #[arg(long)]
    accepted: bool,
    /// Seed for the decorations
    #[arg(long)]
    seed: Option<u64>,
    /// Print the state snapshot as JSON instead of the card
    #[arg(long)]
    json: bool,
}

pub fn run(args: PreviewArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = config.engine()?;
    for _ in 0..args.declines {
        if engine.decline().is_none() {
            break;
        }
    }
    if args.accepted {
        engine.accept();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        return Ok(());
    }

    let mut rng = decor::seeded(args.seed.unwrap_or_else(rand::random));
    let scene = Scene::generate(&mut rng);
    let assets = assets_for(config);
    let (remaining, art) = match engine.phase() {
        Phase::Proposal => (None, assets.artwork(Artwork::Proposal)),
        Phase::Accepted => {
            let countdown = Countdown::from_clock(&SystemClock, config.target_date()?);
            (
                Some(countdown.remaining_at(SystemClock.now())),
                assets.artwork(Artwork::Success),
            )
        }
    };

    println!(
        "{}",
        render::frame(
            &engine,
            &config.copy,
            &scene,
            remaining,
            art.as_deref(),
            DEFAULT_WIDTH,
        )
    );
    Ok(())
}
