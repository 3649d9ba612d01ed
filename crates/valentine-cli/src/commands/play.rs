//! Interactive card.
//!
//! One current-thread runtime multiplexes keyboard lines and countdown ticks;
//! every event redraws the whole frame.

use std::io::{stdout, Write};
use std::sync::Arc;

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{size as terminal_size, Clear, ClearType},
};
use tokio::io::{AsyncBufReadExt, BufReader};
use valentine_core::{
    Artwork, AssetProvider, Clock, Config, Event, Phase, Session, SystemClock,
    TimeRemaining,
};

use super::{assets_for, sink_for};
use crate::render::{self, Scene, DEFAULT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Decline,
    Accept,
    Restart,
    Quit,
}

fn parse_key(line: &str) -> Option<Key> {
    match line.trim().to_lowercase().as_str() {
        "n" | "no" => Some(Key::Decline),
        "y" | "yes" => Some(Key::Accept),
        "r" | "restart" => Some(Key::Restart),
        "q" | "quit" | "exit" => Some(Key::Quit),
        _ => None,
    }
}

pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = rt.block_on(play(config));
    // A pending stdin read must not hold up exit.
    rt.shutdown_background();
    result
}

async fn play(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let mut session = Session::new(
        config.engine()?,
        config.target_date()?,
        Arc::clone(&clock),
        sink_for(config),
    );
    let assets = assets_for(config);
    let mut scene = Scene::generate(&mut rand::thread_rng());
    let mut remaining: Option<TimeRemaining> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    draw(&session, config, assets.as_ref(), &scene, remaining)?;
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_key(&line) {
                    Some(Key::Decline) => {
                        session.decline();
                    }
                    Some(Key::Accept) => {
                        if session.accept().is_some() {
                            remaining = session
                                .countdown()
                                .map(|c| c.remaining_at(clock.now()));
                        }
                    }
                    Some(Key::Restart) => {
                        session.reset();
                        remaining = None;
                        scene = Scene::generate(&mut rand::thread_rng());
                    }
                    Some(Key::Quit) => break,
                    None => tracing::debug!(input = %line.trim(), "unrecognized key"),
                }
            }
            Some(Event::CountdownTick { remaining: left, .. }) = session.next_tick() => {
                remaining = Some(left);
            }
        }
        draw(&session, config, assets.as_ref(), &scene, remaining)?;
    }

    session.teardown();
    Ok(())
}

fn draw(
    session: &Session,
    config: &Config,
    assets: &dyn AssetProvider,
    scene: &Scene,
    remaining: Option<TimeRemaining>,
) -> std::io::Result<()> {
    let width = terminal_size()
        .map(|(cols, _)| usize::from(cols).min(DEFAULT_WIDTH))
        .unwrap_or(DEFAULT_WIDTH);
    let art = match session.engine().phase() {
        Phase::Proposal => assets.artwork(Artwork::Proposal),
        Phase::Accepted => assets.artwork(Artwork::Success),
    };
    let frame = render::frame(
        session.engine(),
        &config.copy,
        scene,
        remaining,
        art.as_deref(),
        width,
    );

    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(out, "{frame}")?;
    write!(out, "> ")?;
    out.flush()
}
