use std::sync::Arc;

use clap::Args;
use valentine_core::countdown::TICK_PERIOD;
use valentine_core::{Clock, Config, Countdown, CountdownTicker, Event, SystemClock};

#[derive(Args)]
pub struct CountdownArgs {
    /// Print events as JSON
    #[arg(long)]
    json: bool,
    /// Keep printing once per second this many times
    #[arg(long, default_value = "1")]
    ticks: u32,
}

pub fn run(args: CountdownArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let countdown = Countdown::from_clock(clock.as_ref(), config.target_date()?);

    if args.ticks <= 1 {
        print_tick(&countdown.tick(clock.as_ref()), args.json)?;
        return Ok(());
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    rt.block_on(async {
        let mut ticker = CountdownTicker::start(countdown, clock, TICK_PERIOD);
        for _ in 0..args.ticks {
            match ticker.recv().await {
                Some(event) => print_tick(&event, args.json)?,
                None => break,
            }
        }
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}

fn print_tick(event: &Event, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(event)?);
    } else if let Event::CountdownTick {
        target, remaining, ..
    } = event
    {
        println!("{remaining} until {}", target.format("%Y-%m-%d %H:%M UTC"));
    }
    Ok(())
}
