use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::{fmt, EnvFilter};
use valentine_core::Config;

mod bell;
mod commands;
mod render;

#[derive(Parser)]
#[command(name = "valentine-cli", version, about = "Will you be my Valentine?")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the card (default)
    Play,
    /// Render a single frame of the card
    Preview(commands::preview::PreviewArgs),
    /// Time left until the big day
    Countdown(commands::countdown::CountdownArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => Config::load()
            .map_err(Into::into)
            .and_then(|config| commands::play::run(&config)),
        Commands::Preview(args) => Config::load()
            .map_err(Into::into)
            .and_then(|config| commands::preview::run(args, &config)),
        Commands::Countdown(args) => Config::load()
            .map_err(Into::into)
            .and_then(|config| commands::countdown::run(args, &config)),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "valentine-cli", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
