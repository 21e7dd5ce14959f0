use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use keyswipe_cli::commands::replay_ops::ReplayOptions;
use keyswipe_cli::commands::{config_ops, lookup_ops, replay_ops};
use keyswipe_core::KeyboardMode;

#[derive(Parser)]
#[command(name = "swipetool", about = "Keyswipe gesture mapping tool")]
struct Cli {
    /// Log engine decisions to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Show the mapping entry a swipe resolves to
    Lookup {
        /// Key name (a character, backspace, enter, space or 123)
        key: String,
        /// Swipe direction (up, down, left, right)
        direction: String,
        /// Settings TOML file (default: embedded settings)
        #[arg(long)]
        settings: Option<String>,
        /// Keyboard layout shown while swiping
        #[arg(long, default_value = "alphabetic", value_parser = parse_mode)]
        mode: KeyboardMode,
    },
    /// Replay a JSONL drag trace and print every host call
    Replay {
        /// Trace file (one JSON event per line)
        trace: String,
        /// Settings TOML file (default: embedded settings)
        #[arg(long)]
        settings: Option<String>,
        /// Start with an active composition
        #[arg(long)]
        composing: bool,
        /// Keyboard layout shown at the start
        #[arg(long, default_value = "alphabetic", value_parser = parse_mode)]
        mode: KeyboardMode,
        /// Treat functional instructions as handled by the host
        #[arg(long)]
        handle_instructions: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_mode(name: &str) -> Result<KeyboardMode, String> {
    KeyboardMode::from_name(name).ok_or_else(|| {
        format!("unknown keyboard mode {name:?} (alphabetic, numeric, symbolic, emoji)")
    })
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::Lookup {
            key,
            direction,
            settings,
            mode,
        } => lookup_ops::lookup_cmd(&key, &direction, settings.as_deref(), mode),
        Command::Replay {
            trace,
            settings,
            composing,
            mode,
            handle_instructions,
            json,
        } => {
            let options = ReplayOptions {
                composing,
                mode,
                handle_instructions,
            };
            replay_ops::replay_cmd(&trace, settings.as_deref(), &options, json);
        }
    }
}
