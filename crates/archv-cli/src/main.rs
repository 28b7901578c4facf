use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use archv_core::{AppConfig, MotionGate};
use archv_tui::Page;

mod commands;

use commands::rotate::StyleArg;
use commands::scramble::{ScrambleArgs, ScrambleModeArg};

#[derive(Parser)]
#[command(name = "archv")]
#[command(author, version, about = "The Archv site, in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this configuration file instead of ~/.config/archv/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Settle every animation immediately
    #[arg(long, global = true)]
    reduced_motion: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Page to open on (home, platform, security, philosophy, contact, login)
        #[arg(short, long, default_value = "home")]
        page: String,
    },
    /// Play a scramble reveal on stdout
    Scramble {
        /// Text to reveal
        text: String,
        #[arg(short, long, value_enum, default_value_t = ScrambleModeArg::Frame)]
        mode: ScrambleModeArg,
        /// Reveal duration for timed mode
        #[arg(short, long, default_value_t = 900)]
        duration_ms: u64,
        /// Filler offset tuning for timed mode
        #[arg(long, default_value_t = 50)]
        shift: u32,
        /// symbols, alnum, glitch, binary, or a literal character set
        #[arg(short, long, default_value = "symbols")]
        alphabet: String,
        /// Start resolved and scramble toward a blank line (timed mode)
        #[arg(long)]
        reverse: bool,
        /// Text to transition from (frame mode; defaults to a scrambled seed)
        #[arg(long)]
        from: Option<String>,
        /// Frames per second (defaults to ui.animation_fps)
        #[arg(long)]
        fps: Option<u32>,
    },
    /// Print the phase transitions of a rotation
    Rotate {
        /// Items to rotate through
        #[arg(required = true)]
        items: Vec<String>,
        /// Stop after this many completed cycles
        #[arg(short, long, default_value_t = 1)]
        cycles: u32,
        /// Hold time per item
        #[arg(long, default_value_t = 2000)]
        hold_ms: u64,
        #[arg(short, long, value_enum, default_value_t = StyleArg::Scramble)]
        style: StyleArg,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let loaded = AppConfig::load_from(&config_path);

    // Initialize logging
    let default_level = loaded
        .as_ref()
        .map(|c| c.general.log_level.clone())
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or(default_level),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // These work even when the existing file does not parse
    if let Some(Commands::Config { action }) = &cli.command {
        match action {
            ConfigAction::Path => return commands::config::path(&config_path),
            ConfigAction::Init { force } => return commands::config::init(&config_path, *force),
            ConfigAction::Show => {}
        }
    }

    // Load configuration
    let config = Arc::new(loaded?);

    let gate = if cli.reduced_motion {
        MotionGate::reduced()
    } else {
        MotionGate::resolve(config.motion.reduced_motion)
    };

    // Handle commands
    match cli.command {
        None => commands::run::run(config, Page::Home, gate).await,
        Some(Commands::Run { page }) => {
            let page = Page::from_name(&page).ok_or_else(|| anyhow!("Unknown page '{}'", page))?;
            commands::run::run(config, page, gate).await
        }
        Some(Commands::Scramble {
            text,
            mode,
            duration_ms,
            shift,
            alphabet,
            reverse,
            from,
            fps,
        }) => {
            let args = ScrambleArgs {
                text,
                mode,
                duration_ms,
                shift,
                alphabet,
                reverse,
                from,
                fps,
            };
            commands::scramble::run(&config, args, gate).await
        }
        Some(Commands::Rotate {
            items,
            cycles,
            hold_ms,
            style,
        }) => commands::rotate::run(&config, items, cycles, hold_ms, style, gate).await,
        Some(Commands::Config { .. }) => commands::config::show(&config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scramble() {
        let cli = Cli::parse_from([
            "archv", "scramble", "ARCHV", "--mode", "timed", "--alphabet", "binary", "--reverse",
        ]);
        match cli.command {
            Some(Commands::Scramble {
                text,
                mode,
                alphabet,
                reverse,
                duration_ms,
                ..
            }) => {
                assert_eq!(text, "ARCHV");
                assert_eq!(mode, ScrambleModeArg::Timed);
                assert_eq!(alphabet, "binary");
                assert!(reverse);
                assert_eq!(duration_ms, 900);
            }
            _ => panic!("expected scramble"),
        }
    }

    #[test]
    fn test_global_reduced_motion() {
        let cli = Cli::parse_from(["archv", "run", "--page", "security", "--reduced-motion"]);
        assert!(cli.reduced_motion);
        assert!(matches!(cli.command, Some(Commands::Run { ref page }) if page == "security"));
    }

    #[test]
    fn test_rotate_requires_items() {
        assert!(Cli::try_parse_from(["archv", "rotate"]).is_err());
        let cli = Cli::try_parse_from(["archv", "rotate", "a", "b", "--cycles", "2"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Rotate { cycles: 2, .. })));
    }
}
