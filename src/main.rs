use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "playroom-panel")]
#[command(about = "Frames panel for Playroom - filter preview widths and themes")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.playroom/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the frames panel window
    Gui {
        /// JSON state snapshot to start from
        #[arg(long)]
        state: Option<PathBuf>,
    },

    /// Print the panel derived from a state snapshot as JSON
    Show {
        /// JSON state snapshot to start from (defaults to an empty state)
        #[arg(long)]
        state: Option<PathBuf>,

        /// JSON action to dispatch before rendering; repeatable, applied in order
        #[arg(long = "dispatch", value_name = "ACTION")]
        dispatch: Vec<String>,
    },

    /// Initialize a new config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli::config_path(cli.config);

    match cli.command {
        Some(Commands::Gui { state }) => {
            cli::gui::gui_command(&config_path, state.as_deref())?;
        }
        Some(Commands::Show { state, dispatch }) => {
            cli::show::show_command(&config_path, state.as_deref(), &dispatch)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&config_path, force)?;
        }
        None => {
            // Default: open the window
            cli::gui::gui_command(&config_path, None)?;
        }
    }

    Ok(())
}
