use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use console_connect_four::config::AppConfig;
use console_connect_four::game::{Board, Session};
use console_connect_four::ui::{Answer, Console};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

/// Play Connect Four against a friend in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Draw markers without colour
    #[arg(long)]
    no_color: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,

    /// Format of diagnostic logs written to stderr (filtered by RUST_LOG)
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormat,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format)?;

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("rendering default config")?);
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let color = !cli.no_color && io::stdout().is_terminal();

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), config.glyphs(color));

    let setup = match console.request_setup(&config)? {
        Answer::Value(setup) => setup,
        Answer::EndSession => return Ok(()),
    };
    let board = Board::new(setup.rows, setup.columns)?;
    let mut session = Session::new(board, setup.names, setup.games)?;

    let end = session.run(&mut console)?;
    tracing::debug!(?end, "exiting");
    Ok(())
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt().with_env_filter(env_filter).with_writer(io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| anyhow::anyhow!("failed to init tracing: {err}"))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| anyhow::anyhow!("failed to init tracing: {err}"))?,
    }

    Ok(())
}
