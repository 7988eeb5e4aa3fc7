use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_four::config::{AppConfig, FrontendKind};
use connect_four::game::{MatchController, MatchOutcome, Symbol};
use connect_four::ui::{ConsoleFrontend, TuiFrontend};

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a friend")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the frontend from the config file
    #[arg(long, value_enum)]
    frontend: Option<FrontendKind>,

    /// Symbol that moves first: X or O
    #[arg(long, value_parser = parse_symbol)]
    first_player: Option<Symbol>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn parse_symbol(value: &str) -> Result<Symbol, String> {
    match value {
        "X" | "x" => Ok(Symbol::X),
        "O" | "o" => Ok(Symbol::O),
        other => Err(format!("unknown symbol '{other}' (expected X or O)")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(frontend) = cli.frontend {
        config.frontend = frontend;
    }
    if let Some(first) = cli.first_player {
        config.first_player = first;
    }

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    info!(frontend = ?config.frontend, first = %config.first_player, "starting match");

    match config.frontend {
        FrontendKind::Console => run_console(&config),
        FrontendKind::Tui => {
            let outcome = run_tui(&config)?;
            print_summary(&config, outcome);
            Ok(())
        }
    }
}

fn run_console(config: &AppConfig) -> Result<()> {
    let frontend = ConsoleFrontend::new(io::stdin().lock(), io::stdout(), config.clear_screen);
    let mut controller = MatchController::new(frontend, config);
    controller.run().context("console match failed")?;
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<Option<MatchOutcome>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut controller = MatchController::new(TuiFrontend::new(terminal), config);
    let res = controller.run();

    // Restore terminal — always runs, even on error
    let mut frontend = controller.into_frontend();
    let terminal = frontend.terminal_mut();
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI match failed")
}

fn print_summary(config: &AppConfig, outcome: Option<MatchOutcome>) {
    match outcome {
        Some(MatchOutcome::Winner(symbol)) => {
            println!("{} ({}) wins!", config.players.name(symbol), symbol)
        }
        Some(MatchOutcome::Draw) => println!("It's a draw!"),
        None => println!("Match abandoned."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbol() {
        assert_eq!(parse_symbol("x"), Ok(Symbol::X));
        assert_eq!(parse_symbol("O"), Ok(Symbol::O));
        assert!(parse_symbol("z").is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "connect-four",
            "--frontend",
            "tui",
            "--first-player",
            "o",
            "--config",
            "game.toml",
        ]);
        assert_eq!(cli.frontend, Some(FrontendKind::Tui));
        assert_eq!(cli.first_player, Some(Symbol::O));
        assert_eq!(cli.config, PathBuf::from("game.toml"));
        assert!(!cli.print_config);
    }
}
