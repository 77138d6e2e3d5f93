//! Brix - tic-tac-toe in the terminal.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use brix_tictactoe::OpponentTicket;
use brix_tui::{App, AppCommand, AppConfig, Cli, OpponentTimer, TerminalGuard, init_logging, ui};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = AppConfig::load_or_default(&cli.config)?.override_with(&cli)?;
    info!(?config, "Starting brix");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run(&mut terminal, App::new(&config)).await;

    // Restore before reporting so the message lands on the normal screen.
    drop(guard);

    if let Err(e) = &result {
        error!(error = %e, "brix exited with an error");
        eprintln!("Error: {}", e);
    }
    result
}

/// Event loop: draw, deliver due opponent replies, handle one key.
#[instrument(skip_all)]
async fn run(terminal: &mut Tui, mut app: App) -> Result<()> {
    let (due_tx, mut due_rx) = mpsc::unbounded_channel::<OpponentTicket>();
    let mut timer = OpponentTimer::new(due_tx);

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(ticket) = due_rx.try_recv() {
            app.on_opponent_due(ticket);
        }

        // Poll with a short timeout so opponent replies are picked up promptly.
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            match app.handle_key(key) {
                AppCommand::None => {}
                AppCommand::Quit => {
                    info!("Quit requested");
                    timer.cancel();
                    return Ok(());
                }
                AppCommand::ArmOpponent { ticket, delay } => timer.arm(ticket, delay),
                AppCommand::CancelOpponent => timer.cancel(),
            }
        }

        // Let the timer task run between polls.
        tokio::task::yield_now().await;
    }
}
