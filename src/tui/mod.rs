//! Terminal UI.
//!
//! The UI is the caller the engine expects: it forwards key presses to the
//! session, and when a move hands the turn to the computer it schedules the
//! reply after the configured delay. Restarting cancels any pending reply.

mod app;
mod input;
mod scheduler;
mod ui;

pub use app::{App, Effect};
pub use input::{Action, action, move_cursor};
pub use scheduler::ComputerScheduler;

use crate::config::AppConfig;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_engine::{ComputerTurn, GameSession};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the player quits.
#[instrument(skip_all, fields(delay_ms = *config.computer_delay_ms(), seed = ?config.seed()))]
pub async fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let app = App::new(GameSession::seeded(*config.seed()));
    let (scheduler, turns) = ComputerScheduler::new(config.computer_delay());
    let res = run_app(&mut terminal, app, scheduler, turns).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

async fn run_app(
    terminal: &mut Term,
    mut app: App,
    mut scheduler: ComputerScheduler,
    mut turns: mpsc::UnboundedReceiver<ComputerTurn>,
) -> Result<()> {
    loop {
        let snapshot = app.snapshot();
        terminal.draw(|frame| ui::draw(frame, &snapshot, app.cursor()))?;

        while let Ok(turn) = turns.try_recv() {
            app.computer_turn(turn);
        }

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle(action(app.cursor(), key.code)) {
            Effect::None => {}
            Effect::Schedule(turn) => scheduler.schedule(turn),
            Effect::CancelPending => scheduler.cancel(),
            Effect::Quit => {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
