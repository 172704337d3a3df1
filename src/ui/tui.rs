// src/ui/tui.rs
//! Terminal setup and the main event loop.

use std::{
    io::{self, Stdout},
    time::Duration,
};

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

use crate::{
    app::{App, KeyOutcome},
    open::Launcher,
};

type Term = Terminal<CrosstermBackend<Stdout>>;

fn enter_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

fn leave_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the browser until the user quits.
pub fn run(mut app: App, launcher: &dyn Launcher) -> Result<()> {
    let mut terminal = enter_terminal()?;
    let result = event_loop(&mut terminal, &mut app, launcher);
    leave_terminal(&mut terminal)?;
    result
}

fn event_loop(terminal: &mut Term, app: &mut App, launcher: &dyn Launcher) -> Result<()> {
    let tick_rate = Duration::from_millis(250);

    loop {
        terminal.draw(|f| app.draw(f))?;

        if !event::poll(tick_rate)? {
            continue;
        }
        let CEvent::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.on_key(key) {
            KeyOutcome::Continue => {}
            KeyOutcome::Quit => return Ok(()),
            KeyOutcome::View {
                uri,
                mime_type,
                new_task,
            } => {
                // Foreground viewers get the real terminal until they exit.
                if !new_task {
                    leave_terminal(terminal)?;
                }
                let launched = launcher.view(&uri, &mime_type, new_task);
                if !new_task {
                    enable_raw_mode()?;
                    execute!(terminal.backend_mut(), EnterAlternateScreen)?;
                    terminal.clear()?;
                }
                if let Err(err) = launched {
                    let reason = format!("{err:#}");
                    warn!(error = %reason, %uri, "viewer failed");
                    app.status = Some(format!("could not open: {reason}"));
                }
            }
        }
    }
}
