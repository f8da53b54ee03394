//! Terminal User Interface (TUI) module
//!
//! Provides an interactive terminal interface for managing bookmarks

use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{error, info};

mod app;
mod constants;
mod event_handler;
mod ui;

use crate::capabilities::{NotificationLog, SystemBrowser, SystemClipboard};
use crate::runtime::lifetime::startup::StartupContext;
use app::App;
use ui::ui;

/// Run the TUI application
pub async fn run_tui(ctx: StartupContext) -> Result<(), Box<dyn std::error::Error>> {
    let notifications = NotificationLog::arc(Duration::from_secs(
        ctx.config.ui.notification_ttl_secs,
    ));
    let controller = ctx
        .controller(notifications.clone())
        .with_clipboard(Arc::new(SystemClipboard))
        .with_opener(Arc::new(SystemBrowser));
    let tick_rate = Duration::from_millis(ctx.config.ui.tick_rate_ms.max(16));

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new(controller.clone(), notifications);
    app.spawn_refresh();
    info!("TUI started");
    let res = run_app(&mut terminal, &mut app, tick_rate);

    // 退出后仍在进行的请求不再写入状态
    controller.close();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("TUI loop failed: {}", err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Main application loop
///
/// Redraws at least every `tick_rate` so results of background requests
/// show up without a key press.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        app.sync_view();
        terminal.draw(|f| ui(f, app))?;

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key.code)
        {
            return Ok(());
        }
    }
}
