mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::{Duration, Instant};

use app::App;
use overlay_picker::{Config, PickerKind, log};

/// Frame interval while a transition runs (~60 fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut open: Option<PickerKind> = None;
    let mut animation_ms: Option<u64> = None;
    let mut print_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" => open = Some(PickerKind::List),
            "--date" => open = Some(PickerKind::Date),
            "--json" => print_json = true,
            "--no-animation" => animation_ms = Some(0),
            "--animation-ms" => {
                match args.get(i + 1).and_then(|v| v.parse().ok()) {
                    Some(ms) => {
                        animation_ms = Some(ms);
                        i += 1;
                    }
                    None => eprintln!("Warning: --animation-ms requires a number of milliseconds"),
                }
            }
            other => {
                eprintln!("Warning: ignoring unknown argument '{}'", other);
            }
        }
        i += 1;
    }

    let config = Config::load().with_overrides(animation_ms);
    log::log(&format!("Config: {:?}", config));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config);

    // Run the app
    let result = run_app(&mut terminal, &mut app, open).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if print_json {
        for selection in &app.selections.borrow().entries {
            println!("{}", serde_json::to_string(selection)?);
        }
    }

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, open: Option<PickerKind>) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);

    // Draw once so the host knows its size before a picker is presented
    terminal.draw(|frame| ui::render(frame, app))?;
    if let Some(kind) = open {
        app.open_picker(kind);
    }

    loop {
        // Render
        terminal.draw(|frame| ui::render(frame, app))?;

        if app.should_quit {
            break;
        }

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => app.handle_event(&event),
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
            _ = frames.tick(), if app.is_animating() => {
                app.on_tick(Instant::now());
            }
        }
    }

    log::log("=== overlay-picker exiting ===");
    Ok(())
}
