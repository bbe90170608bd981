//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetches
//!
//! `update()` answers with `Effect::Fetch(request)` when a page needs remote
//! data. The request runs as its own tokio task against [`Services`] and
//! comes back over an mpsc channel as `Action::Fetched`, tagged with the
//! epoch and ticket it was started with. Nothing is aborted; stale results
//! are simply discarded by the core.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events, fetch results
//!   or terminal resize.

mod component;
pub mod components;
mod event;
mod keymap;
pub mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;

use crossterm::cursor::Hide;
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, FetchRequest, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::providers::Services;
use crate::tui::component::EventHandler;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::keymap::KeyMap;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Terminals without the Kitty protocol ignore the flags
        execute!(
            stdout(),
            EnableBracketedPaste,
            Hide,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let services = Services::from_config(&config);
    let mut app = App::new(config, services.weather.masked_key());
    let mut keymap = KeyMap;

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    // Enter the start page so its fetches begin
    let start = app.route();
    dispatch(&mut app, Action::Navigate(start), &services, &tx);

    loop {
        let animating = app.page.is_busy();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = keymap.handle_event(&event)
                && dispatch(&mut app, action, &services, &tx) == Effect::Quit
            {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle fetch results from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            dispatch(&mut app, action, &services, &tx);
        }
    }

    info!("Folio shutting down");
    ratatui::restore();
    Ok(())
}

/// Runs `action` through the reducer and performs the resulting effect.
fn dispatch(
    app: &mut App,
    action: Action,
    services: &Services,
    tx: &mpsc::Sender<Action>,
) -> Effect {
    let effect = update(app, action);
    if let Effect::Fetch(request) = &effect {
        spawn_fetch(request.clone(), services.clone(), tx.clone());
    }
    effect
}

fn spawn_fetch(request: FetchRequest, services: Services, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning fetch {:?} (ticket {}, epoch {})",
        request.kind, request.ticket, request.epoch
    );
    tokio::spawn(async move {
        let FetchRequest {
            epoch,
            ticket,
            kind,
        } = request;
        let payload = services.perform(kind).await;
        if tx
            .send(Action::Fetched {
                epoch,
                ticket,
                payload,
            })
            .is_err()
        {
            warn!("Failed to deliver fetch result {ticket}: receiver dropped");
        }
    });
}
