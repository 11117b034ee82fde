// TUI: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the application state. The app
// orchestrator pushes `UiUpdate` messages over an mpsc channel; the TUI
// applies them to `ViewState` and re-renders at ~30 fps. Selection, edit
// mode, and the quit confirmation are presentation-local and never leave
// this module.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::protocol::{AppSnapshot, RunStatus, UiUpdate, UserCommand};
use crate::roster::MAX_PARTICIPANTS;

use layout::build_layout;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that mirrors the application state for rendering.
///
/// Updated incrementally via `UiUpdate` messages from the app orchestrator.
/// The `render_frame` function reads this struct to draw the screen.
pub struct ViewState {
    /// All ten slot values, mirrored from the last snapshot (with local echo
    /// of in-flight edits).
    pub slots: Vec<String>,
    /// The order currently rendered as the line.
    pub display_order: Vec<String>,
    /// The locked order; empty unless a run completed.
    pub final_order: Vec<String>,
    /// True while a shuffle run is animating.
    pub shuffling: bool,
    pub participant_count: usize,
    pub can_shuffle: bool,
    pub can_reset_ranking: bool,
    pub can_reset_all: bool,
    pub status: RunStatus,
    /// Which slot row the cursor is on.
    pub selected_slot: usize,
    /// Whether keystrokes edit the selected slot.
    pub edit_mode: bool,
    /// Whether the quit confirmation overlay is showing.
    pub confirm_quit: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            slots: vec![String::new(); MAX_PARTICIPANTS],
            display_order: Vec::new(),
            final_order: Vec::new(),
            shuffling: false,
            participant_count: 0,
            can_shuffle: false,
            can_reset_ranking: false,
            can_reset_all: false,
            status: RunStatus::Waiting,
            selected_slot: 0,
            edit_mode: false,
            confirm_quit: false,
        }
    }
}

impl ViewState {
    /// Apply a full state snapshot from the app orchestrator.
    ///
    /// Presentation-local fields (selection, edit mode, quit confirmation)
    /// are left unchanged.
    pub fn apply_snapshot(&mut self, snapshot: AppSnapshot) {
        self.slots = snapshot.slots;
        self.display_order = snapshot.display_order;
        self.final_order = snapshot.final_order;
        self.shuffling = snapshot.shuffling;
        self.participant_count = snapshot.participant_count;
        self.can_shuffle = snapshot.can_shuffle;
        self.can_reset_ranking = snapshot.can_reset_ranking;
        self.can_reset_all = snapshot.can_reset_all;
        self.status = snapshot.status;
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Snapshot(snapshot) => {
            state.apply_snapshot(*snapshot);
        }
        UiUpdate::DisplayOrder(order) => {
            state.display_order = order;
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::roster::render(frame, layout.roster, state);
    widgets::ranking::render(frame, layout.ranking, state);
    widgets::help_bar::render(frame, layout.help_bar, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// This is the main entry point for the terminal UI. It:
/// 1. Initializes the terminal (enters raw mode, enables alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal on panic; chain the original hook after ours.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    // Render interval (~30fps).
    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            // UI updates from the app orchestrator
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => {
                        apply_ui_update(&mut view_state, ui_update);
                    }
                    None => {
                        // Channel closed: app is shutting down
                        break;
                    }
                }
            }

            // Keyboard input
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quit {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse events, resize events, etc. -- ignore
                    }
                    Some(Err(_)) | None => {
                        // Input error or stream ended -- break out
                        break;
                    }
                }
            }

            // Render tick
            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
