// Application state and orchestration logic.
//
// The app task owns the authoritative state: the roster slots, the published
// display/final orders, and the active shuffle run. Commands arrive from the
// TUI over an mpsc channel; state changes are pushed back as `UiUpdate`
// messages for the TUI render loop.

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use crate::config::Config;
use crate::protocol::{AppSnapshot, RunStatus, UiUpdate, UserCommand};
use crate::roster::{Roster, MIN_PARTICIPANTS};
use crate::shuffle::shuffle;

// ---------------------------------------------------------------------------
// ShuffleRun
// ---------------------------------------------------------------------------

/// One shuffle run from start to finalize or cancel.
///
/// The run owns the participants snapshot and both pending deadlines.
/// Dropping or replacing the run retires the tick and the finalize deadline
/// together, so deadlines from two different runs can never coexist and a
/// stale run can never fire into newer state.
#[derive(Debug, Clone)]
pub struct ShuffleRun {
    /// Participants captured when the run started. Ticks and the finalize
    /// permutation draw from this snapshot, not from the live roster.
    snapshot: Vec<String>,
    /// When the next display-order republish is due.
    next_tick: Instant,
    /// When the run locks.
    deadline: Instant,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    pub roster: Roster,
    pub display_order: Vec<String>,
    pub final_order: Vec<String>,
    run: Option<ShuffleRun>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            roster: Roster::new(),
            display_order: Vec::new(),
            final_order: Vec::new(),
            run: None,
        }
    }

    /// True strictly between shuffle start and completion/cancellation.
    pub fn is_shuffling(&self) -> bool {
        self.run.is_some()
    }

    /// Write a name slot. Cancels any active run and clears both orders.
    pub fn edit_slot(&mut self, index: usize, text: &str) {
        self.roster.set_slot(index, text);
        self.cancel_run();
        self.display_order.clear();
        self.final_order.clear();
    }

    /// Start a shuffle run.
    ///
    /// Captures a participants snapshot, clears the final order, publishes
    /// one permutation immediately, and schedules the tick and finalize
    /// deadlines. Returns false (leaving all state untouched) when fewer
    /// than MIN_PARTICIPANTS names exist or a run is already active.
    pub fn start_shuffle(&mut self) -> bool {
        if self.run.is_some() {
            debug!("shuffle requested while a run is active, ignoring");
            return false;
        }
        let participants = self.roster.participants();
        if participants.len() < MIN_PARTICIPANTS {
            debug!(
                count = participants.len(),
                "not enough participants to shuffle, ignoring"
            );
            return false;
        }

        let count = participants.len();
        let now = Instant::now();
        self.final_order.clear();
        self.display_order = shuffle(&participants);
        self.run = Some(ShuffleRun {
            snapshot: participants,
            next_tick: now + self.config.shuffle_step,
            deadline: now + self.config.shuffle_duration,
        });
        info!(count, "shuffle started");
        true
    }

    /// Republish a fresh permutation of the run snapshot and advance the
    /// tick deadline by one step. No-op when idle.
    pub fn on_tick(&mut self) {
        let step = self.config.shuffle_step;
        if let Some(run) = self.run.as_mut() {
            run.next_tick += step;
            self.display_order = shuffle(&run.snapshot);
        }
    }

    /// Lock the run: one last permutation becomes both the display order and
    /// the final order, and the run (with its deadlines) is dropped.
    pub fn on_finalize(&mut self) {
        if let Some(run) = self.run.take() {
            let order = shuffle(&run.snapshot);
            self.display_order = order.clone();
            self.final_order = order;
            info!(entries = self.final_order.len(), "shuffle finalized");
        }
    }

    /// Clear both orders and cancel any active run. Slots are untouched.
    pub fn reset_ranking(&mut self) {
        self.cancel_run();
        self.display_order.clear();
        self.final_order.clear();
    }

    /// Reset the ranking and empty every name slot.
    pub fn reset_all(&mut self) {
        self.reset_ranking();
        self.roster.clear();
        info!("all slots cleared");
    }

    fn cancel_run(&mut self) {
        if self.run.take().is_some() {
            info!("shuffle run cancelled");
        }
    }

    fn next_tick(&self) -> Option<Instant> {
        self.run.as_ref().map(|run| run.next_tick)
    }

    fn deadline(&self) -> Option<Instant> {
        self.run.as_ref().map(|run| run.deadline)
    }

    /// Project the state into an `AppSnapshot` for the view.
    pub fn build_snapshot(&self) -> AppSnapshot {
        let participant_count = self.roster.participant_count();
        let shuffling = self.is_shuffling();
        let can_shuffle = participant_count >= MIN_PARTICIPANTS && !shuffling;
        let can_reset_ranking = shuffling || !self.display_order.is_empty();
        let can_reset_all = participant_count > 0 || can_reset_ranking;
        let status = if shuffling {
            RunStatus::Shuffling
        } else if !self.final_order.is_empty() {
            RunStatus::Locked
        } else {
            RunStatus::Waiting
        };

        AppSnapshot {
            slots: self.roster.slots().to_vec(),
            display_order: self.display_order.clone(),
            final_order: self.final_order.clone(),
            shuffling,
            participant_count,
            can_shuffle,
            can_reset_ranking,
            can_reset_all,
            status,
        }
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the main application event loop.
///
/// Multiplexes the command channel with the active run's two deadlines using
/// `tokio::select!`. When no run is active both timer arms park on pending
/// futures, so the loop only wakes for commands.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("application event loop started");

    loop {
        let next_tick = state.next_tick();
        let deadline = state.deadline();

        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        handle_command(&mut state, cmd, &ui_tx).await;
                    }
                    None => {
                        info!("command channel closed, shutting down");
                        break;
                    }
                }
            }

            _ = wait_until(next_tick) => {
                state.on_tick();
                let _ = ui_tx
                    .send(UiUpdate::DisplayOrder(state.display_order.clone()))
                    .await;
            }

            _ = wait_until(deadline) => {
                state.on_finalize();
                let _ = ui_tx
                    .send(UiUpdate::Snapshot(Box::new(state.build_snapshot())))
                    .await;
            }
        }
    }

    info!("application event loop exiting");
    Ok(())
}

/// Sleep until the given deadline, or forever when there is none.
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Apply a user command. Publishes a snapshot only when the command actually
/// changed state; the guarded no-ops publish nothing.
async fn handle_command(state: &mut AppState, cmd: UserCommand, ui_tx: &mpsc::Sender<UiUpdate>) {
    let changed = match cmd {
        UserCommand::EditSlot { index, text } => {
            state.edit_slot(index, &text);
            true
        }
        UserCommand::StartShuffle => state.start_shuffle(),
        UserCommand::ResetRanking => {
            state.reset_ranking();
            true
        }
        UserCommand::ResetAll => {
            state.reset_all();
            true
        }
        // Handled in the main loop.
        UserCommand::Quit => false,
    };

    if changed {
        let _ = ui_tx
            .send(UiUpdate::Snapshot(Box::new(state.build_snapshot())))
            .await;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
