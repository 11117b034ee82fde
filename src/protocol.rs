// Message types shared between the app orchestrator and the TUI.

/// User actions sent from the TUI to the app orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Replace the text of one name slot. `text` is the full new value,
    /// already capped at the slot char limit by the input layer.
    EditSlot { index: usize, text: String },
    /// Start a shuffle run. Silent no-op with fewer than two participants
    /// or while a run is already active.
    StartShuffle,
    /// Clear the display and final orders, cancelling any active run.
    /// Slots are left untouched.
    ResetRanking,
    /// ResetRanking plus clearing every name slot.
    ResetAll,
    /// Shut down.
    Quit,
}

/// Where the ranking currently stands, for the status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// No order yet (or the last one was reset).
    Waiting,
    /// A shuffle run is animating.
    Shuffling,
    /// A run completed; the final order is locked.
    Locked,
}

/// Full state projection pushed to the TUI on structural changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSnapshot {
    /// All ten slot values, empties included.
    pub slots: Vec<String>,
    /// The currently displayed order.
    pub display_order: Vec<String>,
    /// The locked order; empty unless a run completed since the last
    /// edit/reset.
    pub final_order: Vec<String>,
    /// True strictly between shuffle start and completion/cancellation.
    pub shuffling: bool,
    /// Trimmed, non-empty slot count.
    pub participant_count: usize,
    /// Primary action enabled: at least two participants and not running.
    pub can_shuffle: bool,
    /// Reset-ranking enabled: running, or a display order exists.
    pub can_reset_ranking: bool,
    /// Reset-all enabled: any slot has a name, or can_reset_ranking.
    pub can_reset_all: bool,
    pub status: RunStatus,
}

/// Updates pushed from the app orchestrator to the TUI.
///
/// Structural changes (edits, resets, shuffle start/finish) carry a full
/// snapshot; the per-tick republish during a run only carries the new
/// display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiUpdate {
    Snapshot(Box<AppSnapshot>),
    DisplayOrder(Vec<String>),
}
