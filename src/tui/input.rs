// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the
// app orchestrator, or into local ViewState mutations (slot selection,
// edit mode, quit confirmation). Slot edits mutate the local echo and are
// forwarded as EditSlot commands carrying the full new text.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::ViewState;
use crate::protocol::UserCommand;
use crate::roster::{MAX_PARTICIPANTS, NAME_MAX_CHARS};

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app orchestrator. Returns `None` when the key press was handled locally
/// by mutating `ViewState` (selection, mode switches) or was ignored.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode (escape hatch)
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    // Quit confirmation mode: only y/q confirm, n/Esc cancel, everything else blocked
    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    // Edit mode: capture printable characters into the selected slot
    if view_state.edit_mode {
        return handle_edit_mode(key_event, view_state);
    }

    // Normal mode key dispatch
    match key_event.code {
        // Slot selection (wraps around)
        KeyCode::Up | KeyCode::Char('k') => {
            select_previous(view_state);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            select_next(view_state);
            None
        }

        // Enter edit mode on the selected slot
        KeyCode::Enter | KeyCode::Char('e') => {
            view_state.edit_mode = true;
            None
        }

        // Shuffle / reset actions. The app guards invalid starts itself, so
        // these are forwarded unconditionally.
        KeyCode::Char('s') | KeyCode::Char(' ') => Some(UserCommand::StartShuffle),
        KeyCode::Char('r') => Some(UserCommand::ResetRanking),
        KeyCode::Char('R') => Some(UserCommand::ResetAll),

        // Quit: enter confirmation mode instead of quitting immediately
        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }

        _ => None,
    }
}

/// Handle key events while in quit confirmation mode.
///
/// - `y` or `q` confirms quit (sends UserCommand::Quit)
/// - `n` or `Esc` cancels (returns to normal mode)
/// - All other keys are blocked (no-op)
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None, // Block all other input
    }
}

/// Handle key events while editing the selected slot.
///
/// - Printable characters append to the slot text (capped at NAME_MAX_CHARS)
/// - Backspace removes the last character
/// - Tab commits and moves to the next slot, staying in edit mode
/// - Enter or Esc leaves edit mode
///
/// Every actual text mutation is forwarded as an EditSlot command; the app
/// side cancels any active shuffle run on receipt.
fn handle_edit_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Enter | KeyCode::Esc => {
            view_state.edit_mode = false;
            None
        }
        KeyCode::Tab => {
            select_next(view_state);
            None
        }
        KeyCode::Backspace => {
            let index = view_state.selected_slot;
            if view_state.slots[index].pop().is_none() {
                return None;
            }
            Some(UserCommand::EditSlot {
                index,
                text: view_state.slots[index].clone(),
            })
        }
        KeyCode::Char(c) => {
            let index = view_state.selected_slot;
            if view_state.slots[index].chars().count() >= NAME_MAX_CHARS {
                return None;
            }
            view_state.slots[index].push(c);
            Some(UserCommand::EditSlot {
                index,
                text: view_state.slots[index].clone(),
            })
        }
        _ => None,
    }
}

fn select_previous(view_state: &mut ViewState) {
    view_state.selected_slot = if view_state.selected_slot == 0 {
        MAX_PARTICIPANTS - 1
    } else {
        view_state.selected_slot - 1
    };
}

fn select_next(view_state: &mut ViewState) {
    view_state.selected_slot = (view_state.selected_slot + 1) % MAX_PARTICIPANTS;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
