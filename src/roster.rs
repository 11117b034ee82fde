// The ten name slots and the participants derivation.
//
// Slot position is the durable identity ("Person N"); the roster always has
// exactly MAX_PARTICIPANTS slots, empty or not. Participants are the trimmed,
// non-empty slot values in slot order.

/// Number of name slots. The roster always has exactly this many.
pub const MAX_PARTICIPANTS: usize = 10;

/// Per-slot text cap, counted in chars. Enforced on every slot write.
pub const NAME_MAX_CHARS: usize = 32;

/// Minimum number of participants required to start a shuffle.
pub const MIN_PARTICIPANTS: usize = 2;

/// The fixed set of name slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    slots: Vec<String>,
}

impl Default for Roster {
    fn default() -> Self {
        Roster::new()
    }
}

impl Roster {
    /// Create a roster with MAX_PARTICIPANTS empty slots.
    pub fn new() -> Self {
        Roster {
            slots: vec![String::new(); MAX_PARTICIPANTS],
        }
    }

    /// All slot values in position order, empty entries included.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Write a slot. Any string is accepted; text beyond NAME_MAX_CHARS chars
    /// is truncated. Out-of-range indices are ignored (the input layer only
    /// produces 0..MAX_PARTICIPANTS).
    pub fn set_slot(&mut self, index: usize, text: &str) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = text.chars().take(NAME_MAX_CHARS).collect();
        }
    }

    /// Reset every slot to empty.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    /// The trimmed, non-empty slot values in slot order.
    pub fn participants(&self) -> Vec<String> {
        self.slots
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string())
            .collect()
    }

    /// Number of participants (trimmed, non-empty slots).
    pub fn participant_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|name| !name.trim().is_empty())
            .count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
