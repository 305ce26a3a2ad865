//! Short-lived per-conversation state for multi-turn interactions.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Tracks which conversations are mid-edit and which expense they target.
///
/// At most one entry per conversation; a new selection overwrites the
/// previous one. State is process-local and lost on restart. Entries can
/// optionally expire after a TTL, in which case an abandoned edit is
/// treated as absent instead of lingering forever.
#[derive(Debug, Default)]
pub struct PendingInteractions {
    entries: HashMap<i64, PendingEdit>,
    ttl: Option<Duration>,
}

#[derive(Debug, Clone, Copy)]
struct PendingEdit {
    expense_id: i64,
    created_at: Instant,
}

impl PendingInteractions {
    /// Tracker without expiration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker whose entries expire `ttl` after creation.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl: Some(ttl),
        }
    }

    /// Arm an edit for `chat` targeting `expense_id`, replacing any
    /// previous pending edit for that conversation.
    pub fn begin(&mut self, chat: i64, expense_id: i64) {
        self.entries.insert(
            chat,
            PendingEdit {
                expense_id,
                created_at: Instant::now(),
            },
        );
    }

    /// The expense the conversation is currently editing, if any. Expired
    /// entries are pruned here.
    pub fn get(&mut self, chat: i64) -> Option<i64> {
        let entry = self.entries.get(&chat).copied()?;
        if let Some(ttl) = self.ttl {
            if entry.created_at.elapsed() > ttl {
                self.entries.remove(&chat);
                return None;
            }
        }
        Some(entry.expense_id)
    }

    /// Drop the pending edit for `chat`, if present.
    pub fn clear(&mut self, chat: i64) {
        self.entries.remove(&chat);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_get_clear_roundtrip() {
        let mut pending = PendingInteractions::new();
        assert_eq!(pending.get(10), None);

        pending.begin(10, 42);
        assert_eq!(pending.get(10), Some(42));
        // reading does not consume
        assert_eq!(pending.get(10), Some(42));

        pending.clear(10);
        assert_eq!(pending.get(10), None);
    }

    #[test]
    fn new_selection_overwrites_previous() {
        let mut pending = PendingInteractions::new();
        pending.begin(10, 42);
        pending.begin(10, 99);
        assert_eq!(pending.get(10), Some(99));
    }

    #[test]
    fn conversations_are_independent() {
        let mut pending = PendingInteractions::new();
        pending.begin(10, 42);
        assert_eq!(pending.get(11), None);
        pending.clear(11);
        assert_eq!(pending.get(10), Some(42));
    }

    #[test]
    fn entries_expire_after_ttl() {
        let mut pending = PendingInteractions::with_ttl(Duration::from_millis(0));
        pending.begin(10, 42);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(pending.get(10), None);
    }

    #[test]
    fn entries_survive_within_ttl() {
        let mut pending = PendingInteractions::with_ttl(Duration::from_secs(600));
        pending.begin(10, 42);
        assert_eq!(pending.get(10), Some(42));
    }
}
