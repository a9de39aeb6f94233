use uuid::Uuid;

use super::FoodLogEntry;

/// Log-retrieval collaborator. The host application owns persistence; the
/// engine only ever reads a user's full log set through this seam.
pub trait LogStore {
    /// All entries for one user, newest first.
    fn logs_for_user(&self, user_id: Uuid) -> Vec<FoodLogEntry>;
}

/// Plain in-memory store, used by tests and by hosts that already hold the
/// log set.
#[derive(Debug, Default)]
pub struct InMemoryLogStore {
    entries: Vec<FoodLogEntry>,
}

impl InMemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: FoodLogEntry) {
        self.entries.push(entry);
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LogStore for InMemoryLogStore {
    fn logs_for_user(&self, user_id: Uuid) -> Vec<FoodLogEntry> {
        let mut logs: Vec<FoodLogEntry> = self
            .entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        logs.sort_by(|a, b| b.logged_at.cmp(&a.logged_at));
        logs
    }
}
