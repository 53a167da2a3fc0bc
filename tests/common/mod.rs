//! Common test utilities for integration tests

#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use tempfile::TempDir;
use trydo::{ItemId, ListFile, MemoryPreferences, Reminder, ReminderScheduler, Store};

/// A call received by [`RecordingScheduler`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Schedule(ItemId),
    Cancel(ItemId),
}

/// Scheduler that records every call and tracks live reminders
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    pub calls: Vec<Call>,
    pub live: BTreeMap<ItemId, Reminder>,
}

impl RecordingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedules_for(&self, id: ItemId) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == Call::Schedule(id))
            .count()
    }

    pub fn cancels_for(&self, id: ItemId) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == Call::Cancel(id))
            .count()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl ReminderScheduler for RecordingScheduler {
    fn schedule(&mut self, reminder: Reminder) {
        self.calls.push(Call::Schedule(reminder.id));
        self.live.insert(reminder.id, reminder);
    }

    fn cancel(&mut self, id: ItemId) {
        self.calls.push(Call::Cancel(id));
        self.live.remove(&id);
    }
}

pub type TestStore = Store<MemoryPreferences, RecordingScheduler>;

/// Create a store over a temporary list file and fresh preferences
pub fn get_test_store() -> (TestStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = open_test_store(&dir, MemoryPreferences::new());
    (store, dir)
}

/// Open a store in `dir` with the given preferences
pub fn open_test_store(dir: &TempDir, preferences: MemoryPreferences) -> TestStore {
    Store::load(
        ListFile::new(dir.path().join("Lists.toml")),
        preferences,
        RecordingScheduler::new(),
    )
}

pub fn in_one_hour() -> DateTime<Utc> {
    Utc::now() + Duration::hours(1)
}
