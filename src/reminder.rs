//! Reminder scheduling
//!
//! The core never talks to a notification service directly. It calls a
//! [`ReminderScheduler`] with fire-and-forget `schedule`/`cancel` requests
//! keyed by item id. Two implementations live here: an in-memory pending
//! set and a file-backed queue used by the command-line front end.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::model::{Item, ItemId};
use crate::storage::write_atomic;

/// Title shown on every reminder
pub const REMINDER_TITLE: &str = "Reminder:";

/// A one-shot notification request for an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ItemId,
    pub fire_at: DateTime<Utc>,
    pub title: String,
    pub body: String,
}

impl Reminder {
    /// Build the reminder for an item
    ///
    /// The fire time is the due date truncated to the minute.
    pub fn for_item(item: &Item) -> Self {
        let due = item.due_date();
        let fire_at = due
            .with_second(0)
            .and_then(|d| d.with_nanosecond(0))
            .unwrap_or(due);
        Self {
            id: item.id(),
            fire_at,
            title: REMINDER_TITLE.to_string(),
            body: item.text().to_string(),
        }
    }
}

/// Notification collaborator
///
/// Implementations must treat `schedule` for an id that is already pending
/// as a replacement, and `cancel` for an unknown id as a no-op.
pub trait ReminderScheduler {
    fn schedule(&mut self, reminder: Reminder);
    fn cancel(&mut self, id: ItemId);
}

/// In-memory set of pending reminders, at most one per item id
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PendingReminders {
    pending: BTreeMap<ItemId, Reminder>,
}

impl PendingReminders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ItemId) -> Option<&Reminder> {
        self.pending.get(&id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending reminders ordered by item id
    pub fn iter(&self) -> impl Iterator<Item = &Reminder> {
        self.pending.values()
    }

    /// Remove and return every reminder whose fire time is at or before `now`
    ///
    /// # Returns
    /// The delivered reminders, earliest first
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<Reminder> {
        let due_ids: Vec<ItemId> = self
            .pending
            .values()
            .filter(|r| r.fire_at <= now)
            .map(|r| r.id)
            .collect();

        let mut due: Vec<Reminder> = due_ids
            .into_iter()
            .filter_map(|id| self.pending.remove(&id))
            .collect();
        due.sort_by_key(|r| (r.fire_at, r.id));
        due
    }
}

impl ReminderScheduler for PendingReminders {
    fn schedule(&mut self, reminder: Reminder) {
        self.pending.insert(reminder.id, reminder);
    }

    fn cancel(&mut self, id: ItemId) {
        self.pending.remove(&id);
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ReminderDocument {
    #[serde(default)]
    reminders: Vec<Reminder>,
}

/// Pending reminders persisted to a TOML file
///
/// Every change is written through. Read and write failures are logged and
/// otherwise ignored, matching the fire-and-forget contract.
///
/// The queue file is written as soon as the store schedules or cancels,
/// which is before the store saves its list file. If that later save fails,
/// the queue can hold reminders for items no saved list contains; delivery
/// has to check ids against the loaded lists.
pub struct FileScheduler {
    file_path: PathBuf,
    pending: PendingReminders,
}

impl FileScheduler {
    /// Open the queue at `file_path`, starting empty if it cannot be read
    pub fn open(file_path: impl AsRef<Path>) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        let mut pending = PendingReminders::new();

        if file_path.exists() {
            let parsed = fs::read_to_string(&file_path)
                .map_err(anyhow::Error::from)
                .and_then(|content| {
                    toml::from_str::<ReminderDocument>(&content).map_err(anyhow::Error::from)
                });
            match parsed {
                Ok(document) => {
                    for reminder in document.reminders {
                        pending.schedule(reminder);
                    }
                }
                Err(e) => {
                    warn!(path = %file_path.display(), error = %e, "Failed to read pending reminders");
                }
            }
        }

        Self { file_path, pending }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn pending(&self) -> &PendingReminders {
        &self.pending
    }

    /// Deliver reminders due at `now`, removing them from the queue
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<Reminder> {
        let due = self.pending.take_due(now);
        if !due.is_empty() {
            self.persist();
        }
        due
    }

    fn persist(&self) {
        let document = ReminderDocument {
            reminders: self.pending.iter().cloned().collect(),
        };
        let result = toml::to_string_pretty(&document)
            .map_err(anyhow::Error::from)
            .and_then(|content| write_atomic(&self.file_path, &content));
        if let Err(e) = result {
            warn!(path = %self.file_path.display(), error = %e, "Failed to write pending reminders");
        }
    }
}

impl ReminderScheduler for FileScheduler {
    fn schedule(&mut self, reminder: Reminder) {
        debug!(id = reminder.id, fire_at = %reminder.fire_at, "Scheduling reminder");
        self.pending.schedule(reminder);
        self.persist();
    }

    fn cancel(&mut self, id: ItemId) {
        if self.pending.get(id).is_some() {
            debug!(id, "Cancelling reminder");
            self.pending.cancel(id);
            self.persist();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn reminder(id: ItemId, fire_at: DateTime<Utc>) -> Reminder {
        Reminder {
            id,
            fire_at,
            title: REMINDER_TITLE.to_string(),
            body: format!("item {}", id),
        }
    }

    #[test]
    fn test_for_item_truncates_to_minute() {
        let now = Utc::now();
        let due = Utc.with_ymd_and_hms(2031, 5, 17, 9, 45, 33).unwrap();
        let mut item = Item::new(12, "Water plants");
        let mut pending = PendingReminders::new();
        item.set_reminder(true, due, now, &mut pending);

        let r = Reminder::for_item(&item);
        assert_eq!(r.id, 12);
        assert_eq!(r.title, "Reminder:");
        assert_eq!(r.body, "Water plants");
        assert_eq!(r.fire_at, Utc.with_ymd_and_hms(2031, 5, 17, 9, 45, 0).unwrap());
    }

    #[test]
    fn test_schedule_same_id_replaces() {
        let now = Utc::now();
        let mut pending = PendingReminders::new();
        pending.schedule(reminder(1, now));
        pending.schedule(reminder(1, now + Duration::hours(1)));

        assert_eq!(pending.len(), 1);
        assert_eq!(pending.get(1).unwrap().fire_at, now + Duration::hours(1));
    }

    #[test]
    fn test_cancel_unknown_id_is_noop() {
        let mut pending = PendingReminders::new();
        pending.cancel(99);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_take_due_only_returns_past_reminders() {
        let now = Utc::now();
        let mut pending = PendingReminders::new();
        pending.schedule(reminder(1, now - Duration::minutes(1)));
        pending.schedule(reminder(2, now + Duration::minutes(1)));
        pending.schedule(reminder(3, now - Duration::minutes(5)));

        let due = pending.take_due(now);
        let ids: Vec<ItemId> = due.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(pending.len(), 1);
        assert!(pending.get(2).is_some());
    }

    #[test]
    fn test_file_scheduler_persists_between_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reminders.toml");
        let fire_at = Utc.with_ymd_and_hms(2030, 1, 1, 8, 0, 0).unwrap();

        let mut scheduler = FileScheduler::open(&path);
        scheduler.schedule(reminder(5, fire_at));
        scheduler.schedule(reminder(6, fire_at));
        scheduler.cancel(6);

        let reopened = FileScheduler::open(&path);
        assert_eq!(reopened.pending().len(), 1);
        assert_eq!(reopened.pending().get(5).unwrap().fire_at, fire_at);
    }

    #[test]
    fn test_file_scheduler_ignores_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reminders.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let scheduler = FileScheduler::open(&path);
        assert!(scheduler.pending().is_empty());
    }
}
