use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reminder::{Reminder, ReminderScheduler};

/// Identifier of an item, issued by the store's counter and never reused
pub type ItemId = i64;

/// A single to-do entry
///
/// The id is fixed at construction. Everything else is changed through
/// explicit setters; the reminder-relevant fields only change through
/// [`Item::set_reminder`], which also recomputes the scheduled reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    text: String,
    #[serde(default)]
    checked: bool,
    due_date: DateTime<Utc>,
    #[serde(default)]
    should_remind: bool,
}

impl Item {
    /// Create an unchecked item without a reminder, due now
    ///
    /// # Arguments
    /// * `id` - A freshly allocated id (see `Store::allocate_item_id`)
    /// * `text` - Text shown for the item
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            checked: false,
            due_date: Utc::now(),
            should_remind: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    pub fn should_remind(&self) -> bool {
        self.should_remind
    }

    /// Replace the item text
    ///
    /// A pending reminder keeps its old body until the next
    /// [`Item::reschedule`].
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Flip the checked flag. Reminders are unaffected.
    pub fn toggle_checked(&mut self) {
        self.checked = !self.checked;
    }

    /// Whether a reminder should be pending for this item at `now`
    pub fn wants_reminder(&self, now: DateTime<Utc>) -> bool {
        self.should_remind && self.due_date > now
    }

    /// Update the reminder fields and recompute the schedule
    ///
    /// # Arguments
    /// * `should_remind` - Whether the user asked to be reminded
    /// * `due_date` - When the item is due
    /// * `now` - Current time, used to skip reminders in the past
    /// * `scheduler` - Notification collaborator
    pub fn set_reminder<S>(
        &mut self,
        should_remind: bool,
        due_date: DateTime<Utc>,
        now: DateTime<Utc>,
        scheduler: &mut S,
    ) where
        S: ReminderScheduler + ?Sized,
    {
        self.should_remind = should_remind;
        self.due_date = due_date;
        self.reschedule(now, scheduler);
    }

    /// Cancel any pending reminder, then schedule a fresh one if wanted
    ///
    /// Calling this repeatedly leaves at most one reminder pending.
    pub fn reschedule<S>(&self, now: DateTime<Utc>, scheduler: &mut S)
    where
        S: ReminderScheduler + ?Sized,
    {
        scheduler.cancel(self.id);
        if self.wants_reminder(now) {
            scheduler.schedule(Reminder::for_item(self));
        }
    }

    /// Cancel any pending reminder for this item
    pub fn cancel_reminder<S>(&self, scheduler: &mut S)
    where
        S: ReminderScheduler + ?Sized,
    {
        scheduler.cancel(self.id);
    }
}
