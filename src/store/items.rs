//! Item operations on the store

use chrono::{DateTime, Utc};
use tracing::debug;

use super::{Store, locate_item};
use crate::error::StoreError;
use crate::model::Item;
use crate::preferences::Preferences;
use crate::reminder::ReminderScheduler;
use crate::validation::require_text;

impl<P: Preferences, S: ReminderScheduler> Store<P, S> {
    /// Create an item and append it to a list
    ///
    /// The item gets a freshly allocated id and its reminder is scheduled
    /// before it is appended.
    ///
    /// # Arguments
    /// * `list` - Index of the owning list
    /// * `text` - Item text, must not be blank
    /// * `should_remind` - Whether to schedule a reminder
    /// * `due_date` - When the item is due
    ///
    /// # Returns
    /// The appended item
    pub fn add_item(
        &mut self,
        list: usize,
        text: &str,
        should_remind: bool,
        due_date: DateTime<Utc>,
    ) -> Result<&Item, StoreError> {
        require_text(text)?;
        self.list(list)?;

        let mut item = Item::new(self.allocate_item_id()?, text);
        item.set_reminder(should_remind, due_date, Utc::now(), &mut self.scheduler);
        debug!(id = item.id(), list, "Adding item");

        Ok(self.lists[list].add_item(item))
    }

    /// Commit an edited item: text and reminder fields together
    ///
    /// The reminder is recomputed afterwards so its body carries the new text.
    pub fn update_item(
        &mut self,
        list: usize,
        item: usize,
        text: &str,
        should_remind: bool,
        due_date: DateTime<Utc>,
    ) -> Result<&Item, StoreError> {
        require_text(text)?;
        let target = locate_item(&mut self.lists, list, item)?;
        target.set_text(text);
        target.set_reminder(should_remind, due_date, Utc::now(), &mut self.scheduler);
        Ok(target)
    }

    /// Flip an item's checked flag
    pub fn toggle_checked(&mut self, list: usize, item: usize) -> Result<&Item, StoreError> {
        let target = locate_item(&mut self.lists, list, item)?;
        target.toggle_checked();
        Ok(target)
    }

    /// Set an item's reminder fields and recompute its reminder
    ///
    /// Any pending reminder is cancelled first; a new one is scheduled only
    /// if `should_remind` is set and `due_date` lies in the future.
    pub fn set_reminder(
        &mut self,
        list: usize,
        item: usize,
        should_remind: bool,
        due_date: DateTime<Utc>,
    ) -> Result<&Item, StoreError> {
        let target = locate_item(&mut self.lists, list, item)?;
        target.set_reminder(should_remind, due_date, Utc::now(), &mut self.scheduler);
        Ok(target)
    }

    /// Remove an item, cancelling its reminder
    ///
    /// # Returns
    /// The removed item
    pub fn remove_item(&mut self, list: usize, item: usize) -> Result<Item, StoreError> {
        let len = self.lists.len();
        let owner = self
            .lists
            .get_mut(list)
            .ok_or(StoreError::ListOutOfRange { index: list, len })?;
        let count = owner.len();
        let removed = owner
            .remove_item(item, &mut self.scheduler)
            .ok_or(StoreError::ItemOutOfRange {
                list,
                index: item,
                len: count,
            })?;
        debug!(id = removed.id(), list, "Removed item");
        Ok(removed)
    }
}
