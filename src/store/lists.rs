//! List operations on the store

use tracing::debug;

use super::Store;
use crate::error::StoreError;
use crate::model::List;
use crate::preferences::Preferences;
use crate::reminder::ReminderScheduler;
use crate::validation::require_text;

impl<P: Preferences, S: ReminderScheduler> Store<P, S> {
    /// Append a new empty list
    ///
    /// # Returns
    /// The new list; its index is `lists().len() - 1`
    pub fn add_list(&mut self, name: &str) -> Result<&List, StoreError> {
        require_text(name)?;
        self.lists.push(List::new(name));
        let index = self.lists.len() - 1;
        debug!(index, name, "Added list");
        Ok(&self.lists[index])
    }

    /// Rename the list at `index`
    pub fn rename_list(&mut self, index: usize, name: &str) -> Result<&List, StoreError> {
        require_text(name)?;
        let len = self.lists.len();
        let list = self
            .lists
            .get_mut(index)
            .ok_or(StoreError::ListOutOfRange { index, len })?;
        list.set_name(name);
        Ok(list)
    }

    /// Delete the list at `index`
    ///
    /// Every item's reminder is cancelled before the list leaves the store.
    /// The selection follows the list it pointed at: removing the selected
    /// list clears it, removing one above it shifts it down by one.
    ///
    /// # Returns
    /// The removed list, emptied of its items
    pub fn remove_list(&mut self, index: usize) -> Result<List, StoreError> {
        let len = self.lists.len();
        let list = self
            .lists
            .get_mut(index)
            .ok_or(StoreError::ListOutOfRange { index, len })?;
        let cancelled = list.clear_items(&mut self.scheduler);
        debug!(index, items = cancelled.len(), "Removing list");
        let removed = self.lists.remove(index);

        let selected = self.selected_list_index();
        if let Ok(selected) = usize::try_from(selected) {
            if selected == index {
                self.clear_selection();
            } else if index < selected {
                self.set_selected_list_index(selected as i64 - 1);
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::StoreError;
    use crate::preferences::MemoryPreferences;
    use crate::reminder::PendingReminders;
    use crate::storage::ListFile;
    use crate::store::Store;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    fn new_store(dir: &TempDir) -> Store<MemoryPreferences, PendingReminders> {
        Store::load(
            ListFile::new(dir.path().join("Lists.toml")),
            MemoryPreferences::new(),
            PendingReminders::new(),
        )
    }

    #[test]
    fn test_add_and_rename_list() {
        let dir = TempDir::new().unwrap();
        let mut store = new_store(&dir);

        store.add_list("Work").unwrap();
        assert_eq!(store.lists().len(), 2);

        let renamed = store.rename_list(1, "Office").unwrap();
        assert_eq!(renamed.name(), "Office");
    }

    #[test]
    fn test_blank_list_names_are_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = new_store(&dir);

        assert_eq!(store.add_list("").unwrap_err(), StoreError::EmptyText);
        assert_eq!(store.rename_list(0, " ").unwrap_err(), StoreError::EmptyText);
        assert_eq!(store.lists()[0].name(), "List");
    }

    #[test]
    fn test_duplicate_list_names_allowed() {
        let dir = TempDir::new().unwrap();
        let mut store = new_store(&dir);

        store.add_list("List").unwrap();
        assert_eq!(store.lists().len(), 2);
        assert_eq!(store.lists()[0].name(), store.lists()[1].name());
    }

    #[test]
    fn test_remove_list_cancels_item_reminders() {
        let dir = TempDir::new().unwrap();
        let mut store = new_store(&dir);
        let due = Utc::now() + Duration::hours(1);

        store.add_item(0, "A", true, due).unwrap();
        store.add_item(0, "B", false, due).unwrap();
        store.add_list("Keep").unwrap();
        store.add_item(1, "C", true, due).unwrap();
        assert_eq!(store.scheduler().len(), 2);

        let removed = store.remove_list(0).unwrap();
        assert_eq!(removed.name(), "List");
        assert!(removed.is_empty());
        assert_eq!(store.lists().len(), 1);
        assert_eq!(store.lists()[0].name(), "Keep");
        assert_eq!(store.scheduler().len(), 1);
        assert!(store.scheduler().get(2).is_some());
    }

    #[test]
    fn test_remove_list_shifts_selection_below_it() {
        let dir = TempDir::new().unwrap();
        let mut store = new_store(&dir);
        store.add_list("Work").unwrap();
        store.add_list("Home").unwrap();
        store.set_selected_list_index(2);

        store.remove_list(1).unwrap();
        assert_eq!(store.selected_list_index(), 1);
        assert_eq!(store.selected_list().unwrap().1.name(), "Home");

        // Removing a list after the selection leaves it alone
        store.add_list("Later").unwrap();
        store.remove_list(2).unwrap();
        assert_eq!(store.selected_list_index(), 1);
    }

    #[test]
    fn test_remove_list_out_of_range() {
        let dir = TempDir::new().unwrap();
        let mut store = new_store(&dir);

        assert_eq!(
            store.remove_list(1).unwrap_err(),
            StoreError::ListOutOfRange { index: 1, len: 1 }
        );
    }
}
