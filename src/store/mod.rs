//! The root aggregate owning every list
//!
//! `Store` holds the lists in memory and persists them through a
//! [`ListFile`]. Selection state and the item id counter live in an injected
//! [`Preferences`] backend, and reminder side effects go to an injected
//! [`ReminderScheduler`]. List operations are in `lists.rs`, item operations
//! in `items.rs`.

mod items;
mod lists;

use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::model::{Item, ItemId, List};
use crate::preferences::{
    DEFAULT_FIRST_TIME_LAUNCH, DEFAULT_NEXT_ITEM_ID, DEFAULT_SELECTED_LIST_INDEX,
    FIRST_TIME_LAUNCH, NEXT_ITEM_ID, PrefValue, Preferences, SELECTED_LIST_INDEX,
};
use crate::reminder::ReminderScheduler;
use crate::storage::ListFile;

/// Name of the list seeded on first launch
pub const FIRST_LIST_NAME: &str = "List";

/// Every list, plus selection and id state
///
/// All mutation goes through `&mut self`, so the read-then-write of the id
/// counter cannot interleave with another caller.
pub struct Store<P: Preferences, S: ReminderScheduler> {
    lists: Vec<List>,
    list_file: ListFile,
    preferences: P,
    scheduler: S,
}

impl<P: Preferences, S: ReminderScheduler> Store<P, S> {
    /// Load the store
    ///
    /// A missing or unreadable list file yields an empty collection. On the
    /// first launch of an installation a single empty list is seeded and
    /// selected.
    ///
    /// # Arguments
    /// * `list_file` - Durable list storage
    /// * `preferences` - Backend for selection, first-launch flag and id counter
    /// * `scheduler` - Notification collaborator
    pub fn load(list_file: ListFile, preferences: P, scheduler: S) -> Self {
        let lists = match list_file.load() {
            Ok(lists) => lists,
            Err(e) => {
                warn!(path = %list_file.file_path().display(), error = format!("{e:#}"), "Failed to load lists, starting empty");
                Vec::new()
            }
        };
        debug!(count = lists.len(), "Loaded lists");

        let mut store = Self {
            lists,
            list_file,
            preferences,
            scheduler,
        };
        store.repair_item_counter();
        store.handle_first_time();
        store
    }

    /// Persist every list
    ///
    /// Best effort: a failure is logged and the in-memory state stays
    /// authoritative.
    pub fn save(&self) {
        match self.list_file.save(&self.lists) {
            Ok(()) => debug!(count = self.lists.len(), "Saved lists"),
            Err(e) => {
                warn!(path = %self.list_file.file_path().display(), error = format!("{e:#}"), "Failed to save lists");
            }
        }
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    /// List at `index`
    pub fn list(&self, index: usize) -> Result<&List, StoreError> {
        self.lists.get(index).ok_or(StoreError::ListOutOfRange {
            index,
            len: self.lists.len(),
        })
    }

    /// Item at `item` within list `list`
    pub fn item(&self, list: usize, item: usize) -> Result<&Item, StoreError> {
        let owner = self.list(list)?;
        owner.item(item).ok_or(StoreError::ItemOutOfRange {
            list,
            index: item,
            len: owner.len(),
        })
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn list_file(&self) -> &ListFile {
        &self.list_file
    }

    /// Hand out the next item id and advance the persisted counter
    ///
    /// Fails with `StoreError::IdsExhausted` once the counter cannot advance;
    /// the counter is left untouched so no id is ever handed out twice.
    pub fn allocate_item_id(&mut self) -> Result<ItemId, StoreError> {
        let id = self.preferences.int_or(NEXT_ITEM_ID, DEFAULT_NEXT_ITEM_ID);
        let Some(next) = id.checked_add(1) else {
            warn!(id, "Item id counter exhausted");
            return Err(StoreError::IdsExhausted);
        };
        self.preferences.set(NEXT_ITEM_ID, PrefValue::Int(next));
        Ok(id)
    }

    /// Value the next call to `allocate_item_id` will return
    pub fn next_item_id(&self) -> ItemId {
        self.preferences.int_or(NEXT_ITEM_ID, DEFAULT_NEXT_ITEM_ID)
    }

    /// Stored selection, -1 meaning none. Not range checked.
    pub fn selected_list_index(&self) -> i64 {
        self.preferences.int_or(SELECTED_LIST_INDEX, DEFAULT_SELECTED_LIST_INDEX)
    }

    pub fn set_selected_list_index(&mut self, index: i64) {
        self.preferences.set(SELECTED_LIST_INDEX, PrefValue::Int(index));
    }

    /// Forget the selection without touching any list
    pub fn clear_selection(&mut self) {
        self.set_selected_list_index(DEFAULT_SELECTED_LIST_INDEX);
    }

    /// The selected list, or `None` when nothing valid is selected
    ///
    /// A stored index that no longer points at a list counts as no selection.
    pub fn selected_list(&self) -> Option<(usize, &List)> {
        let index = usize::try_from(self.selected_list_index()).ok()?;
        self.lists.get(index).map(|list| (index, list))
    }

    pub fn is_first_time_launch(&self) -> bool {
        self.preferences.bool_or(FIRST_TIME_LAUNCH, DEFAULT_FIRST_TIME_LAUNCH)
    }

    fn handle_first_time(&mut self) {
        if !self.is_first_time_launch() {
            return;
        }

        info!(name = FIRST_LIST_NAME, "First launch, seeding initial list");
        self.lists.push(List::new(FIRST_LIST_NAME));
        let index = self.lists.len() as i64 - 1;
        self.set_selected_list_index(index);
        self.preferences.set(FIRST_TIME_LAUNCH, PrefValue::Bool(false));
        self.save();
    }

    /// Raise the id counter above every persisted id
    ///
    /// Only matters when the preferences were lost while the list file
    /// survived. The counter is never lowered.
    fn repair_item_counter(&mut self) {
        let Some(max_id) = self.lists.iter().filter_map(List::max_item_id).max() else {
            return;
        };
        let next = self.next_item_id();
        if next > max_id {
            return;
        }
        match max_id.checked_add(1) {
            Some(repaired) => {
                warn!(next, max_id, "Item id counter behind persisted ids, advancing");
                self.preferences.set(NEXT_ITEM_ID, PrefValue::Int(repaired));
            }
            None => {
                warn!(next, max_id, "Persisted item id leaves no room for the counter, leaving it unchanged");
            }
        }
    }
}

/// Locate a mutable item by list and item index
fn locate_item(lists: &mut [List], list: usize, item: usize) -> Result<&mut Item, StoreError> {
    let len = lists.len();
    let owner = lists
        .get_mut(list)
        .ok_or(StoreError::ListOutOfRange { index: list, len })?;
    let len = owner.len();
    owner.item_mut(item).ok_or(StoreError::ItemOutOfRange {
        list,
        index: item,
        len,
    })
}
