use serde::{Deserialize, Serialize};

use super::item::{Item, ItemId};
use crate::reminder::ReminderScheduler;

/// A named, ordered collection of items
///
/// Insertion order is display order and storage order. The name is a
/// label only; two lists may share one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct List {
    name: String,
    #[serde(default)]
    items: Vec<Item>,
}

impl List {
    /// Create an empty list
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub(crate) fn item_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    /// Number of items not yet checked off
    pub fn unchecked_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_checked()).count()
    }

    /// Largest item id held by this list, if any
    pub fn max_item_id(&self) -> Option<ItemId> {
        self.items.iter().map(Item::id).max()
    }

    /// Append an item and return a reference to it
    ///
    /// Scheduling the item's reminder is the caller's job.
    pub fn add_item(&mut self, item: Item) -> &Item {
        self.items.push(item);
        let last = self.items.len() - 1;
        &self.items[last]
    }

    /// Remove the item at `index`, cancelling its reminder
    ///
    /// # Returns
    /// The removed item, or `None` if `index` is out of range
    pub fn remove_item<S>(&mut self, index: usize, scheduler: &mut S) -> Option<Item>
    where
        S: ReminderScheduler + ?Sized,
    {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        item.cancel_reminder(scheduler);
        Some(item)
    }

    /// Remove every item, cancelling each reminder
    ///
    /// # Returns
    /// The removed items in their original order
    pub fn clear_items<S>(&mut self, scheduler: &mut S) -> Vec<Item>
    where
        S: ReminderScheduler + ?Sized,
    {
        let items = std::mem::take(&mut self.items);
        for item in &items {
            item.cancel_reminder(scheduler);
        }
        items
    }
}
