//! Item handlers

use anyhow::Result;
use chrono::Utc;

use super::resolve_list;
use crate::config::FileStore;
use crate::formatting;
use crate::validation;

pub fn handle_add_item(
    store: &mut FileStore,
    list: Option<usize>,
    text: &str,
    due: Option<&str>,
    remind: bool,
) -> Result<String> {
    let index = resolve_list(store, list)?;
    let due_date = match due {
        Some(input) => validation::parse_due_date(input)?,
        None => Utc::now(),
    };

    let item = store.add_item(index, text, remind, due_date)?;
    let id = item.id();
    let scheduled = item.wants_reminder(Utc::now());
    store.save();

    let mut message = format!("Item created with ID: {} in list [{}]", id, index);
    if remind && !scheduled {
        message.push_str("\nDue date is not in the future, no reminder scheduled");
    }
    Ok(message)
}

/// Commit an edit, keeping every field that was not given
pub fn handle_edit_item(
    store: &mut FileStore,
    list: usize,
    item: usize,
    text: Option<&str>,
    due: Option<&str>,
    should_remind: Option<bool>,
) -> Result<String> {
    let current = store.item(list, item)?.clone();
    let due_date = match due {
        Some(input) => validation::parse_due_date(input)?,
        None => current.due_date(),
    };
    let text = text.unwrap_or(current.text());
    let should_remind = should_remind.unwrap_or(current.should_remind());

    let updated = store.update_item(list, item, text, should_remind, due_date)?;
    let line = formatting::format_item(item, updated);
    store.save();
    Ok(format!("Item updated:\n{}", line))
}

pub fn handle_toggle(store: &mut FileStore, list: usize, item: usize) -> Result<String> {
    let checked = store.toggle_checked(list, item)?.is_checked();
    store.save();
    Ok(if checked {
        format!("Item [{}] checked", item)
    } else {
        format!("Item [{}] unchecked", item)
    })
}

pub fn handle_remove_item(store: &mut FileStore, list: usize, item: usize) -> Result<String> {
    let removed = store.remove_item(list, item)?;
    store.save();
    Ok(format!("Item deleted: {} (ID: {})", removed.text(), removed.id()))
}
