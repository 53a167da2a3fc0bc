//! Reminder handlers

use std::collections::HashSet;

use anyhow::Result;
use chrono::Utc;
use tracing::warn;

use crate::config::FileStore;
use crate::formatting;
use crate::validation;

/// Turn an item's reminder on (optionally moving its due date) or off
pub fn handle_remind(
    store: &mut FileStore,
    list: usize,
    item: usize,
    due: Option<&str>,
    off: bool,
) -> Result<String> {
    let due_date = match due {
        Some(input) => validation::parse_due_date(input)?,
        None => store.item(list, item)?.due_date(),
    };

    let updated = store.set_reminder(list, item, !off, due_date)?;
    let id = updated.id();
    let scheduled = updated.wants_reminder(Utc::now());
    store.save();

    Ok(match (off, scheduled) {
        (true, _) => format!("Reminder cancelled for item ID: {}", id),
        (false, true) => format!(
            "Reminder set for item ID: {} at {}",
            id,
            formatting::format_timestamp(due_date)
        ),
        (false, false) => format!(
            "Due date for item ID: {} is not in the future, no reminder scheduled",
            id
        ),
    })
}

/// Deliver every queued reminder whose time has passed
///
/// Reminders whose item is no longer in any list are dropped from the queue
/// without being shown.
pub fn handle_due(store: &mut FileStore) -> String {
    let known: HashSet<_> = store
        .lists()
        .iter()
        .flat_map(|list| list.items().iter().map(|item| item.id()))
        .collect();

    let mut delivered = store.scheduler_mut().take_due(Utc::now());
    delivered.retain(|reminder| {
        let live = known.contains(&reminder.id);
        if !live {
            warn!(id = reminder.id, "Dropping reminder for an item no list contains");
        }
        live
    });
    formatting::format_reminders(&delivered)
}
