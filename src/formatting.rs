//! Formatting helper functions
//!
//! Plain-text rendering of lists, items and delivered reminders for the
//! command-line front end.

use chrono::{DateTime, Local, Utc};

use crate::model::{Item, List};
use crate::reminder::Reminder;

/// Render a timestamp in local time, minute precision
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Format the list overview
///
/// # Arguments
/// * `lists` - Every list in store order
/// * `selected` - Index of the selected list, if any
///
/// # Returns
/// One line per list with its index and remaining item count
pub fn format_lists(lists: &[List], selected: Option<usize>) -> String {
    if lists.is_empty() {
        return "No lists".to_string();
    }

    let mut result = String::new();
    for (index, list) in lists.iter().enumerate() {
        let marker = if selected == Some(index) { "*" } else { " " };
        let remaining = match (list.len(), list.unchecked_count()) {
            (0, _) => "no items".to_string(),
            (_, 0) => "all done".to_string(),
            (_, n) => format!("{} remaining", n),
        };
        result.push_str(&format!("{} [{}] {} ({})\n", marker, index, list.name(), remaining));
    }
    result
}

/// Format a single item line
pub fn format_item(index: usize, item: &Item) -> String {
    let check = if item.is_checked() { "x" } else { " " };
    let mut line = format!("  [{}] [{}] {}", index, check, item.text());
    if item.should_remind() {
        line.push_str(&format!(
            " (remind {}, id {})",
            format_timestamp(item.due_date()),
            item.id()
        ));
    } else {
        line.push_str(&format!(" (due {}, id {})", format_timestamp(item.due_date()), item.id()));
    }
    line
}

/// Format a list with all of its items
pub fn format_list(index: usize, list: &List) -> String {
    let mut result = format!("[{}] {}\n", index, list.name());
    if list.is_empty() {
        result.push_str("  (empty)\n");
        return result;
    }
    for (item_index, item) in list.items().iter().enumerate() {
        result.push_str(&format_item(item_index, item));
        result.push('\n');
    }
    result
}

/// Format reminders that have fired
pub fn format_reminders(reminders: &[Reminder]) -> String {
    if reminders.is_empty() {
        return "No reminders due".to_string();
    }

    let mut result = String::new();
    for reminder in reminders {
        result.push_str(&format!(
            "{} {} ({})\n",
            reminder.title,
            reminder.body,
            format_timestamp(reminder.fire_at)
        ));
    }
    result
}
