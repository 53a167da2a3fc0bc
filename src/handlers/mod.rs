//! Command handlers for the trydo front end
//!
//! Each command is parsed by clap into [`Command`] and dispatched by [`run`].
//! Handlers live in separate files by the entity they act on. Every handler
//! that mutates the store saves it before returning.

mod items;
mod lists;
mod reminders;

use anyhow::Result;
use clap::Subcommand;

use crate::config::FileStore;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show every list
    Lists,
    /// Show the items of a list (the selected one by default)
    Show {
        /// List index
        list: Option<usize>,
    },
    /// Select a list
    Select {
        /// List index
        list: usize,
    },
    /// Clear the selection
    Deselect,
    /// Create a list
    AddList {
        /// Display name
        name: String,
    },
    /// Rename a list
    RenameList {
        /// List index
        list: usize,
        /// New display name
        name: String,
    },
    /// Delete a list and cancel the reminders of its items
    RemoveList {
        /// List index
        list: usize,
    },
    /// Add an item to a list (the selected one by default)
    AddItem {
        /// Item text
        text: String,
        /// List index
        #[arg(long)]
        list: Option<usize>,
        /// Due date: YYYY-MM-DD, "YYYY-MM-DD HH:MM" or RFC 3339
        #[arg(long)]
        due: Option<String>,
        /// Schedule a reminder at the due date
        #[arg(long)]
        remind: bool,
    },
    /// Edit an item's text and reminder
    EditItem {
        /// List index
        list: usize,
        /// Item index
        item: usize,
        /// New text
        #[arg(long)]
        text: Option<String>,
        /// New due date
        #[arg(long)]
        due: Option<String>,
        /// Turn the reminder on
        #[arg(long, conflicts_with = "no_remind")]
        remind: bool,
        /// Turn the reminder off
        #[arg(long)]
        no_remind: bool,
    },
    /// Check or uncheck an item
    Toggle {
        /// List index
        list: usize,
        /// Item index
        item: usize,
    },
    /// Set an item's reminder
    Remind {
        /// List index
        list: usize,
        /// Item index
        item: usize,
        /// Due date (keeps the current one if omitted)
        #[arg(long)]
        due: Option<String>,
        /// Turn the reminder off instead
        #[arg(long)]
        off: bool,
    },
    /// Delete an item and cancel its reminder
    RemoveItem {
        /// List index
        list: usize,
        /// Item index
        item: usize,
    },
    /// Deliver reminders whose time has come
    Due,
}

/// Run a command against the store
///
/// # Returns
/// Text to print on success
pub fn run(command: Command, store: &mut FileStore) -> Result<String> {
    match command {
        Command::Lists => Ok(lists::handle_lists(store)),
        Command::Show { list } => lists::handle_show(store, list),
        Command::Select { list } => lists::handle_select(store, list),
        Command::Deselect => Ok(lists::handle_deselect(store)),
        Command::AddList { name } => lists::handle_add_list(store, &name),
        Command::RenameList { list, name } => lists::handle_rename_list(store, list, &name),
        Command::RemoveList { list } => lists::handle_remove_list(store, list),
        Command::AddItem {
            text,
            list,
            due,
            remind,
        } => items::handle_add_item(store, list, &text, due.as_deref(), remind),
        Command::EditItem {
            list,
            item,
            text,
            due,
            remind,
            no_remind,
        } => {
            let should_remind = match (remind, no_remind) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            items::handle_edit_item(store, list, item, text.as_deref(), due.as_deref(), should_remind)
        }
        Command::Toggle { list, item } => items::handle_toggle(store, list, item),
        Command::Remind {
            list,
            item,
            due,
            off,
        } => reminders::handle_remind(store, list, item, due.as_deref(), off),
        Command::RemoveItem { list, item } => items::handle_remove_item(store, list, item),
        Command::Due => Ok(reminders::handle_due(store)),
    }
}

/// Resolve an explicit list index, falling back to the selected list
fn resolve_list(store: &FileStore, list: Option<usize>) -> Result<usize> {
    match list {
        Some(index) => {
            store.list(index)?;
            Ok(index)
        }
        None => match store.selected_list() {
            Some((index, _)) => Ok(index),
            None => anyhow::bail!("No list selected. Pass a list index or use `select` first."),
        },
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::open_store;
    use super::*;

    #[test]
    fn test_resolve_list_uses_selection() {
        let (mut store, _config, _dir) = open_store();
        assert_eq!(resolve_list(&store, None).unwrap(), 0);

        store.clear_selection();
        let err = resolve_list(&store, None).unwrap_err();
        assert!(err.to_string().contains("No list selected"));
    }

    #[test]
    fn test_resolve_list_rejects_unknown_index() {
        let (store, _config, _dir) = open_store();
        assert!(resolve_list(&store, Some(3)).is_err());
    }

    #[test]
    fn test_run_dispatches_add_list() {
        let (mut store, _config, _dir) = open_store();
        let output = run(
            Command::AddList {
                name: "Work".to_string(),
            },
            &mut store,
        )
        .unwrap();
        assert!(output.contains("Work"));
        assert_eq!(store.lists().len(), 2);
    }
}
