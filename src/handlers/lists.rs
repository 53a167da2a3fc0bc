//! List handlers

use anyhow::Result;

use super::resolve_list;
use crate::config::FileStore;
use crate::formatting;

pub fn handle_lists(store: &FileStore) -> String {
    let selected = store.selected_list().map(|(index, _)| index);
    formatting::format_lists(store.lists(), selected)
}

pub fn handle_show(store: &FileStore, list: Option<usize>) -> Result<String> {
    let index = resolve_list(store, list)?;
    Ok(formatting::format_list(index, store.list(index)?))
}

/// Select a list, refusing indices that do not exist
pub fn handle_select(store: &mut FileStore, list: usize) -> Result<String> {
    let name = store.list(list)?.name().to_string();
    store.set_selected_list_index(list as i64);
    Ok(format!("Selected list [{}] {}", list, name))
}

pub fn handle_deselect(store: &mut FileStore) -> String {
    store.clear_selection();
    "Selection cleared".to_string()
}

pub fn handle_add_list(store: &mut FileStore, name: &str) -> Result<String> {
    store.add_list(name)?;
    let index = store.lists().len() - 1;
    store.save();
    Ok(format!("List created: [{}] {}", index, name))
}

pub fn handle_rename_list(store: &mut FileStore, list: usize, name: &str) -> Result<String> {
    store.rename_list(list, name)?;
    store.save();
    Ok(format!("List [{}] renamed to {}", list, name))
}

pub fn handle_remove_list(store: &mut FileStore, list: usize) -> Result<String> {
    let removed = store.remove_list(list)?;
    store.save();
    Ok(format!("List deleted: {}", removed.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::open_store;

    #[test]
    fn test_select_unknown_list_keeps_selection() {
        let (mut store, _config, _dir) = open_store();
        assert!(handle_select(&mut store, 2).is_err());
        assert_eq!(store.selected_list_index(), 0);
    }

    #[test]
    fn test_remove_list_is_persisted() {
        let (mut store, config, _dir) = open_store();
        handle_add_list(&mut store, "Work").unwrap();
        handle_remove_list(&mut store, 0).unwrap();

        let reopened = config.open_store();
        assert_eq!(reopened.lists().len(), 1);
        assert_eq!(reopened.lists()[0].name(), "Work");
    }

    #[test]
    fn test_remove_list_keeps_selection_on_same_list() {
        let (mut store, config, _dir) = open_store();
        handle_add_list(&mut store, "Work").unwrap();
        handle_add_list(&mut store, "Home").unwrap();
        handle_select(&mut store, 1).unwrap();

        handle_remove_list(&mut store, 0).unwrap();
        let reopened = config.open_store();
        assert_eq!(reopened.selected_list().unwrap().1.name(), "Work");

        handle_remove_list(&mut store, 0).unwrap();
        assert_eq!(store.selected_list_index(), -1);
    }

    #[test]
    fn test_show_after_deselect_requires_index() {
        let (mut store, _config, _dir) = open_store();
        handle_deselect(&mut store);
        assert!(handle_show(&store, None).is_err());
        assert!(handle_show(&store, Some(0)).unwrap().contains("(empty)"));
    }
}
