//! To-do domain models
//!
//! This module contains the data structures persisted in the list file:
//! - `item`: a single to-do entry and its reminder lifecycle
//! - `list`: a named, ordered collection of items

mod item;
mod list;

pub use item::{Item, ItemId};
pub use list::List;
