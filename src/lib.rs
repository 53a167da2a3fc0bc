//! TryDo Library
//!
//! Nested to-do lists whose items carry a due date and an optional one-shot
//! reminder. The library owns the persistence and reminder lifecycle; the
//! user interface and the notification service are collaborators that talk
//! to it through plain operations and the [`ReminderScheduler`] trait.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Domain Layer**: `model` - `Item` and `List`
//! - **Store Layer**: `store` - the root aggregate with id allocation,
//!   selection and every mutation that has a reminder side effect
//! - **Persistence Layer**: `storage`, `preferences`, `reminder` - TOML list
//!   file, key/value preferences and the pending reminder queue
//!
//! The `handlers` module drives the store from the command line.
//!
//! # Example
//!
//! ```no_run
//! use chrono::{Duration, Utc};
//! use trydo::{ListFile, MemoryPreferences, PendingReminders, Store, StoreError};
//!
//! fn main() -> Result<(), StoreError> {
//!     let mut store = Store::load(
//!         ListFile::new("Lists.toml"),
//!         MemoryPreferences::new(),
//!         PendingReminders::new(),
//!     );
//!     store.add_item(0, "Buy milk", true, Utc::now() + Duration::hours(2))?;
//!     store.save();
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod formatting;
pub mod handlers;
pub mod model;
pub mod preferences;
pub mod reminder;
pub mod storage;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, FileStore};
pub use error::StoreError;
pub use model::{Item, ItemId, List};
pub use preferences::{FilePreferences, MemoryPreferences, PrefValue, Preferences};
pub use reminder::{FileScheduler, PendingReminders, Reminder, ReminderScheduler};
pub use storage::ListFile;
pub use store::Store;
