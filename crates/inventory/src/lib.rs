//! Inventory domain: the medicine catalog and its store.
//!
//! The [`Store`] is the authoritative owner of all [`Medicine`] records.
//! Callers (the HTTP layer) hold no record-level state of their own.

pub mod error;
pub mod medicine;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use medicine::Medicine;
pub use store::Store;
