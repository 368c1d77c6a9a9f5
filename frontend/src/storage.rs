//! Persistence adapter over the browser's localStorage.
//!
//! The whole reservation book is stored under one fixed key as a JSON
//! array; every save is a total replace. Unreadable or malformed content
//! is logged and treated as "no data" so a corrupt entry can never keep
//! the application from starting. The key carries a `v2` suffix: an
//! incompatible layout change is handled by bumping the key, not by
//! migrating old payloads.

use common::model::book::Book;
use gloo_console::error;

pub const STORAGE_KEY: &str = "mobile_reservations_v2";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Loads the persisted reservation book. A missing key, unavailable
/// storage, or malformed content all degrade to an empty book.
pub fn load() -> Book {
    let Some(storage) = local_storage() else {
        return Book::new();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => match Book::from_json(&raw) {
            Ok(book) => book,
            Err(err) => {
                error!(format!("failed to parse stored reservations: {err}"));
                Book::new()
            }
        },
        _ => Book::new(),
    }
}

/// Overwrites the stored entry with the full current book.
pub fn save(book: &Book) {
    let Some(storage) = local_storage() else {
        return;
    };
    match book.to_json() {
        Ok(raw) => {
            if storage.set_item(STORAGE_KEY, &raw).is_err() {
                error!("failed to write reservations to local storage");
            }
        }
        Err(err) => error!(format!("failed to serialize reservations: {err}")),
    }
}
