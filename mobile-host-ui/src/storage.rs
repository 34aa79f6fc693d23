// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persisted self-view corner.
//!
//! Stored as the bare corner name (`"bottom-left"`), not JSON, so the value
//! stays readable by the desktop page's own scripts.

use crate::constants::POSITION_STORAGE_KEY;
use crate::geometry::Corner;
use gloo_storage::{LocalStorage, Storage};

pub struct CornerStore;

impl CornerStore {
    /// The stored corner, or `None` when nothing usable is stored.
    pub fn load() -> Option<Corner> {
        let raw = LocalStorage::raw().get_item(POSITION_STORAGE_KEY).ok()??;
        match raw.parse() {
            Ok(corner) => Some(corner),
            Err(e) => {
                log::debug!("ignoring stored self-view position: {e}");
                None
            }
        }
    }

    /// Stored corner, falling back to the default placement.
    pub fn load_or_default() -> Corner {
        Self::load().unwrap_or_default()
    }

    pub fn save(corner: Corner) {
        if let Err(e) = LocalStorage::raw().set_item(POSITION_STORAGE_KEY, corner.as_str()) {
            log::warn!("failed to persist self-view position: {e:?}");
        }
    }

    pub fn clear() {
        LocalStorage::delete(POSITION_STORAGE_KEY);
    }
}
