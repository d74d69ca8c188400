//! Whole-tree persistence over localStorage. Missing, unreadable, or
//! malformed stored state is treated as an empty universe, never an error.

use crate::model::Universe;

const STORAGE_KEY: &str = "universe";

pub fn load_universe() -> Universe {
    let raw = web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|store| store.get_item(STORAGE_KEY).ok().flatten());
    let mut universe = raw
        .and_then(|json| serde_json::from_str::<Universe>(&json).ok())
        .unwrap_or_default();
    universe.normalize_ids();
    universe
}

pub fn save_universe(universe: &Universe) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(json) = serde_json::to_string(universe) {
                let _ = store.set_item(STORAGE_KEY, &json);
            }
        }
    }
}
