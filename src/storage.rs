//! Browser local storage helpers

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn save(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("[STORAGE] Could not save {}: {:?}", key, e);
        }
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.remove_item(key) {
            log::warn!("[STORAGE] Could not remove {}: {:?}", key, e);
        }
    }
}
