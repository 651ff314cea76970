//! Session tokens persisted in `localStorage`.

use web_sys::{window, Storage};

const ACCESS_TOKEN_KEY: &str = "almacen_access_token";
const REFRESH_TOKEN_KEY: &str = "almacen_refresh_token";

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

fn read(key: &str) -> Option<String> {
    local_storage()?
        .get_item(key)
        .ok()?
        .filter(|value| !value.is_empty())
}

fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("could not persist {}", key);
        }
    }
}

pub fn get_access_token() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

pub fn get_refresh_token() -> Option<String> {
    read(REFRESH_TOKEN_KEY)
}

pub fn save_access_token(token: &str) {
    write(ACCESS_TOKEN_KEY, token);
}

/// Persist both tokens after a successful login
pub fn save_session(access_token: &str, refresh_token: &str) {
    write(ACCESS_TOKEN_KEY, access_token);
    write(REFRESH_TOKEN_KEY, refresh_token);
}

pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
            let _ = storage.remove_item(key);
        }
    }
}
