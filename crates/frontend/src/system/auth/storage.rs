use contracts::shopping::shopper::{is_valid_shopper_id, shopper_id_from_bytes, SHOPPER_ID_BYTES};

use crate::shared::storage;

const ADMIN_TOKEN_KEY: &str = "tkap_admin_token";
const SHOPPER_ID_KEY: &str = "tkap_shopper_id";

/// Save admin token to localStorage
pub fn save_admin_token(token: &str) {
    storage::save(ADMIN_TOKEN_KEY, token.trim());
}

/// Get admin token from localStorage
pub fn get_admin_token() -> Option<String> {
    storage::load(ADMIN_TOKEN_KEY).filter(|t| !t.trim().is_empty())
}

/// Clear admin token
pub fn clear_admin_token() {
    storage::remove(ADMIN_TOKEN_KEY);
}

/// Анонимный идентификатор покупателя: владелец заявок на странице истории.
/// Создаётся при первом обращении; сохранённый id старого формата заменяется.
pub fn shopper_id() -> String {
    if let Some(id) = storage::load(SHOPPER_ID_KEY).filter(|id| is_valid_shopper_id(id)) {
        return id;
    }
    let id = shopper_id_from_bytes(&random_bytes());
    storage::save(SHOPPER_ID_KEY, &id);
    id
}

fn random_bytes() -> [u8; SHOPPER_ID_BYTES] {
    let mut bytes = [0u8; SHOPPER_ID_BYTES];
    let filled = web_sys::window()
        .and_then(|w| w.crypto().ok())
        .map(|crypto| crypto.get_random_values_with_u8_array(&mut bytes).is_ok())
        .unwrap_or(false);
    if !filled {
        log::warn!("crypto.getRandomValues is unavailable, falling back to Math.random");
        for b in bytes.iter_mut() {
            *b = (js_sys::Math::random() * 256.0) as u8;
        }
    }
    bytes
}
