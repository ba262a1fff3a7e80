use leptos::prelude::*;

use super::storage;

/// Сессия администратора: токен из localStorage, проверяется backend'ом
#[derive(Clone, Copy)]
pub struct AdminSession {
    pub token: RwSignal<Option<String>>,
}

impl AdminSession {
    pub fn new() -> Self {
        Self {
            token: RwSignal::new(storage::get_admin_token()),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.token.with(Option::is_some)
    }

    pub fn sign_in(&self, token: &str) {
        let token = token.trim();
        if token.is_empty() {
            return;
        }
        storage::save_admin_token(token);
        self.token.set(Some(token.to_string()));
    }

    pub fn sign_out(&self) {
        storage::clear_admin_token();
        self.token.set(None);
    }
}

impl Default for AdminSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access admin session
pub fn use_admin() -> AdminSession {
    use_context::<AdminSession>().expect("AdminSession not found in component tree")
}
