use contracts::domain::common::Language;
use leptos::prelude::*;

use crate::shared::storage;

const LANGUAGE_KEY: &str = "tkap-language";

/// Состояние оболочки сайта: язык и открытые панели
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub language: RwSignal<Language>,
    pub search_open: RwSignal<bool>,
    pub mobile_menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let language = storage::load(LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();
        Self {
            language: RwSignal::new(language),
            search_open: RwSignal::new(false),
            mobile_menu_open: RwSignal::new(false),
        }
    }

    pub fn toggle_language(&self) {
        self.language.update(|lang| *lang = lang.toggled());
        storage::save(LANGUAGE_KEY, self.language.get_untracked().code());
    }

    pub fn lang(&self) -> Signal<Language> {
        self.language.into()
    }

    /// Закрыть все выезжающие панели (после перехода)
    pub fn close_overlays(&self) {
        self.search_open.set(false);
        self.mobile_menu_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
