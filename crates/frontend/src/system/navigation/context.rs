use contracts::routing::{RouteSnapshot, RouteState};
use leptos::prelude::*;

use super::browser_history::BrowserHistory;
use crate::system::site_data::context::SiteData;

/// Единственный владелец текущего пути. Читатели подписываются на `path`
/// или на `snapshot`, писать может только `navigate` / popstate.
#[derive(Clone, Copy)]
pub struct Navigator {
    state: StoredValue<RouteState<BrowserHistory>>,
    path: RwSignal<String>,
}

impl Navigator {
    pub fn new() -> Self {
        let state = RouteState::new(BrowserHistory);
        let path = RwSignal::new(state.current().to_string());
        Self {
            state: StoredValue::new(state),
            path,
        }
    }

    /// Registers the popstate listener; it is removed when the owner is
    /// cleaned up.
    pub fn attach(&self) {
        let this = *self;
        let handle = window_event_listener(leptos::ev::popstate, move |_| {
            this.on_pop_state();
        });
        on_cleanup(move || handle.remove());
    }

    pub fn path(&self) -> Signal<String> {
        self.path.into()
    }

    /// Переход без перезагрузки. Повторный переход на тот же путь ничего не делает
    pub fn navigate(&self, path: &str) {
        let changed = self
            .state
            .try_update_value(|state| {
                state.navigate(path).then(|| state.current().to_string())
            })
            .flatten();
        if let Some(current) = changed {
            log::debug!("navigate -> {}", current);
            self.path.set(current);
        }
    }

    fn on_pop_state(&self) {
        let changed = self
            .state
            .try_update_value(|state| {
                state
                    .sync_from_history()
                    .then(|| state.current().to_string())
            })
            .flatten();
        if let Some(current) = changed {
            self.path.set(current);
        }
    }

    /// Маршрут, категория и найденная динамическая страница текущего пути
    pub fn snapshot(&self, site: SiteData) -> Memo<RouteSnapshot> {
        let path = self.path;
        Memo::new(move |_| {
            let path = path.get();
            site.snapshot.with(|s| {
                RouteSnapshot::resolve(&path, &s.landing_pages, &s.config.hidden_links)
            })
        })
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator not found in component tree")
}

/// Memo текущего `RouteSnapshot`, предоставленный в `App`
pub fn use_route() -> Memo<RouteSnapshot> {
    use_context::<Memo<RouteSnapshot>>().expect("RouteSnapshot memo not found in component tree")
}
