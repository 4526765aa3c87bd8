//! Location store: path, query and hash of the current URL as signals, kept in
//! sync with the History API.

use contracts::navigation::{Route, SelectionState};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

#[derive(Clone, Copy)]
pub struct NavigationContext {
    pub path: RwSignal<String>,
    /// Query string without the leading `?`
    pub search: RwSignal<String>,
    /// Fragment without the leading `#`
    pub hash: RwSignal<String>,
    /// Bumped on every link navigation, so following the same anchor twice scrolls again
    pub visits: RwSignal<u64>,
}

struct Location {
    path: String,
    search: String,
    hash: String,
}

fn read_location() -> Location {
    let location = window().location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    Location {
        path: if path.is_empty() { "/".to_string() } else { path },
        search: search.trim_start_matches('?').to_string(),
        hash: hash.trim_start_matches('#').to_string(),
    }
}

fn set_if_changed(signal: RwSignal<String>, value: String) {
    if signal.with_untracked(|current| *current != value) {
        signal.set(value);
    }
}

/// Same-origin, same-app link that can be handled without a page load.
pub fn is_internal(href: &str) -> bool {
    href.starts_with('/') && !href.starts_with("//")
}

impl NavigationContext {
    pub fn new() -> Self {
        let location = read_location();
        Self {
            path: RwSignal::new(location.path),
            search: RwSignal::new(location.search),
            hash: RwSignal::new(location.hash),
            visits: RwSignal::new(0),
        }
    }

    /// Follows back/forward buttons.
    pub fn init_history_integration(&self) {
        let this = *self;
        let handle = window_event_listener(ev::popstate, move |_| {
            this.sync_from_location();
            this.visits.update(|v| *v += 1);
        });
        on_cleanup(move || handle.remove());
    }

    fn sync_from_location(&self) {
        let location = read_location();
        set_if_changed(self.path, location.path);
        set_if_changed(self.search, location.search);
        set_if_changed(self.hash, location.hash);
    }

    pub fn route(&self) -> Route {
        self.path.with(|path| Route::from_path(path))
    }

    pub fn selection(&self) -> SelectionState {
        self.search.with(|search| SelectionState::from_query_string(search))
    }

    /// `pushState` navigation to an in-app href.
    pub fn navigate(&self, href: &str) {
        log::debug!("navigate: {}", href);
        if self.write_history(href, false) {
            self.sync_from_location();
            self.visits.update(|v| *v += 1);
        }
    }

    /// `replaceState` rewrite; no history entry and no scroll.
    pub fn replace(&self, href: &str) {
        if self.write_history(href, true) {
            self.sync_from_location();
        }
    }

    /// Pushes a new selection for the current path (one history entry per change).
    /// Unrelated query parameters stay in the URL.
    pub fn set_selection(&self, next: &SelectionState) {
        let href = next.merged_href(&self.path.get_untracked(), &self.search.get_untracked());
        if self.write_history(&href, false) {
            self.sync_from_location();
        }
    }

    /// Rewrites the URL to a validated selection.
    pub fn replace_selection(&self, next: &SelectionState) {
        let href = next.merged_href(&self.path.get_untracked(), &self.search.get_untracked());
        self.replace(&href);
    }

    fn write_history(&self, href: &str, replace: bool) -> bool {
        let Ok(history) = window().history() else {
            log::error!("History API unavailable");
            return false;
        };
        let result = if replace {
            history.replace_state_with_url(&JsValue::NULL, "", Some(href))
        } else {
            history.push_state_with_url(&JsValue::NULL, "", Some(href))
        };
        if let Err(e) = result {
            log::warn!("cannot update history for {}: {:?}", href, e);
            return false;
        }
        true
    }
}

impl Default for NavigationContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_navigation() -> NavigationContext {
    use_context::<NavigationContext>().expect("NavigationContext context not found")
}

/// Click handler for in-app links; modified clicks and external links keep the
/// browser default.
pub fn follow_link(nav: NavigationContext, href: String) -> impl Fn(ev::MouseEvent) + Clone + 'static {
    move |ev: ev::MouseEvent| {
        if ev.default_prevented()
            || ev.button() != 0
            || ev.ctrl_key()
            || ev.meta_key()
            || ev.shift_key()
            || ev.alt_key()
            || !is_internal(&href)
        {
            return;
        }
        ev.prevent_default();
        nav.navigate(&href);
    }
}

#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_follow: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let nav = use_navigation();
    let follow = follow_link(nav, href.clone());

    view! {
        <a
            href=href
            class=class
            on:click=move |ev| {
                follow(ev);
                if let Some(cb) = on_follow {
                    cb.run(());
                }
            }
        >
            {children()}
        </a>
    }
}
