//! Shared model of the listing pages (catalog, projects): the selection projected
//! from the URL and the commands that write the next selection back to history.

use crate::layout::navigation::{use_navigation, NavigationContext};
use contracts::catalog::{CategorizedItem, Projection, Searchable};
use contracts::data::ListingStore;
use contracts::navigation::SelectionState;
use leptos::prelude::*;

pub struct ListingViewModel<T: Send + Sync + 'static> {
    nav: NavigationContext,
    store: &'static ListingStore<T>,
    pub projection: Memo<Projection<T>>,
    /// Item open in the modal
    pub selected: RwSignal<Option<T>>,
}

impl<T: Send + Sync + 'static> Clone for ListingViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListingViewModel<T> {}

impl<T> ListingViewModel<T>
where
    T: CategorizedItem + Searchable + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(store: &'static ListingStore<T>) -> Self {
        let nav = use_navigation();
        let projection = Memo::new(move |_| store.project(&nav.selection()));

        // Unknown category or alias in the URL: rewrite it without a new history entry
        Effect::new(move |_| {
            let requested = nav.selection();
            let valid = projection.with(|p| p.selection.clone());
            if requested != valid {
                log::debug!("selection rewritten: {:?} -> {:?}", requested, valid);
                nav.replace_selection(&valid);
            }
        });

        Self {
            nav,
            store,
            projection,
            selected: RwSignal::new(None),
        }
    }

    pub fn store(&self) -> &'static ListingStore<T> {
        self.store
    }

    fn current(&self) -> SelectionState {
        self.projection.with_untracked(|p| p.selection.clone())
    }

    pub fn select_category(&self, id: Option<String>) {
        let next = match id {
            Some(id) => self.current().select_category(id),
            None => self.current().clear_selection(),
        };
        self.nav.set_selection(&next);
    }

    pub fn select_subcategory(&self, subcategory: Option<String>) {
        let next = self.current().select_subcategory(subcategory.as_deref());
        self.nav.set_selection(&next);
    }

    /// Typing replaces the history entry instead of adding one per keystroke.
    pub fn set_query(&self, query: String) {
        let next = self.current().with_query(Some(query.as_str()));
        if next != self.current() {
            self.nav.replace_selection(&next);
        }
    }

    pub fn clear_filters(&self) {
        let next = self.current().clear_selection().with_query(None);
        self.nav.set_selection(&next);
    }

    pub fn query(&self) -> Signal<String> {
        let projection = self.projection;
        Signal::derive(move || projection.with(|p| p.selection.query.clone().unwrap_or_default()))
    }

    pub fn selected_category(&self) -> Signal<Option<String>> {
        let projection = self.projection;
        Signal::derive(move || projection.with(|p| p.selection.category.clone()))
    }

    pub fn selected_subcategory(&self) -> Signal<Option<String>> {
        let projection = self.projection;
        Signal::derive(move || projection.with(|p| p.selection.subcategory.clone()))
    }

    pub fn has_filters(&self) -> Signal<bool> {
        let projection = self.projection;
        Signal::derive(move || projection.with(|p| p.selection.has_filters()))
    }

    pub fn open(&self, item: T) {
        self.selected.set(Some(item));
    }

    pub fn close(&self) {
        self.selected.set(None);
    }
}
