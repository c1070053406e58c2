//! Reactive glue around [`ListState`]: cache lookup, fetch, stale-response
//! guard and debounced search for one list screen.

use contracts::shared::list_query::{FilterParams, FilterValue};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::fetch_list;
use crate::shared::config::config;
use crate::shared::debounce::Debouncer;
use crate::shared::list_state::ListState;
use crate::shared::query_cache::{use_query_client, CachePolicy, QueryClient};

pub const SEARCH_KEY: &str = "search";

/// Page size for dropdown sources; one page is expected to hold them all.
const OPTIONS_PER_PAGE: u32 = 100;

/// Where a list comes from and how long it may be cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEndpoint {
    /// Cache namespace; mutations invalidate by this name.
    pub resource: &'static str,
    pub path: &'static str,
    pub policy: CachePolicy,
}

pub trait ListItem: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> ListItem for T where T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {}

pub struct ListController<T: ListItem> {
    pub state: RwSignal<ListState<T>>,
    endpoint: ListEndpoint,
    client: QueryClient,
    search: Debouncer<String>,
}

impl<T: ListItem> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ListItem> Copy for ListController<T> {}

/// Creates the controller for the calling component and issues the first load.
pub fn use_list<T: ListItem>(endpoint: ListEndpoint, initial: FilterParams) -> ListController<T> {
    use_list_sized(endpoint, initial, config().list.default_per_page)
}

/// `(value, label)` pairs for a select, loaded through the shared cache.
pub fn use_options<T: ListItem>(
    endpoint: ListEndpoint,
    to_option: fn(&T) -> (String, String),
) -> Signal<Vec<(String, String)>> {
    let list = use_list_sized::<T>(endpoint, FilterParams::new(), OPTIONS_PER_PAGE);
    let state = list.state;
    Signal::derive(move || state.with(|s| s.items().iter().map(to_option).collect()))
}

fn use_list_sized<T: ListItem>(
    endpoint: ListEndpoint,
    initial: FilterParams,
    per_page: u32,
) -> ListController<T> {
    let state = RwSignal::new(ListState::new(initial, per_page));
    let client = use_query_client();

    let search = Debouncer::new(
        config().list.search_debounce_ms,
        Callback::new(move |text: String| {
            let changed = state
                .try_update(|s| s.apply_filter(SEARCH_KEY, text))
                .unwrap_or(false);
            if changed {
                load(state, endpoint, client);
            }
        }),
    );

    let controller = ListController {
        state,
        endpoint,
        client,
        search,
    };
    controller.reload();
    controller
}

fn load<T: ListItem>(state: RwSignal<ListState<T>>, endpoint: ListEndpoint, client: QueryClient) {
    let Some((generation, query)) = state.try_update(|s| s.begin_request()) else {
        return;
    };

    if let Some(hit) = client.get_list::<T>(endpoint.resource, &query) {
        state.update(|s| {
            s.accept(generation, hit);
        });
        return;
    }

    let epoch = client.epoch(endpoint.resource);
    spawn_local(async move {
        match fetch_list::<T>(endpoint.path, &query).await {
            Ok(response) => {
                let cached = serde_json::to_value(&response).ok();
                if state.try_update(|s| s.accept(generation, response)) != Some(true) {
                    log::debug!("discarded stale {} response #{}", endpoint.resource, generation);
                    return;
                }
                if let Some(value) = cached {
                    client.put_value(endpoint.resource, epoch, &query, value, endpoint.policy);
                }
            }
            Err(e) => {
                log::warn!("{} list failed: {}", endpoint.resource, e);
                state.try_update(|s| s.reject(generation, e.user_message()));
            }
        }
    });
}

impl<T: ListItem> ListController<T> {
    pub fn reload(&self) {
        load(self.state, self.endpoint, self.client);
    }

    /// Drops every cached page of this resource, then reloads.
    pub fn refresh(&self) {
        self.client.invalidate(self.endpoint.resource);
        self.reload();
    }

    pub fn filters(&self) -> FilterParams {
        self.state.with_untracked(|s| s.filters.clone())
    }

    /// Reactive text of one filter field; empty when unset.
    pub fn filter_text(&self, key: &'static str) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filters.get_text(key)))
    }

    pub fn active_filter_count(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.active_filter_count()))
    }

    pub fn sort_signal(&self) -> Signal<(String, bool)> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.sort()))
    }

    pub fn items(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items().to_vec()))
    }

    fn apply(&self, f: impl FnOnce(&mut ListState<T>) -> bool) {
        if self.state.try_update(f).unwrap_or(false) {
            self.reload();
        }
    }

    pub fn set_filter(&self, key: &'static str, value: impl Into<FilterValue>) {
        let value = value.into();
        self.apply(move |s| s.apply_filter(key, value));
    }

    /// Sets `key` when `value` is present, removes it otherwise.
    pub fn set_optional_filter<V: Into<FilterValue>>(&self, key: &'static str, value: Option<V>) {
        match value {
            Some(v) => self.set_filter(key, v),
            None => self.remove_filter(key),
        }
    }

    pub fn remove_filter(&self, key: &'static str) {
        self.apply(move |s| s.remove_filter(key));
    }

    pub fn clear_filters(&self) {
        self.search.cancel();
        self.apply(|s| s.clear_filters());
    }

    /// Debounced; clearing the box applies immediately.
    pub fn search(&self, text: String) {
        if text.trim().is_empty() {
            self.search.flush_now(String::new());
        } else {
            self.search.call(text);
        }
    }

    pub fn toggle_sort(&self, field: &'static str) {
        self.apply(move |s| {
            s.toggle_sort(field);
            true
        });
    }

    pub fn go_to_page(&self, page: u32) {
        self.apply(move |s| s.go_to_page(page));
    }

    pub fn set_per_page(&self, per_page: u32) {
        self.apply(move |s| s.set_per_page(per_page));
    }
}
