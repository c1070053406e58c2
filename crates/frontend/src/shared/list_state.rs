//! Filter + pagination state behind every list screen.
//!
//! Rules:
//! - a filter change always sends the user back to page 1;
//! - page navigation is clamped to the last known page count;
//! - each request carries a generation number and only the newest
//!   request's answer is applied.

use contracts::shared::list_query::{
    FilterParams, FilterValue, ListQuery, ListResponse, PaginationParams,
};

pub const SORT_BY: &str = "sort_by";
pub const SORT_ORDER: &str = "sort_order";

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub filters: FilterParams,
    pub pagination: PaginationParams,
    pub response: ListResponse<T>,
    pub is_loading: bool,
    pub is_loaded: bool,
    pub error: Option<String>,
    generation: u64,
}

impl<T> ListState<T> {
    pub fn new(filters: FilterParams, per_page: u32) -> Self {
        let pagination = PaginationParams::new(1, per_page);
        Self {
            filters,
            response: ListResponse::empty(&pagination),
            pagination,
            is_loading: false,
            is_loaded: false,
            error: None,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.response.items
    }

    /// Snapshot for the next request.
    pub fn query(&self) -> ListQuery {
        ListQuery::new(self.filters.clone(), self.pagination)
    }

    /// Sets one filter field. Returns `true` (and resets to page 1) when the
    /// value actually changed.
    pub fn apply_filter(&mut self, key: &str, value: impl Into<FilterValue>) -> bool {
        let changed = self.filters.set(key, value);
        if changed {
            self.pagination.page = 1;
        }
        changed
    }

    pub fn remove_filter(&mut self, key: &str) -> bool {
        let changed = self.filters.remove(key);
        if changed {
            self.pagination.page = 1;
        }
        changed
    }

    /// Replaces the whole bag; page resets when anything differs.
    pub fn replace_filters(&mut self, filters: FilterParams) -> bool {
        if self.filters == filters {
            return false;
        }
        self.filters = filters;
        self.pagination.page = 1;
        true
    }

    /// Drops every filter except the sort order.
    pub fn clear_filters(&mut self) -> bool {
        let mut kept = FilterParams::new();
        for key in [SORT_BY, SORT_ORDER] {
            if let Some(value) = self.filters.get(key) {
                kept.set(key, value.clone());
            }
        }
        self.replace_filters(kept)
    }

    /// Filters that narrow the result set; sorting is not counted.
    pub fn active_filter_count(&self) -> usize {
        let sort_fields = [SORT_BY, SORT_ORDER]
            .iter()
            .filter(|k| self.filters.get(k).is_some_and(|v| !v.is_empty()))
            .count();
        self.filters.active_count() - sort_fields
    }

    /// Current server-side sort as `(field, ascending)`; empty field when unsorted.
    pub fn sort(&self) -> (String, bool) {
        (
            self.filters.get_text(SORT_BY),
            self.filters.get_text(SORT_ORDER) != "desc",
        )
    }

    /// Clicking the active column flips direction, another column sorts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        let (current, ascending) = self.sort();
        let ascending = if current == field { !ascending } else { true };
        self.filters.set(SORT_BY, field);
        self.filters
            .set(SORT_ORDER, if ascending { "asc" } else { "desc" });
        self.pagination.page = 1;
    }

    /// Moves to `page`, clamped to what the last response reported.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let before = self.pagination.page;
        self.pagination.page = page;
        self.pagination.clamp_to(self.response.pages);
        before != self.pagination.page
    }

    pub fn set_per_page(&mut self, per_page: u32) -> bool {
        let per_page = per_page.max(1);
        if per_page == self.pagination.per_page {
            return false;
        }
        self.pagination = PaginationParams::new(1, per_page);
        true
    }

    /// Marks a request as in flight and returns its generation + query.
    pub fn begin_request(&mut self) -> (u64, ListQuery) {
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        (self.generation, self.query())
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Applies a response unless a newer request was issued since.
    pub fn accept(&mut self, generation: u64, response: ListResponse<T>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.pagination.page = response.page.max(1);
        self.pagination.clamp_to(response.pages);
        self.response = response;
        self.is_loading = false;
        self.is_loaded = true;
        self.error = None;
        true
    }

    pub fn reject(&mut self, generation: u64, error: String) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.is_loading = false;
        self.error = Some(error);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(items: Vec<i32>, page: u32, pages: u32) -> ListResponse<i32> {
        ListResponse {
            total: items.len() as u64,
            items,
            page,
            per_page: 20,
            pages,
            has_next: page < pages,
            has_prev: page > 1,
        }
    }

    fn loaded_on_page(page: u32) -> ListState<i32> {
        let mut state = ListState::new(FilterParams::new(), 20);
        let (generation, _) = state.begin_request();
        state.accept(generation, response(vec![1, 2], 1, 5));
        state.go_to_page(page);
        state
    }

    #[test]
    fn test_any_filter_change_resets_page() {
        let mut state = loaded_on_page(4);
        assert_eq!(state.pagination.page, 4);
        assert!(state.apply_filter("kategori_id", 3));
        assert_eq!(state.pagination.page, 1);

        state.go_to_page(3);
        assert!(state.apply_filter("search", "toner"));
        assert_eq!(state.pagination.page, 1);

        state.go_to_page(2);
        assert!(state.remove_filter("search"));
        assert_eq!(state.pagination.page, 1);

        state.go_to_page(2);
        assert!(state.replace_filters(FilterParams::new().with("status", "diajukan")));
        assert_eq!(state.pagination.page, 1);
    }

    #[test]
    fn test_same_filter_value_keeps_page() {
        let mut state = loaded_on_page(2);
        state.apply_filter("kategori_id", 3);
        state.go_to_page(2);
        assert!(!state.apply_filter("kategori_id", 3));
        assert_eq!(state.pagination.page, 2);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut state = loaded_on_page(99);
        assert_eq!(state.pagination.page, 5);
        state.go_to_page(0);
        assert_eq!(state.pagination.page, 1);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut state: ListState<i32> = ListState::new(FilterParams::new(), 20);
        let (first, _) = state.begin_request();
        state.apply_filter("search", "kertas");
        let (second, query) = state.begin_request();
        assert_eq!(query.filters.get_text("search"), "kertas");

        assert!(state.accept(second, response(vec![7], 1, 1)));
        assert!(!state.accept(first, response(vec![1, 2, 3], 1, 1)));
        assert_eq!(state.items(), &[7]);
        assert!(!state.reject(first, "timeout".into()));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_accept_follows_server_page() {
        let mut state: ListState<i32> = ListState::new(FilterParams::new(), 20);
        state.pagination.page = 7;
        let (generation, _) = state.begin_request();
        state.accept(generation, response(vec![], 2, 2));
        assert_eq!(state.pagination.page, 2);
        assert!(!state.is_loading);
        assert!(state.is_loaded);
    }

    #[test]
    fn test_toggle_sort_flips_direction_on_same_field() {
        let mut state = loaded_on_page(3);
        state.toggle_sort("harga");
        assert_eq!(state.sort(), ("harga".to_string(), true));
        assert_eq!(state.pagination.page, 1);
        state.toggle_sort("harga");
        assert_eq!(state.sort(), ("harga".to_string(), false));
        state.toggle_sort("nama_barang");
        assert_eq!(state.sort(), ("nama_barang".to_string(), true));
    }

    #[test]
    fn test_per_page_change_resets_page() {
        let mut state = loaded_on_page(3);
        assert!(state.set_per_page(50));
        assert_eq!(state.pagination, PaginationParams::new(1, 50));
        assert!(!state.set_per_page(50));
    }

    #[test]
    fn test_clear_keeps_sort_and_count_ignores_it() {
        let mut state: ListState<i32> = ListState::new(FilterParams::new(), 20);
        state.apply_filter("kategori_id", 5);
        state.apply_filter("search", "");
        state.toggle_sort("harga");
        assert_eq!(state.active_filter_count(), 1);
        assert!(state.clear_filters());
        assert_eq!(state.active_filter_count(), 0);
        assert_eq!(state.sort(), ("harga".to_string(), true));
        assert!(!state.clear_filters());
    }
}
