//! List retrieval contract shared by every paginated screen.
//!
//! A list request is a [`ListQuery`]: an immutable bag of filters plus
//! pagination. Responses come back in several envelope shapes and are folded
//! into a single [`ListResponse`] by [`normalize_list`], which never fails.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 20;

// ============================================================================
// Filters
// ============================================================================

/// Scalar value of a single filter field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FilterValue {
    /// Blank text means "no constraint" and is never sent to the server.
    pub fn is_empty(&self) -> bool {
        matches!(self, FilterValue::Text(s) if s.trim().is_empty())
    }

    pub fn as_query_value(&self) -> String {
        match self {
            FilterValue::Bool(b) => b.to_string(),
            FilterValue::Int(i) => i.to_string(),
            FilterValue::Float(f) => {
                if f.fract() == 0.0 && f.is_finite() {
                    format!("{:.0}", f)
                } else {
                    f.to_string()
                }
            }
            FilterValue::Text(s) => s.trim().to_string(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Int(value as i64)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

/// Ordered set of optional filter fields.
///
/// Insertion order is kept so that query strings come out in the order the
/// screen declared its filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    fields: Vec<(String, FilterValue)>,
}

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new bag with `key` set; `self` is left untouched.
    pub fn with(&self, key: &str, value: impl Into<FilterValue>) -> Self {
        let mut next = self.clone();
        next.set(key, value);
        next
    }

    /// Sets `key`, returning `true` when the stored value actually changed.
    pub fn set(&mut self, key: &str, value: impl Into<FilterValue>) -> bool {
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) if *existing == value => false,
            Some((_, existing)) => {
                *existing = value;
                true
            }
            None => {
                self.fields.push((key.to_string(), value));
                true
            }
        }
    }

    /// `None` removes the field.
    pub fn set_opt<V: Into<FilterValue>>(&mut self, key: &str, value: Option<V>) -> bool {
        match value {
            Some(v) => self.set(key, v),
            None => self.remove(key),
        }
    }

    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.fields.len();
        self.fields.retain(|(k, _)| k != key);
        before != self.fields.len()
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_text(&self, key: &str) -> String {
        self.get(key).map(|v| v.as_query_value()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of fields that will actually constrain the result set.
    pub fn active_count(&self) -> usize {
        self.fields.iter().filter(|(_, v)| !v.is_empty()).count()
    }

    /// Non-empty fields as `(name, value)` pairs, in insertion order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.clone(), v.as_query_value()))
            .collect()
    }
}

// ============================================================================
// Pagination
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub per_page: u32,
}

impl PaginationParams {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Keeps `page` inside `[1, pages]`; an empty result set has one page.
    pub fn clamp_to(&mut self, pages: u32) {
        self.page = self.page.clamp(1, pages.max(1));
    }

    pub fn first_page(&self) -> Self {
        Self::new(1, self.per_page)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PER_PAGE)
    }
}

/// `ceil(total / per_page)`, with `per_page == 0` treated as 1.
pub fn page_count(total: u64, per_page: u32) -> u32 {
    let per_page = per_page.max(1) as u64;
    total.div_ceil(per_page) as u32
}

// ============================================================================
// Query
// ============================================================================

/// One list request. A new request is always a new value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub filters: FilterParams,
    pub pagination: PaginationParams,
}

impl ListQuery {
    pub fn new(filters: FilterParams, pagination: PaginationParams) -> Self {
        Self {
            filters,
            pagination,
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut pairs = self.filters.query_pairs();
        pairs.push(("page".to_string(), self.pagination.page.to_string()));
        pairs.push((
            "per_page".to_string(),
            self.pagination.per_page.to_string(),
        ));
        encode_query(&pairs)
    }

    /// Deterministic cache key: the same bag always maps to the same key.
    pub fn cache_key(&self, resource: &str) -> String {
        format!("{}{}", resource, self.to_query_string())
    }
}

/// `?a=1&b=2`, or an empty string when there is nothing to send.
pub fn encode_query(pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{}", joined)
}

/// Query string for a spreadsheet export of the current filters.
pub fn export_query(filters: &FilterParams, format: &str) -> String {
    let mut pairs = filters.query_pairs();
    pairs.push(("format".to_string(), format.to_string()));
    encode_query(&pairs)
}

// ============================================================================
// Response
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> ListResponse<T> {
    pub fn empty(pagination: &PaginationParams) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            per_page: pagination.per_page,
            total: 0,
            pages: 0,
            has_next: false,
            has_prev: false,
        }
    }

    /// Builds one page out of a full result set the server did not paginate.
    pub fn from_items(items: Vec<T>, pagination: &PaginationParams) -> Self {
        let total = items.len() as u64;
        let pages = page_count(total, pagination.per_page);
        let page = pagination.page.clamp(1, pages.max(1));
        let per_page = pagination.per_page.max(1) as usize;
        let items = items
            .into_iter()
            .skip((page as usize - 1) * per_page)
            .take(per_page)
            .collect();
        Self {
            items,
            page,
            per_page: pagination.per_page,
            total,
            pages,
            has_next: page < pages,
            has_prev: page > 1,
        }
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self::empty(&PaginationParams::default())
    }
}

/// Folds any list payload the backend produces into a [`ListResponse`].
///
/// Accepted shapes: `{success, data: {items, ...}}`, `{success, data: [...]}`,
/// `{items, ...}`, a bare array, `null`, `{}` and anything else. Items that do
/// not deserialize into `T` are skipped.
pub fn normalize_list<T: DeserializeOwned>(
    payload: Option<&Value>,
    requested: &PaginationParams,
) -> ListResponse<T> {
    let (raw_items, meta) = match payload.map(unwrap_data) {
        Some(Value::Array(items)) => (items.as_slice(), None),
        Some(Value::Object(obj)) => match obj.get("items") {
            Some(Value::Array(items)) => (items.as_slice(), Some(obj)),
            _ => (&[][..], Some(obj)),
        },
        _ => (&[][..], None),
    };

    let items: Vec<T> = raw_items
        .iter()
        .filter_map(|v| serde_json::from_value(v.clone()).ok())
        .collect();

    let Some(meta) = meta else {
        // Bare arrays are the full result set.
        return ListResponse::from_items(items, requested);
    };

    let per_page = read_u64(meta, &["per_page", "page_size", "limit"])
        .map(|v| v as u32)
        .filter(|v| *v > 0)
        .unwrap_or(requested.per_page);
    let total = read_u64(meta, &["total", "total_count", "count"]).unwrap_or(items.len() as u64);
    let pages = read_u64(meta, &["pages", "total_pages"])
        .map(|v| v as u32)
        .unwrap_or_else(|| page_count(total, per_page));
    let page = read_u64(meta, &["page", "current_page"])
        .map(|v| v as u32)
        .unwrap_or(requested.page)
        .clamp(1, pages.max(1));
    let has_next = meta
        .get("has_next")
        .and_then(Value::as_bool)
        .unwrap_or(page < pages);
    let has_prev = meta
        .get("has_prev")
        .and_then(Value::as_bool)
        .unwrap_or(page > 1);

    ListResponse {
        items,
        page,
        per_page,
        total,
        pages,
        has_next,
        has_prev,
    }
}

/// Descends through `{success, data}` wrappers (at most twice).
fn unwrap_data(value: &Value) -> &Value {
    let mut current = value;
    for _ in 0..2 {
        match current {
            Value::Object(obj) if !obj.contains_key("items") => match obj.get("data") {
                Some(inner) => current = inner,
                None => break,
            },
            _ => break,
        }
    }
    current
}

fn read_u64(obj: &Map<String, Value>, keys: &[&str]) -> Option<u64> {
    keys.iter().find_map(|k| match obj.get(*k)? {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: i64,
        name: String,
    }

    fn pagination() -> PaginationParams {
        PaginationParams::new(1, 20)
    }

    #[test]
    fn test_export_query_omits_blank_filters() {
        let filters = FilterParams::new()
            .with("search", "")
            .with("kategori_id", 5);
        assert_eq!(export_query(&filters, "excel"), "?kategori_id=5&format=excel");
    }

    #[test]
    fn test_whitespace_search_is_not_sent() {
        let filters = FilterParams::new().with("search", "   ");
        assert!(filters.is_empty());
        assert_eq!(filters.query_pairs(), Vec::<(String, String)>::new());
    }

    #[test]
    fn test_query_string_keeps_insertion_order_and_encodes() {
        let filters = FilterParams::new()
            .with("search", "kertas a4")
            .with("min_price", 1500.0)
            .with("is_active", true);
        let query = ListQuery::new(filters, PaginationParams::new(2, 50));
        assert_eq!(
            query.to_query_string(),
            "?search=kertas%20a4&min_price=1500&is_active=true&page=2&per_page=50"
        );
    }

    #[test]
    fn test_with_does_not_mutate_receiver() {
        let base = FilterParams::new().with("status", "diajukan");
        let next = base.with("status", "disetujui");
        assert_eq!(base.get_text("status"), "diajukan");
        assert_eq!(next.get_text("status"), "disetujui");
    }

    #[test]
    fn test_set_reports_changes_only() {
        let mut filters = FilterParams::new();
        assert!(filters.set("kategori_id", 2));
        assert!(!filters.set("kategori_id", 2));
        assert!(filters.set("kategori_id", 3));
        assert!(filters.set_opt::<i64>("kategori_id", None));
        assert!(!filters.remove("kategori_id"));
    }

    #[test]
    fn test_cache_key_is_deterministic() {
        let a = ListQuery::new(FilterParams::new().with("search", "pen"), pagination());
        let b = ListQuery::new(FilterParams::new().with("search", "pen"), pagination());
        assert_eq!(a.cache_key("barang"), b.cache_key("barang"));
        assert_ne!(a.cache_key("barang"), a.cache_key("katalog"));
    }

    #[test]
    fn test_pagination_clamps() {
        let mut p = PaginationParams::new(0, 0);
        assert_eq!(p, PaginationParams::new(1, 1));
        p.page = 9;
        p.clamp_to(3);
        assert_eq!(p.page, 3);
        p.clamp_to(0);
        assert_eq!(p.page, 1);
        assert_eq!(page_count(41, 20), 3);
        assert_eq!(page_count(0, 20), 0);
    }

    #[test]
    fn test_normalize_wrapped_page() {
        let payload = json!({
            "success": true,
            "data": {
                "items": [{"id": 1, "name": "Pulpen"}, {"id": 2, "name": "Map"}],
                "page": 2, "per_page": 2, "total": 5, "pages": 3,
                "has_next": true, "has_prev": true
            }
        });
        let res: ListResponse<Row> = normalize_list(Some(&payload), &pagination());
        assert_eq!(res.items.len(), 2);
        assert_eq!((res.page, res.per_page, res.total, res.pages), (2, 2, 5, 3));
        assert!(res.has_next && res.has_prev);
    }

    #[test]
    fn test_normalize_wrapped_array() {
        let payload = json!({"success": true, "data": [{"id": 7, "name": "Kertas"}]});
        let res: ListResponse<Row> = normalize_list(Some(&payload), &pagination());
        assert_eq!(res.items, vec![Row { id: 7, name: "Kertas".into() }]);
        assert_eq!((res.total, res.pages, res.page), (1, 1, 1));
        assert!(!res.has_next && !res.has_prev);
    }

    #[test]
    fn test_normalize_is_total() {
        let cases = [
            json!(null),
            json!({}),
            json!({"success": false}),
            json!({"success": true, "data": null}),
            json!({"success": true, "data": {"items": null}}),
            json!("garbage"),
            json!(42),
        ];
        for payload in cases.iter() {
            let res: ListResponse<Row> = normalize_list(Some(payload), &pagination());
            assert!(res.items.is_empty(), "payload {payload}");
            assert_eq!(res.page, 1);
        }
        let res: ListResponse<Row> = normalize_list(None, &pagination());
        assert!(res.items.is_empty());
    }

    #[test]
    fn test_normalize_bare_array_skips_bad_rows() {
        let payload = json!([{"id": 1, "name": "A"}, {"id": "x"}, {"id": 3, "name": "C"}]);
        let res: ListResponse<Row> = normalize_list(Some(&payload), &pagination());
        assert_eq!(res.items.len(), 2);
        assert_eq!(res.total, 2);
    }

    #[test]
    fn test_normalize_bare_array_returns_requested_page() {
        let rows: Vec<Value> = (1..=45)
            .map(|id| json!({"id": id, "name": format!("Barang {id}")}))
            .collect();
        let payload = Value::Array(rows);
        let res: ListResponse<Row> =
            normalize_list(Some(&payload), &PaginationParams::new(2, 20));
        assert_eq!(res.items.len(), 20);
        assert_eq!(res.items.first().map(|r| r.id), Some(21));
        assert_eq!((res.total, res.pages, res.page), (45, 3, 2));
        assert!(res.has_next && res.has_prev);

        let last: ListResponse<Row> =
            normalize_list(Some(&payload), &PaginationParams::new(7, 20));
        assert_eq!(last.page, 3);
        assert_eq!(last.items.len(), 5);
        assert_eq!(last.items.first().map(|r| r.id), Some(41));
    }

    #[test]
    fn test_large_integral_float_is_not_truncated() {
        let value = |v: f64| FilterValue::from(v).as_query_value();
        assert_eq!(value(1e20), "100000000000000000000");
        assert_eq!(value(15000.0), "15000");
        assert_eq!(value(12.5), "12.5");
    }

    #[test]
    fn test_normalize_accepts_aliases_and_computes_pages() {
        let payload = json!({
            "items": [{"id": 1, "name": "A"}],
            "total_count": 45,
            "page_size": 20,
            "page": 9
        });
        let res: ListResponse<Row> = normalize_list(Some(&payload), &pagination());
        assert_eq!(res.pages, 3);
        assert_eq!(res.page, 3);
        assert!(!res.has_next);
        assert!(res.has_prev);
    }
}
