pub mod api;
pub mod import;
pub mod list_query;
