pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod debounce;
pub mod export;
pub mod feedback;
pub mod form_utils;
pub mod icons;
pub mod import;
pub mod list_controller;
pub mod list_state;
pub mod list_utils;
pub mod modal_frame;
pub mod page_frame;
pub mod query_cache;
