pub mod amount_filter;
pub mod confirm_dialog;
pub mod date_input;
pub mod export_button;
pub mod filter_panel;
pub mod import_dialog;
pub mod list_status;
pub mod page_header;
pub mod pagination_controls;
pub mod search_input;
pub mod select_field;
pub mod text_field;

pub use amount_filter::{range_conflict, AmountFilter, MAX_PRICE, MIN_PRICE};
pub use confirm_dialog::ConfirmDialog;
pub use date_input::DateInput;
pub use export_button::ExportButton;
pub use filter_panel::{FilterPanel, FilterTag};
pub use import_dialog::ImportDialog;
pub use list_status::{ListPager, ListStatus};
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
pub use select_field::SelectField;
pub use text_field::{TextAreaField, TextField};
