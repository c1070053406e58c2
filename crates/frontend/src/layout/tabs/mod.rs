//! Tab plumbing: `page` wraps a tab's content, `registry` maps a tab key to
//! its screen, `tab_labels` owns the titles.

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_label, tab_label_for_key};
