//! Presentation of search results: highlighted labels, URLs, and the result menu.

pub mod highlight;
pub mod menu;
pub mod url;

// Re-exports
pub use highlight::{Highlighter, escape_html, item_html, label_text};
pub use menu::{LOADING, MenuEntry, MenuItem, NO_RESULTS, render_menu};
pub use url::{item_url, navigation_url, url_prefix};
