//! UI modules for the Artwork Browser application.
//!
//! The UI is split into distinct panels:
//! - Top bar: Title, status, and request statistics
//! - Bottom panel: Page navigation
//! - Right panel: Selected artworks
//! - Central table: Current page with selection checkboxes
//! - Bulk-select window: "select first N rows" across pages

mod artwork_table;
mod bottom_panel;
mod bulk_select;
mod selection_panel;
mod top_bar;

pub use artwork_table::render_artwork_table;
pub use bottom_panel::render_bottom_panel;
pub use bulk_select::render_bulk_select_window;
pub use selection_panel::render_selection_panel;
pub use top_bar::render_top_bar;
