//! Page tree and navigation
//!
//! Pages form a single-rooted tree owned by a [`PageTree`] arena. The
//! [`UiManager`] moves a cursor over that tree and keeps a chronological
//! history for back navigation.

pub mod page;
pub mod tree;
pub mod ui_manager;

pub use page::{Navigation, Page, PageId, PageRef};
pub use tree::PageTree;
pub use ui_manager::UiManager;
