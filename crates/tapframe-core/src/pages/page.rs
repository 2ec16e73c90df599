// src/pages/page.rs
//! Page abstraction and navigation requests.
//!
//! A [`Page`] is one screen of the application. It owns its widget managers
//! and any state its widgets report into. Pages do not hold a handle to the
//! [`UiManager`](super::ui_manager::UiManager); instead `update` returns a
//! [`Navigation`] which the manager applies once the page has finished its
//! frame.
//!
//! Applications with several page types store them as one enum that
//! implements [`Page`] by delegating each method to the inner page.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::core::Frame;

/// Index of a page node inside its [`PageTree`](super::tree::PageTree).
///
/// An id is only meaningful for the tree that issued it. Trees do not tag
/// their ids, so an id from another tree that happens to be in range selects
/// whatever page sits at that index. Ids past the end are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub(crate) usize);

impl PageId {
    /// The root of every tree
    pub const ROOT: PageId = PageId(0);

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Identity of a related page, handed to the parent-side hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRef<'a> {
    pub id: PageId,
    pub name: &'a str,
}

/// A navigation request returned by [`Page::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Descend to the named child of the current page
    ToChild(String),
    /// Ascend to the parent of the current page
    ToParent,
    /// Chronological undo through the history
    Back,
    /// Child names from the root
    ToPath(Vec<String>),
    /// Child names from the current page
    ToRelativePath(Vec<String>),
    /// Jump directly to a known page
    ToPage(PageId),
}

impl Navigation {
    pub fn child(name: &str) -> Self {
        Navigation::ToChild(name.into())
    }

    /// Parse a `/`-separated path. A leading `/` makes it absolute.
    pub fn parse_path(path: &str) -> Self {
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(String::from)
            .collect();
        if path.starts_with('/') {
            Navigation::ToPath(segments)
        } else {
            Navigation::ToRelativePath(segments)
        }
    }
}

// ---------------------------------------------------------------------------
// Page trait
// ---------------------------------------------------------------------------

/// Trait that all navigable pages implement.
///
/// The [`UiManager`](super::ui_manager::UiManager) drives the lifecycle:
///
/// 1. **`on_enter`** when the page becomes current.
/// 2. **`update`** once per frame while current.
/// 3. **`on_exit`** when another page becomes current.
///
/// A parent additionally hears about its children through
/// **`on_child_enter`** (descending into a child) and **`on_child_exit`**
/// (a child ascending back to it).
pub trait Page {
    fn on_enter(&mut self) {}

    fn on_exit(&mut self) {}

    fn on_child_enter(&mut self, _child: PageRef<'_>) {}

    fn on_child_exit(&mut self, _child: PageRef<'_>) {}

    /// Run the page's widget managers for one frame.
    ///
    /// Widgets handle the frame's touch sample and draw in one pass. The
    /// returned request, if any, is applied after this call returns.
    fn update<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        frame: &mut Frame<'_, D>,
    ) -> Result<Option<Navigation>, D::Error>;
}

/// Forward every call through to the boxed page.
impl<T: Page> Page for Box<T> {
    fn on_enter(&mut self) {
        (**self).on_enter()
    }

    fn on_exit(&mut self) {
        (**self).on_exit()
    }

    fn on_child_enter(&mut self, child: PageRef<'_>) {
        (**self).on_child_enter(child)
    }

    fn on_child_exit(&mut self, child: PageRef<'_>) {
        (**self).on_child_exit(child)
    }

    fn update<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        frame: &mut Frame<'_, D>,
    ) -> Result<Option<Navigation>, D::Error> {
        (**self).update(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_path_str_absolute_and_relative() {
        assert_eq!(
            Navigation::parse_path("/settings/display"),
            Navigation::ToPath(vec!["settings".into(), "display".into()])
        );
        assert_eq!(
            Navigation::parse_path("display//"),
            Navigation::ToRelativePath(vec!["display".into()])
        );
        assert_eq!(Navigation::parse_path("/"), Navigation::ToPath(vec![]));
    }
}
