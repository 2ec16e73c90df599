// src/pages/ui_manager.rs
//! Navigation manager over a [`PageTree`].

use alloc::string::String;
use alloc::vec::Vec;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::{debug, info, warn};

use super::page::{Navigation, Page, PageId};
use super::tree::PageTree;
use crate::ui::core::Frame;

/// Owns the page tree and tracks the current page and the back history.
///
/// Navigation calls report failure as `false` and leave the state untouched.
/// Two kinds of "back" exist: [`go_back`](Self::go_back) undoes the last
/// navigation chronologically, [`navigate_to_parent`](Self::navigate_to_parent)
/// moves up the tree regardless of how the current page was reached.
pub struct UiManager<P> {
    tree: Option<PageTree<P>>,
    current: Option<PageId>,
    history: Vec<PageId>,
}

impl<P: Page> Default for UiManager<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Page> UiManager<P> {
    /// A manager with no pages. Every navigation fails until a root is set.
    pub fn new() -> Self {
        Self {
            tree: None,
            current: None,
            history: Vec::new(),
        }
    }

    /// Install `tree` and enter its root. Any previous tree is exited and
    /// returned, and the history is cleared.
    pub fn set_root_page(&mut self, tree: PageTree<P>) -> Option<PageTree<P>> {
        if let (Some(old), Some(current)) = (self.tree.as_mut(), self.current) {
            old.exit(current);
        }
        self.history.clear();
        let previous = self.tree.replace(tree);
        let root = PageId::ROOT;
        self.current = Some(root);
        if let Some(tree) = self.tree.as_mut() {
            info!("Root page set to '{}'", tree.name(root).unwrap_or_default());
            tree.enter(root);
        }
        previous
    }

    pub fn tree(&self) -> Option<&PageTree<P>> {
        self.tree.as_ref()
    }

    pub fn tree_mut(&mut self) -> Option<&mut PageTree<P>> {
        self.tree.as_mut()
    }

    pub fn current_page(&self) -> Option<PageId> {
        self.current
    }

    pub fn current_name(&self) -> Option<&str> {
        self.tree.as_ref()?.name(self.current?)
    }

    /// Path of the current page from the root, root excluded.
    pub fn current_path(&self) -> Vec<String> {
        match (self.tree.as_ref(), self.current) {
            (Some(tree), Some(current)) => tree.get_path(current),
            _ => Vec::new(),
        }
    }

    /// Back history, most recent last
    pub fn history(&self) -> &[PageId] {
        &self.history
    }

    /// Descend into the child `name` of the current page.
    pub fn navigate_to_child(&mut self, name: &str) -> bool {
        let (Some(tree), Some(current)) = (self.tree.as_mut(), self.current) else {
            return false;
        };
        let Some(child) = tree.get_child(current, name) else {
            debug!("No child '{}' under {:?}", name, current);
            return false;
        };

        self.history.push(current);
        tree.exit(current);
        tree.child_enter(current, child);
        self.current = Some(child);
        info!("Navigated to child '{}'", name);
        tree.enter(child);
        true
    }

    /// Ascend to the parent of the current page.
    pub fn navigate_to_parent(&mut self) -> bool {
        let (Some(tree), Some(current)) = (self.tree.as_mut(), self.current) else {
            return false;
        };
        let Some(parent) = tree.parent(current) else {
            debug!("{:?} has no parent", current);
            return false;
        };

        tree.child_exit(parent, current);
        tree.exit(current);
        if self.history.last() == Some(&parent) {
            self.history.pop();
        }
        self.current = Some(parent);
        info!("Navigated to parent '{}'", tree.name(parent).unwrap_or_default());
        tree.enter(parent);
        true
    }

    /// Jump directly to `target`.
    ///
    /// The current page is pushed onto the history unless the history already
    /// ends with `target`. Jumping to the current page still runs its exit
    /// and enter hooks.
    pub fn navigate_to_page(&mut self, target: PageId) -> bool {
        let (Some(tree), Some(current)) = (self.tree.as_mut(), self.current) else {
            return false;
        };
        if !tree.contains(target) {
            return false;
        }
        if self.history.last() != Some(&target) {
            self.history.push(current);
        }
        tree.exit(current);
        self.current = Some(target);
        info!("Navigated to '{}'", tree.name(target).unwrap_or_default());
        tree.enter(target);
        true
    }

    /// Return to the page visited before the current one.
    pub fn go_back(&mut self) -> bool {
        let (Some(tree), Some(current)) = (self.tree.as_mut(), self.current) else {
            return false;
        };
        let Some(previous) = self.history.pop() else {
            return false;
        };

        tree.exit(current);
        self.current = Some(previous);
        info!("Back to '{}'", tree.name(previous).unwrap_or_default());
        tree.enter(previous);
        true
    }

    /// Jump to the root page.
    pub fn go_home(&mut self) -> bool {
        self.navigate_to_page(PageId::ROOT)
    }

    /// Follow child names from the root.
    pub fn navigate_to_path<S: AsRef<str>>(&mut self, segments: &[S]) -> bool {
        let target = self
            .tree
            .as_ref()
            .and_then(|tree| tree.resolve(tree.root(), segments));
        target.is_some_and(|target| self.navigate_to_page(target))
    }

    /// Follow child names from the current page.
    pub fn navigate_to_relative_path<S: AsRef<str>>(&mut self, segments: &[S]) -> bool {
        let target = match (self.tree.as_ref(), self.current) {
            (Some(tree), Some(current)) => tree.resolve(current, segments),
            _ => None,
        };
        target.is_some_and(|target| self.navigate_to_page(target))
    }

    /// `"/a/b"` style absolute path.
    pub fn navigate_to_path_str(&mut self, path: &str) -> bool {
        self.navigate_to_path(segments(path).as_slice())
    }

    /// `"a/b"` style path relative to the current page.
    pub fn navigate_to_relative_path_str(&mut self, path: &str) -> bool {
        self.navigate_to_relative_path(segments(path).as_slice())
    }

    /// Apply a navigation request.
    pub fn navigate(&mut self, request: Navigation) -> bool {
        match request {
            Navigation::ToChild(name) => self.navigate_to_child(&name),
            Navigation::ToParent => self.navigate_to_parent(),
            Navigation::Back => self.go_back(),
            Navigation::ToPath(path) => self.navigate_to_path(path.as_slice()),
            Navigation::ToRelativePath(path) => {
                self.navigate_to_relative_path(path.as_slice())
            }
            Navigation::ToPage(id) => self.navigate_to_page(id),
        }
    }

    /// Run the current page for one frame, then apply the navigation it
    /// requested. Does nothing before a root is set.
    pub fn update<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        frame: &mut Frame<'_, D>,
    ) -> Result<(), D::Error> {
        let Some(current) = self.current else {
            return Ok(());
        };
        let Some(page) = self.tree.as_mut().and_then(|tree| tree.page_mut(current)) else {
            return Ok(());
        };

        if let Some(request) = page.update(frame)? {
            debug!("Page {:?} requested {:?}", current, request);
            if !self.navigate(request.clone()) {
                warn!("Navigation request {:?} from {:?} rejected", request, current);
            }
        }
        Ok(())
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}
