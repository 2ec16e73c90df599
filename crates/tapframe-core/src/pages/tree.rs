// src/pages/tree.rs
//! Arena-backed page tree.
//!
//! Nodes live in insertion order and are addressed by [`PageId`]. Each node
//! records its parent as an id, so the tree is owned top-down from the arena
//! and parent links never own anything.

use alloc::string::String;
use alloc::vec::Vec;
use log::debug;

use super::page::{Page, PageId, PageRef};
use crate::config::{ConfigError, ConfigResult};

struct PageNode {
    name: String,
    parent: Option<PageId>,
    children: Vec<PageId>,
}

/// Single-rooted tree of pages with sibling-unique names.
///
/// Node metadata and the pages themselves are stored side by side so a page
/// can be borrowed mutably while a relative's name is read.
pub struct PageTree<P> {
    nodes: Vec<PageNode>,
    pages: Vec<P>,
}

impl<P> PageTree<P> {
    /// Create a tree holding only `root`. The root name may be empty.
    pub fn new(root_name: &str, root: P) -> Self {
        Self {
            nodes: alloc::vec![PageNode {
                name: root_name.into(),
                parent: None,
                children: Vec::new(),
            }],
            pages: alloc::vec![root],
        }
    }

    pub fn root(&self) -> PageId {
        PageId::ROOT
    }

    /// Number of pages, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: PageId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Attach `page` as the last child of `parent`.
    pub fn add_child(&mut self, parent: PageId, name: &str, page: P) -> ConfigResult<PageId> {
        if !self.contains(parent) {
            return Err(ConfigError::UnknownPage(parent));
        }
        if name.is_empty() {
            return Err(ConfigError::EmptyPageName);
        }
        if self.get_child(parent, name).is_some() {
            return Err(ConfigError::DuplicatePageName(name.into()));
        }

        let id = PageId(self.nodes.len());
        self.nodes.push(PageNode {
            name: name.into(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.pages.push(page);
        self.nodes[parent.0].children.push(id);
        debug!("Added page '{}' under {:?} as {:?}", name, parent, id);
        Ok(id)
    }

    pub fn get_child(&self, parent: PageId, name: &str) -> Option<PageId> {
        self.nodes
            .get(parent.0)?
            .children
            .iter()
            .copied()
            .find(|child| self.nodes[child.0].name == name)
    }

    pub fn parent(&self, id: PageId) -> Option<PageId> {
        self.nodes.get(id.0)?.parent
    }

    /// Children in insertion order. Empty for unknown ids.
    pub fn children(&self, id: PageId) -> &[PageId] {
        self.nodes
            .get(id.0)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn name(&self, id: PageId) -> Option<&str> {
        self.nodes.get(id.0).map(|node| node.name.as_str())
    }

    /// Child names leading from the root to `id`, root excluded.
    ///
    /// The root's path is empty. Unknown ids also yield an empty path.
    pub fn get_path(&self, id: PageId) -> Vec<String> {
        let mut path = Vec::new();
        let mut cursor = Some(id).filter(|id| self.contains(*id));
        while let Some(node) = cursor {
            let Some(parent) = self.parent(node) else {
                break;
            };
            path.push(self.nodes[node.0].name.clone());
            cursor = Some(parent);
        }
        path.reverse();
        path
    }

    /// Follow child names starting at `from`.
    pub fn resolve<S: AsRef<str>>(&self, from: PageId, segments: &[S]) -> Option<PageId> {
        if !self.contains(from) {
            return None;
        }
        segments
            .iter()
            .try_fold(from, |node, segment| self.get_child(node, segment.as_ref()))
    }

    /// Resolve a `/`-separated path. A leading `/` starts at the root,
    /// anything else starts at `from`.
    pub fn resolve_str(&self, from: PageId, path: &str) -> Option<PageId> {
        let start = if path.starts_with('/') {
            self.root()
        } else {
            from
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        self.resolve(start, &segments)
    }

    pub fn page(&self, id: PageId) -> Option<&P> {
        self.pages.get(id.0)
    }

    pub fn page_mut(&mut self, id: PageId) -> Option<&mut P> {
        self.pages.get_mut(id.0)
    }
}

// Lifecycle dispatch used by the manager. Unknown ids are ignored.
impl<P: Page> PageTree<P> {
    pub(crate) fn enter(&mut self, id: PageId) {
        if let Some(page) = self.pages.get_mut(id.0) {
            debug!("Enter '{}'", self.nodes[id.0].name);
            page.on_enter();
        }
    }

    pub(crate) fn exit(&mut self, id: PageId) {
        if let Some(page) = self.pages.get_mut(id.0) {
            debug!("Exit '{}'", self.nodes[id.0].name);
            page.on_exit();
        }
    }

    pub(crate) fn child_enter(&mut self, parent: PageId, child: PageId) {
        if let (Some(page), Some(node)) = (self.pages.get_mut(parent.0), self.nodes.get(child.0)) {
            page.on_child_enter(PageRef {
                id: child,
                name: &node.name,
            });
        }
    }

    pub(crate) fn child_exit(&mut self, parent: PageId, child: PageId) {
        if let (Some(page), Some(node)) = (self.pages.get_mut(parent.0), self.nodes.get(child.0)) {
            page.on_child_exit(PageRef {
                id: child,
                name: &node.name,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> (PageTree<()>, [PageId; 3]) {
        let mut tree = PageTree::new("Home", ());
        let settings = tree.add_child(PageId::ROOT, "Settings", ()).unwrap();
        let display = tree.add_child(settings, "Display", ()).unwrap();
        let about = tree.add_child(PageId::ROOT, "About", ()).unwrap();
        (tree, [settings, display, about])
    }

    #[test]
    fn test_structure_is_consistent() {
        let (tree, [settings, display, about]) = tree();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.children(PageId::ROOT), [settings, about]);
        assert_eq!(tree.children(settings), [display]);
        assert_eq!(tree.parent(display), Some(settings));
        assert_eq!(tree.parent(settings), Some(PageId::ROOT));
        assert_eq!(tree.parent(PageId::ROOT), None);
        assert_eq!(tree.get_child(PageId::ROOT, "About"), Some(about));
        assert_eq!(tree.get_child(PageId::ROOT, "Display"), None);
    }

    #[test]
    fn test_duplicate_sibling_rejected() {
        let (mut tree, [settings, ..]) = tree();
        assert!(matches!(
            tree.add_child(PageId::ROOT, "Settings", ()),
            Err(ConfigError::DuplicatePageName(name)) if name == "Settings"
        ));
        // Same name under a different parent is fine.
        assert!(tree.add_child(settings, "About", ()).is_ok());
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_invalid_children_rejected() {
        let (mut tree, _) = tree();
        assert!(matches!(
            tree.add_child(PageId::ROOT, "", ()),
            Err(ConfigError::EmptyPageName)
        ));
        assert!(matches!(
            tree.add_child(PageId(42), "Orphan", ()),
            Err(ConfigError::UnknownPage(PageId(42)))
        ));
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_get_path_excludes_root() {
        let (tree, [settings, display, _]) = tree();
        assert!(tree.get_path(PageId::ROOT).is_empty());
        assert_eq!(tree.get_path(settings), ["Settings"]);
        assert_eq!(tree.get_path(display), ["Settings", "Display"]);
        assert_eq!(tree.resolve(PageId::ROOT, tree.get_path(display).as_slice()), Some(display));
    }

    #[test]
    fn test_resolve() {
        let (tree, [settings, display, about]) = tree();
        assert_eq!(tree.resolve(settings, &["Display"]), Some(display));
        assert_eq!(tree.resolve(settings, &["Missing"]), None);
        assert_eq!(tree.resolve::<&str>(about, &[]), Some(about));
        assert_eq!(tree.resolve_str(display, "/About"), Some(about));
        assert_eq!(tree.resolve_str(settings, "Display/"), Some(display));
        assert_eq!(tree.resolve_str(display, "/"), Some(PageId::ROOT));
        assert_eq!(tree.resolve_str(PageId(9), "About"), None);
    }
}
