//! Navigation tree builder.
//!
//! Folds the flat, ordered list of discovered routes into a forest of
//! [`NavItem`]s, one node per path segment. Prefixes that have no content of
//! their own still get a node so that every child has a parent.
//!
//! # Example
//!
//! ```
//! use mdnav_site::build_navigation;
//!
//! let nav = build_navigation(&["getting-started/install"]);
//! assert_eq!(nav[0].name, "getting started");
//! assert_eq!(nav[0].path, "getting-started");
//! assert_eq!(nav[0].children[0].path, "getting-started/install");
//! ```

use std::collections::HashMap;

use serde::Serialize;

/// Navigation item with children for UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display name derived from the path segment.
    pub name: String,
    /// Route identity of this prefix.
    pub path: String,
    /// Child navigation items, in first-seen order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// Display name for a path segment (hyphens become spaces).
#[must_use]
pub fn display_name(segment: &str) -> String {
    segment.replace('-', " ")
}

/// Build the navigation forest from route identities.
///
/// Sibling order is the order in which prefixes are first seen in `routes`;
/// nothing is re-sorted. Feeding the same route twice adds nothing. Empty
/// segments are skipped, so `""` contributes no node.
#[must_use]
pub fn build_navigation<S: AsRef<str>>(routes: &[S]) -> Vec<NavItem> {
    let mut builder = TreeBuilder::default();
    for route in routes {
        builder.insert(route.as_ref());
    }
    builder.finish()
}

/// Flat node storage while the tree is being assembled.
struct Node {
    name: String,
    path: String,
    children: Vec<usize>,
}

#[derive(Default)]
struct TreeBuilder {
    nodes: Vec<Node>,
    roots: Vec<usize>,
    /// Route prefix -> node index.
    by_path: HashMap<String, usize>,
}

impl TreeBuilder {
    fn insert(&mut self, route: &str) {
        let mut prefix = String::new();
        let mut parent: Option<usize> = None;

        for segment in route.split('/').filter(|s| !s.is_empty()) {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);

            let idx = match self.by_path.get(&prefix) {
                Some(&idx) => idx,
                None => self.create(segment, &prefix, parent),
            };
            parent = Some(idx);
        }
    }

    fn create(&mut self, segment: &str, path: &str, parent: Option<usize>) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            name: display_name(segment),
            path: path.to_owned(),
            children: Vec::new(),
        });
        self.by_path.insert(path.to_owned(), idx);
        match parent {
            Some(p) => self.nodes[p].children.push(idx),
            None => self.roots.push(idx),
        }
        idx
    }

    fn finish(mut self) -> Vec<NavItem> {
        let roots = std::mem::take(&mut self.roots);
        self.collect(&roots)
    }

    fn collect(&mut self, ids: &[usize]) -> Vec<NavItem> {
        ids.iter()
            .map(|&idx| {
                let children = std::mem::take(&mut self.nodes[idx].children);
                NavItem {
                    name: std::mem::take(&mut self.nodes[idx].name),
                    path: std::mem::take(&mut self.nodes[idx].path),
                    children: self.collect(&children),
                }
            })
            .collect()
    }
}
