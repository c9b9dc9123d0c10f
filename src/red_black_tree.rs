use crate::Key;
use crate::config::{DuplicatePolicy, TreeConfig};
use crate::error::{InvariantViolation, Result};
use crate::iter::Iter;
use crate::node::{Color, Node, NodeId, NodeRef};
use std::fmt;
use tracing::{debug, instrument, trace};

/// Red-black tree over `Key`s.
///
/// Nodes live in an arena and refer to each other by `NodeId`, so the parent
/// back-links used by the fix-up walk never own anything. Cloning the tree
/// copies the arena, which gives callers a cheap deep snapshot.
///
/// # Example
/// ```rust
/// use rb_tree::{Color, RedBlackTree};
/// let mut tree = RedBlackTree::new();
/// for key in [10, 20, 30] {
///     tree.insert(key);
/// }
/// let root = tree.root().unwrap();
/// assert_eq!((root.value(), root.color()), (20, Color::Black));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RedBlackTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    config: TreeConfig,
}

impl RedBlackTree {
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            nodes: Vec::with_capacity(config.initial_capacity),
            root: None,
            config,
        }
    }

    /// inserts `keys` one by one, in the given order
    pub fn new_with_keys(keys: &[Key]) -> Self {
        let mut tree = Self::with_config(TreeConfig::new().initial_capacity(keys.len()));
        tree.extend(keys.iter().copied());
        tree
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.root.map(|id| NodeRef::new(self, id))
    }

    pub(crate) fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn alloc(&mut self, value: Key, color: Color, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(value, color, parent));
        id
    }

    fn is_red(&self, id: NodeId) -> bool {
        self.node(id).is_red()
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, value: Key) {
        // empty tree, the new node is a black root
        let Some(mut current) = self.root else {
            let id = self.alloc(value, Color::Black, None);
            self.root = Some(id);
            trace!("inserted root");
            return;
        };

        // descend, ties go right
        let parent = loop {
            let node = self.node(current);
            if value == node.value && self.config.duplicates == DuplicatePolicy::Ignore {
                debug!(value, "ignoring duplicate key");
                return;
            }
            let next = if value < node.value { node.left } else { node.right };
            match next {
                Some(child) => current = child,
                None => break current,
            }
        };

        // link a red node under the last visited node
        let id = self.alloc(value, Color::Red, Some(parent));
        if value < self.node(parent).value {
            self.node_mut(parent).left = Some(id);
        } else {
            self.node_mut(parent).right = Some(id);
        }

        // repair red-red violations
        self.fix_insert(id);
    }

    fn fix_insert(&mut self, mut node: NodeId) {
        while let Some(mut parent) = self.node(node).parent.filter(|&p| self.is_red(p)) {
            // a red parent without a grandparent is the root, recolored below
            let Some(grandparent) = self.node(parent).parent else {
                break;
            };

            let parent_is_left = self.node(grandparent).left == Some(parent);
            let uncle = if parent_is_left {
                self.node(grandparent).right
            } else {
                self.node(grandparent).left
            };

            // red uncle: recolor and move the violation two levels up
            if let Some(uncle) = uncle.filter(|&u| self.is_red(u)) {
                trace!(grandparent = self.node(grandparent).value, "recolor under red uncle");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            // zig-zag: straighten into a line with the grandparent first
            let node_is_left = self.node(parent).left == Some(node);
            if parent_is_left != node_is_left {
                trace!(parent = self.node(parent).value, "rotate zig-zag at parent");
                node = parent;
                if parent_is_left {
                    self.rotate_left(node);
                } else {
                    self.rotate_right(node);
                }
                parent = self
                    .node(node)
                    .parent
                    .expect("rotation at the parent must leave the node with a parent");
            }

            trace!(grandparent = self.node(grandparent).value, "rotate straight line at grandparent");
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            if parent_is_left {
                self.rotate_right(grandparent);
            } else {
                self.rotate_left(grandparent);
            }
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    fn rotate_left(&mut self, node: NodeId) {
        let pivot = self
            .node(node)
            .right
            .expect("rotate_left requires a right child");

        let inner = self.node(pivot).left;
        self.node_mut(node).right = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(node);
        }

        self.replace_parent_child(node, pivot);
        self.node_mut(pivot).left = Some(node);
        self.node_mut(node).parent = Some(pivot);
    }

    fn rotate_right(&mut self, node: NodeId) {
        let pivot = self
            .node(node)
            .left
            .expect("rotate_right requires a left child");

        let inner = self.node(pivot).right;
        self.node_mut(node).left = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(node);
        }

        self.replace_parent_child(node, pivot);
        self.node_mut(pivot).right = Some(node);
        self.node_mut(node).parent = Some(pivot);
    }

    // puts `new_child` wherever `old_child` hung, root included
    fn replace_parent_child(&mut self, old_child: NodeId, new_child: NodeId) {
        let parent = self.node(old_child).parent;
        match parent {
            None => self.root = Some(new_child),
            Some(p) => {
                if self.node(p).left == Some(old_child) {
                    self.node_mut(p).left = Some(new_child);
                } else {
                    self.node_mut(p).right = Some(new_child);
                }
            }
        }
        self.node_mut(new_child).parent = parent;
    }

    pub fn contains(&self, key: Key) -> bool {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            if key == node.value {
                return true;
            }
            current = if key < node.value { node.left } else { node.right };
        }
        false
    }

    /// number of levels, 0 for an empty tree
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            max = max.max(depth);
            let node = self.node(id);
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max
    }

    /// black nodes on any root-to-nil path, `None` if the tree fails `validate`
    pub fn black_height(&self) -> Option<usize> {
        self.validate().ok()
    }

    pub fn min(&self) -> Option<Key> {
        let mut id = self.root?;
        while let Some(left) = self.node(id).left {
            id = left;
        }
        Some(self.node(id).value)
    }

    pub fn max(&self) -> Option<Key> {
        let mut id = self.root?;
        while let Some(right) = self.node(id).right {
            id = right;
        }
        Some(self.node(id).value)
    }

    /// largest stored key that is `<= key`
    pub fn predecessor(&self, key: Key) -> Option<Key> {
        let mut best = None;
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            if node.value == key {
                return Some(key);
            } else if key < node.value {
                current = node.left;
            } else {
                best = Some(node.value);
                current = node.right;
            }
        }
        best
    }

    /// smallest stored key that is `>= key`
    pub fn successor(&self, key: Key) -> Option<Key> {
        let mut best = None;
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            if node.value == key {
                return Some(key);
            } else if key < node.value {
                best = Some(node.value);
                current = node.left;
            } else {
                current = node.right;
            }
        }
        best
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    pub fn values(&self) -> Vec<Key> {
        self.iter().collect()
    }

    /// Checks every red-black property plus parent links and key order.
    ///
    /// Returns the black height of the root (nil leaves not counted).
    pub fn validate(&self) -> Result<usize> {
        let Some(root) = self.root else {
            if !self.nodes.is_empty() {
                return Err(InvariantViolation::LengthMismatch {
                    reachable: 0,
                    stored: self.nodes.len(),
                }
                .into());
            }
            return Ok(0);
        };

        let node = self.node(root);
        if node.parent.is_some() {
            return Err(InvariantViolation::RootHasParent { value: node.value }.into());
        }
        if node.is_red() {
            return Err(InvariantViolation::RedRoot { value: node.value }.into());
        }

        let mut reachable = 0;
        let black_height = self.check_subtree(root, None, None, &mut reachable)?;
        if reachable != self.nodes.len() {
            return Err(InvariantViolation::LengthMismatch {
                reachable,
                stored: self.nodes.len(),
            }
            .into());
        }
        Ok(black_height)
    }

    // returns the black height of the subtree at `id`
    fn check_subtree(
        &self,
        id: NodeId,
        lower: Option<Key>,
        upper: Option<Key>,
        reachable: &mut usize,
    ) -> std::result::Result<usize, InvariantViolation> {
        *reachable += 1;
        let node = self.node(id);

        if let Some(bound) = lower.filter(|&b| node.value < b) {
            return Err(InvariantViolation::OutOfOrder { value: node.value, bound });
        }
        if let Some(bound) = upper.filter(|&b| node.value > b) {
            return Err(InvariantViolation::OutOfOrder { value: node.value, bound });
        }

        let mut heights = [0; 2];
        for (slot, child) in [node.left, node.right].into_iter().enumerate() {
            let Some(child) = child else { continue };
            let child_node = self.node(child);
            if child_node.parent != Some(id) {
                return Err(InvariantViolation::BrokenParentLink { value: child_node.value });
            }
            if node.is_red() && child_node.is_red() {
                return Err(InvariantViolation::RedRed {
                    parent: node.value,
                    child: child_node.value,
                });
            }
            heights[slot] = if slot == 0 {
                self.check_subtree(child, lower, Some(node.value), reachable)?
            } else {
                self.check_subtree(child, Some(node.value), upper, reachable)?
            };
        }

        if heights[0] != heights[1] {
            return Err(InvariantViolation::BlackHeightMismatch {
                value: node.value,
                left: heights[0],
                right: heights[1],
            });
        }
        Ok(heights[0] + usize::from(!node.is_red()))
    }

    pub fn pretty_print(&self) {
        println!("\n=== Red-Black Tree ===");
        print!("{}", self);
        println!("======================\n");
    }

    fn write_subtree(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: NodeId,
        prefix: &str,
        is_tail: bool,
    ) -> fmt::Result {
        let node = self.node(id);
        let tag = if node.is_red() { "R" } else { "B" };
        writeln!(
            f,
            "{}{} {} ({})",
            prefix,
            if is_tail { "└──" } else { "├──" },
            node.value,
            tag
        )?;

        let new_prefix = format!("{}{}", prefix, if is_tail { "    " } else { "│   " });
        if let Some(right) = node.right {
            self.write_subtree(f, right, &new_prefix, node.left.is_none())?;
        }
        if let Some(left) = node.left {
            self.write_subtree(f, left, &new_prefix, true)?;
        }
        Ok(())
    }
}

impl fmt::Display for RedBlackTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            None => writeln!(f, "  (empty tree)"),
            Some(root) => self.write_subtree(f, root, "", true),
        }
    }
}

impl Extend<Key> for RedBlackTree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for RedBlackTree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a> IntoIterator for &'a RedBlackTree {
    type Item = Key;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
