use crate::Key;
use crate::red_black_tree::RedBlackTree;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Stable index of a node inside the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

// arena slot; links are indices so the parent back-reference owns nothing
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) value: Key,
    pub(crate) color: Color,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(value: Key, color: Color, parent: Option<NodeId>) -> Self {
        Self {
            value,
            color,
            left: None,
            right: None,
            parent,
        }
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

/// Read-only view of a node, borrowed from its tree.
///
/// Holding a `NodeRef` keeps the tree immutably borrowed, so a renderer can walk
/// `left`/`right` freely without ever observing a half-finished insert.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a RedBlackTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a RedBlackTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn node(&self) -> &'a Node {
        self.tree.node(self.id)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> Key {
        self.node().value
    }

    pub fn color(&self) -> Color {
        self.node().color
    }

    pub fn is_red(&self) -> bool {
        self.node().is_red()
    }

    pub fn is_black(&self) -> bool {
        !self.is_red()
    }

    pub fn left(&self) -> Option<NodeRef<'a>> {
        self.node().left.map(|id| NodeRef::new(self.tree, id))
    }

    pub fn right(&self) -> Option<NodeRef<'a>> {
        self.node().right.map(|id| NodeRef::new(self.tree, id))
    }

    // diagnostics only
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node().parent.map(|id| NodeRef::new(self.tree, id))
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

// prints the whole subtree, e.g. `20B(10R, 30R)`
impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.color() {
            Color::Red => 'R',
            Color::Black => 'B',
        };
        write!(f, "{}{}", self.value(), tag)?;

        if self.left().is_some() || self.right().is_some() {
            write!(f, "(")?;
            match self.left() {
                Some(left) => write!(f, "{:?}", left)?,
                None => write!(f, "-")?,
            }
            write!(f, ", ")?;
            match self.right() {
                Some(right) => write!(f, "{:?}", right)?,
                None => write!(f, "-")?,
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
