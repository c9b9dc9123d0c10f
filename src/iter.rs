use crate::Key;
use crate::node::NodeId;
use crate::red_black_tree::RedBlackTree;

/// In-order iterator over the keys of a `RedBlackTree`.
pub struct Iter<'a> {
    tree: &'a RedBlackTree,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(tree: &'a RedBlackTree) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root_id());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.tree.node(id).left;
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let tree = RedBlackTree::new();
        assert_eq!(tree.iter().next(), None);
    }

    #[test]
    fn test_in_order() {
        let tree = RedBlackTree::new_with_keys(&[50, 25, 75, 12, 37, 62, 87, -3]);
        let keys: Vec<Key> = tree.iter().collect();
        assert_eq!(keys, vec![-3, 12, 25, 37, 50, 62, 75, 87]);
    }

    #[test]
    fn test_len_tracks_progress() {
        let tree = RedBlackTree::new_with_keys(&[3, 1, 2]);
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let tree = RedBlackTree::new_with_keys(&[2, 1]);
        let mut seen = Vec::new();
        for key in &tree {
            seen.push(key);
        }
        assert_eq!(seen, vec![1, 2]);
    }
}
