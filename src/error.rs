use crate::Key;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("red-black invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),

    #[error("invalid key distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),
}

/// A broken red-black or BST property found by `RedBlackTree::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root {value} is red")]
    RedRoot { value: Key },

    #[error("red node {child} has a red parent {parent}")]
    RedRed { parent: Key, child: Key },

    #[error("black height differs below {value}: left {left}, right {right}")]
    BlackHeightMismatch { value: Key, left: usize, right: usize },

    #[error("key {value} is out of order relative to ancestor {bound}")]
    OutOfOrder { value: Key, bound: Key },

    #[error("node {value} does not point back to its parent")]
    BrokenParentLink { value: Key },

    #[error("root {value} has a parent")]
    RootHasParent { value: Key },

    #[error("reachable nodes ({reachable}) do not match stored nodes ({stored})")]
    LengthMismatch { reachable: usize, stored: usize },
}
