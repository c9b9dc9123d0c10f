pub mod config;
pub mod data_gen;
pub mod error;
pub mod iter;
pub mod node;
pub mod red_black_tree;
pub mod utils;

pub use config::{DuplicatePolicy, TreeConfig};
pub use error::{Error, InvariantViolation, Result};
pub use node::{Color, NodeId, NodeRef};
pub use red_black_tree::RedBlackTree;

pub type Key = i64;
