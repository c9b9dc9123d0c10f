/// What `insert` does with a key that is already in the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// ties descend right and get their own node
    #[default]
    Allow,
    /// a key already present is left alone, the tree acts as a set
    Ignore,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeConfig {
    pub duplicates: DuplicatePolicy,
    // nodes to reserve in the arena up front
    pub initial_capacity: usize,
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
