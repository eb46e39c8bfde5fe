// src/containers/bst.rs

//! Unbalanced binary search tree with recursive algorithms.
//!
//! For every node, all keys in the left subtree compare strictly less and all
//! keys in the right subtree strictly greater; duplicates are reported by the
//! insert outcome and never stored. Recursion depth equals tree height, which
//! is fine at the input sizes this crate schedules; an iterative formulation
//! would be needed before pointing this at adversarial key volumes.

#[derive(Debug, Clone)]
struct BstNode<K> {
    key: K,
    left: Option<Box<BstNode<K>>>,
    right: Option<Box<BstNode<K>>>,
}

impl<K> BstNode<K> {
    fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

/// Ordered tree of unique keys.
#[derive(Debug, Clone, Default)]
pub struct Bst<K: Ord> {
    root: Option<Box<BstNode<K>>>,
    len: usize,
}

/// Owned snapshot of the tree structure, for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeShape<K> {
    pub key: K,
    pub left: Option<Box<TreeShape<K>>>,
    pub right: Option<Box<TreeShape<K>>>,
}

impl<K: Ord> Bst<K> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert `key`; returns `false` if an equal key was already present
    /// (the tree is unchanged in that case).
    pub fn insert(&mut self, key: K) -> bool {
        let inserted = Self::insert_rec(&mut self.root, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn insert_rec(slot: &mut Option<Box<BstNode<K>>>, key: K) -> bool {
        match slot {
            None => {
                *slot = Some(BstNode::leaf(key));
                true
            }
            Some(node) => match key.cmp(&node.key) {
                std::cmp::Ordering::Less => Self::insert_rec(&mut node.left, key),
                std::cmp::Ordering::Greater => Self::insert_rec(&mut node.right, key),
                std::cmp::Ordering::Equal => false,
            },
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                std::cmp::Ordering::Less => node.left.as_deref(),
                std::cmp::Ordering::Greater => node.right.as_deref(),
                std::cmp::Ordering::Equal => return true,
            };
        }
        false
    }

    /// Remove `key`; returns `false` if it was not present.
    ///
    /// Three-case deletion: a leaf is dropped, a single-child node is replaced
    /// by its child, and a two-child node takes the minimum key of its right
    /// subtree (the in-order successor) and recurses into that subtree.
    pub fn remove(&mut self, key: &K) -> bool {
        let removed = Self::remove_rec(&mut self.root, key);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn remove_rec(slot: &mut Option<Box<BstNode<K>>>, key: &K) -> bool {
        let Some(node) = slot else {
            return false;
        };
        match key.cmp(&node.key) {
            std::cmp::Ordering::Less => Self::remove_rec(&mut node.left, key),
            std::cmp::Ordering::Greater => Self::remove_rec(&mut node.right, key),
            std::cmp::Ordering::Equal => {
                match (node.left.take(), node.right.take()) {
                    (None, None) => *slot = None,
                    (Some(left), None) => *slot = Some(left),
                    (None, Some(right)) => *slot = Some(right),
                    (Some(left), Some(right)) => {
                        node.left = Some(left);
                        node.right = Some(right);
                        if let Some(successor) = Self::take_min(&mut node.right) {
                            node.key = successor;
                        }
                    }
                }
                true
            }
        }
    }

    /// Detach the minimum node of the subtree rooted at `slot` and return its
    /// key. `None` only for an empty subtree.
    fn take_min(slot: &mut Option<Box<BstNode<K>>>) -> Option<K> {
        let mut node = slot.take()?;
        if node.left.is_some() {
            let key = Self::take_min(&mut node.left);
            *slot = Some(node);
            key
        } else {
            *slot = node.right.take();
            Some(node.key)
        }
    }

    /// Visit every key in ascending order.
    pub fn inorder(&self, mut visit: impl FnMut(&K)) {
        Self::inorder_rec(self.root.as_deref(), &mut visit);
    }

    fn inorder_rec(node: Option<&BstNode<K>>, visit: &mut impl FnMut(&K)) {
        if let Some(node) = node {
            Self::inorder_rec(node.left.as_deref(), visit);
            visit(&node.key);
            Self::inorder_rec(node.right.as_deref(), visit);
        }
    }

    /// Visit every key, node before its subtrees.
    pub fn preorder(&self, mut visit: impl FnMut(&K)) {
        Self::preorder_rec(self.root.as_deref(), &mut visit);
    }

    fn preorder_rec(node: Option<&BstNode<K>>, visit: &mut impl FnMut(&K)) {
        if let Some(node) = node {
            visit(&node.key);
            Self::preorder_rec(node.left.as_deref(), visit);
            Self::preorder_rec(node.right.as_deref(), visit);
        }
    }

    /// Visit every key, subtrees before their node.
    pub fn postorder(&self, mut visit: impl FnMut(&K)) {
        Self::postorder_rec(self.root.as_deref(), &mut visit);
    }

    fn postorder_rec(node: Option<&BstNode<K>>, visit: &mut impl FnMut(&K)) {
        if let Some(node) = node {
            Self::postorder_rec(node.left.as_deref(), visit);
            Self::postorder_rec(node.right.as_deref(), visit);
            visit(&node.key);
        }
    }

    /// Keys in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        self.inorder(|key| out.push(key.clone()));
        out
    }

    /// Owned structural snapshot of the whole tree.
    pub fn shape(&self) -> Option<TreeShape<K>>
    where
        K: Clone,
    {
        Self::shape_rec(self.root.as_deref())
    }

    fn shape_rec(node: Option<&BstNode<K>>) -> Option<TreeShape<K>>
    where
        K: Clone,
    {
        node.map(|node| TreeShape {
            key: node.key.clone(),
            left: Self::shape_rec(node.left.as_deref()).map(Box::new),
            right: Self::shape_rec(node.right.as_deref()).map(Box::new),
        })
    }
}
