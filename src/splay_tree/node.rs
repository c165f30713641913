use crate::splay_tree::tree::Tree;

pub struct Node<T> {
    pub key: T,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            left: None,
            right: None,
        }
    }
}

/// Rotates `node` with its left child and returns the new local root. The left child's right
/// subtree becomes `node`'s left subtree. Returns `node` unchanged if it has no left child.
pub fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    match node.left.take() {
        Some(mut child) => {
            node.left = child.right.take();
            child.right = Some(node);
            child
        },
        None => node,
    }
}

/// Rotates `node` with its right child and returns the new local root. The right child's left
/// subtree becomes `node`'s right subtree. Returns `node` unchanged if it has no right child.
pub fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    match node.right.take() {
        Some(mut child) => {
            node.right = child.left.take();
            child.left = Some(node);
            child
        },
        None => node,
    }
}
