use crate::splay_tree::node::{rotate_left, rotate_right, Node};
use crate::splay_tree::{Error, Result, SplayStrategy};
use std::borrow::Borrow;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Splays `node` on `key` and returns the new root of the subtree. The new root holds `key` if it
/// exists, otherwise it holds the last key reached on the search path.
pub fn splay<T, V>(mut node: Box<Node<T>>, key: &V) -> Box<Node<T>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    match key.cmp(node.key.borrow()) {
        Ordering::Equal => node,
        Ordering::Less => {
            let mut child = match node.left.take() {
                Some(child) => child,
                None => return node,
            };
            match key.cmp(child.key.borrow()) {
                // zig-zig
                Ordering::Less => {
                    if let Some(grandchild) = child.left.take() {
                        child.left = Some(splay(grandchild, key));
                        child = rotate_right(child);
                    }
                },
                // zig-zag
                Ordering::Greater => {
                    if let Some(grandchild) = child.right.take() {
                        child.right = Some(splay(grandchild, key));
                        child = rotate_left(child);
                    }
                },
                // zig
                Ordering::Equal => {},
            }
            node.left = Some(child);
            rotate_right(node)
        },
        Ordering::Greater => {
            let mut child = match node.right.take() {
                Some(child) => child,
                None => return node,
            };
            match key.cmp(child.key.borrow()) {
                // zag-zag
                Ordering::Greater => {
                    if let Some(grandchild) = child.right.take() {
                        child.right = Some(splay(grandchild, key));
                        child = rotate_left(child);
                    }
                },
                // zag-zig
                Ordering::Less => {
                    if let Some(grandchild) = child.left.take() {
                        child.left = Some(splay(grandchild, key));
                        child = rotate_right(child);
                    }
                },
                // zag
                Ordering::Equal => {},
            }
            node.right = Some(child);
            rotate_left(node)
        },
    }
}

/// Splays `node` on `key` in a single downward pass. Nodes smaller than `key` are collected into a
/// left tree and nodes larger than `key` into a right tree, which become the children of the last
/// node reached.
pub fn splay_top_down<T, V>(mut node: Box<Node<T>>, key: &V) -> Box<Node<T>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut left_tree: Tree<T> = None;
    let mut right_tree: Tree<T> = None;
    {
        // Empty slots at the largest end of the left tree and smallest end of the right tree.
        let mut left_hook = &mut left_tree;
        let mut right_hook = &mut right_tree;
        loop {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => {
                    let should_rotate = match node.left {
                        Some(ref child) => key.cmp(child.key.borrow()) == Ordering::Less,
                        None => break,
                    };
                    if should_rotate {
                        node = rotate_right(node);
                    }

                    let child = match node.left.take() {
                        Some(child) => child,
                        None => break,
                    };
                    right_hook = &mut { right_hook }.get_or_insert(node).left;
                    node = child;
                },
                Ordering::Greater => {
                    let should_rotate = match node.right {
                        Some(ref child) => key.cmp(child.key.borrow()) == Ordering::Greater,
                        None => break,
                    };
                    if should_rotate {
                        node = rotate_left(node);
                    }

                    let child = match node.right.take() {
                        Some(child) => child,
                        None => break,
                    };
                    left_hook = &mut { left_hook }.get_or_insert(node).right;
                    node = child;
                },
                Ordering::Equal => break,
            }
        }

        *left_hook = node.left.take();
        *right_hook = node.right.take();
    }

    node.left = left_tree;
    node.right = right_tree;
    node
}

fn splay_with<T, V>(node: Box<Node<T>>, key: &V, strategy: SplayStrategy) -> Box<Node<T>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    match strategy {
        SplayStrategy::Recursive => splay(node, key),
        SplayStrategy::TopDown => splay_top_down(node, key),
    }
}

/// Inserts `key` and leaves it at the root. Returns `false` without modifying the tree beyond the
/// splay if `key` already exists.
pub fn insert<T>(tree: &mut Tree<T>, key: T, strategy: SplayStrategy) -> bool
where
    T: Ord,
{
    let mut root = match tree.take() {
        Some(node) => splay_with(node, &key, strategy),
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    let (new_root, inserted) = match key.cmp(&root.key) {
        Ordering::Less => {
            let mut new_node = Box::new(Node::new(key));
            new_node.left = root.left.take();
            new_node.right = Some(root);
            (new_node, true)
        },
        Ordering::Greater => {
            let mut new_node = Box::new(Node::new(key));
            new_node.right = root.right.take();
            new_node.left = Some(root);
            (new_node, true)
        },
        Ordering::Equal => (root, false),
    };
    *tree = Some(new_root);
    inserted
}

/// Splays the tree on `key` and checks whether the new root holds `key`. The tree is restructured
/// even if `key` does not exist.
pub fn search<T, V>(tree: &mut Tree<T>, key: &V, strategy: SplayStrategy) -> bool
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    match tree.take() {
        Some(node) => {
            let root = splay_with(node, key, strategy);
            let found = key.cmp(root.key.borrow()) == Ordering::Equal;
            *tree = Some(root);
            found
        },
        None => false,
    }
}

/// Removes `key` and returns it if it exists. The tree is left splayed on `key` otherwise.
pub fn remove<T, V>(tree: &mut Tree<T>, key: &V, strategy: SplayStrategy) -> Option<T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let root = splay_with(tree.take()?, key, strategy);
    if key.cmp(root.key.borrow()) != Ordering::Equal {
        *tree = Some(root);
        return None;
    }

    let Node { key: removed, left, right } = *root;
    *tree = match (left, right) {
        // Every key on the left is smaller than `key`, so splaying on it surfaces the maximum.
        (Some(left), Some(right)) => {
            let mut new_root = splay_with(left, key, strategy);
            debug_assert!(new_root.right.is_none());
            new_root.right = Some(right);
            Some(new_root)
        },
        (Some(left), None) => Some(left),
        (None, right) => right,
    };
    Some(removed)
}

pub fn contains<T, V>(tree: &Tree<T>, key: &V) -> bool
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        curr = match key.cmp(node.key.borrow()) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

/// Rebuilds the tree whose preorder traversal is `keys`. Each key is linked either as the left
/// child of the previous key or as the right child of the largest earlier key smaller than it.
pub fn from_preorder<T>(keys: Vec<T>) -> Result<Tree<T>>
where
    T: Ord,
{
    let len = keys.len();
    let mut left_child: Vec<Option<usize>> = vec![None; len];
    let mut right_child: Vec<Option<usize>> = vec![None; len];

    // Indices of nodes that may still receive a right child, in decreasing key order.
    let mut stack: Vec<usize> = Vec::new();
    let mut lower_bound: Option<usize> = None;
    for (index, key) in keys.iter().enumerate() {
        if let Some(bound) = lower_bound {
            match key.cmp(&keys[bound]) {
                Ordering::Less => {
                    if keys[..index].contains(key) {
                        return Err(Error::DuplicateKey(index));
                    }
                    return Err(Error::OutOfOrder(index));
                },
                Ordering::Equal => return Err(Error::DuplicateKey(index)),
                Ordering::Greater => {},
            }
        }

        let mut parent = None;
        while let Some(&top) = stack.last() {
            match keys[top].cmp(key) {
                Ordering::Less => parent = stack.pop(),
                Ordering::Equal => return Err(Error::DuplicateKey(index)),
                Ordering::Greater => break,
            }
        }

        match parent {
            Some(parent) => {
                right_child[parent] = Some(index);
                lower_bound = Some(parent);
            },
            None => {
                if let Some(&top) = stack.last() {
                    left_child[top] = Some(index);
                }
            },
        }
        stack.push(index);
    }

    // Children always follow their parent in preorder, so building from the back links complete
    // subtrees.
    let mut subtrees: Vec<Tree<T>> = (0..len).map(|_| None).collect();
    for (index, key) in keys.into_iter().enumerate().rev() {
        let mut node = Node::new(key);
        node.left = left_child[index].and_then(|child| subtrees[child].take());
        node.right = right_child[index].and_then(|child| subtrees[child].take());
        subtrees[index] = Some(Box::new(node));
    }
    Ok(subtrees.into_iter().next().unwrap_or(None))
}

/// Releases every node of the tree without recursing, so arbitrarily deep trees can be dropped.
pub fn clear<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

#[cfg(test)]
mod tests {
    use super::{
        clear, contains, from_preorder, insert, max, min, remove, search, splay, splay_top_down,
        Tree,
    };
    use crate::splay_tree::{Error, SplayStrategy};

    fn preorder(tree: &Tree<u32>) -> Vec<u32> {
        let mut ret = Vec::new();
        let mut stack = Vec::new();
        stack.extend(tree.as_ref());
        while let Some(node) = stack.pop() {
            ret.push(node.key);
            stack.extend(node.right.as_ref());
            stack.extend(node.left.as_ref());
        }
        ret
    }

    fn build(keys: &[u32]) -> Tree<u32> {
        from_preorder(keys.to_vec()).expect("Expected valid preorder.")
    }

    fn splay_root(keys: &[u32], key: u32) -> Vec<u32> {
        let tree = build(keys).map(|node| splay(node, &key));
        preorder(&tree)
    }

    fn insert_all(keys: &[u32], strategy: SplayStrategy) -> Tree<u32> {
        let mut tree = None;
        for key in keys {
            insert(&mut tree, *key, strategy);
        }
        tree
    }

    #[test]
    fn test_splay_root() {
        assert_eq!(splay_root(&[2, 1, 3], 2), vec![2, 1, 3]);
    }

    #[test]
    fn test_splay_zig() {
        assert_eq!(splay_root(&[2, 1, 3], 1), vec![1, 2, 3]);
        assert_eq!(splay_root(&[2, 1, 3], 3), vec![3, 2, 1]);
    }

    #[test]
    fn test_splay_zig_zig() {
        assert_eq!(splay_root(&[3, 2, 1], 1), vec![1, 3, 2]);
        assert_eq!(splay_root(&[1, 2, 3], 3), vec![3, 1, 2]);
    }

    #[test]
    fn test_splay_zig_zag() {
        assert_eq!(splay_root(&[3, 1, 2], 2), vec![2, 1, 3]);
        assert_eq!(splay_root(&[1, 3, 2], 2), vec![2, 1, 3]);
    }

    #[test]
    fn test_splay_absent_key() {
        assert_eq!(splay_root(&[2, 1, 3], 0), vec![1, 2, 3]);
        assert_eq!(splay_root(&[2, 1, 3], 4), vec![3, 2, 1]);
        assert_eq!(splay_root(&[4, 2, 6], 5), vec![6, 4, 2]);
        assert_eq!(splay_root(&[4, 2, 6], 4), vec![4, 2, 6]);
    }

    #[test]
    fn test_splay_top_down() {
        let tree = build(&[8, 9, 10, 11]).map(|node| splay_top_down(node, &12));
        assert_eq!(preorder(&tree), vec![11, 9, 8, 10]);

        let tree = build(&[8, 9, 10, 11]).map(|node| splay(node, &12));
        assert_eq!(preorder(&tree), vec![11, 8, 9, 10]);
    }

    #[test]
    fn test_splay_top_down_found() {
        let tree = build(&[4, 2, 1, 3, 6, 5, 7]).map(|node| splay_top_down(node, &3));
        assert_eq!(preorder(&tree), vec![3, 2, 1, 4, 6, 5, 7]);
    }

    #[test]
    fn test_insert_recursive() {
        let tree = insert_all(&[11, 9, 10, 8, 12, 13], SplayStrategy::Recursive);
        assert_eq!(preorder(&tree), vec![13, 12, 11, 8, 9, 10]);
    }

    #[test]
    fn test_insert_top_down() {
        let tree = insert_all(&[11, 9, 10, 8, 12, 13], SplayStrategy::TopDown);
        assert_eq!(preorder(&tree), vec![13, 12, 11, 9, 8, 10]);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = insert_all(&[1, 3, 2], SplayStrategy::Recursive);
        let before = preorder(&tree);
        assert!(!insert(&mut tree, 2, SplayStrategy::Recursive));
        assert_eq!(preorder(&tree), before);
    }

    #[test]
    fn test_search() {
        let mut tree = insert_all(&[1, 3, 5], SplayStrategy::Recursive);
        assert!(search(&mut tree, &1, SplayStrategy::Recursive));
        assert_eq!(tree.as_ref().map(|node| node.key), Some(1));

        assert!(!search(&mut tree, &4, SplayStrategy::Recursive));
        let root = tree.as_ref().map(|node| node.key);
        assert!(root == Some(3) || root == Some(5));
    }

    #[test]
    fn test_search_empty() {
        let mut tree: Tree<u32> = None;
        assert!(!search(&mut tree, &1, SplayStrategy::Recursive));
        assert!(tree.is_none());
    }

    #[test]
    fn test_remove_leaf_root() {
        let mut tree = insert_all(&[1], SplayStrategy::Recursive);
        assert_eq!(remove(&mut tree, &1, SplayStrategy::Recursive), Some(1));
        assert!(tree.is_none());
    }

    #[test]
    fn test_remove_single_child() {
        let mut tree = build(&[2, 1]);
        assert_eq!(remove(&mut tree, &2, SplayStrategy::Recursive), Some(2));
        assert_eq!(preorder(&tree), vec![1]);

        let mut tree = build(&[1, 2]);
        assert_eq!(remove(&mut tree, &1, SplayStrategy::Recursive), Some(1));
        assert_eq!(preorder(&tree), vec![2]);
    }

    #[test]
    fn test_remove_two_children() {
        let mut tree = build(&[4, 2, 1, 3, 6]);
        assert_eq!(remove(&mut tree, &4, SplayStrategy::Recursive), Some(4));
        assert_eq!(preorder(&tree), vec![3, 2, 1, 6]);

        let mut tree = build(&[4, 2, 1, 3, 6]);
        assert_eq!(remove(&mut tree, &4, SplayStrategy::TopDown), Some(4));
        assert_eq!(preorder(&tree), vec![3, 2, 1, 6]);
    }

    #[test]
    fn test_remove_absent() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(remove(&mut tree, &0, SplayStrategy::Recursive), None);
        assert_eq!(preorder(&tree), vec![1, 2, 3]);

        let mut tree: Tree<u32> = None;
        assert_eq!(remove(&mut tree, &0, SplayStrategy::Recursive), None);
    }

    #[test]
    fn test_remove_scenario() {
        let mut tree = insert_all(&[11, 9, 10, 8, 12, 13], SplayStrategy::Recursive);
        assert_eq!(remove(&mut tree, &13, SplayStrategy::Recursive), Some(13));
        assert!(!search(&mut tree, &13, SplayStrategy::Recursive));
        assert_eq!(preorder(&tree), vec![12, 11, 8, 9, 10]);
    }

    #[test]
    fn test_contains() {
        let tree = build(&[4, 2, 1, 3, 6]);
        assert!(contains(&tree, &3));
        assert!(!contains(&tree, &5));
        assert_eq!(preorder(&tree), vec![4, 2, 1, 3, 6]);
    }

    #[test]
    fn test_min_max() {
        let tree = build(&[4, 2, 1, 3, 6]);
        assert_eq!(min(&tree), Some(&1));
        assert_eq!(max(&tree), Some(&6));

        let empty: Tree<u32> = None;
        assert_eq!(min(&empty), None);
        assert_eq!(max(&empty), None);
    }

    #[test]
    fn test_from_preorder_shape() {
        let keys = vec![13, 12, 11, 8, 9, 10];
        assert_eq!(preorder(&build(&keys)), keys);
        assert!(build(&[]).is_none());
    }

    #[test]
    fn test_from_preorder_invalid() {
        assert_eq!(from_preorder(vec![2, 1, 1]).err(), Some(Error::DuplicateKey(2)));
        assert_eq!(from_preorder(vec![2, 3, 2]).err(), Some(Error::DuplicateKey(2)));
        assert_eq!(from_preorder(vec![2, 3, 1]).err(), Some(Error::OutOfOrder(2)));
        assert_eq!(from_preorder(vec![5, 3, 4, 2]).err(), Some(Error::OutOfOrder(3)));
        assert_eq!(from_preorder(vec![2, 1, 3, 1]).err(), Some(Error::DuplicateKey(3)));
        assert_eq!(from_preorder(vec![4, 2, 3, 5, 2]).err(), Some(Error::DuplicateKey(4)));
    }

    #[test]
    fn test_clear_deep_tree() {
        let mut tree = None;
        for key in 0..100_000 {
            insert(&mut tree, key, SplayStrategy::Recursive);
        }
        assert_eq!(min(&tree), Some(&0));
        clear(&mut tree);
        assert!(tree.is_none());
    }
}
