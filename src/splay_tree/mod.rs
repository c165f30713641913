//! Self-adjusting binary search tree with the additional property that recently accessed elements
//! are quick to access again.

mod node;
mod set;
mod tree;

pub use self::set::{Preorder, SplaySet};

use std::error;
use std::fmt;
use std::result;

/// The procedure used to bring a key to the root of the tree.
///
/// Both strategies move the accessed key, or the last key on its search path if it is absent, to
/// the root. They differ in the shape of the remaining tree and in stack usage.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplayStrategy {
    /// Bottom-up splaying that recurses two levels at a time along the search path. Recursion
    /// depth is proportional to the length of the search path.
    Recursive,
    /// Single pass top-down splaying that splits the search path into a left and right tree and
    /// reassembles them under the final node. Uses constant stack space.
    TopDown,
}

impl Default for SplayStrategy {
    fn default() -> Self {
        SplayStrategy::Recursive
    }
}

/// Errors produced when rebuilding a tree from a sequence of keys.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The key at the given position in the sequence equals a key before it.
    DuplicateKey(usize),
    /// The key at the given position cannot appear there in the preorder traversal of a binary
    /// search tree.
    OutOfOrder(usize),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DuplicateKey(index) => write!(f, "duplicate key at position {}", index),
            Error::OutOfOrder(index) => {
                write!(f, "key at position {} violates preorder ordering", index)
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
