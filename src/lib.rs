//! A self-adjusting binary search tree over totally ordered keys.
//!
//! Every operation first splays the requested key (or its nearest neighbour) to the root and then
//! performs a constant-time edit there, so recently touched keys stay cheap to reach.

extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod splay_tree;
