//! Ordered maps and sets backed by self-balancing binary search trees.
//!
//! Two balancing strategies share one arena-backed node store:
//!
//! - [`avl_tree`]: height-balanced trees where the heights of the two child subtrees of any
//!   node differ by at most one.
//! - [`red_black_tree`]: color-balanced trees where every root-to-leaf path crosses the same
//!   number of black nodes and no red node has a red child.
//!
//! # Examples
//!
//! ```
//! use balanced_collections::{AvlMap, RedBlackMap};
//!
//! let mut avl = AvlMap::new();
//! let mut rb = RedBlackMap::new();
//! for key in &[3, 1, 2] {
//!     avl.insert(*key, key * 10);
//!     rb.insert(*key, key * 10);
//! }
//!
//! assert_eq!(avl.get(&2), Some(&20));
//! assert_eq!(rb.remove(&1), Some(10));
//! assert!(avl.validate().is_ok());
//! assert!(rb.validate().is_ok());
//! ```

#[macro_use]
extern crate serde_derive;

mod entry;
mod error;
pub mod arena;
pub mod avl_tree;
pub mod bst;
pub mod compare;
pub mod red_black_tree;

pub use crate::avl_tree::{AvlMap, AvlSet, HeightBalance};
pub use crate::bst::{Balance, TreeMap, TreeSet};
pub use crate::compare::{Compare, Natural};
pub use crate::error::{Error, Result};
pub use crate::red_black_tree::{Color, ColorBalance, RedBlackMap, RedBlackSet};
