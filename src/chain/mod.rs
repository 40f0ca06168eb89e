//! Sorted chain module: the core ordered container.
//!
//! ## Architecture
//!
//! The container is a doubly linked sequence kept continuously sorted under
//! a configurable total order:
//!
//! - **Slab-based storage**: nodes live in a pre-allocatable arena and link
//!   to each other by slab key, giving O(1) removal of a located node with
//!   no ownership cycles
//! - **Head/tail fast paths**: values belonging at either boundary link in
//!   O(1) without walking
//! - **Early-exit search**: lookups stop the moment sortedness proves no
//!   match can exist further along the walk
//!
//! ## Components
//!
//! - [`ChainNode`]: a stored value plus its `prev`/`next` slab keys
//! - [`SortedChain`]: the container itself
//! - [`Iter`]: lazy forward traversal in ascending order
//!
//! ## Example
//!
//! ```
//! use sortchain::SortedChain;
//!
//! let mut chain: SortedChain<String> = SortedChain::new();
//! chain.insert("zebra".to_string()).unwrap();
//! chain.insert("apple".to_string()).unwrap();
//!
//! assert_eq!(chain.first().unwrap(), "apple");
//! ```

pub mod list;
pub mod node;

pub use list::{Comparator, Iter, SortedChain};
pub use node::ChainNode;
