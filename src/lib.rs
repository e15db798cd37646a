//! Ordered set on a red-black tree whose empty child slots are explicit,
//! always-black sentinel nodes.
//!
//! ```
//! use rb_sentinel::prelude::*;
//!
//! let mut tree: Tree<_> = [5, 40, 25, 95, 1, 80, 70].into_iter().collect();
//! assert_eq!(tree.min().and_then( |node| node.key() ), Some(&1));
//! assert_eq!(tree.successor(&40).and_then( |node| node.key() ), Some(&70));
//! assert_eq!(tree.remove(&40), Some(40));
//! assert!(tree.find(&40).is_none());
//! ```

mod arena;
pub mod tree;

pub use arena::Error as ArenaError;

pub mod prelude {
    pub use crate::tree::{
        Tree, SharedTree,
        Cursor, Color, Side
    };
}

#[cfg(test)]
mod test;
