mod node;
pub use node::{Color, Side};
pub(crate) use node::{Node, NodeIndex, NodeRef};
mod insert;
pub(crate) use insert::InsertCase;
mod remove;
pub(crate) use remove::RemoveCase;
mod cursor;
pub use cursor::*;
mod iter;
pub use iter::*;
mod validate;
pub use validate::Error;
mod dump;
pub use dump::Dump;
mod interface;
pub use interface::*;

use std::{
    borrow::Borrow,
    cmp::Ordering,
};

use log::debug;

use crate::arena::Arena;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchResult {
    Empty,
    Here(NodeIndex),
    /// Sentinel occupying the slot the key would be placed in.
    Vacant(NodeIndex)
}

/// Ordered set backed by a red-black tree with explicit sentinel leaves.
///
/// Mutation takes `&mut self`, queries take `&self`; share a tree between
/// threads through [`SharedTree`].
#[derive(Debug, Clone)]
pub struct Tree<K> {
    pub(crate) arena: Arena<Node<K>>,
    pub(crate) root: NodeRef,
    pub(crate) len: usize
}

impl<K> Tree<K> {
    #[inline]
    pub const fn new() -> Self {
        Self { arena: Arena::new(), root: None, len: 0 }
    }
    /// Reserves room for `capacity` keys together with their sentinels.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { arena: Arena::with_capacity(2 * capacity + 1), root: None, len: 0 }
    }
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    #[inline]
    pub fn clear(&mut self) {
        debug!("clearing tree of {} keys", self.len);
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }
    #[inline]
    pub fn root(&self) -> Option<Cursor<'_, K>> {
        Some(Cursor::new(self, self.root?))
    }
    #[inline]
    pub fn min(&self) -> Option<Cursor<'_, K>> {
        Some(Cursor::new(self, self.limit(self.root?, Side::Left)))
    }
    #[inline]
    pub fn max(&self) -> Option<Cursor<'_, K>> {
        Some(Cursor::new(self, self.limit(self.root?, Side::Right)))
    }
    /// Largest number of real nodes on a path from the root to a sentinel.
    pub fn height(&self) -> usize {
        let Some(root) = self.root else { return 0 };
        let mut height = 0;
        let mut stack = vec![(root, 0)];
        while let Some((ptr, depth)) = stack.pop() {
            let node = &self.arena[ptr];
            if node.is_sentinel() {
                height = height.max(depth);
                continue;
            }
            stack.extend(node.children.iter().flatten().map( |&child| (child, depth + 1) ));
        }
        height
    }
    /// Black nodes on any path from the root down to a sentinel, the sentinel
    /// included.
    pub fn black_height(&self) -> usize {
        let Some(mut ptr) = self.root else { return 0 };
        let mut height = 1;
        loop {
            let node = &self.arena[ptr];
            if node.is_sentinel() {
                return height;
            }
            if node.is_black() {
                height += 1;
            }
            ptr = node.child(Side::Left);
        }
    }

    #[inline]
    fn parent(&self, ptr: NodeIndex) -> NodeIndex {
        self.arena[ptr].parent.expect("node has a parent")
    }
    #[inline]
    fn sibling(&self, ptr: NodeIndex) -> NodeIndex {
        let node = &self.arena[ptr];
        let parent = node.parent.expect("the root has no sibling");
        self.arena[parent].child(!node.side)
    }
    /// Allocates a detached real node together with its two sentinels.
    pub(crate) fn alloc(&mut self, key: K, color: Color) -> NodeIndex {
        let ptr = self.arena.insert(Node::new(key, color));
        for side in [Side::Left, Side::Right] {
            let sentinel = self.arena.insert(Node::sentinel());
            self.attach(Some(ptr), side, sentinel);
        }
        ptr
    }
    /// Makes `child` the `side` child of `parent`, or the root if there is no
    /// parent.
    #[inline]
    pub(crate) fn attach(&mut self, parent: NodeRef, side: Side, child: NodeIndex) {
        let node = &mut self.arena[child];
        node.parent = parent;
        match parent {
            Some(parent) => {
                node.side = side;
                self.arena[parent].children[side.index()] = Some(child);
            },
            None => {
                node.side = Side::Root;
                self.root = Some(child);
            }
        }
    }
    /// Promotes `pivot` into its parent's position. A right child rotates
    /// left, a left child rotates right; colors are left untouched.
    ///
    /// The subtree `pivot` gives up on the side facing its old parent is
    /// handed to the old parent.
    pub(crate) fn rotate(&mut self, pivot: NodeIndex) {
        let pivot_node = &self.arena[pivot];
        let side = pivot_node.side;
        let old = pivot_node.parent.expect("cannot rotate the root upwards");
        let inner = pivot_node.child(!side);
        let old_node = &self.arena[old];
        let (grandparent, old_side) = (old_node.parent, old_node.side);
        self.attach(Some(old), side, inner);
        self.attach(grandparent, old_side, pivot);
        self.attach(Some(pivot), !side, old);
    }
    /// Last real node reached by walking towards `side`.
    #[inline]
    fn limit(&self, mut ptr: NodeIndex, side: Side) -> NodeIndex {
        loop {
            let next = self.arena[ptr].child(side);
            if self.arena[next].is_sentinel() {
                return ptr;
            }
            ptr = next;
        }
    }
    /// In-order neighbour of a real node: `Right` is the successor, `Left`
    /// the predecessor.
    fn step(&self, mut ptr: NodeIndex, side: Side) -> NodeRef {
        let child = self.arena[ptr].child(side);
        if !self.arena[child].is_sentinel() {
            return Some(self.limit(child, !side));
        }
        while self.arena[ptr].side == side {
            ptr = self.parent(ptr);
        }
        self.arena[ptr].parent
    }
}

impl<K: Ord> Tree<K> {
    fn search<Q>(&self, key: &Q) -> SearchResult
        where K: Borrow<Q>, Q: Ord + ?Sized
    {
        let Some(mut ptr) = self.root else { return SearchResult::Empty };
        loop {
            let node = &self.arena[ptr];
            let Some(node_key) = &node.key else { return SearchResult::Vacant(ptr) };
            ptr = match key.cmp(node_key.borrow()) {
                Ordering::Less => node.child(Side::Left),
                Ordering::Equal => return SearchResult::Here(ptr),
                Ordering::Greater => node.child(Side::Right)
            };
        }
    }
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
        where K: Borrow<Q>, Q: Ord + ?Sized
    {
        matches!(self.search(key), SearchResult::Here(_))
    }
    #[inline]
    pub fn find<Q>(&self, key: &Q) -> Option<Cursor<'_, K>>
        where K: Borrow<Q>, Q: Ord + ?Sized
    {
        match self.search(key) {
            SearchResult::Here(ptr) => Some(Cursor::new(self, ptr)),
            _ => None
        }
    }
    /// Smallest key greater than `key`; `None` if `key` is absent or the
    /// largest key.
    #[inline]
    pub fn successor<Q>(&self, key: &Q) -> Option<Cursor<'_, K>>
        where K: Borrow<Q>, Q: Ord + ?Sized
    {
        self.find(key)?.successor()
    }
    #[inline]
    pub fn predecessor<Q>(&self, key: &Q) -> Option<Cursor<'_, K>>
        where K: Borrow<Q>, Q: Ord + ?Sized
    {
        self.find(key)?.predecessor()
    }
}

impl<K> Default for Tree<K> {
    #[inline(always)]
    fn default() -> Self { Self::new() }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}
impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
