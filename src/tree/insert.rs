use log::{debug, trace};

use crate::tree::{Color, NodeIndex, SearchResult, Side, Tree};

/// Local shape around a node that may be red under a red parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertCase {
    /// Node is the root: paint it black.
    Root,
    /// No two reds in a row.
    Balanced,
    /// Parent and uncle are red: recolor and continue at the grandparent.
    RedUncle,
    /// Node sits on the other side of its parent than the parent of the
    /// grandparent: rotate it up first.
    Inner,
    /// Node and parent lean the same way: rotate the grandparent away.
    Outer
}

impl<K> Tree<K> {
    pub(crate) fn classify_insert(&self, ptr: NodeIndex) -> InsertCase {
        let node = &self.arena[ptr];
        let Some(parent) = node.parent else { return InsertCase::Root };
        let parent_node = &self.arena[parent];
        if node.is_black() || parent_node.is_black() {
            return InsertCase::Balanced;
        }
        // a red node is never the root
        let grandparent = parent_node.parent.expect("red parent has a parent");
        let uncle = self.arena[grandparent].child(!parent_node.side);
        if self.arena[uncle].is_red() {
            InsertCase::RedUncle
        } else if node.side != parent_node.side {
            InsertCase::Inner
        } else {
            InsertCase::Outer
        }
    }
    /// Restores the coloring rules after `ptr` was placed as a red leaf.
    pub(crate) fn fix_insert(&mut self, mut ptr: NodeIndex) {
        loop {
            let case = self.classify_insert(ptr);
            trace!("insert fixup at {ptr:?}: {case:?}");
            match case {
                InsertCase::Root => {
                    self.arena[ptr].color = Color::Black;
                    return;
                },
                InsertCase::Balanced => return,
                InsertCase::RedUncle => {
                    let parent = self.parent(ptr);
                    let uncle = self.sibling(parent);
                    let grandparent = self.parent(parent);
                    self.arena[parent].color = Color::Black;
                    self.arena[uncle].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    ptr = grandparent;
                },
                InsertCase::Inner => {
                    let parent = self.parent(ptr);
                    self.rotate(ptr);
                    // the old parent is now the outer child
                    self.rotate_outer(parent);
                    return;
                },
                InsertCase::Outer => {
                    self.rotate_outer(ptr);
                    return;
                }
            }
        }
    }
    #[inline]
    fn rotate_outer(&mut self, ptr: NodeIndex) {
        let parent = self.parent(ptr);
        let grandparent = self.parent(parent);
        self.arena[parent].color = Color::Black;
        self.arena[grandparent].color = Color::Red;
        self.rotate(parent);
    }
}

impl<K: Ord> Tree<K> {
    /// Adds `key` unless an equal key is present. Returns whether the tree
    /// changed.
    pub fn insert(&mut self, key: K) -> bool {
        match self.search(&key) {
            SearchResult::Here(_) => return false,
            SearchResult::Empty => {
                let ptr = self.alloc(key, Color::Black);
                self.attach(None, Side::Root, ptr);
                debug!("planted root {ptr:?}");
            },
            SearchResult::Vacant(sentinel) => {
                let slot = self.arena.remove(sentinel).expect("sentinel is owned by the tree");
                let ptr = self.alloc(key, Color::Red);
                self.attach(slot.parent, slot.side, ptr);
                debug!("inserted {ptr:?} below {:?}", slot.parent);
                self.fix_insert(ptr);
            }
        }
        self.len += 1;
        true
    }
}
