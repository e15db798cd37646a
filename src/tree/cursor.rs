use std::fmt;

use crate::tree::{Color, NodeIndex, Side, Tree};

/// Read-only handle to a node of a [`Tree`], real or sentinel.
///
/// Holding a cursor borrows the tree, so no mutation can invalidate it.
pub struct Cursor<'a, K> {
    tree: &'a Tree<K>,
    current: NodeIndex
}

impl<'a, K> Cursor<'a, K> {
    #[inline(always)]
    pub(crate) fn new(tree: &'a Tree<K>, current: NodeIndex) -> Self {
        Self { tree, current }
    }
    #[inline(always)]
    pub(crate) fn index(&self) -> NodeIndex {
        self.current
    }
    #[inline(always)]
    fn at(&self, index: NodeIndex) -> Self {
        Self { tree: self.tree, current: index }
    }

    /// `None` on sentinels.
    #[inline]
    pub fn key(&self) -> Option<&'a K> {
        self.tree.arena[self.current].key.as_ref()
    }
    #[inline]
    pub fn color(&self) -> Color {
        self.tree.arena[self.current].color
    }
    #[inline]
    pub fn side(&self) -> Side {
        self.tree.arena[self.current].side
    }
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.tree.arena[self.current].is_sentinel()
    }
    #[inline]
    pub fn is_red(&self) -> bool {
        self.tree.arena[self.current].is_red()
    }
    #[inline]
    pub fn is_black(&self) -> bool {
        self.tree.arena[self.current].is_black()
    }

    #[inline]
    pub fn parent(&self) -> Option<Self> {
        Some(self.at(self.tree.arena[self.current].parent?))
    }
    /// `None` on sentinels; real nodes always have both children.
    #[inline]
    pub fn child(&self, side: Side) -> Option<Self> {
        match side {
            Side::Root => None,
            side => Some(self.at(self.tree.arena[self.current].children[side.index()]?))
        }
    }
    #[inline(always)]
    pub fn left(&self) -> Option<Self> {
        self.child(Side::Left)
    }
    #[inline(always)]
    pub fn right(&self) -> Option<Self> {
        self.child(Side::Right)
    }

    /// Smallest real node of the subtree below this one.
    #[inline]
    pub fn min(&self) -> Option<Self> {
        if self.is_sentinel() { return None }
        Some(self.at(self.tree.limit(self.current, Side::Left)))
    }
    /// Largest real node of the subtree below this one.
    #[inline]
    pub fn max(&self) -> Option<Self> {
        if self.is_sentinel() { return None }
        Some(self.at(self.tree.limit(self.current, Side::Right)))
    }
    #[inline]
    pub fn successor(&self) -> Option<Self> {
        if self.is_sentinel() { return None }
        Some(self.at(self.tree.step(self.current, Side::Right)?))
    }
    #[inline]
    pub fn predecessor(&self) -> Option<Self> {
        if self.is_sentinel() { return None }
        Some(self.at(self.tree.step(self.current, Side::Left)?))
    }
    /// Moves to the successor; stays put and returns `false` at the end.
    #[inline]
    pub fn move_next(&mut self) -> bool {
        let Some(next) = self.successor() else { return false };
        *self = next;
        true
    }
    #[inline]
    pub fn move_prev(&mut self) -> bool {
        let Some(prev) = self.predecessor() else { return false };
        *self = prev;
        true
    }
}

impl<'a, K> Clone for Cursor<'a, K> {
    #[inline(always)]
    fn clone(&self) -> Self { *self }
}
impl<'a, K> Copy for Cursor<'a, K> {}

impl<'a, K> PartialEq for Cursor<'a, K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.current == other.current
    }
}
impl<'a, K> Eq for Cursor<'a, K> {}

impl<'a, K: fmt::Debug> fmt::Debug for Cursor<'a, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = &self.tree.arena[self.current];
        let key = |index: Option<NodeIndex>| index.and_then( |index| self.tree.arena[index].key.as_ref() );
        f.debug_struct("Cursor")
            .field("key", &node.key)
            .field("color", &node.color)
            .field("side", &node.side)
            .field("parent", &key(node.parent))
            .field("left", &key(node.children[0]))
            .field("right", &key(node.children[1]))
            .finish()
    }
}
