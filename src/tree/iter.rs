use std::iter::FusedIterator;

#[cfg(feature = "sorted-iter")]
use sorted_iter::sorted_iterator::SortedByItem;

use crate::tree::{Cursor, NodeIndex, NodeRef, Side, Tree};

/// Keys in ascending order.
#[derive(Debug)]
pub struct Iter<'a, K> {
    pub(crate) tree: &'a Tree<K>,
    pub(crate) front: NodeRef,
    pub(crate) back: NodeRef,
    pub(crate) remaining: usize
}
impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.front?;
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.front = self.tree.step(current, Side::Right);
        }
        self.remaining -= 1;
        Some(self.tree.arena[current].key())
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<'a, K> DoubleEndedIterator for Iter<'a, K> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let current = self.back?;
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.back = self.tree.step(current, Side::Left);
        }
        self.remaining -= 1;
        Some(self.tree.arena[current].key())
    }
}
impl<'a, K> ExactSizeIterator for Iter<'a, K> {}
impl<'a, K> FusedIterator for Iter<'a, K> {}
impl<'a, K> Clone for Iter<'a, K> {
    #[inline]
    fn clone(&self) -> Self {
        Self { tree: self.tree, front: self.front, back: self.back, remaining: self.remaining }
    }
}
#[cfg(feature = "sorted-iter")]
impl<'a, K> SortedByItem for Iter<'a, K> {}

/// Owned keys in ascending order.
#[derive(Debug)]
pub struct IntoIter<K> {
    tree: Tree<K>,
    order: std::vec::IntoIter<NodeIndex>
}
impl<K> Iterator for IntoIter<K> {
    type Item = K;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.order.next()?;
        self.tree.arena[index].key.take()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}
impl<K> DoubleEndedIterator for IntoIter<K> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.order.next_back()?;
        self.tree.arena[index].key.take()
    }
}
impl<K> ExactSizeIterator for IntoIter<K> {}
impl<K> FusedIterator for IntoIter<K> {}
#[cfg(feature = "sorted-iter")]
impl<K> SortedByItem for IntoIter<K> {}

/// Structural walk: every node, sentinels included, parent before children
/// and left before right, paired with its depth below the root.
#[derive(Debug)]
pub struct PreOrder<'a, K> {
    tree: &'a Tree<K>,
    stack: Vec<(NodeIndex, usize)>
}
impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = (usize, Cursor<'a, K>);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (current, depth) = self.stack.pop()?;
        let node = &self.tree.arena[current];
        self.stack.extend(node.children.iter().rev().flatten().map( |&child| (child, depth + 1) ));
        Some((depth, Cursor::new(self.tree, current)))
    }
}
impl<'a, K> FusedIterator for PreOrder<'a, K> {}

impl<K> Tree<K> {
    #[inline]
    pub fn iter(&self) -> Iter<'_, K> {
        let (front, back) = match self.root {
            Some(root) => (Some(self.limit(root, Side::Left)), Some(self.limit(root, Side::Right))),
            None => (None, None)
        };
        Iter { tree: self, front, back, remaining: self.len }
    }
    #[inline]
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder { tree: self, stack: self.root.into_iter().map( |root| (root, 0) ).collect() }
    }
}

impl<K> IntoIterator for Tree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;
    fn into_iter(self) -> Self::IntoIter {
        let mut order = Vec::with_capacity(self.len);
        let mut ptr = self.root.map( |root| self.limit(root, Side::Left) );
        while let Some(index) = ptr {
            order.push(index);
            ptr = self.step(index, Side::Right);
        }
        IntoIter { tree: self, order: order.into_iter() }
    }
}
impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
