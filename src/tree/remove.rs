use std::{borrow::Borrow, mem::{replace, swap}};

use log::{debug, trace};

use crate::tree::{Color, Node, NodeIndex, SearchResult, Side, Tree};

/// Shape around a position that is one black node short.
///
/// "Far" and "near" nephews are the sibling's children away from and
/// towards the short position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RemoveCase {
    /// The short position is the root: every path lost the same black node.
    AtRoot,
    /// Red parent, far nephew red.
    RedParentFarNephew,
    /// Red parent, only the near nephew red.
    RedParentNearNephew,
    /// Red parent, both nephews black.
    RedParentBlackNephews,
    /// Black parent, red sibling, and the near nephew's outer child is red.
    RedSiblingRedGrandNephew,
    /// Black parent, red sibling otherwise.
    RedSibling,
    /// Black parent and sibling, far nephew red.
    BlackSiblingFarNephew,
    /// Black parent and sibling, only the near nephew red.
    BlackSiblingNearNephew,
    /// Parent, sibling and both nephews black.
    AllBlack
}

/// How many real children a node has, and where the lone one sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Leaf,
    Single(Side),
    Full
}

impl<K> Tree<K> {
    fn shape(&self, ptr: NodeIndex) -> Shape {
        let node = &self.arena[ptr];
        let left = self.arena[node.child(Side::Left)].is_sentinel();
        let right = self.arena[node.child(Side::Right)].is_sentinel();
        match (left, right) {
            (true, true) => Shape::Leaf,
            (true, false) => Shape::Single(Side::Right),
            (false, true) => Shape::Single(Side::Left),
            (false, false) => Shape::Full
        }
    }
    /// Frees a real node with two sentinel children and puts a fresh
    /// sentinel in its slot.
    pub(crate) fn detach_leaf(&mut self, ptr: NodeIndex) -> (NodeIndex, K) {
        let node = self.arena.remove(ptr).expect("node is owned by the tree");
        for child in node.children.into_iter().flatten() {
            let child = self.arena.remove(child).expect("sentinel is owned by the tree");
            assert!(child.is_sentinel(), "detached node was not a leaf");
        }
        let sentinel = self.arena.insert(Node::sentinel());
        self.attach(node.parent, node.side, sentinel);
        (sentinel, node.key.expect("detached node was a real node"))
    }
    /// Unlinks the real node `ptr` and returns its key.
    fn remove_at(&mut self, mut ptr: NodeIndex) -> K {
        loop {
            let node = &self.arena[ptr];
            let (color, is_root) = (node.color, node.parent.is_none());
            match (self.shape(ptr), color) {
                (Shape::Full, _) => {
                    let next = self.limit(self.arena[ptr].child(Side::Right), Side::Left);
                    let [node, next_node] = self.arena.get_pair_mut(ptr, next)
                        .expect("a node and its successor are distinct live nodes");
                    swap(&mut node.key, &mut next_node.key);
                    trace!("remove {ptr:?}: swapped key with successor {next:?}");
                    ptr = next;
                },
                (Shape::Leaf, _) if is_root => {
                    let node = self.arena.remove(ptr).expect("root is owned by the tree");
                    self.arena.clear();
                    self.root = None;
                    return node.key.expect("root is a real node");
                },
                (Shape::Leaf, Color::Red) => {
                    trace!("remove {ptr:?}: red leaf");
                    return self.detach_leaf(ptr).1;
                },
                (Shape::Leaf, Color::Black) => {
                    let (sentinel, key) = self.detach_leaf(ptr);
                    self.fix_remove(sentinel);
                    return key;
                },
                (Shape::Single(side), Color::Black) => {
                    let child = self.arena[ptr].child(side);
                    assert!(self.arena[child].is_red(), "lone child of a black node has to be red");
                    trace!("remove {ptr:?}: splice up {child:?}");
                    let (_, key) = self.detach_leaf(child);
                    return replace(&mut self.arena[ptr].key, Some(key))
                        .expect("spliced node is a real node");
                },
                (Shape::Single(_), Color::Red) =>
                    unreachable!("red node with a single real child breaks black height")
            }
        }
    }
    pub(crate) fn classify_remove(&self, ptr: NodeIndex) -> RemoveCase {
        let node = &self.arena[ptr];
        let Some(parent) = node.parent else { return RemoveCase::AtRoot };
        let side = node.side;
        let parent_node = &self.arena[parent];
        let sibling_node = &self.arena[parent_node.child(!side)];
        // the sibling side is at least one black node deep
        assert!(!sibling_node.is_sentinel(), "short position has no real sibling");
        let far = &self.arena[sibling_node.child(!side)];
        let near = &self.arena[sibling_node.child(side)];
        match (parent_node.color, sibling_node.color) {
            (Color::Red, Color::Black) =>
                if far.is_red() { RemoveCase::RedParentFarNephew }
                else if near.is_red() { RemoveCase::RedParentNearNephew }
                else { RemoveCase::RedParentBlackNephews },
            (Color::Black, Color::Red) => {
                let outer = &self.arena[near.child(!side)];
                if outer.is_red() { RemoveCase::RedSiblingRedGrandNephew }
                else { RemoveCase::RedSibling }
            },
            (Color::Black, Color::Black) =>
                if far.is_red() { RemoveCase::BlackSiblingFarNephew }
                else if near.is_red() { RemoveCase::BlackSiblingNearNephew }
                else { RemoveCase::AllBlack },
            (Color::Red, Color::Red) => unreachable!("red parent with a red child")
        }
    }
    /// Rebalances around `ptr`, a black position (usually a sentinel) whose
    /// paths carry one black node less than its sibling's.
    pub(crate) fn fix_remove(&mut self, mut ptr: NodeIndex) {
        loop {
            let case = self.classify_remove(ptr);
            trace!("remove fixup at {ptr:?}: {case:?}");
            if case == RemoveCase::AtRoot {
                self.arena[ptr].color = Color::Black;
                return;
            }
            let side = self.arena[ptr].side;
            let parent = self.parent(ptr);
            let sibling = self.sibling(ptr);
            let far = self.arena[sibling].child(!side);
            let near = self.arena[sibling].child(side);
            match case {
                RemoveCase::AtRoot => unreachable!(),
                RemoveCase::RedParentFarNephew => {
                    self.arena[sibling].color = Color::Red;
                    self.arena[far].color = Color::Black;
                    self.arena[parent].color = Color::Black;
                    self.rotate(sibling);
                    return;
                },
                RemoveCase::RedParentNearNephew => {
                    self.arena[parent].color = Color::Black;
                    self.rotate(near);
                    self.rotate(near);
                    return;
                },
                RemoveCase::RedParentBlackNephews => {
                    self.arena[parent].color = Color::Black;
                    self.arena[sibling].color = Color::Red;
                    return;
                },
                RemoveCase::RedSiblingRedGrandNephew => {
                    let outer = self.arena[near].child(!side);
                    self.arena[outer].color = Color::Black;
                    self.rotate(near);
                    self.rotate(near);
                    return;
                },
                RemoveCase::RedSibling => {
                    // turn it into a red parent case one level down
                    self.arena[sibling].color = Color::Black;
                    self.arena[parent].color = Color::Red;
                    self.rotate(sibling);
                },
                RemoveCase::BlackSiblingFarNephew => {
                    self.arena[far].color = Color::Black;
                    self.rotate(sibling);
                    return;
                },
                RemoveCase::BlackSiblingNearNephew => {
                    self.arena[near].color = Color::Black;
                    self.rotate(near);
                    self.rotate(near);
                    return;
                },
                RemoveCase::AllBlack => {
                    self.arena[sibling].color = Color::Red;
                    ptr = parent;
                }
            }
        }
    }
}

impl<K: Ord> Tree<K> {
    /// Removes the key equal to `key`, returning it; absent keys are a no-op.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<K>
        where K: Borrow<Q>, Q: Ord + ?Sized
    {
        let SearchResult::Here(ptr) = self.search(key) else { return None };
        debug!("removing {ptr:?}");
        let key = self.remove_at(ptr);
        self.len -= 1;
        Some(key)
    }
}
