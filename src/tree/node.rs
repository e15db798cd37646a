use std::ops::Not;

use crate::arena::Index;

pub(crate) type NodeIndex = Index;
pub(crate) type NodeRef = Option<NodeIndex>;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red = 0,
    Black = 1,
}
impl Not for Color {
    type Output = Color;
    #[inline]
    fn not(self) -> Self::Output {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red
        }
    }
}

/// Position of a node relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Root,
}
impl Side {
    /// Slot of this side in a children array.
    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
            Side::Root => panic!("the root is not a child slot")
        }
    }
}
impl Not for Side {
    type Output = Side;
    #[inline]
    fn not(self) -> Self::Output {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Root => Side::Root
        }
    }
}

/// A real node owns exactly two children (real or sentinel); a sentinel owns
/// none and has no key.
#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    pub key: Option<K>,
    pub color: Color,
    pub side: Side,
    pub parent: NodeRef,
    pub children: [NodeRef; 2]
}

impl<K> Node<K> {
    /// Detached real node; the tree fills in children and links.
    #[inline]
    pub const fn new(key: K, color: Color) -> Self {
        Self {
            key: Some(key), color,
            side: Side::Root,
            parent: None,
            children: [None, None]
        }
    }
    #[inline]
    pub const fn sentinel() -> Self {
        Self {
            key: None,
            color: Color::Black,
            side: Side::Root,
            parent: None,
            children: [None, None]
        }
    }
    #[inline(always)]
    pub const fn is_sentinel(&self) -> bool {
        self.key.is_none()
    }
    #[inline(always)]
    pub const fn is_black(&self) -> bool {
        match self.color {
            Color::Black => true,
            Color::Red => false
        }
    }
    #[inline(always)]
    pub const fn is_red(&self) -> bool {
        match self.color {
            Color::Black => false,
            Color::Red => true
        }
    }
    #[inline]
    pub fn child(&self, side: Side) -> NodeIndex {
        self.children[side.index()].expect("sentinels have no children")
    }
    #[inline]
    pub fn key(&self) -> &K {
        self.key.as_ref().expect("sentinels carry no key")
    }
}
