use std::{
    mem::replace,
    num::NonZeroUsize,
    ops::{Index as IndexRO, IndexMut},
};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid index combination")]
    Alias,
    #[error("one of the indices is invalid")]
    NotOccupied,
}

/// Slot handle into an [`Arena`]. `Option<Index>` has the size of `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub(crate) struct Index(NonZeroUsize);
impl Index {
    #[inline(always)]
    fn new(slot: usize) -> Self {
        // memory runs out long before the slot count saturates
        Self(NonZeroUsize::MIN.saturating_add(slot))
    }
    #[inline(always)]
    const fn slot(self) -> usize {
        self.0.get() - 1
    }
}

type Ref = Option<Index>;

#[derive(Debug, Clone)]
enum Entry<T> {
    Occupied(T),
    Free(Ref)
}

// ASSERT: user is responsible for dangling references
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    items: Vec<Entry<T>>,
    free: Ref,
    len: usize
}
impl<T> Arena<T> {
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new(), free: None, len: 0 }
    }
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity), free: None, len: 0 }
    }
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }
    #[inline]
    pub fn insert(&mut self, value: T) -> Index {
        self.len += 1;
        match self.free {
            Some(head) => {
                let next = replace(&mut self.items[head.slot()], Entry::Occupied(value));
                match next {
                    Entry::Free(next) => self.free = next,
                    Entry::Occupied(_) => panic!("free list points at an occupied slot")
                }
                head
            },
            None => {
                let index = Index::new(self.items.len());
                self.items.push(Entry::Occupied(value));
                index
            }
        }
    }
    #[inline]
    pub fn remove(&mut self, index: Index) -> Option<T> {
        let entry = self.items.get_mut(index.slot())?;
        if let Entry::Free(_) = entry {
            return None;
        }
        let old = replace(entry, Entry::Free(self.free));
        self.free = Some(index);
        self.len -= 1;
        match old {
            Entry::Occupied(value) => Some(value),
            Entry::Free(_) => None
        }
    }
    #[inline]
    pub fn get(&self, index: Index) -> Option<&T> {
        match self.items.get(index.slot()) {
            Some(Entry::Occupied(value)) => Some(value),
            _ => None
        }
    }
    #[inline]
    pub fn get_mut(&mut self, index: Index) -> Option<&mut T> {
        match self.items.get_mut(index.slot()) {
            Some(Entry::Occupied(value)) => Some(value),
            _ => None
        }
    }
    #[inline]
    pub fn get_pair_mut(&mut self, a: Index, b: Index) -> Result<[&mut T; 2], Error> {
        let (a, b) = (a.slot(), b.slot());
        if a == b {
            return Err(Error::Alias);
        }
        let (low, high) = (a.min(b), a.max(b));
        if high >= self.items.len() {
            return Err(Error::NotOccupied);
        }
        let (head, tail) = self.items.split_at_mut(high);
        let (Entry::Occupied(low), Entry::Occupied(high)) = (&mut head[low], &mut tail[0])
            else { return Err(Error::NotOccupied) };
        if a < b { Ok([low, high]) } else { Ok([high, low]) }
    }
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.free = None;
        self.len = 0;
    }
}
impl<T> Default for Arena<T> {
    #[inline(always)]
    fn default() -> Self { Self::new() }
}

impl<T> IndexRO<Index> for Arena<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: Index) -> &Self::Output {
        self.get(index).expect("index does not point at a live slot")
    }
}
impl<T> IndexMut<Index> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, index: Index) -> &mut Self::Output {
        self.get_mut(index).expect("index does not point at a live slot")
    }
}
