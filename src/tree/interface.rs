use std::{
    borrow::Borrow,
    ops::{Deref, DerefMut},
    sync::Arc
};

use parking_lot::{RwLock, RwLockReadGuard, RwLockUpgradableReadGuard, RwLockWriteGuard};

use crate::tree::Tree;

/// A [`Tree`] behind a reader-writer lock: queries run side by side,
/// mutations run alone.
#[derive(Debug)]
pub struct SharedTree<K>(Arc<RwLock<Tree<K>>>);

impl<K> SharedTree<K> {
    #[inline]
    pub fn new() -> Self {
        Self(Arc::new(RwLock::new(Tree::new())))
    }
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Arc::new(RwLock::new(Tree::with_capacity(capacity))))
    }
    #[inline]
    pub fn read(&self) -> TreeReadGuard<'_, K> {
        TreeReadGuard(self.0.read())
    }
    #[inline]
    pub fn write(&self) -> TreeWriteGuard<'_, K> {
        TreeWriteGuard(self.0.write())
    }
    /// Takes the tree back if this is the last handle.
    #[inline]
    pub fn try_unwrap(self) -> Result<Tree<K>, Self> {
        Arc::try_unwrap(self.0)
            .map( |lock| lock.into_inner() )
            .map_err(Self)
    }
}
impl<K: Ord> SharedTree<K> {
    /// Inserts `key` unless present. The presence check only holds an
    /// upgradable read lock, so readers are not blocked when nothing changes.
    pub fn insert_if_absent(&self, key: K) -> bool {
        let guard = self.0.upgradable_read();
        if guard.contains(&key) {
            return false;
        }
        let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
        guard.insert(key)
    }
    #[inline]
    pub fn remove<Q>(&self, key: &Q) -> Option<K>
        where K: Borrow<Q>, Q: Ord + ?Sized
    {
        self.0.write().remove(key)
    }
}
impl<K> Clone for SharedTree<K> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
impl<K> Default for SharedTree<K> {
    #[inline(always)]
    fn default() -> Self { Self::new() }
}
impl<K> From<Tree<K>> for SharedTree<K> {
    #[inline]
    fn from(tree: Tree<K>) -> Self {
        Self(Arc::new(RwLock::new(tree)))
    }
}

#[derive(Debug)]
pub struct TreeReadGuard<'a, K>(RwLockReadGuard<'a, Tree<K>>);
impl<'a, K> Deref for TreeReadGuard<'a, K> {
    type Target = Tree<K>;
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug)]
pub struct TreeWriteGuard<'a, K>(RwLockWriteGuard<'a, Tree<K>>);
impl<'a, K> TreeWriteGuard<'a, K> {
    #[inline]
    pub fn downgrade(self) -> TreeReadGuard<'a, K> {
        TreeReadGuard(RwLockWriteGuard::downgrade(self.0))
    }
}
impl<'a, K> Deref for TreeWriteGuard<'a, K> {
    type Target = Tree<K>;
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl<'a, K> DerefMut for TreeWriteGuard<'a, K> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
