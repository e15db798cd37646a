use thiserror::Error;

use crate::{
    arena::Error as ArenaError,
    tree::{NodeIndex, Side, Tree}
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("root has to be black")]
    RedRoot,
    #[error("sentinels have to be black")]
    RedSentinel,
    #[error("cannot have two red nodes in a row")]
    DoubleRed,
    #[error("black height of all paths has to be equal (left {left}, right {right})")]
    BlackHeight { left: usize, right: usize },
    #[error("keys are out of order")]
    Order,
    #[error("parent and side links disagree")]
    Link,
    #[error("tracked length {tracked} but found {found} keys")]
    Length { tracked: usize, found: usize },
    #[error("{0} arena slots are not reachable from the root")]
    Leak(usize),
    #[error(transparent)]
    Arena(#[from] ArenaError)
}

impl<K: Ord> Tree<K> {
    /// Checks every red-black and bookkeeping invariant, returning the black
    /// height of the root (sentinels included).
    pub fn validate(&self) -> Result<usize, Error> {
        let Some(root) = self.root else {
            if self.len != 0 {
                return Err(Error::Length { tracked: self.len, found: 0 });
            }
            if self.arena.len() != 0 {
                return Err(Error::Leak(self.arena.len()));
            }
            return Ok(0);
        };
        let node = self.arena.get(root).ok_or(ArenaError::NotOccupied)?;
        if node.parent.is_some() || node.side != Side::Root || node.is_sentinel() {
            return Err(Error::Link);
        }
        if node.is_red() {
            return Err(Error::RedRoot);
        }
        let mut count = 0;
        let mut last = None;
        let height = self.validate_node(root, &mut count, &mut last)?;
        if count != self.len {
            return Err(Error::Length { tracked: self.len, found: count });
        }
        // n real nodes own n + 1 sentinels
        let reachable = 2 * count + 1;
        if self.arena.len() != reachable {
            return Err(Error::Leak(self.arena.len().saturating_sub(reachable)));
        }
        Ok(height)
    }
    fn validate_node<'a>(&'a self, ptr: NodeIndex, count: &mut usize, last: &mut Option<&'a K>) -> Result<usize, Error> {
        let node = self.arena.get(ptr).ok_or(ArenaError::NotOccupied)?;
        let Some(key) = &node.key else {
            if node.is_red() {
                return Err(Error::RedSentinel);
            }
            if node.children != [None, None] {
                return Err(Error::Link);
            }
            return Ok(1);
        };
        let mut heights = [0; 2];
        for side in [Side::Left, Side::Right] {
            let child = node.children[side.index()].ok_or(Error::Link)?;
            let child_node = self.arena.get(child).ok_or(ArenaError::NotOccupied)?;
            if child_node.parent != Some(ptr) || child_node.side != side {
                return Err(Error::Link);
            }
            if node.is_red() && child_node.is_red() {
                return Err(Error::DoubleRed);
            }
            if side == Side::Right {
                if last.is_some_and( |last| last >= key ) {
                    return Err(Error::Order);
                }
                *last = Some(key);
                *count += 1;
            }
            heights[side.index()] = self.validate_node(child, count, last)?;
        }
        let [left, right] = heights;
        if left != right {
            return Err(Error::BlackHeight { left, right });
        }
        Ok(left + node.color as usize)
    }
}
