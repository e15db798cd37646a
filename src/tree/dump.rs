use std::fmt;

use crate::tree::{Side, Tree};

/// Tree shape rendering, one node per line:
///
/// ```text
/// [B] 20
///   [R] 10
///   | [B] NIL
///   | [B] NIL
///   [B] NIL
/// ```
pub struct Dump<'a, K>(&'a Tree<K>);

impl<K> Tree<K> {
    #[inline]
    pub fn dump(&self) -> Dump<'_, K> {
        Dump(self)
    }
}

impl<'a, K: fmt::Display> fmt::Display for Dump<'a, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // bit i set: the ancestor at depth i is a right child (or the root)
        let mut markers: u64 = 1;
        for (depth, cursor) in self.0.pre_order() {
            if depth > 0 {
                match cursor.side() {
                    Side::Right => markers |= 1 << depth.min(63),
                    _ => markers &= !(1 << depth.min(63))
                }
            }
            for i in 0..depth {
                f.write_str(if markers & (1 << i.min(63)) == 0 { "| " } else { "  " })?;
            }
            let color = if cursor.is_red() { "R" } else { "B" };
            match cursor.key() {
                Some(key) => writeln!(f, "[{color}] {key}")?,
                None => writeln!(f, "[{color}] NIL")?
            }
        }
        Ok(())
    }
}
