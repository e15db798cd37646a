mod simple;

use crate::tree::{Color, Cursor, NodeIndex, Side, Tree};

/// Expected tree shape, sentinels as `Nil`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Shape {
    Nil,
    Node(Color, i32, Box<Shape>, Box<Shape>)
}
use Shape::Nil;

fn r(key: i32, left: Shape, right: Shape) -> Shape {
    Shape::Node(Color::Red, key, Box::new(left), Box::new(right))
}
fn b(key: i32, left: Shape, right: Shape) -> Shape {
    Shape::Node(Color::Black, key, Box::new(left), Box::new(right))
}
/// Black node with two sentinel children.
fn bl(key: i32) -> Shape {
    b(key, Nil, Nil)
}
/// Red node with two sentinel children.
fn rl(key: i32) -> Shape {
    r(key, Nil, Nil)
}

fn plant(tree: &mut Tree<i32>, shape: &Shape) -> Option<NodeIndex> {
    let Shape::Node(color, key, left, right) = shape else { return None };
    let ptr = tree.alloc(*key, *color);
    for (side, child) in [(Side::Left, left), (Side::Right, right)] {
        if let Some(child) = plant(tree, child) {
            let sentinel = tree.arena[ptr].child(side);
            tree.arena.remove(sentinel);
            tree.attach(Some(ptr), side, child);
        }
    }
    tree.len += 1;
    Some(ptr)
}
/// Builds `shape` verbatim, without checking any invariant.
fn build(shape: &Shape) -> Tree<i32> {
    let mut tree = Tree::new();
    if let Some(root) = plant(&mut tree, shape) {
        tree.attach(None, Side::Root, root);
    }
    tree
}
fn shape_of(cursor: Option<Cursor<'_, i32>>) -> Shape {
    let Some(cursor) = cursor else { return Nil };
    match cursor.key() {
        None => Nil,
        Some(&key) => Shape::Node(
            cursor.color(), key,
            Box::new(shape_of(cursor.left())),
            Box::new(shape_of(cursor.right()))
        )
    }
}
fn index_of(tree: &Tree<i32>, key: i32) -> NodeIndex {
    tree.find(&key).expect("key is present").index()
}

/// Walks the tree through cursors only, checking the same rules as
/// `Tree::validate`; returns the black height.
fn walk<K: Ord>(cursor: Cursor<'_, K>) -> usize {
    if cursor.is_sentinel() {
        assert!(cursor.is_black(), "sentinels have to be black");
        assert!(cursor.left().is_none() && cursor.right().is_none(), "sentinels have no children");
        return 1;
    }
    let mut heights = [0; 2];
    for (i, side) in [Side::Left, Side::Right].into_iter().enumerate() {
        let child = cursor.child(side).expect("real nodes have two children");
        assert_eq!(child.side(), side, "cached side disagrees with the parent's slot");
        assert!(child.parent() == Some(cursor), "child does not point back at its parent");
        assert!(cursor.is_black() || child.is_black(), "cannot have two red nodes in a row");
        if let (Some(key), Some(child_key)) = (cursor.key(), child.key()) {
            match side {
                Side::Left => assert!(child_key < key, "left child out of order"),
                _ => assert!(child_key > key, "right child out of order")
            }
        }
        heights[i] = walk(child);
    }
    assert_eq!(heights[0], heights[1], "black height of all paths has to be equal");
    heights[0] + cursor.color() as usize
}
fn validate_rb_tree<K: Ord>(tree: &Tree<K>) {
    let height = tree.validate().expect("red-black invariants hold");
    let Some(root) = tree.root() else {
        assert_eq!(height, 0, "empty tree has no black height");
        return;
    };
    assert!(root.is_black(), "root has to be black");
    assert_eq!(root.side(), Side::Root, "root has no side");
    assert!(root.parent().is_none(), "root has no parent");
    assert_eq!(walk(root), height, "walked and validated black height mismatch");
    assert_eq!(tree.black_height(), height, "tracked and true black height mismatch");
    let keys = tree.iter().collect::<Vec<_>>();
    assert!(keys.windows(2).all( |pair| pair[0] < pair[1] ), "in-order keys are not strictly ascending");
    assert_eq!(keys.len(), tree.len());
}
#[allow(unused)]
fn print_tree<K: std::fmt::Display>(tree: &Tree<K>) {
    print!("{}", tree.dump());
}
