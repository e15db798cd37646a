use super::*;

#[test]
fn insert_remove() {
    let values = vec![1, 7, 8, 9, 10, 6, 5, 2, 3, 4, 0, 11];
    let mut tree = Tree::new();
    for x in values.iter().copied() {
        println!("==================== +{} ====================", x);
        assert!(tree.insert(x));
        print_tree(&tree);
        validate_rb_tree(&tree);
    }
    for x in values.into_iter() {
        println!("==================== -{} ====================", x);
        let value = tree.remove(&x);
        print_tree(&tree);
        validate_rb_tree(&tree);
        assert_eq!(value, Some(x));
    }
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
}
#[test]
fn iter() {
    let mut values = vec![1, 7, 8, 9, 10, 6, 5, 2, 3, 4, 0, 11];
    let tree = values.iter().copied().collect::<Tree<_>>();
    print_tree(&tree);
    values.sort_unstable();
    let result = tree.iter().copied().collect::<Vec<_>>();
    assert_eq!(&values, &result);
    let reversed = tree.iter().rev().copied().collect::<Vec<_>>();
    assert!(reversed.iter().eq(values.iter().rev()));
    assert_eq!(tree.iter().len(), values.len());

    let mut iter = tree.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&11));
    assert_eq!(iter.len(), values.len() - 2);
    assert_eq!(iter.count(), values.len() - 2);

    assert_eq!(tree.into_iter().collect::<Vec<_>>(), values);
}
#[test]
fn ordering() {
    let tree = [5, 40, 25, 95, 1, 80, 70].into_iter().collect::<Tree<_>>();
    print_tree(&tree);
    validate_rb_tree(&tree);
    assert_eq!(tree.min().and_then( |node| node.key() ), Some(&1));
    assert_eq!(tree.max().and_then( |node| node.key() ), Some(&95));
    assert_eq!(tree.successor(&40).and_then( |node| node.key() ), Some(&70));
    assert_eq!(tree.predecessor(&40).and_then( |node| node.key() ), Some(&25));
    assert!(tree.successor(&95).is_none());
    assert!(tree.predecessor(&1).is_none());
    assert!(tree.successor(&41).is_none(), "absent keys have no neighbours");
}
#[test]
fn empty() {
    let mut tree = Tree::<i32>::new();
    validate_rb_tree(&tree);
    assert!(tree.min().is_none());
    assert!(tree.max().is_none());
    assert!(tree.find(&1).is_none());
    assert!(tree.successor(&1).is_none());
    assert!(tree.predecessor(&1).is_none());
    assert_eq!(tree.remove(&1), None);
    assert_eq!(tree.iter().next(), None);
    assert_eq!(tree.pre_order().count(), 0);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.dump().to_string(), "");
}
#[test]
fn round_trip() {
    let mut tree = Tree::new();
    tree.insert("pear".to_string());
    let found = tree.find("pear").expect("inserted key is found");
    assert_eq!(found.key().map(String::as_str), Some("pear"));
    assert!(found.is_black(), "lone root is black");
    assert_eq!(tree.remove("pear"), Some("pear".to_string()));
    assert!(tree.find("pear").is_none());
    validate_rb_tree(&tree);
}
#[test]
fn idempotence() {
    let mut tree = [3, 1, 4, 5, 9, 2, 6].into_iter().collect::<Tree<_>>();
    let before = shape_of(tree.root());
    assert_eq!(tree.remove(&8), None);
    assert_eq!(tree.remove(&8), None);
    assert_eq!(shape_of(tree.root()), before);
    assert!(!tree.insert(4));
    assert!(!tree.insert(4));
    assert_eq!(shape_of(tree.root()), before);
    assert_eq!(tree.iter().filter( |&&key| key == 4 ).count(), 1);
    assert_eq!(tree.len(), 7);
    validate_rb_tree(&tree);
}
#[test]
fn cursor() {
    let tree = (1..=7).collect::<Tree<_>>();
    print_tree(&tree);
    let root = tree.root().expect("tree is not empty");
    assert_eq!(root.side(), Side::Root);
    assert!(root.parent().is_none());
    let min = root.min().expect("root is real");
    assert_eq!(min.key(), Some(&1));
    assert_eq!(min.side(), Side::Left);
    let sentinel = min.left().expect("real nodes have two children");
    assert!(sentinel.is_sentinel());
    assert!(sentinel.is_black());
    assert_eq!(sentinel.key(), None);
    assert!(sentinel.left().is_none());
    assert!(sentinel.successor().is_none());
    assert_eq!(sentinel.parent(), Some(min));

    let mut cursor = min;
    let mut seen = vec![*cursor.key().expect("real node")];
    while cursor.move_next() {
        seen.push(*cursor.key().expect("real node"));
    }
    assert_eq!(seen, (1..=7).collect::<Vec<_>>());
    assert_eq!(cursor, tree.max().expect("tree is not empty"));
    assert!(cursor.move_prev());
    assert_eq!(cursor.key(), Some(&6));

    let right = root.right().expect("real nodes have two children");
    assert_eq!(right.min().and_then( |node| node.predecessor() ), Some(root));
}
#[test]
fn pre_order() {
    let tree = [2, 1, 3].into_iter().collect::<Tree<_>>();
    let walk = tree.pre_order()
        .map( |(depth, node)| (depth, node.key().copied(), node.color()) )
        .collect::<Vec<_>>();
    assert_eq!(walk, vec![
        (0, Some(2), Color::Black),
        (1, Some(1), Color::Red),
        (2, None, Color::Black),
        (2, None, Color::Black),
        (1, Some(3), Color::Red),
        (2, None, Color::Black),
        (2, None, Color::Black),
    ]);
}
#[test]
fn dump() {
    let tree = [20, 10].into_iter().collect::<Tree<_>>();
    assert_eq!(tree.dump().to_string(), "\
[B] 20
  [R] 10
  | [B] NIL
  | [B] NIL
  [B] NIL
");
}
#[test]
fn clear() {
    let mut tree = Tree::with_capacity(16);
    tree.extend(0..16);
    validate_rb_tree(&tree);
    tree.clear();
    validate_rb_tree(&tree);
    assert!(tree.is_empty());
    tree.extend([3, 1, 2]);
    validate_rb_tree(&tree);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
}
#[cfg(feature = "sorted-iter")]
#[test]
fn sorted_union() {
    use sorted_iter::SortedIterator;

    let even = (0..10).map( |n| 2 * n ).collect::<Tree<_>>();
    let odd = (0..10).map( |n| 2 * n + 1 ).collect::<Tree<_>>();
    let all = even.iter().union(odd.iter()).copied().collect::<Vec<_>>();
    assert_eq!(all, (0..20).collect::<Vec<_>>());
}
