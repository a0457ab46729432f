use std::ops::ControlFlow;

use redblack_forest::{RbError, RbForest, Sense, Traversal};

fn icmp(a: &i32, b: &i32) -> i32 {
    if a < b {
        -1
    } else if a > b {
        1
    } else {
        0
    }
}

fn ints(t: &RbForest<i32>, order: usize) -> Vec<i32> {
    t.iter(order).copied().collect()
}

#[test]
fn single_order_insert_and_inorder_walk() {
    let mut t = RbForest::single("ints", icmp);
    for v in [1, 5, 3, 8, 2] {
        t.insert(v).unwrap();
    }

    assert_eq!(t.len(), 5);
    assert_eq!(ints(&t, 0), vec![1, 2, 3, 5, 8]);

    let c = t.select(0, 3).unwrap();
    assert_eq!(*t.data(c), 3);
    assert_eq!(t.rank(c), 3);

    t.assert_valid().unwrap();
}

#[test]
fn extremes() {
    let mut t = RbForest::single("ints", icmp);
    for v in [1, 5, 3, 8, 2] {
        t.insert(v).unwrap();
    }

    assert_eq!(*t.data(t.extreme(0, Sense::Min).unwrap()), 1);
    assert_eq!(*t.data(t.extreme(0, Sense::Max).unwrap()), 8);
    assert_eq!(*t.data(t.min(0).unwrap()), 1);
    assert_eq!(*t.data(t.max(0).unwrap()), 8);
}

#[test]
fn extremes_on_empty_tree() {
    let t = RbForest::<i32>::single("empty", icmp);
    assert!(t.min(0).is_none());
    assert!(t.max(0).is_none());
    assert!(t.search(0, &1).is_none());
}

#[test]
fn search_hit_and_miss() {
    let mut t = RbForest::single("ints", icmp);
    for v in [1, 5, 3, 8, 2] {
        t.insert(v).unwrap();
    }

    let c = t.search(0, &5).unwrap();
    assert_eq!(*t.data(c), 5);
    assert!(t.search(0, &4).is_none());

    // idempotent: same cursor twice, no shape change
    let again = t.search(0, &5).unwrap();
    assert_eq!(c, again);
    t.assert_valid().unwrap();
}

#[test]
fn neighbors_walk_the_whole_order() {
    let mut t = RbForest::single("ints", icmp);
    for v in [1, 5, 3, 8, 2] {
        t.insert(v).unwrap();
    }

    let mut seq = Vec::new();
    let mut c = t.min(0);
    while let Some(cursor) = c {
        seq.push(*t.data(cursor));
        c = t.succ(cursor);
    }
    assert_eq!(seq, vec![1, 2, 3, 5, 8]);

    let mut back = Vec::new();
    let mut c = t.max(0);
    while let Some(cursor) = c {
        back.push(*t.data(cursor));
        c = t.pred(cursor);
    }
    assert_eq!(back, vec![8, 5, 3, 2, 1]);

    assert!(t.succ(t.max(0).unwrap()).is_none());
    assert!(t.pred(t.min(0).unwrap()).is_none());
}

#[test]
fn walk_orders_and_depths() {
    let mut t = RbForest::single("ints", icmp);
    for v in [1, 2, 3] {
        t.insert(v).unwrap();
    }
    // fixup leaves 2 as the black root with 1 and 3 as red children

    let mut pre = Vec::new();
    let _ = t.walk(0, Traversal::Preorder, |v, d| {
        pre.push((*v, d));
        ControlFlow::Continue(())
    });
    assert_eq!(pre, vec![(2, 0), (1, 1), (3, 1)]);

    let mut ino = Vec::new();
    let _ = t.walk(0, Traversal::Inorder, |v, d| {
        ino.push((*v, d));
        ControlFlow::Continue(())
    });
    assert_eq!(ino, vec![(1, 1), (2, 0), (3, 1)]);

    let mut post = Vec::new();
    let _ = t.walk(0, Traversal::Postorder, |v, d| {
        post.push((*v, d));
        ControlFlow::Continue(())
    });
    assert_eq!(post, vec![(1, 1), (3, 1), (2, 0)]);
}

#[test]
fn walk_early_stop() {
    let mut t = RbForest::single("ints", icmp);
    for v in [1, 5, 3, 8, 2] {
        t.insert(v).unwrap();
    }

    let mut seen = Vec::new();
    let flow = t.walk(0, Traversal::Inorder, |v, _| {
        seen.push(*v);
        if seen.len() == 2 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(flow, ControlFlow::Break(()));
    assert_eq!(seen, vec![1, 2]);
}

#[test]
fn remove_round_trip() {
    let mut t = RbForest::single("ints", icmp);
    let ins = t.insert(42).unwrap();
    assert_eq!(ins.matches, 0);
    assert_eq!(t.get(ins.package), Some(&42));

    assert_eq!(t.remove(ins.package), Ok(42));
    assert_eq!(t.len(), 0);
    assert!(t.min(0).is_none());
    assert_eq!(t.iter(0).count(), 0);
    t.assert_valid().unwrap();

    // stale handle
    assert_eq!(t.remove(ins.package), Err(RbError::NotFound));
    assert_eq!(t.get(ins.package), None);
}

#[test]
fn clear_empties_and_tree_is_reusable() {
    let mut t = RbForest::single("ints", icmp);
    for v in [4, 2, 6] {
        t.insert(v).unwrap();
    }
    t.clear();
    assert_eq!(t.len(), 0);
    assert_eq!(t.iter(0).count(), 0);
    t.assert_valid().unwrap();

    t.insert(9).unwrap();
    assert_eq!(ints(&t, 0), vec![9]);
    t.assert_valid().unwrap();
}

#[test]
fn diagnostics_smoke() {
    let mut t = RbForest::single("diagnosed tree", icmp);
    for v in [2, 1, 3] {
        t.insert(v).unwrap();
    }

    let summary = t.summarize();
    assert!(summary.contains("diagnosed tree"));
    assert!(summary.contains("3 packages"));

    let dump = t.diagnose(0);
    assert!(dump.contains("black"));
    assert!(dump.contains('2'));
}

#[test]
#[should_panic(expected = "order index")]
fn invalid_order_index_panics() {
    let t = RbForest::<i32>::single("ints", icmp);
    let _ = t.search(1, &0);
}
