use redblack_forest::{OrderFn, RbForest};

fn icmp(a: &i32, b: &i32) -> i32 {
    if a < b {
        -1
    } else if a > b {
        1
    } else {
        0
    }
}

fn dcmp(a: &i32, b: &i32) -> i32 {
    icmp(b, a)
}

fn filled() -> RbForest<i32> {
    let mut t = RbForest::new(
        "stats",
        vec![Box::new(icmp) as OrderFn<i32>, Box::new(dcmp)],
    );
    for v in [40, 10, 90, 70, 20, 60, 30, 80, 50] {
        t.insert(v).unwrap();
    }
    t
}

#[test]
fn select_is_the_inorder_position() {
    let t = filled();
    for (k, expected) in (1..=9).zip([10, 20, 30, 40, 50, 60, 70, 80, 90]) {
        assert_eq!(*t.data(t.select(0, k).unwrap()), expected);
    }
    // the descending order selects from the other end
    for (k, expected) in (1..=9).zip([90, 80, 70, 60, 50, 40, 30, 20, 10]) {
        assert_eq!(*t.data(t.select(1, k).unwrap()), expected);
    }
}

#[test]
fn rank_inverts_select() {
    let t = filled();
    for order in 0..2 {
        for k in 1..=t.len() {
            let c = t.select(order, k).unwrap();
            assert_eq!(t.rank(c), k);
        }
    }
}

#[test]
fn select_out_of_range_is_none() {
    let t = filled();
    assert!(t.select(0, 0).is_none());
    assert!(t.select(0, 10).is_none());

    let empty = RbForest::<i32>::single("empty", icmp);
    assert!(empty.select(0, 1).is_none());
}

#[test]
fn rank_of_extremes() {
    let t = filled();
    assert_eq!(t.rank(t.min(0).unwrap()), 1);
    assert_eq!(t.rank(t.max(0).unwrap()), t.len());
    assert_eq!(t.rank(t.min(1).unwrap()), 1);
}

#[test]
fn rank_of_search_results() {
    let t = filled();
    assert_eq!(t.rank(t.search(0, &50).unwrap()), 5);
    assert_eq!(t.rank(t.search(1, &50).unwrap()), 5);
    assert_eq!(t.rank(t.search(0, &90).unwrap()), 9);
    assert_eq!(t.rank(t.search(1, &90).unwrap()), 1);
}

#[test]
fn stats_stay_consistent_across_removals() {
    let mut t = filled();
    for victim in [40, 90, 10, 60] {
        let pkg = t.package(t.search(0, &victim).unwrap());
        t.remove(pkg).unwrap();
        t.assert_valid().unwrap();

        for order in 0..2 {
            for k in 1..=t.len() {
                let c = t.select(order, k).unwrap();
                assert_eq!(t.rank(c), k);
            }
        }
    }
    assert_eq!(t.len(), 5);
}
