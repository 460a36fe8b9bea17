use bst_churn::{Tree, TreeError};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn traversal_is_sorted(xs: Vec<i32>) -> bool {
    let tree: Tree = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort();

    tree.len() == sorted.len() && tree.iter().eq(sorted)
}

#[quickcheck]
fn contains_inserted(xs: Vec<i32>) -> bool {
    let tree: Tree = xs.iter().copied().collect();
    xs.iter().all(|&x| tree.contains(x))
}

#[quickcheck]
fn remove_missing_is_reported(xs: Vec<i32>, missing: i32) -> TestResult {
    if xs.contains(&missing) {
        return TestResult::discard();
    }
    let mut tree: Tree = xs.iter().copied().collect();
    let before: Vec<i32> = tree.iter().collect();

    let result = tree.remove(missing);
    TestResult::from_bool(
        result == Err(TreeError::NotFound(missing)) && tree.iter().eq(before),
    )
}

#[quickcheck]
fn with_deletions(xs: Vec<i32>, deletes: Vec<usize>) -> bool {
    let mut tree: Tree = xs.iter().copied().collect();
    let mut still_present = xs;
    for index in deletes {
        if still_present.is_empty() {
            break;
        }
        let value = still_present.swap_remove(index % still_present.len());
        if tree.remove(value).is_err() {
            return false;
        }
    }
    still_present.sort();

    tree.len() == still_present.len() && tree.iter().eq(still_present)
}

#[quickcheck]
fn chain_internal_path_length(n: u8) -> bool {
    let n = n as usize;
    let ascending: Tree = (0..n as i32).collect();
    let descending: Tree = (0..n as i32).rev().collect();
    let expected = n * n.saturating_sub(1) / 2;

    ascending.internal_path_length() == expected && descending.internal_path_length() == expected
}

#[test]
fn example_internal_path_length() {
    let tree: Tree = [10, 5, 15, 2, 7, 20].into_iter().collect();
    assert_eq!(tree.internal_path_length(), 8);

    let single: Tree = [10].into_iter().collect();
    assert_eq!(single.internal_path_length(), 0);
}

#[test]
fn delete_two_children_example() {
    let mut tree: Tree = [10, 5, 15, 2, 7, 20].into_iter().collect();
    tree.remove(5).unwrap();
    assert_eq!(tree.iter().collect::<Vec<_>>(), vec![2, 7, 10, 15, 20]);
}
