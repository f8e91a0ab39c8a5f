//! Algebraic property tests for fos-array-ops
//!
//! Every property is checked against plain `Vec` behavior over a fixed set
//! of inputs, including the empty array and a buffer shared with a clone.

use fos_array::{ArrayError, CowArray};
use fos_array_ops::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn samples() -> Vec<CowArray<i32>> {
    vec![
        CowArray::new(),
        CowArray::from_vec(vec![1]),
        CowArray::from_vec(vec![1, 2, 3]),
        CowArray::from_vec(vec![4, 4, 1, 9, 2, 2]),
        CowArray::from_vec((0..33).collect()),
    ]
}

// ============================================================================
// CONCRETE SCENARIOS
// ============================================================================

#[test]
fn test_reference_scenario() -> anyhow::Result<()> {
    init_tracing();
    let a = CowArray::from_vec(vec![1, 2, 3]);

    let mut pushed = a.clone();
    pushed.push(4);
    assert_eq!(pushed.to_vec(), vec![1, 2, 3, 4]);

    let mut set = a.clone();
    set.set(1, 9)?;
    assert_eq!(set.to_vec(), vec![1, 9, 3]);

    let mut reversed = a.clone();
    reversed.reverse();
    assert_eq!(reversed.to_vec(), vec![3, 2, 1]);

    let mut erased = a.clone();
    erased.erase_idx(1);
    assert_eq!(erased.to_vec(), vec![1, 3]);

    let mut inserted = erased.clone();
    inserted.insert_at(1, 2)?;
    assert_eq!(inserted.to_vec(), vec![1, 2, 3]);

    let zipped = a.zip_with(&CowArray::from_vec(vec![10, 20]), |x, y| x + y);
    assert_eq!(zipped.to_vec(), vec![11, 22]);

    // Every derivation above started from a shared handle
    assert_eq!(a.to_vec(), vec![1, 2, 3]);
    Ok(())
}

#[test]
fn test_error_scenario() {
    let a = CowArray::from_vec(vec![1, 2, 3]);
    assert!(matches!(a.get(5), Err(ArrayError::Index { index: 5, len: 3 })));

    let mut empty: CowArray<i32> = CowArray::new();
    assert_eq!(empty.pop(), Err(ArrayError::Empty));
}

// ============================================================================
// ALGEBRAIC PROPERTIES
// ============================================================================

#[test]
fn test_reverse_involution() {
    for a in samples() {
        let mut r = a.clone();
        r.reverse();
        assert_eq!(r.len(), a.len());

        let mut expected = a.to_vec();
        expected.reverse();
        assert_eq!(r.to_vec(), expected);

        r.reverse();
        assert_eq!(r, a);
    }
}

#[test]
fn test_map_composition() {
    let f = |x: &i32| x * 3;
    let g = |x: &i32| x + 7;
    for a in samples() {
        let composed = a.map(|x| f(&g(x)));
        assert_eq!(a.map(g).map(f), composed);
        assert_eq!(composed.len(), a.len());
    }
}

#[test]
fn test_filter_idempotent() {
    let p = |x: &i32| x % 3 != 0;
    for a in samples() {
        let once = a.filter(p);
        assert_eq!(once.filter(p), once);
        let expected: Vec<i32> = a.iter().copied().filter(|x| p(x)).collect();
        assert_eq!(once.to_vec(), expected);
    }
}

#[test]
fn test_partition_conserves_length() {
    for a in samples() {
        let (yes, no) = a.partition(|x| *x > 2);
        assert_eq!(yes.len() + no.len(), a.len());
        assert!(yes.all(|x| *x > 2));
        assert!(no.all(|x| *x <= 2));
    }
}

#[test]
fn test_zip_truncation() {
    for a in samples() {
        for b in samples() {
            let zipped = a.zip_with(&b, |x, y| x * y);
            assert_eq!(zipped.len(), a.len().min(b.len()));
        }
    }
}

#[test]
fn test_insert_erase_inverse() -> anyhow::Result<()> {
    for a in samples() {
        for i in 0..=a.len() {
            let mut b = a.clone();
            b.insert_at(i, -100)?;
            assert_eq!(*b.get(i)?, -100);
            assert_eq!(b.len(), a.len() + 1);
            b.erase_idx(i);
            assert_eq!(b, a);
        }
    }
    Ok(())
}

#[test]
fn test_insert_matches_vec() -> anyhow::Result<()> {
    for a in samples() {
        for i in 0..=a.len() {
            let mut b = a.clone();
            b.insert_at(i, 0)?;
            let mut expected = a.to_vec();
            expected.insert(i, 0);
            assert_eq!(b.to_vec(), expected);
        }
    }
    Ok(())
}

#[test]
fn test_erase_matches_vec() {
    for a in samples() {
        for i in 0..a.len() {
            let mut b = a.clone();
            b.erase_idx(i);
            let mut expected = a.to_vec();
            expected.remove(i);
            assert_eq!(b.to_vec(), expected);
        }
    }
}

#[test]
fn test_all_is_not_any_not() {
    let p = |x: &i32| *x < 5;
    for a in samples() {
        assert_eq!(a.all(p), !a.any(|x| !p(x)));
    }
}

#[test]
fn test_find_rev_is_last_match() {
    for a in samples() {
        let expected = a.iter().rposition(|x| x % 2 == 0);
        assert_eq!(a.find_idx_rev(|x| x % 2 == 0), expected);
        assert_eq!(a.find_rev(|x| x % 2 == 0), expected.map(|i| &a[i]));
    }
}

#[test]
fn test_prefix_of_extension() {
    for a in samples() {
        let mut longer = a.clone();
        longer.append(&CowArray::from_vec(vec![1, 2]));
        assert!(a.is_prefix_of(&longer));
        assert!(a.is_prefix_of(&a));
        assert!(!longer.is_prefix_of(&a));
    }
}

#[test]
fn test_all_diff_matches_dedup() {
    for a in samples() {
        let mut sorted = a.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(a.all_diff(), sorted.len() == a.len());
    }
}

#[test]
fn test_folds_match_iterators() {
    for a in samples() {
        let left = a.foldl(Vec::new(), |mut acc, x| {
            acc.push(*x);
            acc
        });
        assert_eq!(left, a.to_vec());

        let right = a.foldr(Vec::new(), |x, mut acc| {
            acc.push(*x);
            acc
        });
        assert_eq!(right, a.iter().rev().copied().collect::<Vec<_>>());

        assert_eq!(a.sum(), a.iter().sum::<i32>());
    }
}

// ============================================================================
// ERROR PROPAGATION
// ============================================================================

#[test]
fn test_try_map_discards_partial_output() {
    let a = CowArray::from_vec(vec![1, 2, 3, 4]);
    let mut seen = 0;
    let result = a.try_map(|&x| {
        seen += 1;
        if x == 3 {
            Err(ArrayError::Empty)
        } else {
            Ok(x)
        }
    });
    assert_eq!(result, Err(ArrayError::Empty));
    assert_eq!(seen, 3);
}

#[test]
fn test_nested_primitive_errors_propagate() -> anyhow::Result<()> {
    let rows = CowArray::from_vec(vec![
        CowArray::from_vec(vec![1, 2]),
        CowArray::from_vec(vec![3]),
    ]);
    let second = rows.try_map(|row| row.get(1).copied());
    assert_eq!(second, Err(ArrayError::Index { index: 1, len: 1 }));

    let first = rows.try_map(|row| row.get(0).copied())?;
    assert_eq!(first.to_vec(), vec![1, 3]);
    Ok(())
}

// ============================================================================
// SHARING SAFETY THROUGH ALGORITHMS
// ============================================================================

#[test]
fn test_in_place_algorithms_leave_clones_alone() -> anyhow::Result<()> {
    init_tracing();
    for a in samples() {
        let snapshot = a.to_vec();
        let mut b = a.clone();
        b.reverse();
        b.insert_at(0, 1)?;
        b.erase(&1);
        b.pop_while(|x| *x > 0);
        b.append(&a);
        assert_eq!(a.to_vec(), snapshot);
    }
    Ok(())
}
