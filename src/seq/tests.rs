//! Tests for the pull engine's combinator vocabulary.

use crate::seq::prelude::*;
use crate::testing::{Counting, Exploding};

fn is_even(x: &i64) -> bool {
    x % 2 == 0
}

// Laziness
#[test]
fn building_a_pipeline_never_pulls() {
    let _pipeline = Exploding::<i64>::new()
        .select(|x| x * 2)
        .filter(is_even)
        .skip(3)
        .skip_while(|x| *x < 10)
        .bind(|x| of(vec![x, x]))
        .take(2)
        .take_while(|_| true)
        .append(0);
}

#[test]
#[should_panic(expected = "pulled an exploding sequence")]
fn faults_surface_on_first_pull() {
    let mut xs = Exploding::<i64>::new().select(|x| x + 1);
    xs.next();
}

// Single pass
#[test]
fn draining_twice_yields_nothing_the_second_time() {
    let mut xs = of(vec![1, 2, 3]);
    assert_eq!((&mut xs).select(|x| x).to_vec(), vec![1, 2, 3]);
    assert_eq!((&mut xs).select(|x| x).to_vec(), Vec::<i32>::new());
}

#[test]
fn lent_sequences_share_their_cursor() {
    let mut xs = range(0, 6);
    assert_eq!((&mut xs).take(2).to_vec(), vec![0, 1]);
    assert_eq!((&mut xs).first(), Some(2));
    assert_eq!(xs.to_vec(), vec![3, 4, 5]);
}

// Flatten order
#[test]
fn bind_flattens_in_order() {
    let xs = of(vec!["a", "b", "c"]).bind(|x| of(vec![x, x]));
    assert_eq!(xs.to_vec(), vec!["a", "a", "b", "b", "c", "c"]);
}

#[test]
fn nested_binds_flatten_depth_first() {
    let xs = range(1, 3).bind(|x| range(0, 2).bind(move |y| of(vec![(x, y, 'l'), (x, y, 'r')])));
    assert_eq!(
        xs.to_vec(),
        vec![
            (1, 0, 'l'),
            (1, 0, 'r'),
            (1, 1, 'l'),
            (1, 1, 'r'),
            (2, 0, 'l'),
            (2, 0, 'r'),
            (2, 1, 'l'),
            (2, 1, 'r'),
        ]
    );
}

// No stack overflow
#[test]
fn sparse_filter_over_a_million_elements() {
    let n = 1_000_001;
    let survivor = range(0, n).filter(move |x| *x == n - 1).first();
    assert_eq!(survivor, Some(n - 1));
}

#[test]
fn stacked_sparse_filters_stay_iterative() {
    let n = 1_000_000;
    let xs = range(0, n)
        .filter(|x| x % 1000 == 999)
        .filter(|x| x % 7 == 0)
        .skip_while(|x| *x < 900_000);
    assert_eq!(xs.first(), Some(901_999));
}

// Index semantics
#[test]
fn select_with_index_adds_positions() {
    let xs = of(vec![10, 20, 30]).select_with_index(|x, i| x + i as i32);
    assert_eq!(xs.to_vec(), vec![10, 21, 32]);
}

#[test]
fn index_counts_outer_elements_not_produced_ones() {
    let xs = of(vec!['a', 'b', 'c']).select_many_with_index(|c, i| of(vec![(c, i), (c, i)]));
    assert_eq!(
        xs.to_vec(),
        vec![('a', 0), ('a', 0), ('b', 1), ('b', 1), ('c', 2), ('c', 2)]
    );
}

#[test]
fn filter_with_index_sees_every_position() {
    let xs = of(vec![5, 5, 5, 5, 5]).filter_with_index(|_, i| i % 2 == 0);
    assert_eq!(xs.to_vec(), vec![5, 5, 5]);
}

// Take/Skip boundary
#[test]
fn take_after_filter() {
    assert_eq!(range(1, 10).filter(is_even).take(3).to_vec(), vec![2, 4, 6]);
}

#[test]
fn skip_after_filter() {
    assert_eq!(range(1, 10).filter(is_even).skip(2).to_vec(), vec![6, 8]);
}

#[test]
fn skip_non_positive_is_identity() {
    assert_eq!(range(0, 3).skip(0).to_vec(), vec![0, 1, 2]);
    assert_eq!(range(0, 3).skip(-5).to_vec(), vec![0, 1, 2]);
}

#[test]
fn skip_while_passes_everything_after_first_failure() {
    let xs = of(vec![1, 2, 9, 1, 2]).skip_while(|x| *x < 5);
    assert_eq!(xs.to_vec(), vec![9, 1, 2]);
}

#[test]
fn skip_while_lt_five() {
    assert_eq!(range(1, 10).skip_while(|x| *x < 5).to_vec(), vec![5, 6, 7, 8, 9]);
}

// Folds
#[test]
fn fold_is_a_strict_left_fold() {
    assert_eq!(of(vec![1, 4, 5]).fold(5, |acc, x| acc * 2 + x), 57);
}

#[test]
fn aggregate_projects_the_accumulator() {
    let r = of(vec!["ab", "cde"]).aggregate(0, |acc, s| acc + s.len(), |n| format!("{n} chars"));
    assert_eq!(r, "5 chars");
}

#[test]
fn reduce_on_empty_reports_no_result() {
    assert_eq!(empty::<i32>().reduce(|a, b| a + b), None);
}

#[test]
fn reduce_seeds_with_first_element() {
    assert_eq!(of(vec![1, 4, 5]).reduce(|acc, x| acc * 2 + x), Some(17));
    assert_eq!(unit(3).reduce(|_, _| unreachable!()), Some(3));
}

// Append
#[test]
fn append_emits_once_on_non_empty() {
    assert_eq!(range(0, 2).append(7).to_vec(), vec![0, 1, 7]);
}

#[test]
fn append_emits_once_on_empty() {
    let mut xs = empty::<i64>().append(7);
    assert_eq!(xs.next(), Some(7));
    assert_eq!(xs.next(), None);
}

// Boolean folds
#[test]
fn all_and_any_on_empty() {
    assert!(empty::<i32>().all(|_| false));
    assert!(!empty::<i32>().any(|_| true));
    assert!(!empty::<i32>().any_elem());
}

#[test]
fn all_short_circuits() {
    let probe = Counting::new(range(0, 100));
    let pulls = probe.pulls();
    assert!(!probe.all(|x| x < 3));
    assert_eq!(pulls.get(), 4);
}

#[test]
fn any_short_circuits() {
    let probe = Counting::new(range(0, 100));
    let pulls = probe.pulls();
    assert!(probe.any(|x| x == 1));
    assert_eq!(pulls.get(), 2);
}

#[test]
fn any_elem_pulls_at_most_once() {
    let probe = Counting::new(repeat(1));
    let pulls = probe.pulls();
    assert!(probe.any_elem());
    assert_eq!(pulls.get(), 1);
}

// First / Last
#[test]
fn first_does_not_force_the_rest() {
    let probe = Counting::new(range(0, 1_000));
    let pulls = probe.pulls();
    assert_eq!(probe.first(), Some(0));
    assert_eq!(pulls.get(), 1);
}

#[test]
fn first_on_infinite_source() {
    assert_eq!(repeat("x").first(), Some("x"));
}

#[test]
fn first_while_requires_the_head_to_match() {
    assert_eq!(of(vec![2, 3]).first_while(|x| x % 2 == 0), Some(2));
    assert_eq!(of(vec![3, 2]).first_while(|x| x % 2 == 0), None);
}

#[test]
fn last_and_last_while() {
    assert_eq!(range(0, 5).last(), Some(4));
    assert_eq!(range(0, 5).last_while(|x| x % 2 == 1), Some(3));
    assert_eq!(empty::<i64>().last(), None);
}

#[test]
fn iterate_with_index_counts_from_zero() {
    let mut seen = Vec::new();
    of(vec!['x', 'y']).iterate_with_index(|c, i| seen.push((i, c)));
    assert_eq!(seen, vec![(0, 'x'), (1, 'y')]);
}

// Std interop
#[test]
fn into_iterator_bridges_to_std() {
    let doubled: Vec<i64> = range(0, 3).select(|x| x * 2).into_iterator().collect();
    assert_eq!(doubled, vec![0, 2, 4]);
}

#[test]
fn boxed_sequences_erase_branch_types() {
    let xs = range(0, 4).bind(|x| match x % 3 {
        0 => unit(x).boxed(),
        1 => empty().boxed(),
        _ => repeat(x).take(2).boxed(),
    });
    assert_eq!(xs.to_vec(), vec![0, 2, 2, 3]);
}
