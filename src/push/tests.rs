//! Tests for the push engine.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing_test::traced_test;

use crate::push::{self, PushConfig, PushError};

/// Flags when the value holding it is dropped.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// An infinite push source whose step closure owns a [`DropFlag`].
///
/// The flag flips once the source's worker has exited.
fn watched_source() -> (push::Iter<u64>, Arc<AtomicBool>) {
    let dropped = Arc::new(AtomicBool::new(false));
    let flag = DropFlag(Arc::clone(&dropped));
    let mut n = 0;
    let xs = push::from_fn(move || {
        let _keep = &flag;
        n += 1;
        Some(n)
    });
    (xs, dropped)
}

async fn wait_for(flag: &AtomicBool) {
    let waited = tokio::time::timeout(Duration::from_secs(1), async {
        while !flag.load(Ordering::SeqCst) {
            tokio::task::yield_now().await;
        }
    })
    .await;
    assert!(waited.is_ok(), "worker still running after its consumer went away");
}

// Flatten order
#[tokio::test]
async fn bind_flattens_in_order() {
    let xs = push::of(vec!["a", "b", "c"]).bind(|x| push::of(vec![x, x]));
    assert_eq!(xs.to_vec().await, vec!["a", "a", "b", "b", "c", "c"]);
}

#[tokio::test]
async fn nested_binds_flatten_depth_first() {
    let xs = push::range(1, 3).bind(|x| push::range(0, 2).bind(move |y| push::of(vec![(x, y, 'l'), (x, y, 'r')])));
    assert_eq!(
        xs.to_vec().await,
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

// Index semantics
#[tokio::test]
async fn select_with_index_adds_positions() {
    let xs = push::of(vec![10, 20, 30]).select_with_index(|x, i| x + i as i32);
    assert_eq!(xs.to_vec().await, vec![10, 21, 32]);
}

#[tokio::test]
async fn index_counts_outer_elements_not_produced_ones() {
    let xs = push::of(vec!['a', 'b', 'c']).select_many_with_index(|c, i| push::of(vec![(c, i), (c, i)]));
    assert_eq!(
        xs.to_vec().await,
        vec![('a', 0), ('a', 0), ('b', 1), ('b', 1), ('c', 2), ('c', 2)]
    );
}

#[tokio::test]
async fn take_while_with_index_stops_at_first_failure() {
    let xs = push::of(vec![5, 5, 5, 5]).take_while_with_index(|_, i| i < 2);
    assert_eq!(xs.to_vec().await, vec![5, 5]);
}

// Take and skip boundaries
#[tokio::test]
async fn take_and_skip_after_filter() {
    let evens = push::range(1, 10).filter(|x| x % 2 == 0).take(3);
    assert_eq!(evens.to_vec().await, vec![2, 4, 6]);

    let tail = push::range(1, 10).filter(|x| x % 2 == 0).skip(2);
    assert_eq!(tail.to_vec().await, vec![6, 8]);
}

#[tokio::test]
async fn non_positive_counts() {
    assert_eq!(push::range(0, 3).take(0).to_vec().await, Vec::<i64>::new());
    assert_eq!(push::range(0, 3).take(-1).to_vec().await, Vec::<i64>::new());
    assert_eq!(push::range(0, 3).skip(-4).to_vec().await, vec![0, 1, 2]);
}

#[tokio::test]
async fn take_more_than_available() {
    assert_eq!(push::range(0, 3).take(10).to_vec().await, vec![0, 1, 2]);
}

#[tokio::test]
async fn take_while_short_circuits() {
    let xs = push::of(vec![1, 2, 9, 1, 2]).take_while(|x| *x < 5);
    assert_eq!(xs.to_vec().await, vec![1, 2]);
}

#[tokio::test]
async fn skip_while_passes_everything_after_first_failure() {
    let xs = push::of(vec![1, 2, 9, 1, 2]).skip_while(|x| *x < 5);
    assert_eq!(xs.to_vec().await, vec![9, 1, 2]);
}

// Terminal operators
#[tokio::test]
async fn fold_is_a_strict_left_fold() {
    assert_eq!(push::of(vec![1, 4, 5]).fold(5, |acc, x| acc * 2 + x).await, 57);
}

#[tokio::test]
async fn aggregate_projects_the_accumulator() {
    let fruits = push::of(vec!["apple", "mango", "orange", "passionfruit", "grape"]);
    let longest = fruits
        .aggregate(
            "banana",
            |longest, next| if next.len() > longest.len() { next } else { longest },
            str::to_uppercase,
        )
        .await;
    assert_eq!(longest, "PASSIONFRUIT");
}

#[tokio::test]
async fn reduce_on_empty_and_non_empty() {
    assert_eq!(push::empty::<i32>().reduce(|a, b| a + b).await, None);
    assert_eq!(push::of(vec![1, 4, 5]).reduce(|acc, x| acc * 2 + x).await, Some(17));
}

#[tokio::test]
async fn append_emits_exactly_once() {
    assert_eq!(push::range(0, 2).append(7).to_vec().await, vec![0, 1, 7]);

    let mut xs = push::empty().append(7);
    assert_eq!(xs.next().await, Some(7));
    assert_eq!(xs.next().await, None);
    assert_eq!(xs.next().await, None);
}

#[tokio::test]
async fn all_and_any() {
    assert!(push::empty::<i32>().all(|_| false).await);
    assert!(!push::empty::<i32>().any(|_| true).await);
    assert!(!push::empty::<i32>().any_elem().await);

    assert!(push::range(0, 5).all(|x| x < 5).await);
    assert!(!push::range(0, 5).all(|x| x < 3).await);
    assert!(push::range(0, 5).any(|x| x == 4).await);
    assert!(push::repeat(1).any_elem().await);
}

#[tokio::test]
async fn first_and_last() {
    assert_eq!(push::repeat("x").first().await, Some("x"));
    assert_eq!(push::empty::<i32>().first().await, None);
    assert_eq!(push::of(vec![2, 3]).first_while(|x| x % 2 == 0).await, Some(2));
    assert_eq!(push::of(vec![3, 2]).first_while(|x| x % 2 == 0).await, None);

    let xs = vec![9, 34, 65, 92, 87, 435, 3, 54, 83, 23, 87, 67, 12, 19];
    assert_eq!(push::of(xs).last_while(|x| *x > 80).await, Some(87));
    assert_eq!(push::range(0, 5).last().await, Some(4));
}

#[tokio::test]
async fn iterate_with_index_counts_from_zero() {
    let mut seen = Vec::new();
    push::of(vec!['x', 'y'])
        .iterate_with_index(|c, i| seen.push((i, c)))
        .await;
    assert_eq!(seen, vec![(0, 'x'), (1, 'y')]);
}

// Single pass
#[tokio::test]
async fn a_drained_iter_stays_drained() {
    let mut xs = push::range(0, 2);
    assert_eq!(xs.next().await, Some(0));
    assert_eq!(xs.next().await, Some(1));
    assert_eq!(xs.next().await, None);
    assert_eq!(xs.next().await, None);
}

#[tokio::test]
async fn large_filtered_pipeline() {
    let first = push::range(0, 10_000)
        .filter(|x| x % 2 == 1)
        .filter(|x| x % 7 == 0)
        .skip_while(|x| *x < 9_000)
        .first()
        .await;
    assert_eq!(first, Some(9_009));
}

// Configuration
#[tokio::test]
async fn stages_inherit_the_source_configuration() {
    let config = PushConfig::new().with_capacity(4);
    let xs = config.range(0, 10).filter(|x| x % 3 == 0).select(|x| x * 2);
    assert_eq!(xs.config(), config);
    assert_eq!(xs.to_vec().await, vec![0, 6, 12, 18]);
}

#[tokio::test]
async fn sources_from_collections() {
    assert_eq!(push::from_slice(&[1, 2, 3]).to_vec().await, vec![1, 2, 3]);
    assert_eq!(push::from_iter("ab".chars()).to_vec().await, vec!['a', 'b']);

    let map = std::collections::HashMap::from([("k", 1)]);
    assert_eq!(push::from_map(map).to_vec().await, vec![("k", 1)]);
}

// Backpressure
#[tokio::test]
async fn worker_stays_within_capacity_of_consumer() {
    let produced = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&produced);
    let config = PushConfig::new().with_capacity(2);
    let mut xs = config.from_fn(move || Some(counter.fetch_add(1, Ordering::SeqCst)));

    for _ in 0..3 {
        xs.next().await;
    }
    for _ in 0..50 {
        tokio::task::yield_now().await;
    }
    // Consumed, plus a full channel, plus one value held in a pending send.
    assert!(produced.load(Ordering::SeqCst) <= 3 + config.capacity() + 1);
}

// Cancellation
#[tokio::test]
async fn dropping_the_consumer_stops_the_source() {
    let (xs, dropped) = watched_source();
    let mut xs = xs.select(|x| x * 2);
    assert_eq!(xs.next().await, Some(2));
    drop(xs);
    wait_for(&dropped).await;
}

#[tokio::test]
async fn dropping_the_consumer_stops_a_nested_inner_worker() {
    let (inner_tx, inner_rx) = std::sync::mpsc::channel();
    let mut xs = push::unit(0).bind(move |_| {
        let (inner, dropped) = watched_source();
        let _ = inner_tx.send(dropped);
        inner
    });
    assert_eq!(xs.next().await, Some(1));
    let dropped = inner_rx.recv().expect("bind built its inner sequence");
    drop(xs);
    wait_for(&dropped).await;
}

#[tokio::test]
async fn dropping_a_starved_filter_stops_the_source() {
    let (xs, dropped) = watched_source();
    let never = xs.filter(|_| false);
    tokio::task::yield_now().await;
    drop(never);
    wait_for(&dropped).await;
}

#[tokio::test]
async fn take_releases_an_infinite_source() {
    let (xs, dropped) = watched_source();
    assert_eq!(xs.take(3).to_vec().await, vec![1, 2, 3]);
    wait_for(&dropped).await;
}

#[tokio::test]
async fn cancel_stops_the_pipeline_and_reports_exhaustion() {
    let (xs, dropped) = watched_source();
    let mut xs = xs.skip(1);
    assert_eq!(xs.next().await, Some(2));
    xs.cancel();
    assert_eq!(xs.next().await, None);
    wait_for(&dropped).await;
}

// Faults
#[tokio::test]
async fn panics_surface_through_try_next() {
    let mut xs = push::from_fn(|| -> Option<i32> { panic!("boom") });
    let fault = xs.try_next().await.unwrap_err();
    assert_eq!(
        fault,
        PushError::WorkerPanicked {
            message: "boom".to_string()
        }
    );
    assert_eq!(xs.try_next().await, Ok(None));
}

#[tokio::test]
async fn faults_propagate_downstream() {
    let xs = push::range(0, 10).select(|x| if x == 3 { panic!("bad element") } else { x });
    let fault = xs.filter(|_| true).try_to_vec().await.unwrap_err();
    assert!(fault.is_panic());
    assert_eq!(fault.to_string(), "push worker panicked: bad element");
}

#[tokio::test]
async fn elements_before_a_fault_are_delivered() {
    let mut n = 0;
    let mut xs = push::from_fn(move || {
        n += 1;
        if n > 2 {
            panic!("ran dry");
        }
        Some(n)
    });
    assert_eq!(xs.try_next().await, Ok(Some(1)));
    assert_eq!(xs.try_next().await, Ok(Some(2)));
    assert!(xs.try_next().await.is_err());
}

#[tokio::test]
#[traced_test]
async fn next_logs_faults_as_exhaustion() {
    let mut xs = push::from_fn(|| -> Option<i32> { panic!("boom") });
    assert_eq!(xs.next().await, None);
    assert!(logs_contain("treated as exhaustion"));
}

// Stream interop
#[tokio::test]
async fn iter_is_a_stream() {
    use futures::StreamExt;

    let doubled: Vec<i64> = push::range(0, 4).map(|x| x * 2).collect().await;
    assert_eq!(doubled, vec![0, 2, 4, 6]);
}
