//! Debug events emitted by `filter` and `partition` (feature `tracing`)

#![cfg(feature = "tracing")]

use sluice::predicate::*;
use sluice::{filter, partition};
use tracing_test::traced_test;

#[traced_test]
#[test]
fn partition_logs_counts() {
    let split = partition(&[5, 15, 3], greater_than(10));
    assert_eq!(split.valid, vec![15]);
    assert!(logs_contain("partitioned items"));
    assert!(logs_contain("total=3"));
    assert!(logs_contain("valid=1"));
    assert!(logs_contain("invalid=2"));
}

#[traced_test]
#[test]
fn filter_logs_counts() {
    let kept = filter(&[5, 15, 3, 20, 8, 12], greater_than(10));
    assert_eq!(kept.len(), 3);
    assert!(logs_contain("filtered items"));
    assert!(logs_contain("total=6"));
}

#[test]
fn filter_runs_under_fmt_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        assert_eq!(filter(&["a", " ", "b"], not_blank()), vec!["a", "b"]);
    });
}
