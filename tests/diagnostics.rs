//! Tests for the duplicate-claim warning.
//!
//! The chain reports a kind handled more than once through `tracing` at warn
//! level; these tests observe the events with a counting subscriber and check
//! that the diagnostic never changes control flow.

mod common;

use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{fail, JobError, JobKind};
use error_switch::prelude::*;
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

struct WarnCount(Arc<AtomicUsize>);

impl Subscriber for WarnCount {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        *metadata.level() == Level::WARN
    }

    fn new_span(&self, _attrs: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _id: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _id: &Id, _follows: &Id) {}

    fn event(&self, _event: &Event<'_>) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    fn enter(&self, _id: &Id) {}

    fn exit(&self, _id: &Id) {}
}

fn warnings_during(run: impl FnOnce()) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    tracing::subscriber::with_default(WarnCount(count.clone()), run);
    count.load(Ordering::SeqCst)
}

#[test]
fn duplicate_claim_warns_once_per_repeated_kind() {
    let warnings = warnings_during(|| {
        let _ = fail(JobKind::Parse)
            .handled()
            .invoke_for(|_| {}, &[JobKind::Parse])
            .invoke_for(|_| {}, &[JobKind::Parse])
            .resolve_invoking_unclaimed(|_| {});
    });
    assert_eq!(warnings, 1);
}

#[test]
fn distinct_claims_do_not_warn() {
    let warnings = warnings_during(|| {
        let _ = fail(JobKind::Parse)
            .handled()
            .invoke_for(|_| {}, &[JobKind::Parse])
            .invoke_for(|_| {}, &[JobKind::Io])
            .resolve_invoking_unclaimed(|_| {});
    });
    assert_eq!(warnings, 0);
}

#[test]
fn repeated_candidate_within_one_step_does_not_warn() {
    let warnings = warnings_during(|| {
        let _ = fail(JobKind::Parse)
            .handled()
            .invoke_for(|_| {}, &[JobKind::Parse, JobKind::Parse])
            .resolve_invoking_unclaimed(|_| {});
    });
    assert_eq!(warnings, 0, "only kinds claimed by earlier steps warn");
}

#[test]
fn terminal_candidates_warn_against_earlier_claims() {
    let warnings = warnings_during(|| {
        let outcome = fail(JobKind::Io)
            .handled()
            .invoke_for(|_| {}, &[JobKind::Io])
            .resolve_rethrowing(|e| e, &[JobKind::Io]);
        // The diagnostic is non-fatal: the terminal still matches and maps.
        assert_eq!(outcome, Err(JobError::new(JobKind::Io)));
    });
    assert_eq!(warnings, 1);
}

#[test]
fn duplicate_claim_does_not_change_control_flow() {
    let first = Cell::new(0);
    let second = Cell::new(0);

    let warnings = warnings_during(|| {
        let value = fail(JobKind::Parse)
            .handled()
            .invoke_for(|_| first.set(first.get() + 1), &[JobKind::Parse])
            .invoke_for(|_| second.set(second.get() + 1), &[JobKind::Parse])
            .resolve_invoking_unclaimed(|_| panic!("kind was claimed"));
        assert_eq!(value, None);
    });

    assert_eq!(warnings, 1);
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 1);
}
