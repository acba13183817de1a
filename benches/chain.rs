use criterion::{criterion_group, criterion_main, Criterion};
use error_switch::prelude::*;
use std::hint::black_box;

error_kinds! {
    enum ServiceKind {
        Internal: unchecked,
        Overloaded: unchecked < Internal,
        Timeout: checked,
        RateLimited: checked,
    }
}

#[derive(Debug)]
struct ServiceError {
    kind: ServiceKind,
}

impl KindedError for ServiceError {
    type Kind = ServiceKind;

    fn kind(&self) -> ServiceKind {
        self.kind
    }
}

// Simulate a service call with a realistic success/failure mix
fn call_service(id: u64) -> Result<u64, ServiceError> {
    match id % 100 {
        0 => Err(ServiceError {
            kind: ServiceKind::Timeout,
        }),
        1 => Err(ServiceError {
            kind: ServiceKind::Overloaded,
        }),
        _ => Ok(id),
    }
}

fn bench_success_passthrough(c: &mut Criterion) {
    c.bench_function("chain/success_passthrough", |b| {
        b.iter(|| {
            let value = handle(|| call_service(black_box(42))).resolve_invoking_unclaimed(|_| {});
            black_box(value)
        })
    });
}

fn bench_exact_match_rethrow(c: &mut Criterion) {
    c.bench_function("chain/exact_match_rethrow", |b| {
        b.iter(|| {
            let outcome = handle(|| call_service(black_box(100))).resolve_rethrowing(
                |_| ServiceError {
                    kind: ServiceKind::RateLimited,
                },
                &[ServiceKind::Timeout],
            );
            black_box(outcome.is_err())
        })
    });
}

fn bench_parent_match_invoke(c: &mut Criterion) {
    c.bench_function("chain/parent_match_invoke", |b| {
        b.iter(|| {
            let outcome = handle(|| call_service(black_box(1))).resolve_invoking_parent(
                |err| {
                    black_box(err);
                },
                ServiceKind::Internal,
            );
            black_box(outcome.is_ok())
        })
    });
}

fn bench_mixed_steps(c: &mut Criterion) {
    c.bench_function("chain/mixed_steps", |b| {
        b.iter(|| {
            let outcome = handle(|| call_service(black_box(100)))
                .invoke_for(
                    |err| {
                        black_box(err);
                    },
                    &[ServiceKind::RateLimited],
                )
                .invoke_for_parent(
                    |err| {
                        black_box(err);
                    },
                    ServiceKind::Internal,
                )
                .resolve_rethrowing_unclaimed(|err| err);
            black_box(outcome.is_err())
        })
    });
}

criterion_group!(
    benches,
    bench_success_passthrough,
    bench_exact_match_rethrow,
    bench_parent_match_invoke,
    bench_mixed_steps
);
criterion_main!(benches);
