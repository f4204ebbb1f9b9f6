//! # Reconciliation Benchmarks
//!
//! Run with: `cargo bench -p descmerge-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use descmerge_core::{BlobRegistry, Descriptor, FileRegistry, reconcile};
use prost_types::DescriptorProto;
use std::hint::black_box;

/// A descriptor with a handful of messages so blobs have realistic weight.
fn descriptor(i: usize) -> Descriptor {
    Descriptor {
        name: Some(format!("pkg{}/v1/file{}.proto", i % 17, i)),
        package: Some(format!("pkg{}.v1", i % 17)),
        message_type: (0..8)
            .map(|m| DescriptorProto {
                name: Some(format!("Message{}", m)),
                ..DescriptorProto::default()
            })
            .collect(),
        ..Descriptor::default()
    }
}

/// Legacy holds the even files, modern holds all of them in reverse.
fn registries(size: usize) -> (BlobRegistry, FileRegistry) {
    let mut legacy = BlobRegistry::new();
    let mut modern = FileRegistry::new();
    for i in (0..size).step_by(2) {
        legacy.register_descriptor(&descriptor(i)).expect("legacy");
    }
    for i in (0..size).rev() {
        modern.register_descriptor(&descriptor(i)).expect("modern");
    }
    (legacy, modern)
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");

    for size in [100, 1000, 5000].iter() {
        let (legacy, modern) = registries(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(reconcile(&legacy, &modern).expect("reconcile")));
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_set");

    for size in [100, 1000, 5000].iter() {
        let (legacy, modern) = registries(*size);
        let set = reconcile(&legacy, &modern).expect("reconcile");
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(set.encode_to_vec()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reconcile, bench_encode);
criterion_main!(benches);
