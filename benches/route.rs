//! 路由解析与计数性能基准测试

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;
use visit_badge::api::route::parse_request;
use visit_badge::runtime::BackgroundTasks;
use visit_badge::services::VisitCounter;
use visit_badge::storage::MemoryStore;

// ============== 路由解析 ==============

fn bench_parse_request(c: &mut Criterion) {
    c.bench_function("route/badge", |b| {
        b.iter(|| parse_request(black_box("/badge/github-profile"), None));
    });

    c.bench_function("route/not_found", |b| {
        b.iter(|| parse_request(black_box("/favicon.ico"), None));
    });

    let mut group = c.benchmark_group("route/stats_batch");
    for size in [1, 10, 100] {
        let query = format!(
            "keys={}",
            (0..size)
                .map(|i| format!("key_{}", i))
                .collect::<Vec<_>>()
                .join(",")
        );

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("keys", size), &query, |b, query| {
            b.iter(|| parse_request(black_box("/stats-batch"), Some(query.as_str())));
        });
    }
    group.finish();
}

// ============== 计数器 ==============

fn bench_counter_memory(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let counter = VisitCounter::new(
        Arc::new(MemoryStore::new()),
        BackgroundTasks::with_handle(rt.handle().clone()),
    );

    let read_counter = counter.clone();
    c.bench_function("counter/read", |b| {
        b.to_async(&rt).iter(|| {
            let c = read_counter.clone();
            async move { c.read("bench").await }
        });
    });

    let incr_counter = counter.clone();
    c.bench_function("counter/increment", |b| {
        b.to_async(&rt).iter(|| {
            let c = incr_counter.clone();
            async move { c.increment("bench").await }
        });
    });

    rt.block_on(counter.tasks().drain(std::time::Duration::from_secs(5)));
}

criterion_group!(benches, bench_parse_request, bench_counter_memory);
criterion_main!(benches);
