use bidforge::config::CostTable;
use bidforge::jobs::{JobRequest, JobType, SportsCourtOptions};
use bidforge::pricing::compute_bid;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn court_request() -> JobRequest {
    let opts = SportsCourtOptions {
        wants_new_concrete: true,
        is_pickleball: true,
        is_basketball: true,
        num_courts: 2,
        wants_net: true,
        wants_fence: true,
        wants_lights: true,
        wants_hoop: true,
    };
    JobRequest::new(JobType::SportsCourts, 7200.0, 140.0, 18.0, 4).with_court_options(opts)
}

fn bench_pricing(c: &mut Criterion) {
    let costs = CostTable::default();
    let courts = court_request();
    let flooring = JobRequest::new(JobType::ResinousFlooring, 2400.0, 20.0, 15.0, 3);

    c.bench_function("compute_bid_courts_remote", |b| {
        b.iter(|| compute_bid(black_box(&courts), black_box(&costs)))
    });
    c.bench_function("compute_bid_flooring_local", |b| {
        b.iter(|| compute_bid(black_box(&flooring), black_box(&costs)))
    });
}

criterion_group!(benches, bench_pricing);
criterion_main!(benches);
