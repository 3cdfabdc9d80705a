//! Benchmarks for the slug resolver
//!
//! Compares the cost of each step of the fallback chain, and registry
//! construction over the embedded content.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use grow_core::{Catalog, SiteRegistry, SiteRouter, SlugResolver};

fn bench_registry_build(c: &mut Criterion) {
    let catalog = Catalog::embedded().unwrap();

    c.bench_function("site_registry_initialize", |b| {
        b.iter(|| {
            let site = SiteRegistry::from_catalog(catalog.clone());
            site.initialize();
            black_box(site)
        })
    });
}

fn bench_lane_resolution(c: &mut Criterion) {
    let site = SiteRegistry::embedded().unwrap();
    site.initialize();
    let resolver = SlugResolver::new();

    let mut group = c.benchmark_group("resolve_lane");
    for (step, segment) in [
        ("direct", "los-angeles-to-dallas-truck-dispatch-service"),
        ("normalized", "los-angeles--to--dallas"),
        ("normalized_stored", "oakland-to-seattle"),
        ("display_name", "los-angeles-to-phoenix"),
        ("not_found", "sacramento-to-reno"),
    ] {
        group.bench_with_input(BenchmarkId::new("step", step), segment, |b, segment| {
            b.iter(|| black_box(resolver.resolve_lane(site.lanes(), "california", black_box(segment))))
        });
    }
    group.finish();
}

fn bench_routing(c: &mut Criterion) {
    let site = SiteRegistry::embedded().unwrap();
    site.initialize();
    let resolver = SlugResolver::new();
    let router = SiteRouter::new(&site, &resolver);

    c.bench_function("state_page_found", |b| {
        b.iter(|| black_box(router.state_page(black_box("texas-truck-dispatch-service"))))
    });

    c.bench_function("state_page_redirect", |b| {
        b.iter(|| black_box(router.state_page(black_box("texas"))))
    });

    c.bench_function("lane_page_found", |b| {
        b.iter(|| {
            black_box(router.lane_page(
                black_box("georgia-truck-dispatch-service"),
                black_box("dallas-to-atlanta-truck-dispatch-service"),
            ))
        })
    });
}

criterion_group!(benches, bench_registry_build, bench_lane_resolution, bench_routing);
criterion_main!(benches);
