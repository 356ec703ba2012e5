// Criterion benchmarks for Propmap

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use propmap::core::{haversine_distance, summarize};
use propmap::models::{AmenityElement, AmenityTags};

fn make_elements(count: usize) -> Vec<AmenityElement> {
    (0..count)
        .map(|i| {
            let tags = match i % 3 {
                0 => AmenityTags {
                    amenity: Some("school".to_string()),
                    name: Some(format!("School {}", i)),
                    ..Default::default()
                },
                1 => AmenityTags {
                    railway: Some("station".to_string()),
                    name: Some(format!("Station {}", i)),
                    ..Default::default()
                },
                _ => AmenityTags::default(),
            };

            AmenityElement {
                lat: 1.2966 + (i as f64 * 0.0004),
                lon: 103.7764 + (i as f64 * 0.0003),
                tags,
            }
        })
        .collect()
}

fn make_hospitals(count: usize) -> Vec<AmenityElement> {
    (0..count)
        .map(|i| AmenityElement {
            lat: 1.30 + (i as f64 * 0.002),
            lon: 103.78 + (i as f64 * 0.002),
            tags: AmenityTags {
                amenity: Some("hospital".to_string()),
                name: Some(format!("Hospital {}", i)),
                ..Default::default()
            },
        })
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(1.2966),
                black_box(103.7764),
                black_box(1.3521),
                black_box(103.8198),
            )
        })
    });
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for size in [10, 100, 1000] {
        let local = make_elements(size);
        let hospitals = make_hospitals(size / 10 + 1);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| summarize(black_box(1.2966), black_box(103.7764), &local, &hospitals))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_haversine_distance, bench_summarize);
criterion_main!(benches);
