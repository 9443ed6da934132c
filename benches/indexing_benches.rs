use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xs_a5::*;

// --- Fixtures for benchmarks ---
fn get_fixed_lon_lat() -> LonLat {
  LonLat::new(-122.4194, 37.7749) // San Francisco
}

fn get_fixed_a5_index_res5() -> A5Index {
  // lon_lat_to_cell(&get_fixed_lon_lat(), 5)
  A5Index(0x1a38000000000000)
}

fn get_fixed_a5_index_res15() -> A5Index {
  // lon_lat_to_cell(&get_fixed_lon_lat(), 15)
  A5Index(0x1ae29cb780000000)
}

// --- Benchmark Functions ---

fn bench_lon_lat_to_cell(c: &mut Criterion) {
  let ll = get_fixed_lon_lat();
  let mut group = c.benchmark_group("lon_lat_to_cell");

  for res in [1, 5, 10, 15, 20, 30].iter() {
    group.bench_with_input(format!("res_{}", res), res, |b, &r| {
      b.iter(|| lon_lat_to_cell(black_box(&ll), black_box(r)));
    });
  }
  group.finish();
}

fn bench_cell_to_lon_lat(c: &mut Criterion) {
  let cell_res5 = get_fixed_a5_index_res5();
  let cell_res15 = get_fixed_a5_index_res15();

  c.benchmark_group("cell_to_lon_lat")
    .bench_function("res_5", |b| b.iter(|| cell_to_lon_lat(black_box(cell_res5))))
    .bench_function("res_15", |b| b.iter(|| cell_to_lon_lat(black_box(cell_res15))));
}

fn bench_cell_to_boundary(c: &mut Criterion) {
  let cell_res5 = get_fixed_a5_index_res5();
  let cell_res15 = get_fixed_a5_index_res15();
  let corners_only = BoundaryOptions {
    closed_ring: true,
    segments: Some(1),
  };
  let dense = BoundaryOptions {
    closed_ring: true,
    segments: Some(16),
  };

  c.benchmark_group("cell_to_boundary")
    .bench_function("res_5", |b| {
      b.iter(|| cell_to_boundary(black_box(cell_res5), black_box(&corners_only)))
    })
    .bench_function("res_5_dense", |b| {
      b.iter(|| cell_to_boundary(black_box(cell_res5), black_box(&dense)))
    })
    .bench_function("res_15", |b| {
      b.iter(|| cell_to_boundary(black_box(cell_res15), black_box(&corners_only)))
    });
}

fn bench_cell_contains_point(c: &mut Criterion) {
  let ll = get_fixed_lon_lat();
  let cell = get_fixed_a5_index_res15();
  c.bench_function("cell_contains_point", |b| {
    b.iter(|| cell_contains_point(black_box(cell), black_box(&ll)))
  });
}

fn bench_is_valid_cell(c: &mut Criterion) {
  let valid_cell = get_fixed_a5_index_res15();
  let no_marker = A5Index(0x1800000000000000); // Top field only
  let bad_top = A5Index(u64::MAX);

  c.benchmark_group("is_valid_cell")
    .bench_function("valid", |b| b.iter(|| is_valid_cell(black_box(valid_cell))))
    .bench_function("no_marker", |b| b.iter(|| is_valid_cell(black_box(no_marker))))
    .bench_function("bad_top", |b| b.iter(|| is_valid_cell(black_box(bad_top))));
}

fn bench_serialization(c: &mut Criterion) {
  let cell = get_fixed_a5_index_res15();
  let decoded = deserialize(cell).unwrap();

  c.benchmark_group("serialization")
    .bench_function("get_resolution", |b| b.iter(|| get_resolution(black_box(cell))))
    .bench_function("deserialize", |b| b.iter(|| deserialize(black_box(cell))))
    .bench_function("serialize", |b| b.iter(|| serialize(black_box(&decoded))));
}

fn bench_cell_area(c: &mut Criterion) {
  let cell = get_fixed_a5_index_res5();
  c.bench_function("cell_area_km2", |b| b.iter(|| cell_area_km2(black_box(cell))));
}

// Register benchmark groups
criterion_group!(
  indexing_benches,
  bench_lon_lat_to_cell,
  bench_cell_to_lon_lat,
  bench_cell_to_boundary,
  bench_cell_contains_point,
  bench_is_valid_cell,
  bench_serialization,
  bench_cell_area
);
criterion_main!(indexing_benches);
