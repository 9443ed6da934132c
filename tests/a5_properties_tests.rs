// tests/a5_properties_tests.rs

extern crate quickcheck;
#[macro_use]
extern crate quickcheck_macros;

use xs_a5::*;

/// Maps quickcheck's float range (about +/-100) onto the globe.
fn to_lon_lat(x: f64, y: f64) -> LonLat {
  LonLat::new((x * 1.8).clamp(-180.0, 180.0), (y * 0.9).clamp(-90.0, 90.0))
}

fn to_resolution(r: u8) -> i32 {
  1 + i32::from(r) % MAX_RESOLUTION
}

#[quickcheck]
fn prop_serialize_round_trip(origin_id: u8, segment: u8, s: u64, r: u8) -> bool {
  let resolution = i32::from(r) % (MAX_RESOLUTION + 1);
  let bits = if resolution < 3 { 0 } else { 2 * (resolution - 2) as u32 };
  let cell = A5Cell {
    origin_id: if resolution == 0 { 0 } else { origin_id % 12 },
    segment: if resolution < 2 { 0 } else { segment % 5 },
    s: if bits == 0 { 0 } else { s & ((1u64 << bits) - 1) },
    resolution,
  };
  match serialize(&cell) {
    Ok(index) => is_valid_cell(index) && get_resolution(index) == Ok(resolution) && deserialize(index) == Ok(cell),
    Err(_) => false,
  }
}

#[quickcheck]
fn prop_cell_contains_its_point(x: f64, y: f64, r: u8) -> bool {
  let point = to_lon_lat(x, y);
  let resolution = to_resolution(r);
  match lon_lat_to_cell(&point, resolution) {
    Ok(index) => {
      is_valid_cell(index)
        && get_resolution(index) == Ok(resolution)
        && cell_contains_point(index, &point).map_or(false, |score| score >= 0.0)
    }
    Err(_) => false,
  }
}

#[quickcheck]
fn prop_center_maps_back(x: f64, y: f64, r: u8) -> bool {
  let resolution = to_resolution(r);
  let Ok(index) = lon_lat_to_cell(&to_lon_lat(x, y), resolution) else {
    return false;
  };
  match cell_to_lon_lat(index) {
    Ok(center) => lon_lat_to_cell(&center, resolution) == Ok(index),
    Err(_) => false,
  }
}

#[quickcheck]
fn prop_children_return_to_parent(x: f64, y: f64, r: u8) -> bool {
  let resolution = 1 + i32::from(r) % (MAX_RESOLUTION - 1);
  let Ok(index) = lon_lat_to_cell(&to_lon_lat(x, y), resolution) else {
    return false;
  };
  let Ok(children) = cell_to_children(index, None) else {
    return false;
  };
  let size_matches = cell_to_children_size(index, None) == Ok(children.len() as u64);
  size_matches && children.iter().all(|&child| cell_to_parent(child, None) == Ok(index))
}

#[quickcheck]
fn prop_parent_lists_child(x: f64, y: f64, r: u8) -> bool {
  let resolution = to_resolution(r);
  let Ok(index) = lon_lat_to_cell(&to_lon_lat(x, y), resolution) else {
    return false;
  };
  match cell_to_parent(index, None) {
    Ok(parent) => cell_to_children(parent, Some(resolution)).map_or(false, |c| c.contains(&index)),
    Err(_) => false,
  }
}

#[quickcheck]
fn prop_string_round_trip(x: f64, y: f64, r: u8) -> bool {
  let Ok(index) = lon_lat_to_cell(&to_lon_lat(x, y), to_resolution(r)) else {
    return false;
  };
  let s = a5_index_to_string(index);
  !s.is_empty() && string_to_a5_index(&s) == Ok(index) && string_to_a5_index(&s.to_uppercase()) == Ok(index)
}

#[quickcheck]
fn prop_cell_area_is_near_average(x: f64, y: f64, r: u8) -> bool {
  // Solid angles of the finest cells are below what f64 triple products resolve.
  let resolution = 1 + i32::from(r) % 18;
  let Ok(index) = lon_lat_to_cell(&to_lon_lat(x, y), resolution) else {
    return false;
  };
  match (cell_area_rads2(index), get_cell_area_avg_rads2(resolution)) {
    (Ok(area), Ok(avg)) => (area / avg - 1.0).abs() < 0.25,
    _ => false,
  }
}
