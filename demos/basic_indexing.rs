// demos/basic_indexing.rs

use xs_a5::{
  a5_index_to_string, cell_area_km2, cell_to_boundary, cell_to_children, cell_to_lon_lat, cell_to_parent,
  get_cell_area_avg_km2, get_resolution, is_valid_cell, lon_lat_to_cell, A5Error, A5Index, BoundaryOptions, LonLat,
};

fn main() -> Result<(), A5Error> {
  println!("--- Basic A5 Indexing Example ---");

  // 1. A point in degrees (San Francisco City Hall)
  let point = LonLat::new(-122.419277, 37.779265);
  println!("Original Point: Lon {:.6} deg, Lat {:.6} deg", point.lon, point.lat);

  // 2. Find the A5 cell containing this point at resolution 12
  let res = 12;
  let cell: A5Index = lon_lat_to_cell(&point, res)?;
  println!("A5 Cell at res {}: {}", res, a5_index_to_string(cell));

  // 3. Validate the cell
  if !is_valid_cell(cell) {
    println!("Cell {} is NOT valid.", a5_index_to_string(cell));
    return Ok(());
  }
  println!("Cell Resolution: {}", get_resolution(cell)?);

  // 4. Center and boundary
  let center = cell_to_lon_lat(cell)?;
  println!("Cell Center: Lon {:.6} deg, Lat {:.6} deg", center.lon, center.lat);

  let options = BoundaryOptions {
    closed_ring: false,
    segments: Some(1),
  };
  let boundary = cell_to_boundary(cell, &options)?;
  println!("Cell Boundary ({} vertices):", boundary.len());
  for (i, vertex) in boundary.iter().enumerate() {
    println!("  Vertex {}: Lon {:.6} deg, Lat {:.6} deg", i, vertex.lon, vertex.lat);
  }

  // 5. Area against the resolution average
  println!(
    "Cell Area: {:.4} km2 (average {:.4} km2)",
    cell_area_km2(cell)?,
    get_cell_area_avg_km2(res)?
  );

  println!("\n--- Hierarchy Example ---");
  let parent_res = 8;
  let parent = cell_to_parent(cell, Some(parent_res))?;
  println!("Parent at res {}: {}", parent_res, a5_index_to_string(parent));

  let children = cell_to_children(cell, None)?;
  println!("Children at res {}:", res + 1);
  for child in children {
    println!("  {}", a5_index_to_string(child));
  }

  Ok(())
}
