// src/indexing/from_a5.rs

use crate::a5_index::deserialize;
use crate::constants::{DISTANCE_TO_EDGE, EPSILON, FIRST_HILBERT_RESOLUTION, MAX_BOUNDARY_SEGMENTS};
use crate::coords::transforms::{from_lon_lat, to_cartesian, to_lon_lat, to_polar, to_spherical};
use crate::hilbert::s_to_anchor;
use crate::lonlat::{_validate_lon_lat, normalize_longitudes};
use crate::math::quat::{_quat_conjugate, _quat_mul, _quat_z_angle};
use crate::math::vec2d::_v2d_rotate;
use crate::origins::{find_nearest_origin, move_point_to_face, segment_to_quintant};
use crate::pentagon::PentagonShape;
use crate::polygon::SphericalPolygonShape;
use crate::projections::dodecahedron::project_dodecahedron;
use crate::projections::warp::normalize_gamma;
use crate::tiling::{get_face_vertices, get_pentagon_vertices, get_quintant_vertices};
use crate::types::{A5Cell, A5Error, A5Index, BoundaryOptions, LonLat, Origin, Spherical, Vec2d, Vec3d};
use log::debug;

/// Face crossings allowed when carrying a vertex to the face it projects onto.
const MAX_FACE_HOPS: usize = 3;

/// Edge subdivisions below which boundaries are no longer densified.
const AUTO_SEGMENTS_RESOLUTION: i32 = 6;

/// Planar shape of `cell` in its origin's face frame.
pub(crate) fn _get_pentagon(cell: &A5Cell) -> Result<PentagonShape, A5Error> {
  let qo = segment_to_quintant(cell.segment, cell.origin()?);
  Ok(match cell.resolution {
    1 => get_face_vertices(),
    2 => get_quintant_vertices(qo.quintant),
    resolution => {
      let hilbert_resolution = resolution - FIRST_HILBERT_RESOLUTION + 1;
      let anchor = s_to_anchor(cell.s, hilbert_resolution, qo.orientation);
      get_pentagon_vertices(hilbert_resolution, qo.quintant, &anchor)
    }
  })
}

/// Whether a face point lies within the face pentagon, edge included.
#[inline]
fn _is_inside_face(p: &Vec2d) -> bool {
  let polar = to_polar(p);
  let beta = normalize_gamma(polar.gamma);
  polar.rho * beta.cos() <= DISTANCE_TO_EDGE * (1.0 + EPSILON)
}

/// Projects a face point of `origin` onto the sphere.
///
/// Points beyond the face edge are first unfolded onto the neighboring face,
/// so cells straddling an edge keep their shape.
pub(crate) fn _project_point(point: &Vec2d, origin: &'static Origin, resolution: i32) -> Spherical {
  let mut p = *point;
  let mut origin = origin;
  for _ in 0..MAX_FACE_HOPS {
    if _is_inside_face(&p) {
      break;
    }
    let polar = to_polar(&p);
    let normal = polar.gamma - normalize_gamma(polar.gamma);
    let across = Vec2d {
      x: 2.0 * DISTANCE_TO_EDGE * normal.cos(),
      y: 2.0 * DISTANCE_TO_EDGE * normal.sin(),
    };
    let neighbor = find_nearest_origin(&project_dodecahedron(&across, &origin.quat, origin.angle, resolution));

    let moved = move_point_to_face(&_v2d_rotate(&p, origin.angle), origin, neighbor);
    let twist = _quat_z_angle(&_quat_mul(&_quat_conjugate(&neighbor.quat), &moved.interface_quat));
    debug!("carrying face point {p:?} from origin {} to origin {}", origin.id, neighbor.id);

    p = _v2d_rotate(&moved.offset, twist - neighbor.angle);
    origin = neighbor;
  }
  project_dodecahedron(&p, &origin.quat, origin.angle, resolution)
}

/// Spherical polygon through the projected corners of `cell`.
pub(crate) fn _cell_polygon(cell: &A5Cell) -> Result<SphericalPolygonShape, A5Error> {
  let origin = cell.origin()?;
  let vertices = _get_pentagon(cell)?
    .vertices()
    .iter()
    .map(|v| to_cartesian(&_project_point(v, origin, cell.resolution)))
    .collect();
  Ok(SphericalPolygonShape::new(vertices))
}

/// Containment score of a unit vector against `cell`; non-negative inside.
pub(crate) fn _cell_contains(cell: &A5Cell, point: &Vec3d) -> Result<f64, A5Error> {
  Ok(_cell_polygon(cell)?.contains_point(point))
}

fn _geometry_cell(index: A5Index) -> Result<A5Cell, A5Error> {
  let cell = deserialize(index)?;
  if cell.resolution == 0 {
    return Err(A5Error::InvalidResolution);
  }
  Ok(cell)
}

/// Center of a cell: the projected mean of its planar corners.
///
/// The world cell has no center and fails with `InvalidResolution`.
pub fn cell_to_lon_lat(index: A5Index) -> Result<LonLat, A5Error> {
  let cell = _geometry_cell(index)?;
  let center = _get_pentagon(&cell)?.center();
  Ok(to_lon_lat(&_project_point(&center, cell.origin()?, cell.resolution)))
}

/// Boundary ring of a cell, counter-clockwise, with longitudes kept continuous.
///
/// Each edge is split into `options.segments` great-circle pieces, or a count
/// that shrinks with resolution when unset. More than `MAX_BOUNDARY_SEGMENTS`
/// pieces per edge fails with `MemoryBounds`.
pub fn cell_to_boundary(index: A5Index, options: &BoundaryOptions) -> Result<Vec<LonLat>, A5Error> {
  let cell = _geometry_cell(index)?;
  if options.segments.is_some_and(|s| s > MAX_BOUNDARY_SEGMENTS) {
    return Err(A5Error::MemoryBounds);
  }
  let segments = options.segments.unwrap_or_else(|| {
    if cell.resolution < AUTO_SEGMENTS_RESOLUTION {
      1 << (AUTO_SEGMENTS_RESOLUTION - cell.resolution)
    } else {
      1
    }
  });

  let ring: Vec<LonLat> = _cell_polygon(&cell)?
    .get_boundary(segments, options.closed_ring)
    .iter()
    .map(|v| to_lon_lat(&to_spherical(v)))
    .collect();
  Ok(normalize_longitudes(&ring))
}

/// Containment score of `point` against a cell.
///
/// Non-negative when the point is inside or on the boundary. The magnitude is
/// the sine of the angle to the nearest edge, measured at its vertices.
pub fn cell_contains_point(index: A5Index, point: &LonLat) -> Result<f64, A5Error> {
  _validate_lon_lat(point)?;
  let cell = _geometry_cell(index)?;
  _cell_contains(&cell, &to_cartesian(&from_lon_lat(point)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::a5_index::{get_res1_cells, serialize};
  use crate::types::WORLD_CELL;

  #[test]
  fn test_world_cell_has_no_geometry() {
    assert_eq!(cell_to_lon_lat(WORLD_CELL), Err(A5Error::InvalidResolution));
    assert_eq!(
      cell_to_boundary(WORLD_CELL, &BoundaryOptions::default()),
      Err(A5Error::InvalidResolution)
    );
  }

  #[test]
  fn test_face_centers() {
    // The center of each face cell is its origin's axis.
    for index in get_res1_cells() {
      let cell = deserialize(index).expect("valid cell");
      let center = cell_to_lon_lat(index).expect("center");
      let expected = to_lon_lat(&cell.origin().expect("origin").axis);
      assert!((center.lat - expected.lat).abs() < 1e-9, "origin {}", cell.origin_id);
      if expected.lat.abs() < 89.0 {
        let dlon = ((center.lon - expected.lon + 540.0) % 360.0) - 180.0;
        assert!(dlon.abs() < 1e-9, "origin {}", cell.origin_id);
      }
    }
  }

  #[test]
  fn test_boundary_sizes() {
    let index = A5Index(0x4f08_0000_0000_0000);
    let ring = cell_to_boundary(
      index,
      &BoundaryOptions {
        closed_ring: true,
        segments: Some(1),
      },
    )
    .expect("boundary");
    assert_eq!(ring.len(), 6);
    assert_eq!(ring[0], ring[5]);

    let open = cell_to_boundary(
      index,
      &BoundaryOptions {
        closed_ring: false,
        segments: Some(3),
      },
    )
    .expect("boundary");
    assert_eq!(open.len(), 15);

    let auto = cell_to_boundary(index, &BoundaryOptions::default()).expect("boundary");
    assert_eq!(auto.len(), 5 * 2 + 1, "resolution 5 splits each edge in two");

    let quintant = serialize(&A5Cell {
      origin_id: 0,
      segment: 1,
      s: 0,
      resolution: 2,
    })
    .expect("valid cell");
    let triangle = cell_to_boundary(
      quintant,
      &BoundaryOptions {
        closed_ring: false,
        segments: Some(1),
      },
    )
    .expect("boundary");
    assert_eq!(triangle.len(), 3, "resolution 2 cells are triangles");
  }

  #[test]
  fn test_boundary_segment_limit() {
    let index = A5Index(0x4f08_0000_0000_0000);
    let options = |segments| BoundaryOptions {
      closed_ring: false,
      segments: Some(segments),
    };
    assert_eq!(cell_to_boundary(index, &options(u32::MAX)), Err(A5Error::MemoryBounds));
    assert_eq!(
      cell_to_boundary(index, &options(MAX_BOUNDARY_SEGMENTS + 1)),
      Err(A5Error::MemoryBounds)
    );
    let ring = cell_to_boundary(index, &options(MAX_BOUNDARY_SEGMENTS)).expect("boundary");
    assert_eq!(ring.len(), 5 * MAX_BOUNDARY_SEGMENTS as usize);
  }

  #[test]
  fn test_center_is_contained() {
    let index = A5Index(0x4f08_0000_0000_0000);
    let center = cell_to_lon_lat(index).expect("center");
    assert!(cell_contains_point(index, &center).expect("score") > 0.0);
    assert!(cell_contains_point(index, &LonLat::new(0.0, 0.0)).expect("score") >= 0.0);
    assert!(cell_contains_point(index, &LonLat::new(40.0, 40.0)).expect("score") < 0.0);
    assert_eq!(
      cell_contains_point(index, &LonLat::new(0.0, 91.0)),
      Err(A5Error::InvalidLonLat)
    );
  }

  #[test]
  fn test_projected_vertices_stay_on_the_sphere() {
    let cell = deserialize(A5Index(0x4f08_0000_0000_0000)).expect("valid cell");
    for v in _cell_polygon(&cell).expect("polygon").vertices() {
      let len = (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
      assert!((len - 1.0).abs() < 1e-12);
    }
  }
}
