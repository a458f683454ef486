use super::*;

#[test]
fn edge_is_canonicalized_regardless_of_argument_order() {
  assert_eq!(make_edge(1, 0), make_edge(0, 1));
  assert_eq!(make_edge(2, 0), Edge { l0: 0, l1: 2 });
}

#[test]
fn edge_map_round_trip_and_canonical_iteration_order() {
  // 11 edges inserted in an arbitrary order, retrieved by either endpoint
  // order, and iterated back out in ascending (l0, l1) order.
  let mut map: EdgeMap<f64> = EdgeMap::new();
  let inserts = [
    ((30, 94), 0.0),
    ((11, 94), 0.0),
    ((30, 93), 0.0),
    ((5, 93), 0.0),
    ((30, 60), 0.0),
    ((5, 60), 0.0),
    ((29, 60), 0.118576),
    ((5, 45), 0.0),
    ((30, 33), 0.0),
    ((11, 33), 0.0),
    ((33, 77), 0.218488),
  ];
  for &((a, b), v) in &inserts {
    map.set(make_edge(a, b), v);
  }

  assert_eq!(map.size(), 11);

  for &((a, b), v) in &inserts {
    assert_eq!(map.get(make_edge(a, b)), Some(&v));
    assert_eq!(map.get(make_edge(b, a)), Some(&v));
  }

  let expect_order = [
    (5, 45),
    (5, 60),
    (5, 93),
    (11, 33),
    (11, 94),
    (29, 60),
    (30, 33),
    (30, 60),
    (30, 93),
    (30, 94),
    (33, 77),
  ];
  let got: Vec<(usize, usize)> = map.iter().map(|(e, _)| (e.l0, e.l1)).collect();
  assert_eq!(got, expect_order);
}

#[test]
fn edge_map_reports_absent_keys() {
  let mut map: EdgeMap<i32> = EdgeMap::new();
  map.set(make_edge(1, 2), 7);
  assert!(!map.contains(make_edge(0, 3)));
  assert!(!map.contains(make_edge(2, 5)));
  assert!(map.contains(make_edge(2, 1)));
}

/// Builds an 8-octant, 40-tet, 64-vertex discretization of `[-1, 1]^3`,
/// a coarse simplicial approximation of a sphere's interior.
pub(crate) fn approximate_sphere_mesh() -> TetMesh3 {
  let template: [DVec3; 8] = [
    DVec3::new(0.0, 0.0, 0.0),
    DVec3::new(0.0, 0.0, 1.0),
    DVec3::new(0.0, 1.0, 0.0),
    DVec3::new(0.0, 1.0, 1.0),
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(1.0, 0.0, 1.0),
    DVec3::new(1.0, 1.0, 0.0),
    DVec3::new(1.0, 1.0, 1.0),
  ];
  let signs: [[f64; 3]; 8] = [
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0],
  ];

  let mut verts = vec![DVec3::ZERO; 64];
  for j in 0..8 {
    verts[j] = template[j];
  }
  for i in 1..8 {
    for j in 0..8 {
      let s = signs[i];
      verts[8 * i + j] = DVec3::new(template[j].x * s[0], template[j].y * s[1], template[j].z * s[2]);
    }
  }

  let template_cells: [[usize; 4]; 5] = [[0, 1, 3, 5], [0, 2, 3, 6], [0, 4, 5, 6], [0, 3, 5, 6], [3, 5, 6, 7]];
  let mut cells = Vec::with_capacity(40);
  for i in 0..8 {
    for tc in &template_cells {
      cells.push([8 * i + tc[0], 8 * i + tc[1], 8 * i + tc[2], 8 * i + tc[3]]);
    }
  }

  TetMesh3::new(verts, cells)
}

#[test]
fn approximate_sphere_mesh_has_expected_cell_count() {
  let mesh = approximate_sphere_mesh();
  assert_eq!(mesh.num_cells(), 40);
  assert_eq!(mesh.num_verts(), 64);
}

#[test]
fn contains_locates_every_vertex_at_a_trivial_barycentric_corner() {
  let mesh = approximate_sphere_mesh();
  for l in 0..mesh.num_verts() {
    let x = mesh.vert(l);
    let (c, b) = mesh.contains(x).expect("vertex must lie in some cell");
    let cell = mesh.cell(c);
    let k = cell.iter().position(|&v| v == l).expect("vertex must be a corner of its own locating cell");
    assert!(b[k] > 1.0 - 1e-6, "barycentric coord at own vertex should be ~1, got {b:?}");
  }
}

#[test]
fn incident_faces_cover_every_tet_containing_the_vertex() {
  let mesh = approximate_sphere_mesh();
  let faces = mesh.incident_faces(0);
  // vertex 0 is a corner of every octant's template cells 0, 1, 2, 3 (not
  // cell 4, which omits vertex 0), so it's incident to 4 cells per octant.
  assert_eq!(faces.len(), mesh.vert_to_cells[0].len());
  for (l0, l1, l2) in faces {
    assert_ne!(l0, 0);
    assert_ne!(l1, 0);
    assert_ne!(l2, 0);
  }
}
