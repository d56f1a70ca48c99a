//! Exact vertex deduplication
//!
//! Turns a triangle soup, where every triangle carries its own copy of each
//! corner position, into an indexed [`Mesh`]: a table of unique positions and
//! one index triple per triangle.
//!
//! Table order is the order in which positions are first seen. For a fixed
//! input order the result is identical on every run; hash map iteration order
//! never leaks into the output.
//!
//! Positions are merged only when all three coordinates are exactly equal.
//! Nearly coincident vertices stay distinct.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::debug;

use crate::model::{Mesh, Triangle, Triangle3, Vertex3};

/// Hashable identity of a position
///
/// Built from the IEEE-754 bit patterns of the coordinates, so equal keys mean
/// bit-identical coordinates. Both zeros share a key (`-0.0 == 0.0`), and a
/// NaN coordinate matches only a NaN with the same bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VertexKey([u64; 3]);

impl VertexKey {
    fn new(v: &Vertex3) -> Self {
        Self([coord_bits(v.x), coord_bits(v.y), coord_bits(v.z)])
    }
}

fn coord_bits(c: f64) -> u64 {
    if c == 0.0 { 0 } else { c.to_bits() }
}

/// Incremental position-to-index mapper
///
/// ```
/// use mesh3mf::{Triangle3, Vertex3, VertexDeduplicator};
///
/// let a = Vertex3::new(0.0, 0.0, 0.0);
/// let b = Vertex3::new(1.0, 0.0, 0.0);
/// let c = Vertex3::new(0.0, 1.0, 0.0);
/// let d = Vertex3::new(1.0, 1.0, 0.0);
///
/// let mut dedup = VertexDeduplicator::new();
/// dedup.push_triangle(&Triangle3::new(a, b, c));
/// dedup.push_triangle(&Triangle3::new(c, b, d));
///
/// let mesh = dedup.finish();
/// assert_eq!(mesh.vertices.len(), 4);
/// assert_eq!(mesh.triangles[1].indices(), [2, 1, 3]);
/// ```
#[derive(Debug, Default)]
pub struct VertexDeduplicator {
    index: HashMap<VertexKey, usize>,
    mesh: Mesh,
}

impl VertexDeduplicator {
    /// Create an empty deduplicator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deduplicator sized for `triangles` input triangles
    ///
    /// The vertex table is sized for a closed surface, which has roughly half
    /// as many vertices as triangles.
    pub fn with_capacity(triangles: usize) -> Self {
        let vertices = triangles / 2 + 3;
        Self {
            index: HashMap::with_capacity(vertices),
            mesh: Mesh::with_capacity(vertices, triangles),
        }
    }

    /// Map a position to its table index, appending it if unseen
    pub fn insert(&mut self, vertex: Vertex3) -> usize {
        match self.index.entry(VertexKey::new(&vertex)) {
            Entry::Occupied(slot) => *slot.get(),
            Entry::Vacant(slot) => {
                let idx = self.mesh.vertices.len();
                self.mesh.vertices.push(vertex);
                slot.insert(idx);
                idx
            }
        }
    }

    /// Resolve a triangle's corners and append the index triple
    ///
    /// Degenerate triangles are kept; repeated corners yield repeated indices.
    pub fn push_triangle(&mut self, triangle: &Triangle3) -> Triangle {
        let [v0, v1, v2] = triangle.v;
        let tri = Triangle::new(self.insert(v0), self.insert(v1), self.insert(v2));
        self.mesh.triangles.push(tri);
        tri
    }

    /// Number of unique positions seen so far
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertices.len()
    }

    /// Number of triangles pushed so far
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangles.len()
    }

    /// Consume the deduplicator and return the indexed mesh
    pub fn finish(self) -> Mesh {
        self.mesh
    }
}

impl<'a> Extend<&'a Triangle3> for VertexDeduplicator {
    fn extend<I: IntoIterator<Item = &'a Triangle3>>(&mut self, iter: I) {
        for triangle in iter {
            self.push_triangle(triangle);
        }
    }
}

impl Extend<Triangle3> for VertexDeduplicator {
    fn extend<I: IntoIterator<Item = Triangle3>>(&mut self, iter: I) {
        for triangle in iter {
            self.push_triangle(&triangle);
        }
    }
}

/// Unique vertices per input corner reference; 0 for empty input
fn dedup_ratio(unique: usize, references: usize) -> f64 {
    if references == 0 {
        0.0
    } else {
        unique as f64 / references as f64
    }
}

/// Build an indexed mesh from a triangle soup
///
/// An empty input gives an empty mesh.
pub fn deduplicate(triangles: &[Triangle3]) -> Mesh {
    let mut dedup = VertexDeduplicator::with_capacity(triangles.len());
    dedup.extend(triangles);

    let references = triangles.len() * 3;
    let unique = dedup.vertex_count();
    debug!(
        triangles = triangles.len(),
        references,
        unique_vertices = unique,
        ratio = dedup_ratio(unique, references),
        "Deduplicated vertices"
    );

    dedup.finish()
}
