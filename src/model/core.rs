//! Geometry types: input triangles and the indexed mesh built from them

/// A 3D position with x, y, z coordinates
///
/// Positions are compared exactly. Two vertices are the same vertex only when
/// all three coordinates are equal; there is no epsilon tolerance.
///
/// `==` follows IEEE-754: a vertex with a NaN coordinate is not equal to
/// itself, and `-0.0 == 0.0`. Deduplication keys on bit patterns instead, so
/// it merges bit-identical NaN vertices that `==` reports as different.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex3 {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Vertex3 {
    /// Create a new vertex
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Whether all three coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vertex3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

/// A triangle given by three positions
///
/// The order of `v` is the winding order: by the right-hand rule it encodes
/// the outward-facing normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3 {
    /// Corners in winding order
    pub v: [Vertex3; 3],
}

impl Triangle3 {
    /// Create a new triangle from three corners in winding order
    pub fn new(v0: Vertex3, v1: Vertex3, v2: Vertex3) -> Self {
        Self { v: [v0, v1, v2] }
    }
}

/// A triangle defined by three vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// Index of first vertex
    pub v1: usize,
    /// Index of second vertex
    pub v2: usize,
    /// Index of third vertex
    pub v3: usize,
}

impl Triangle {
    /// Create a new triangle
    pub fn new(v1: usize, v2: usize, v3: usize) -> Self {
        Self { v1, v2, v3 }
    }

    /// Indices in winding order
    pub fn indices(&self) -> [usize; 3] {
        [self.v1, self.v2, self.v3]
    }
}

/// Indexed triangle mesh
///
/// `vertices` is the vertex table; each triangle refers to it by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// List of vertices
    pub vertices: Vec<Vertex3>,
    /// List of triangles
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new mesh with pre-allocated capacity
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }

    /// Look a triangle's indices back up in the vertex table
    ///
    /// Returns `None` if any index is out of range.
    pub fn resolve(&self, triangle: &Triangle) -> Option<Triangle3> {
        Some(Triangle3::new(
            *self.vertices.get(triangle.v1)?,
            *self.vertices.get(triangle.v2)?,
            *self.vertices.get(triangle.v3)?,
        ))
    }

    /// Whether the mesh has no triangles
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}
