//! # Mesh Data Structure
//!
//! Triangle soup representation used for STL output. Unlike an indexed
//! mesh, every triangle carries its own corner positions, which is exactly
//! what an STL facet needs.

use glam::DVec3;

/// A point in model space, in millimeters.
pub type Point3 = DVec3;

/// Computes the unit normal of the triangle `(a, b, c)` by the right-hand
/// rule.
///
/// Degenerate triangles (collinear or coincident corners) yield
/// [`DVec3::ZERO`] instead of an error.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use washer_mesh::mesh::triangle_normal;
///
/// let n = triangle_normal(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(n, DVec3::Z);
///
/// let degenerate = triangle_normal(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
/// assert_eq!(degenerate, DVec3::ZERO);
/// ```
pub fn triangle_normal(a: Point3, b: Point3, c: Point3) -> DVec3 {
    let normal = (b - a).cross(c - a);
    let length = normal.length();
    if length == 0.0 {
        return DVec3::ZERO;
    }
    normal / length
}

/// Point on a circle of `radius` around the Z axis at `angle` radians and
/// height `z`.
#[inline]
pub fn circle_point(radius: f64, angle: f64, z: f64) -> Point3 {
    DVec3::new(radius * angle.cos(), radius * angle.sin(), z)
}

/// A single facet. Vertex order defines the facing direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point3; 3],
}

impl Triangle {
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    /// Unit normal by the right-hand rule, zero if degenerate.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        let [a, b, c] = self.vertices;
        triangle_normal(a, b, c)
    }

    /// Returns this triangle wound so that its normal does not point against
    /// `hint`. Swaps the second and third vertex when it does.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use washer_mesh::mesh::Triangle;
    ///
    /// let down = Triangle::new(DVec3::ZERO, DVec3::Y, DVec3::X);
    /// let up = down.oriented(DVec3::Z);
    /// assert_eq!(up.vertices(), &[DVec3::ZERO, DVec3::X, DVec3::Y]);
    /// assert_eq!(up.normal(), DVec3::Z);
    /// ```
    pub fn oriented(self, hint: DVec3) -> Self {
        if self.normal().dot(hint) >= 0.0 {
            return self;
        }
        let [a, b, c] = self.vertices;
        Self::new(a, c, b)
    }
}

/// An ordered sequence of triangles.
///
/// Order carries no meaning beyond serialization order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Appends `triangle` after orienting it against `hint`.
    pub fn add_oriented(&mut self, triangle: Triangle, hint: DVec3) {
        self.triangles.push(triangle.oriented(hint));
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners; both are zero for an empty mesh.
    pub fn bounding_box(&self) -> (Point3, Point3) {
        let mut corners = self.triangles.iter().flat_map(|t| t.vertices);
        let Some(first) = corners.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        corners.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
    }
}
