//! Quadratic Bezier flattening and even-odd polygon containment
//!
//! The mouth patch is a closed chain of quadratic arcs. Arcs are flattened to
//! a polyline once per rasterization pass, and sample points are tested against
//! the resulting polygon with an even-odd ray cast.

/// One quadratic Bezier segment continuing from the chain's current point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticArc {
    /// Off-curve control point
    pub control: [f64; 2],
    /// On-curve end point
    pub end: [f64; 2],
}

/// Closed chain of quadratic arcs
///
/// The final arc is expected to end at `start`; flattening does not insert a
/// closing segment of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedCurve {
    /// First on-curve point of the chain
    pub start: [f64; 2],
    /// Arcs traversed in order from `start`
    pub arcs: Vec<QuadraticArc>,
}

/// Evaluate a quadratic Bezier at parameter `t` in [0, 1]
pub fn quadratic_point(start: [f64; 2], control: [f64; 2], end: [f64; 2], t: f64) -> [f64; 2] {
    let u = 1.0 - t;
    let basis_start = u * u;
    let basis_control = 2.0 * u * t;
    let basis_end = t * t;

    let mut point = [0.0; 2];
    for (axis, value) in point.iter_mut().enumerate() {
        let s = start.get(axis).copied().unwrap_or(0.0);
        let c = control.get(axis).copied().unwrap_or(0.0);
        let e = end.get(axis).copied().unwrap_or(0.0);
        *value = basis_end.mul_add(e, basis_start.mul_add(s, basis_control * c));
    }
    point
}

impl ClosedCurve {
    /// Flatten the chain into a polygon vertex list
    ///
    /// Each arc contributes `segments_per_arc` vertices at uniform parameter
    /// steps; the chain start is included once at the front. Degenerate
    /// (zero-length) closing edges are harmless to the even-odd test.
    pub fn flatten(&self, segments_per_arc: usize) -> Vec<[f64; 2]> {
        let steps = segments_per_arc.max(1);
        let mut points = Vec::with_capacity(self.arcs.len() * steps + 1);
        points.push(self.start);

        let mut current = self.start;
        for arc in &self.arcs {
            for step in 1..=steps {
                let t = step as f64 / steps as f64;
                points.push(quadratic_point(current, arc.control, arc.end, t));
            }
            current = arc.end;
        }
        points
    }
}

/// Even-odd containment test of a point against a polygon vertex list
///
/// Edges are taken between consecutive vertices and between the last and first
/// vertex. Polygons with fewer than three vertices contain nothing.
pub fn point_in_polygon(polygon: &[[f64; 2]], point: [f64; 2]) -> bool {
    let vertex_count = polygon.len();
    if vertex_count < 3 {
        return false;
    }

    let [px, py] = point;
    let mut inside = false;
    let mut previous = vertex_count - 1;
    for index in 0..vertex_count {
        let Some(&[xi, yi]) = polygon.get(index) else {
            continue;
        };
        let Some(&[xj, yj]) = polygon.get(previous) else {
            continue;
        };

        if (yi > py) != (yj > py) {
            let crossing_x = (xj - xi).mul_add((py - yi) / (yj - yi), xi);
            if px < crossing_x {
                inside = !inside;
            }
        }
        previous = index;
    }
    inside
}
