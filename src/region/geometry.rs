//! Shape values drawn over the reference image and their pixel areas.

use std::f64::consts::PI;

use bevy::prelude::*;

/// The kinds of shape a region can be drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum ShapeKind {
    #[default]
    Circle,
    Polygon,
}

impl ShapeKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Polygon => "Polygon",
        }
    }

    pub fn all() -> &'static [ShapeKind] {
        &[ShapeKind::Circle, ShapeKind::Polygon]
    }
}

/// A completed region shape in image pixel coordinates.
///
/// Geometries are never edited in place; redrawing a region means discarding
/// the old value and adding a new one.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Circle { center: Vec2, radius: f32 },
    Polygon { vertices: Vec<Vec2> },
}

impl Geometry {
    /// Create a circle. Negative or non-finite radii collapse to zero.
    pub fn circle(center: Vec2, radius: f32) -> Self {
        let radius = if radius.is_finite() { radius.max(0.0) } else { 0.0 };
        Geometry::Circle { center, radius }
    }

    pub fn polygon(vertices: impl Into<Vec<Vec2>>) -> Self {
        Geometry::Polygon {
            vertices: vertices.into(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Circle { .. } => ShapeKind::Circle,
            Geometry::Polygon { .. } => ShapeKind::Polygon,
        }
    }

    /// Area in square pixels.
    ///
    /// Degenerate shapes (zero radius, fewer than three vertices) have zero area.
    pub fn area(&self) -> f64 {
        match self {
            Geometry::Circle { radius, .. } => {
                let r = f64::from(*radius);
                PI * r * r
            }
            Geometry::Polygon { vertices } => shoelace_area(vertices),
        }
    }
}

/// Absolute shoelace area of a closed vertex ring.
///
/// Winding direction does not matter. Self-intersecting rings return the raw
/// shoelace value rather than the area of the covered region.
pub fn shoelace_area(vertices: &[Vec2]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        let a = vertices[i].as_dvec2();
        let b = vertices[(i + 1) % n].as_dvec2();
        sum += a.x * b.y - b.x * a.y;
    }
    (sum * 0.5).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f32) -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(size, 0.0),
            Vec2::new(size, size),
            Vec2::new(0.0, size),
        ]
    }

    #[test]
    fn test_circle_area_radius_ten() {
        let circle = Geometry::circle(Vec2::ZERO, 10.0);
        assert!((circle.area() - 314.15927).abs() < 1e-4);
    }

    #[test]
    fn test_circle_area_matches_formula() {
        for r in [0.0_f32, 0.5, 1.0, 3.25, 42.0, 1000.0] {
            let expected = PI * f64::from(r) * f64::from(r);
            let area = Geometry::circle(Vec2::new(5.0, 5.0), r).area();
            assert!((area - expected).abs() < 1e-6 * expected.max(1.0), "r = {}", r);
        }
    }

    #[test]
    fn test_circle_negative_radius_is_zero() {
        let circle = Geometry::circle(Vec2::ZERO, -4.0);
        assert_eq!(circle.area(), 0.0);
        assert_eq!(Geometry::circle(Vec2::ZERO, f32::NAN).area(), 0.0);
    }

    #[test]
    fn test_square_area() {
        assert!((Geometry::polygon(square(10.0)).area() - 100.0).abs() < 1e-9);
        assert!((Geometry::polygon(square(5.0)).area() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_polygon_area_independent_of_winding() {
        let mut reversed = square(10.0);
        reversed.reverse();
        assert!((shoelace_area(&reversed) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_polygon_area_invariant_under_rotation() {
        let vertices = vec![
            Vec2::new(1.0, 1.0),
            Vec2::new(7.5, 2.0),
            Vec2::new(9.0, 6.0),
            Vec2::new(4.0, 9.5),
            Vec2::new(0.5, 5.0),
        ];
        let base = shoelace_area(&vertices);
        assert!(base > 0.0);

        for shift in 1..vertices.len() {
            let mut rotated = vertices.clone();
            rotated.rotate_left(shift);
            assert!((shoelace_area(&rotated) - base).abs() < 1e-9);

            rotated.reverse();
            assert!((shoelace_area(&rotated) - base).abs() < 1e-9);
        }
    }

    #[test]
    fn test_degenerate_polygons_have_zero_area() {
        assert_eq!(shoelace_area(&[]), 0.0);
        assert_eq!(shoelace_area(&[Vec2::ONE]), 0.0);
        assert_eq!(shoelace_area(&[Vec2::ZERO, Vec2::ONE]), 0.0);
        // Collinear points enclose nothing
        let line = [Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)];
        assert_eq!(shoelace_area(&line), 0.0);
    }

    #[test]
    fn test_self_intersecting_bowtie_uses_shoelace_value() {
        // The two lobes wind in opposite directions and cancel out
        let bowtie = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
        ];
        assert_eq!(shoelace_area(&bowtie), 0.0);
    }

    #[test]
    fn test_kind() {
        assert_eq!(Geometry::circle(Vec2::ZERO, 1.0).kind(), ShapeKind::Circle);
        assert_eq!(Geometry::polygon(square(1.0)).kind(), ShapeKind::Polygon);
    }

    #[test]
    fn test_shape_kind_default_is_circle() {
        assert_eq!(ShapeKind::default(), ShapeKind::Circle);
        assert_eq!(ShapeKind::all().len(), 2);
    }
}
