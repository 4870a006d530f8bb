//! Ordered sets of drawn regions.

use super::geometry::Geometry;

/// An ordered collection of region shapes.
///
/// Insertion order is draw order. Overlapping and duplicate shapes are kept
/// as-is and each contributes its full area.
#[derive(Debug, Clone, Default)]
pub struct RegionCollection {
    items: Vec<Geometry>,
}

impl RegionCollection {
    pub fn add(&mut self, geometry: Geometry) {
        self.items.push(geometry);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of the areas of all shapes, zero when empty.
    pub fn total_area(&self) -> f64 {
        self.items.iter().map(Geometry::area).sum()
    }

    pub fn items(&self) -> &[Geometry] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::*;

    fn unit_square() -> Geometry {
        Geometry::polygon(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_empty_collection_has_zero_area() {
        let collection = RegionCollection::default();
        assert!(collection.is_empty());
        assert_eq!(collection.total_area(), 0.0);
    }

    #[test]
    fn test_total_area_is_sum_of_items() {
        let mut collection = RegionCollection::default();
        let shapes = [
            unit_square(),
            Geometry::circle(Vec2::new(3.0, 3.0), 2.0),
            Geometry::polygon(vec![Vec2::ZERO, Vec2::new(4.0, 0.0), Vec2::new(0.0, 3.0)]),
        ];
        let expected: f64 = shapes.iter().map(Geometry::area).sum();

        for shape in shapes {
            collection.add(shape);
        }

        assert_eq!(collection.len(), 3);
        assert!((collection.total_area() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_duplicates_count_twice() {
        let mut collection = RegionCollection::default();
        collection.add(unit_square());
        collection.add(unit_square());
        assert!((collection.total_area() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_clear_resets_area() {
        let mut collection = RegionCollection::default();
        collection.add(unit_square());
        collection.add(Geometry::circle(Vec2::ZERO, 5.0));

        collection.clear();
        assert!(collection.is_empty());
        assert_eq!(collection.total_area(), 0.0);

        // Clearing again is fine
        collection.clear();
        assert_eq!(collection.total_area(), 0.0);
    }

    #[test]
    fn test_items_preserve_draw_order() {
        let mut collection = RegionCollection::default();
        collection.add(Geometry::circle(Vec2::ZERO, 1.0));
        collection.add(unit_square());

        let items = collection.items();
        assert_eq!(items.len(), 2);
        assert!(matches!(items[0], Geometry::Circle { .. }));
        assert!(matches!(items[1], Geometry::Polygon { .. }));
    }
}
