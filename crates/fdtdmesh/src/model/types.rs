//! Identifiers and the polygon record owned by a board.

use crate::geom::{relation_to_polygon, rotation, Bounding2, Point, PolygonRelation, Rotation};

use super::material::Material;

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolygonId(pub usize);

/// Polygon as handed over by the geometry import.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub material: Material,
    pub name: String,
    pub points: Vec<Point>,
}

impl Shape {
    pub fn new(material: Material, name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            material,
            name: name.into(),
            points,
        }
    }

    /// Axis-aligned rectangle, counter-clockwise from `(x0, y0)`.
    pub fn rect(
        material: Material,
        name: impl Into<String>,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
    ) -> Self {
        Self::new(
            material,
            name,
            vec![
                Point::new(x0, y0),
                Point::new(x1, y0),
                Point::new(x1, y1),
                Point::new(x0, y1),
            ],
        )
    }
}

#[derive(Clone, Debug)]
pub struct Polygon {
    pub id: PolygonId,
    pub material: Material,
    pub name: String,
    pub points: Vec<Point>,
    pub rotation: Rotation,
    pub bounding: Bounding2,
    pub edges: Vec<EdgeId>,
}

impl Polygon {
    pub fn new(id: PolygonId, shape: Shape) -> Self {
        let rotation = rotation(&shape.points);
        let bounding = Bounding2::from_points(&shape.points);
        Self {
            id,
            material: shape.material,
            name: shape.name,
            points: shape.points,
            rotation,
            bounding,
            edges: Vec::new(),
        }
    }

    #[inline]
    pub fn relation_to(&self, p: &Point) -> PolygonRelation {
        relation_to_polygon(&self.points, &self.bounding, p)
    }
}
