use super::*;
use crate::geom::{PolygonRelation, Rotation, SegmentAxis};
use nalgebra::vector;

fn square_edges(ccw: bool) -> Vec<Edge> {
    let mut shape = Shape::rect(Material::Conductor, "sq", 0.0, 0.0, 2.0, 2.0);
    if !ccw {
        shape.points.reverse();
    }
    let poly = Polygon::new(PolygonId(0), shape);
    build_edges(poly.id, &poly.points, poly.rotation, 0)
}

#[test]
fn ccw_square_normals_point_outwards() {
    let edges = square_edges(true);
    // edge 0 closes the cycle: (0,2) -> (0,0), the left side
    let left = &edges[0];
    assert_eq!(left.axis, SegmentAxis::V);
    assert_eq!(left.direction, Direction::YMin);
    assert_eq!(left.normal, Normal::Min);
    assert_eq!(left.coord(), Some(0.0));
    let bottom = &edges[1];
    assert_eq!(bottom.direction, Direction::XMax);
    assert_eq!(bottom.normal, Normal::Min);
    assert_eq!(edges[2].normal, Normal::Max);
    assert_eq!(edges[3].normal, Normal::Max);
    assert!(edges.iter().all(|e| e.to_mesh && !e.to_reverse));
}

#[test]
fn cw_square_has_same_outward_normals() {
    let ccw = square_edges(true);
    let cw = square_edges(false);
    for e in &cw {
        let twin = ccw
            .iter()
            .find(|o| o.axis == e.axis && o.coord() == e.coord())
            .unwrap();
        assert_eq!(e.normal, twin.normal, "edge at {:?}", e.coord());
    }
}

#[test]
fn normal_table_is_none_for_degenerate_cases() {
    assert_eq!(normal_for(Rotation::Colinear, Direction::XMax), Normal::None);
    assert_eq!(normal_for(Rotation::Ccw, Direction::None), Normal::None);
    assert_eq!(Normal::Min.reversed(), Normal::Max);
    assert_eq!(Normal::None.reversed(), Normal::None);
}

#[test]
fn effective_normal_honors_reverse_flag() {
    let mut e = square_edges(true).remove(1);
    assert_eq!(e.effective_normal(), Normal::Min);
    e.to_reverse = true;
    assert_eq!(e.effective_normal(), Normal::Max);
    assert_eq!(e.view_axis(), Some(crate::space::ViewAxis::H));
}

#[test]
fn diagonal_edge_has_no_normal() {
    let shape = Shape::new(
        Material::Dielectric,
        "tri",
        vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 3.0]],
    );
    let poly = Polygon::new(PolygonId(3), shape);
    let edges = build_edges(poly.id, &poly.points, poly.rotation, 10);
    assert_eq!(edges[0].id, EdgeId(10));
    assert_eq!(edges[2].axis, SegmentAxis::Diagonal);
    assert_eq!(edges[2].normal, Normal::None);
    assert_eq!(edges[2].view_axis(), None);
    assert_eq!(edges[2].polygon, PolygonId(3));
    assert_eq!(poly.relation_to(&vector![1.0, 1.0]), PolygonRelation::In);
    assert_eq!(poly.relation_to(&vector![3.0, 3.0]), PolygonRelation::Out);
}

#[test]
fn material_deduction_and_priority() {
    assert_eq!(Material::deduce(1.0, 1.0, 5.8e7), Material::Conductor);
    assert_eq!(Material::deduce(4.4, 1.0, 0.0), Material::Dielectric);
    assert_eq!(Material::deduce(1.0, 1.0, 0.0), Material::Air);
    assert!(Material::Conductor.priority() > Material::Dielectric.priority());
    assert!(Material::Dielectric.priority() > Material::Air.priority());
}
