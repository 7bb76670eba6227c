use super::*;
use nalgebra::vector;
use proptest::prelude::*;

fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
    Segment::new(vector![x0, y0], vector![x1, y1])
}

#[test]
fn axis_classification() {
    assert_eq!(axis_of(&vector![3.0, 0.0]), SegmentAxis::H);
    assert_eq!(axis_of(&vector![0.0, -2.0]), SegmentAxis::V);
    assert_eq!(axis_of(&vector![0.0, 0.0]), SegmentAxis::Point);
    assert_eq!(axis_of(&vector![1e-10, 0.0]), SegmentAxis::Point);
    assert_eq!(axis_of(&vector![1.0, 1.0]), SegmentAxis::Diagonal);
}

#[test]
fn relation_classes() {
    let a = seg(0.0, 0.0, 4.0, 0.0);
    assert_eq!(a.relation_to(&seg(2.0, -1.0, 2.0, 1.0)), SegmentRelation::Crossing);
    // touching at an endpoint counts as crossing
    assert_eq!(a.relation_to(&seg(4.0, 0.0, 4.0, 3.0)), SegmentRelation::Crossing);
    assert_eq!(a.relation_to(&seg(3.0, 0.0, 6.0, 0.0)), SegmentRelation::Overlapping);
    assert_eq!(a.relation_to(&seg(5.0, 0.0, 6.0, 0.0)), SegmentRelation::Colinear);
    assert_eq!(a.relation_to(&seg(0.0, 1.0, 4.0, 1.0)), SegmentRelation::Apart);
    assert_eq!(a.relation_to(&seg(5.0, -1.0, 5.0, 1.0)), SegmentRelation::Apart);
}

#[test]
fn relation_to_point_on_and_out() {
    let a = seg(0.0, 0.0, 2.0, 2.0);
    assert_eq!(a.relation_to_point(&vector![1.0, 1.0]), PointRelation::On);
    assert_eq!(a.relation_to_point(&vector![3.0, 3.0]), PointRelation::Out);
    assert_eq!(a.relation_to_point(&vector![1.0, 0.0]), PointRelation::Out);
}

#[test]
fn intersection_h_v_and_diagonal() {
    let h = seg(0.0, 1.0, 4.0, 1.0);
    let v = seg(2.0, 0.0, 2.0, 3.0);
    assert_eq!(h.intersection(&v), Some(vector![2.0, 1.0]));
    assert_eq!(v.intersection(&h), Some(vector![2.0, 1.0]));
    assert_eq!(h.intersection(&seg(5.0, 0.0, 5.0, 3.0)), None);

    let d1 = seg(0.0, 0.0, 4.0, 4.0);
    let d2 = seg(0.0, 4.0, 4.0, 0.0);
    let p = d1.intersection(&d2).unwrap();
    assert!(points_eq(&p, &vector![2.0, 2.0]));
    let p = d1.intersection(&h).unwrap();
    assert!(points_eq(&p, &vector![1.0, 1.0]));
    // parameter outside [0, 1]
    assert_eq!(d1.intersection(&seg(5.0, 0.0, 6.0, -1.0)), None);
    // parallel
    assert_eq!(d1.intersection(&seg(1.0, 0.0, 5.0, 4.0)), None);
}

#[test]
fn overlap_and_merge_of_colinear_segments() {
    let a = seg(1.0, 0.0, 5.0, 0.0);
    let b = seg(7.0, 0.0, 3.0, 0.0);
    let o = a.overlap(&b).unwrap();
    assert!(points_eq(&o.p0, &vector![3.0, 0.0]));
    assert!(points_eq(&o.p1, &vector![5.0, 0.0]));
    let m = a.merge(&b).unwrap();
    assert!(points_eq(&m.p0, &vector![1.0, 0.0]));
    assert!(points_eq(&m.p1, &vector![7.0, 0.0]));

    // touching yields a point range
    let t = a.overlap(&seg(5.0, 0.0, 6.0, 0.0)).unwrap();
    assert_eq!(t.axis(), SegmentAxis::Point);
    // disjoint, parallel-offset and perpendicular cases
    assert!(a.overlap(&seg(6.0, 0.0, 8.0, 0.0)).is_none());
    assert!(a.merge(&seg(6.0, 0.0, 8.0, 0.0)).is_none());
    assert!(a.overlap(&seg(1.0, 1.0, 5.0, 1.0)).is_none());
    assert!(a.overlap(&seg(2.0, -1.0, 2.0, 1.0)).is_none());

    // diagonals with negative slope keep their orientation
    let d = seg(0.0, 4.0, 4.0, 0.0);
    let o = d.overlap(&seg(1.0, 3.0, 6.0, -2.0)).unwrap();
    assert!(points_eq(&o.p0, &vector![1.0, 3.0]));
    assert!(points_eq(&o.p1, &vector![4.0, 0.0]));
}

#[test]
fn polygon_rotation_and_bounding() {
    let ccw = vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![2.0, 1.0], vector![0.0, 1.0]];
    assert_eq!(rotation(&ccw), Rotation::Ccw);
    assert!((signed_area(&ccw) - 2.0).abs() < 1e-12);
    let mut cw = ccw.clone();
    cw.reverse();
    assert_eq!(rotation(&cw), Rotation::Cw);
    let flat = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
    assert_eq!(rotation(&flat), Rotation::Colinear);
    let bb = Bounding2::from_points(&ccw);
    assert_eq!((bb.xmin, bb.xmax, bb.ymin, bb.ymax), (0.0, 2.0, 0.0, 1.0));
    assert!(bb.does_overlap(&Bounding2::from_points(&[vector![2.0, 1.0], vector![3.0, 3.0]])));
    assert!(!bb.does_overlap(&Bounding2::from_points(&[vector![2.5, 0.0], vector![3.0, 3.0]])));
}

#[test]
fn cycle_segments_wrap_to_last_point() {
    let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0]];
    let segs: Vec<_> = cycle_segments(&pts).collect();
    assert_eq!(segs.len(), 3);
    assert_eq!(segs[0].p0, vector![1.0, 1.0]);
    assert_eq!(segs[0].p1, vector![0.0, 0.0]);
    assert_eq!(segs[2].p0, vector![1.0, 0.0]);
}

#[test]
fn point_in_polygon_handles_vertices_and_concavity() {
    // U shape opening upwards
    let u = vec![
        vector![0.0, 0.0],
        vector![6.0, 0.0],
        vector![6.0, 4.0],
        vector![4.0, 4.0],
        vector![4.0, 2.0],
        vector![2.0, 2.0],
        vector![2.0, 4.0],
        vector![0.0, 4.0],
    ];
    let bb = Bounding2::from_points(&u);
    let rel = |x: f64, y: f64| relation_to_polygon(&u, &bb, &vector![x, y]);
    assert_eq!(rel(1.0, 1.0), PolygonRelation::In);
    assert_eq!(rel(3.0, 3.0), PolygonRelation::Out);
    assert_eq!(rel(5.0, 3.0), PolygonRelation::In);
    assert_eq!(rel(3.0, 2.0), PolygonRelation::On);
    assert_eq!(rel(6.0, 4.0), PolygonRelation::On);
    assert_eq!(rel(7.0, 1.0), PolygonRelation::Out);
    // ray through the vertices at y = 2 and y = 4
    assert_eq!(rel(1.0, 2.0), PolygonRelation::In);
    assert_eq!(rel(-1.0, 4.0), PolygonRelation::Out);
}

fn small_point() -> impl Strategy<Value = Point> {
    (-6i32..=6, -6i32..=6).prop_map(|(x, y)| vector![x as f64, y as f64])
}

fn small_segment() -> impl Strategy<Value = Segment> {
    (small_point(), small_point()).prop_map(|(a, b)| Segment::new(a, b))
}

proptest! {
    #[test]
    fn relation_is_symmetric(a in small_segment(), b in small_segment()) {
        prop_assert_eq!(a.relation_to(&b), b.relation_to(&a));
    }

    #[test]
    fn intersection_is_symmetric(a in small_segment(), b in small_segment()) {
        match (a.intersection(&b), b.intersection(&a)) {
            (Some(p), Some(q)) => prop_assert!((p - q).norm() < 1e-9),
            (None, None) => {}
            (p, q) => prop_assert!(false, "asymmetric: {:?} vs {:?}", p, q),
        }
    }

    #[test]
    fn rotation_is_cyclic_and_flips_on_reverse(
        pts in prop::collection::vec(small_point(), 3..8),
        shift in 0usize..8,
    ) {
        let r = rotation(&pts);
        let mut rotated = pts.clone();
        rotated.rotate_left(shift % pts.len());
        prop_assert_eq!(rotation(&rotated), r);
        let mut rev = pts.clone();
        rev.reverse();
        prop_assert_eq!(rotation(&rev), r.reversed());
    }
}
