use super::*;
use crate::conflict::{ConflictKind, ConflictTag};
use crate::mesh::{Origin, Policy};
use crate::model::{Material, Normal, Shape};
use crate::params::GlobalParams;
use crate::space::{Plane, ViewAxis, ViewAxisSpace};

fn board(params: GlobalParams, shapes: Vec<Shape>) -> Board {
    Board::new(Plane::XY, params, shapes, ViewAxisSpace::default())
}

fn run_all(b: &mut Board) {
    b.run_all_steps(&mut NoopObserver);
}

fn enabled(b: &Board, axis: ViewAxis) -> Vec<(f64, Policy, Normal)> {
    let mut v: Vec<_> = b
        .policies()
        .policies(axis)
        .iter()
        .filter(|p| p.is_enabled)
        .map(|p| (p.coord, p.policy, p.normal))
        .collect();
    v.sort_by(|a, b| a.0.total_cmp(&b.0));
    v
}

#[test]
fn step_sequence_is_total_and_linear() {
    assert_eq!(Step::first(), Step::AdjustEdgeToMaterial);
    assert_eq!(Step::AdjustEdgeToMaterial.next(), Some(Step::DetectConflictEip));
    assert_eq!(Step::SolveAllCe.next(), Some(Step::DetectAndSolveTcmlp));
    assert_eq!(Step::Mesh.next(), None);
    for (i, s) in Step::ALL.iter().enumerate() {
        assert_eq!(s.index(), i);
    }
    assert_eq!(
        Step::DetectIntervals.that_and_after(),
        &[Step::DetectIntervals, Step::Mesh]
    );
    assert_eq!(Step::first().that_and_after().len(), Step::ALL.len());
}

#[test]
fn lone_conductor_gets_thirds_on_every_side() {
    let mut b = board(
        GlobalParams::default(),
        vec![Shape::rect(Material::Conductor, "trace", 0.0, 0.0, 10.0, 5.0)],
    );
    let mut rec = RecordingObserver::default();
    b.run_all_steps(&mut rec);

    assert_eq!(rec.steps.len(), Step::ALL.len());
    assert!(rec.steps.iter().zip(Step::ALL).all(|(got, s)| *got == (Plane::XY, s)));
    assert_eq!(rec.done, vec![Plane::XY]);
    assert_eq!(b.last_step(), Some(Step::Mesh));
    assert!(!b.can_run_next_step());
    assert_eq!(b.run_next_step(&mut NoopObserver), None);

    assert!(b.conflicts().all().is_empty());
    assert_eq!(b.non_conflicting_edges().len(), 4);
    assert_eq!(
        enabled(&b, ViewAxis::H),
        vec![(0.0, Policy::Thirds, Normal::Min), (5.0, Policy::Thirds, Normal::Max)]
    );
    assert_eq!(
        enabled(&b, ViewAxis::V),
        vec![(0.0, Policy::Thirds, Normal::Min), (10.0, Policy::Thirds, Normal::Max)]
    );
    for p in b.policies().policies(ViewAxis::H) {
        assert!(matches!(p.origins[0], Origin::Edge(_)));
        assert!(!p.meshlines.is_empty());
    }

    let ys = b.policies().coords(ViewAxis::H);
    assert!(ys.windows(2).all(|w| w[1] > w[0]));
    // more lines sit outside the conductor than inside at each edge
    assert!(ys[0] < 0.0 && *ys.last().unwrap_or(&0.0) > 5.0);
    let inside = ys.iter().filter(|y| **y > 0.0 && **y < 2.5).count();
    assert!(inside >= 10);
}

#[test]
fn air_edges_are_reversed() {
    let mut b = board(
        GlobalParams::default(),
        vec![
            Shape::rect(Material::Conductor, "plane", 0.0, 0.0, 10.0, 10.0),
            Shape::rect(Material::Air, "hole", 3.0, 3.0, 6.0, 6.0),
        ],
    );
    b.run_step(Step::AdjustEdgeToMaterial, &mut NoopObserver);
    assert_eq!(b.last_step(), Some(Step::AdjustEdgeToMaterial));
    assert_eq!(b.next_step(), Some(Step::DetectConflictEip));
    for poly in b.polygons() {
        for id in &poly.edges {
            let e = &b.edges()[id.0];
            assert_eq!(e.to_reverse, poly.material == Material::Air);
        }
    }
    let hole_bottom = &b.edges()[b.polygons()[1].edges[1].0];
    assert_eq!(hole_bottom.normal, Normal::Min);
    assert_eq!(hole_bottom.effective_normal(), Normal::Max);
}

#[test]
fn abutting_conductors_drop_the_shared_boundary() {
    let params = GlobalParams {
        proximity_limit: 0.5,
        ..GlobalParams::default()
    };
    let mut b = board(
        params,
        vec![
            Shape::rect(Material::Conductor, "a", 0.0, 0.0, 1.0, 1.0),
            Shape::rect(Material::Conductor, "b", 1.0, 0.0, 2.0, 1.0),
        ],
    );
    run_all(&mut b);

    let a_right = b.polygons()[0].edges[2];
    let b_left = b.polygons()[1].edges[0];
    for id in [a_right, b_left] {
        let e = &b.edges()[id.0];
        assert!(!e.to_mesh);
        assert_eq!(e.conflicts.len(), 2);
    }
    assert_eq!(b.conflicts().count(ConflictTag::EdgeInPolygon), 2);
    assert_eq!(b.conflicts().count(ConflictTag::ColinearEdges), 3);
    assert_eq!(b.conflicts().count_unsolved(), 1);
    assert_eq!(b.non_conflicting_edges().len(), 2);

    assert_eq!(
        enabled(&b, ViewAxis::V),
        vec![(0.0, Policy::Thirds, Normal::Min), (2.0, Policy::Thirds, Normal::Max)]
    );
    assert_eq!(
        enabled(&b, ViewAxis::H),
        vec![(0.0, Policy::Thirds, Normal::Min), (1.0, Policy::Thirds, Normal::Max)]
    );
}

#[test]
fn conductor_on_dielectric_keeps_its_boundary() {
    let mut b = board(
        GlobalParams::default(),
        vec![
            Shape::rect(Material::Dielectric, "substrate", 0.0, 0.0, 20.0, 10.0),
            Shape::rect(Material::Conductor, "pad", 5.0, 2.0, 15.0, 8.0),
        ],
    );
    run_all(&mut b);

    assert_eq!(b.conflicts().count(ConflictTag::EdgeInPolygon), 0);
    assert!(b.edges().iter().all(|e| e.to_mesh));
    assert_eq!(
        enabled(&b, ViewAxis::V),
        vec![
            (0.0, Policy::Thirds, Normal::Min),
            (5.0, Policy::Thirds, Normal::Min),
            (15.0, Policy::Thirds, Normal::Max),
            (20.0, Policy::Thirds, Normal::Max),
        ]
    );
    assert_eq!(
        enabled(&b, ViewAxis::H)
            .iter()
            .map(|(c, _, _)| *c)
            .collect::<Vec<_>>(),
        vec![0.0, 2.0, 8.0, 10.0]
    );
    // substrate edges mesh coarser than the pad edges
    for p in b.policies().policies(ViewAxis::V) {
        let expected = if p.coord == 0.0 || p.coord == 20.0 { 0.5 } else { 1.0 };
        assert!((p.res_factor - expected).abs() < 1e-12, "x = {}", p.coord);
        assert!(p.d <= 2.0 + 1e-12);
    }
}

#[test]
fn dielectric_over_conductor_only_loses_its_own_edges() {
    let mut b = board(
        GlobalParams::default(),
        vec![
            Shape::rect(Material::Conductor, "strip", 0.0, 0.0, 10.0, 2.0),
            Shape::rect(Material::Dielectric, "bar", 4.0, -1.0, 6.0, 3.0),
        ],
    );
    b.run_step(Step::AdjustEdgeToMaterial, &mut NoopObserver);
    b.run_step(Step::DetectConflictEip, &mut NoopObserver);

    for id in &b.polygons()[0].edges {
        assert!(b.edges()[id.0].conflicts.is_empty());
    }
    let bar_left = b.polygons()[1].edges[0];
    let e = &b.edges()[bar_left.0];
    assert_eq!(e.conflicts.len(), 1);
    let Some(ConflictKind::EdgeInPolygon(eip)) = b.conflicts().get(e.conflicts[0]).map(|c| &c.kind)
    else {
        panic!("expected an edge-in-polygon conflict");
    };
    assert_eq!(eip.overlaps.len(), 1);
    let r = eip.overlaps[0].range;
    assert!((r.p0.y.min(r.p1.y)).abs() < 1e-12 && (r.p0.y.max(r.p1.y) - 2.0).abs() < 1e-12);
}

#[test]
fn crossing_edge_registers_only_the_inner_span() {
    let mut b = board(
        GlobalParams::default(),
        vec![
            Shape::rect(Material::Conductor, "strip", 0.0, 0.0, 10.0, 2.0),
            Shape::rect(Material::Conductor, "bar", 4.0, -1.0, 6.0, 3.0),
        ],
    );
    b.run_step(Step::AdjustEdgeToMaterial, &mut NoopObserver);
    b.run_step(Step::DetectConflictEip, &mut NoopObserver);

    let bottom = b.polygons()[0].edges[1];
    let e = &b.edges()[bottom.0];
    assert_eq!(e.conflicts.len(), 1);
    let Some(ConflictKind::EdgeInPolygon(eip)) = b.conflicts().get(e.conflicts[0]).map(|c| &c.kind)
    else {
        panic!("expected an edge-in-polygon conflict");
    };
    assert_eq!(eip.overlaps.len(), 1);
    let r = eip.overlaps[0].range;
    assert!((r.p0.x - 4.0).abs() < 1e-12 && (r.p1.x - 6.0).abs() < 1e-12);
    assert!(eip.overlaps[0].edge.is_none());

    while b.run_next_step(&mut NoopObserver).is_some() {}
    assert!(b.edges()[bottom.0].to_mesh);
}

#[test]
fn fixed_meshlines_land_exactly() {
    let mut fixed: ViewAxisSpace<Vec<f64>> = ViewAxisSpace::default();
    fixed[ViewAxis::H] = vec![1.0, 4.0];
    let mut b = Board::new(Plane::YZ, GlobalParams::default(), Vec::new(), fixed);
    run_all(&mut b);

    let ys = b.policies().coords(ViewAxis::H);
    assert!(ys.contains(&1.0) && ys.contains(&4.0));
    assert!(ys.iter().all(|y| (1.0..=4.0).contains(y)));
    assert!(ys.windows(2).all(|w| w[1] - w[0] <= 2.5 + 1e-9));
    assert!(b.policies().coords(ViewAxis::V).is_empty());
    assert!(b
        .policies()
        .policies(ViewAxis::H)
        .iter()
        .all(|p| p.policy == Policy::OneLine && p.origins == vec![Origin::Fixed]));
}
