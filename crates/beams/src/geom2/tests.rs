use super::*;
use nalgebra::vector;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn tangent_angles_of_separated_circles() {
    let a = Circle::new(vector![0.0, 0.0], 10.0);
    let b = Circle::new(vector![20.0, 0.0], 5.0);
    let [up, down] = circle_tangent_angles(&a, &b).expect("outer tangents exist");
    let alpha = 0.25f64.acos().to_degrees();
    assert!(close(up, alpha));
    assert!(close(down, 360.0 - alpha));
    // the tangent point on `a` and the matching point on `b` span a line
    // perpendicular to the shared normal
    let n = polar(up, 1.0);
    let pa = a.origin + n * a.radius;
    let pb = b.origin + n * b.radius;
    assert!((pb - pa).dot(&n).abs() < 1e-9);
}

#[test]
fn tangent_angles_equal_radii_are_perpendicular() {
    let a = Circle::new(vector![1.0, 1.0], 2.0);
    let b = Circle::new(vector![1.0, 5.0], 2.0);
    let [first, second] = circle_tangent_angles(&a, &b).unwrap();
    assert!(close(first, 180.0));
    assert!(close(second, 0.0));
}

#[test]
fn tangent_angles_absent_when_contained() {
    let big = Circle::new(vector![0.0, 0.0], 10.0);
    let inner = Circle::new(vector![2.0, 0.0], 3.0);
    assert!(circle_tangent_angles(&big, &inner).is_none());
    assert!(circle_tangent_angles(&inner, &big).is_none());
    // internally touching still counts as contained
    let touching = Circle::new(vector![5.0, 0.0], 5.0);
    assert!(circle_tangent_angles(&big, &touching).is_none());
    // identical circles
    assert!(circle_tangent_angles(&big, &big).is_none());
}

#[test]
fn polar_displacement() {
    let v = polar(90.0, 5.0);
    assert!(v.x.abs() < 1e-12 && close(v.y, 5.0));
}

#[test]
fn arc_span_and_end_points() {
    let wrap = Arc::new(vector![0.0, 0.0], 2.0, 270.0, 90.0);
    assert!(close(wrap.span(), 180.0));
    assert!((wrap.start_point() - vector![0.0, -2.0]).norm() < 1e-12);
    assert!((wrap.end_point() - vector![0.0, 2.0]).norm() < 1e-12);
    let full = Arc::new(vector![0.0, 0.0], 1.0, 10.0, 370.0);
    assert!(close(full.span(), 360.0));
    let over = Arc::new(vector![0.0, 0.0], 1.0, 0.0, 400.0);
    assert!(close(over.span(), 40.0));
}

#[test]
fn translate_then_scale_is_about_the_origin() {
    let c: Path = Circle::new(vector![1.0, 2.0], 3.0).into();
    let moved = c.translated(vector![1.0, 0.0]).scaled(0.5);
    assert_eq!(moved, Path::Circle(Circle::new(vector![1.0, 1.0], 1.5)));
    let arc: Path = Arc::new(vector![0.0, 0.0], 4.0, 10.0, 20.0).into();
    match arc.scaled(0.25) {
        Path::Arc(a) => {
            assert!(close(a.radius, 1.0));
            assert!(close(a.start_angle, 10.0) && close(a.end_angle, 20.0));
        }
        other => panic!("expected arc, got {other:?}"),
    }
}

#[test]
fn circles_have_no_end_points() {
    let c: Path = Circle::new(vector![0.0, 0.0], 1.0).into();
    assert!(c.end_points().is_none());
    let l: Path = Line::new(vector![0.0, 0.0], vector![1.0, 0.0]).into();
    assert_eq!(l.end_points(), Some([vector![0.0, 0.0], vector![1.0, 0.0]]));
}

#[test]
fn crossing_lines_intersect() {
    let cfg = GeomCfg::default();
    let a: Path = Line::new(vector![-1.0, 0.0], vector![1.0, 0.0]).into();
    let b: Path = Line::new(vector![0.0, -1.0], vector![0.0, 1.0]).into();
    let pts = intersection(&a, &b, true, &cfg);
    assert_eq!(pts.len(), 1);
    assert!(pts[0].norm() < 1e-12);
}

#[test]
fn shared_endpoint_is_not_a_proper_crossing() {
    let cfg = GeomCfg::default();
    let a: Path = Line::new(vector![0.0, 0.0], vector![1.0, 0.0]).into();
    let b: Path = Line::new(vector![0.0, 0.0], vector![0.0, 1.0]).into();
    assert!(!intersects(&a, &b, true, &cfg));
    assert!(intersects(&a, &b, false, &cfg));
}

#[test]
fn parallel_lines_never_intersect() {
    let cfg = GeomCfg::default();
    let a: Path = Line::new(vector![0.0, 0.0], vector![2.0, 0.0]).into();
    let b: Path = Line::new(vector![1.0, 0.0], vector![3.0, 0.0]).into();
    assert!(!intersects(&a, &b, false, &cfg));
}

#[test]
fn tangent_line_is_excluded() {
    let cfg = GeomCfg::default();
    let c: Path = Circle::new(vector![0.0, 0.0], 1.0).into();
    let tangent: Path = Line::new(vector![-2.0, 1.0], vector![2.0, 1.0]).into();
    assert!(!intersects(&c, &tangent, true, &cfg));
    let touch = intersection(&c, &tangent, false, &cfg);
    assert_eq!(touch.len(), 1);
    assert!((touch[0] - vector![0.0, 1.0]).norm() < 1e-9);

    let secant: Path = Line::new(vector![-2.0, 0.5], vector![2.0, 0.5]).into();
    assert_eq!(intersection(&secant, &c, true, &cfg).len(), 2);
}

#[test]
fn line_against_arc_respects_sweep() {
    let cfg = GeomCfg::default();
    let upper: Path = Arc::new(vector![0.0, 0.0], 1.0, 0.0, 180.0).into();
    let chord: Path = Line::new(vector![-2.0, 0.5], vector![2.0, 0.5]).into();
    assert_eq!(intersection(&upper, &chord, true, &cfg).len(), 2);
    let below: Path = Line::new(vector![-2.0, -0.5], vector![2.0, -0.5]).into();
    assert!(!intersects(&upper, &below, true, &cfg));
    // segment stopping inside the circle only crosses once
    let half: Path = Line::new(vector![0.0, 0.5], vector![2.0, 0.5]).into();
    assert_eq!(intersection(&upper, &half, true, &cfg).len(), 1);
}

#[test]
fn overlapping_circles_and_arcs() {
    let cfg = GeomCfg::default();
    let a: Path = Circle::new(vector![0.0, 0.0], 10.0).into();
    let b: Path = Circle::new(vector![8.0, 0.0], 5.0).into();
    let pts = intersection(&a, &b, true, &cfg);
    assert_eq!(pts.len(), 2);
    for p in &pts {
        assert!(close(p.x, 8.6875));
        assert!(close(p.norm(), 10.0));
    }
    // only the left half of `b`: both crossings are on its right half
    let left: Path = Arc::new(vector![8.0, 0.0], 5.0, 90.0, 270.0).into();
    assert!(!intersects(&a, &left, true, &cfg));
    let right: Path = Arc::new(vector![8.0, 0.0], 5.0, 270.0, 90.0).into();
    assert_eq!(intersection(&a, &right, true, &cfg).len(), 2);
}

#[test]
fn touching_circles_are_tangent() {
    let cfg = GeomCfg::default();
    let a: Path = Circle::new(vector![0.0, 0.0], 1.0).into();
    let outside: Path = Circle::new(vector![3.0, 0.0], 2.0).into();
    assert!(!intersects(&a, &outside, true, &cfg));
    let pts = intersection(&a, &outside, false, &cfg);
    assert_eq!(pts.len(), 1);
    assert!((pts[0] - vector![1.0, 0.0]).norm() < 1e-9);

    let big: Path = Circle::new(vector![0.0, 0.0], 3.0).into();
    let inner: Path = Circle::new(vector![-1.0, 0.0], 2.0).into();
    let pts = intersection(&big, &inner, false, &cfg);
    assert_eq!(pts.len(), 1);
    assert!((pts[0] - vector![-3.0, 0.0]).norm() < 1e-9);
    // concentric circles never intersect
    assert!(!intersects(&big, &a, false, &cfg));
}

#[test]
fn extents_of_arcs_include_axis_extremes() {
    let quarter: Path = Arc::new(vector![0.0, 0.0], 1.0, 0.0, 90.0).into();
    let e = path_extents(&quarter);
    assert!((e.low - vector![0.0, 0.0]).norm() < 1e-12);
    assert!((e.high - vector![1.0, 1.0]).norm() < 1e-12);

    let left: Path = Arc::new(vector![0.0, 0.0], 2.0, 90.0, 270.0).into();
    let e = path_extents(&left);
    assert!(close(e.low.x, -2.0) && close(e.high.x, 0.0));
    assert!(close(e.low.y, -2.0) && close(e.high.y, 2.0));

    let c: Path = Circle::new(vector![1.0, 1.0], 1.0).into();
    assert_eq!(path_extents(&c).center(), vector![1.0, 1.0]);
}
