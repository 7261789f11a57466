#![allow(clippy::unwrap_used)]

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, SQRT_2};

use approx::assert_abs_diff_eq;
use homxform::builders::{
    axis_reflection2, axis_reflection3, axis_rotation, diagonal_reflection, reflection,
    rotation2, scaling3, translation, translation2, translation3, Axis, Axis2, Mirror,
    MirrorLine, Plane,
};
use homxform::{
    build_transform, compose, compose_and_apply, Dim, HomogeneousPoint, PointKind,
    TransformError, TransformKind, TransformMatrix,
};

fn assert_point(actual: &HomogeneousPoint, expected: &[f64], tol: f64) {
    assert_eq!(actual.cartesian().len(), expected.len());
    for (a, e) in actual.cartesian().iter().zip(expected) {
        assert_abs_diff_eq!(*a, *e, epsilon = tol);
    }
    assert_abs_diff_eq!(actual.w(), 1.0, epsilon = 0.0);
}

fn p2(x: f64, y: f64) -> HomogeneousPoint {
    HomogeneousPoint::point2(x, y)
}

fn p3(x: f64, y: f64, z: f64) -> HomogeneousPoint {
    HomogeneousPoint::point3(x, y, z)
}

#[test]
fn reflect_over_y_equals_x() {
    let out = diagonal_reflection(MirrorLine::YEqualsX).apply(&p2(2.0, 5.0)).unwrap();
    assert_point(&out, &[5.0, 2.0], 1e-9);
    let out = diagonal_reflection(MirrorLine::YEqualsX).apply(&p2(-1.0, 2.0)).unwrap();
    assert_point(&out, &[2.0, -1.0], 1e-9);
}

#[test]
fn reflect_over_y_equals_neg_x() {
    let out = diagonal_reflection(MirrorLine::YEqualsNegX)
        .apply(&p2(3.0, 4.0))
        .unwrap();
    assert_point(&out, &[-4.0, -3.0], 1e-9);
}

#[test]
fn translate_2d_examples() {
    let cases = [
        ([2.0, 3.0], [1.0, -1.0], [3.0, 2.0]),
        ([0.0, 0.0], [5.0, 5.0], [5.0, 5.0]),
        ([-1.0, 4.0], [2.0, -3.0], [1.0, 1.0]),
    ];
    for ([x, y], [tx, ty], expected) in cases {
        let out = translation2(tx, ty).apply(&p2(x, y)).unwrap();
        assert_point(&out, &expected, 1e-9);
    }
}

#[test]
fn translate_3d_examples() {
    let cases = [
        ([2.0, 3.0, 4.0], [3.0, 2.0, -1.0], [5.0, 5.0, 3.0]),
        ([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]),
        ([1.0, -1.0, 2.0], [-3.0, 4.0, 5.0], [-2.0, 3.0, 7.0]),
    ];
    for ([x, y, z], [tx, ty, tz], expected) in cases {
        let out = translation3(tx, ty, tz).apply(&p3(x, y, z)).unwrap();
        assert_point(&out, &expected, 1e-9);
    }
}

#[test]
fn reflect_2d_axis_examples() {
    let out = axis_reflection2(Axis2::X).apply(&p2(3.0, 2.0)).unwrap();
    assert_point(&out, &[3.0, -2.0], 1e-9);
    let out = axis_reflection2(Axis2::Y).apply(&p2(-1.0, 4.0)).unwrap();
    assert_point(&out, &[1.0, 4.0], 1e-9);
    let out = axis_reflection2(Axis2::X).apply(&p2(2.0, -3.0)).unwrap();
    assert_point(&out, &[2.0, 3.0], 1e-9);
}

#[test]
fn reflect_3d_plane_examples() {
    let out = axis_reflection3(Plane::XY).apply(&p3(2.0, 3.0, 4.0)).unwrap();
    assert_point(&out, &[2.0, 3.0, -4.0], 1e-9);
    let out = axis_reflection3(Plane::YZ).apply(&p3(1.0, -2.0, 3.0)).unwrap();
    assert_point(&out, &[-1.0, -2.0, 3.0], 1e-9);
    let out = axis_reflection3(Plane::XZ).apply(&p3(4.0, 5.0, 6.0)).unwrap();
    assert_point(&out, &[4.0, -5.0, 6.0], 1e-9);
}

#[test]
fn rotate_about_z_examples() {
    let out = axis_rotation(Axis::Z, FRAC_PI_2).apply(&p3(1.0, 0.0, 0.0)).unwrap();
    assert_point(&out, &[0.0, 1.0, 0.0], 1e-6);
    let out = axis_rotation(Axis::Z, PI).apply(&p3(0.0, 1.0, 0.0)).unwrap();
    assert_point(&out, &[0.0, -1.0, 0.0], 1e-6);
    let out = axis_rotation(Axis::Z, FRAC_PI_4).apply(&p3(2.0, 0.0, 3.0)).unwrap();
    assert_point(&out, &[SQRT_2, SQRT_2, 3.0], 1e-6);
}

#[test]
fn rotate_90_about_x_and_y() {
    let out = axis_rotation(Axis::X, FRAC_PI_2).apply(&p3(0.0, 1.0, 0.0)).unwrap();
    assert_point(&out, &[0.0, 0.0, 1.0], 1e-6);
    // Y turns +x toward -z.
    let out = axis_rotation(Axis::Y, FRAC_PI_2).apply(&p3(1.0, 0.0, 0.0)).unwrap();
    assert_point(&out, &[0.0, 0.0, -1.0], 1e-6);

    let out = axis_rotation(Axis::X, FRAC_PI_2).apply(&p3(1.0, 2.0, 3.0)).unwrap();
    assert_point(&out, &[1.0, -3.0, 2.0], 1e-6);
    let out = axis_rotation(Axis::Y, FRAC_PI_2).apply(&p3(1.0, 2.0, 3.0)).unwrap();
    assert_point(&out, &[3.0, 2.0, -1.0], 1e-6);
}

#[test]
fn scale_3d_examples() {
    let cases = [
        ([2.0, 3.0, 4.0], [2.0, 1.0, 0.5], [4.0, 3.0, 2.0]),
        ([1.0, 1.0, 1.0], [0.5, 0.5, 0.5], [0.5, 0.5, 0.5]),
        ([3.0, -2.0, 5.0], [-1.0, 2.0, 1.0], [-3.0, -4.0, 5.0]),
    ];
    for ([x, y, z], [sx, sy, sz], expected) in cases {
        let out = scaling3(sx, sy, sz).apply(&p3(x, y, z)).unwrap();
        assert_point(&out, &expected, 1e-9);
    }
}

#[test]
fn identity_law_is_exact() {
    let points = [
        p2(1.25, -3.5),
        HomogeneousPoint::direction2(-0.1, 9.0),
        p3(1e6, -1e-6, 42.0),
        HomogeneousPoint::direction3(0.0, -1.0, 0.3),
    ];
    for p in points {
        assert_eq!(TransformMatrix::identity(p.dim()).apply(&p).unwrap(), p);
    }
}

#[test]
fn composition_is_associative() {
    let a = axis_rotation(Axis::X, 0.4);
    let b = translation3(1.0, -2.0, 0.5);
    let c = scaling3(2.0, 0.5, -1.0);
    let composed = compose(Dim::Three, &[a, b, c]).unwrap();
    let nested = a.multiply(&b).unwrap().multiply(&c).unwrap();
    let right = a.multiply(&b.multiply(&c).unwrap()).unwrap();
    assert!(composed.approx_eq(&nested, 1e-9));
    assert!(composed.approx_eq(&right, 1e-9));
}

#[test]
fn reflections_are_involutions() {
    let p = p2(-2.5, 7.0);
    for mirror in [
        Mirror::Axis(Axis2::X),
        Mirror::Axis(Axis2::Y),
        Mirror::Line(MirrorLine::YEqualsX),
        Mirror::Line(MirrorLine::YEqualsNegX),
    ] {
        let m = reflection(mirror);
        let twice = compose_and_apply(&p, &[m, m]).unwrap();
        assert!(twice.approx_eq(&p, 1e-9), "{mirror:?}");
    }

    let q = p3(1.5, -2.0, 3.25);
    for plane in [Plane::XY, Plane::XZ, Plane::YZ] {
        let m = axis_reflection3(plane);
        let twice = compose_and_apply(&q, &[m, m]).unwrap();
        assert!(twice.approx_eq(&q, 1e-9), "{plane:?}");
    }
}

#[test]
fn rotation_undoes_with_negated_angle() {
    let q = p3(0.3, -4.0, 2.2);
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        for angle in [0.1, FRAC_PI_2, 2.5, -7.0, 100.0] {
            let ops = [axis_rotation(axis, angle), axis_rotation(axis, -angle)];
            let back = compose_and_apply(&q, &ops).unwrap();
            assert!(back.approx_eq(&q, 1e-6), "{axis:?} by {angle}");
        }
    }

    let p = p2(5.0, -1.0);
    let back = compose_and_apply(&p, &[rotation2(1.3), rotation2(-1.3)]).unwrap();
    assert!(back.approx_eq(&p, 1e-6));
}

#[test]
fn translations_add() {
    let t1 = [1.5, -2.0, 0.25];
    let t2 = [-0.5, 4.0, 3.0];
    let sum: Vec<f64> = t1.iter().zip(&t2).map(|(a, b)| a + b).collect();

    let composed = translation(&t1)
        .unwrap()
        .multiply(&translation(&t2).unwrap())
        .unwrap();
    assert!(composed.approx_eq(&translation(&sum).unwrap(), 1e-12));

    let composed = translation2(2.0, -3.0)
        .multiply(&translation2(-0.5, 1.25))
        .unwrap();
    assert!(composed.approx_eq(&translation2(1.5, -1.75), 1e-12));

    let build = |t: Vec<f64>| build_transform(&TransformKind::Translation(t), Dim::Two).unwrap();
    let composed = build(vec![4.0, 0.5]).multiply(&build(vec![-1.0, 2.5])).unwrap();
    assert!(composed.approx_eq(&build(vec![3.0, 3.0]), 1e-12));
}

#[test]
fn application_order_is_listed_order() {
    // Translate (1, 0, 0) to (2, 0, 0), then spin about Z: lands on (0, 2, 0).
    let ops = [translation3(1.0, 0.0, 0.0), axis_rotation(Axis::Z, FRAC_PI_2)];
    let out = compose_and_apply(&p3(1.0, 0.0, 0.0), &ops).unwrap();
    assert_point(&out, &[0.0, 2.0, 0.0], 1e-9);

    // Reversed: spin to (0, 1, 0), then translate to (1, 1, 0).
    let ops = [axis_rotation(Axis::Z, FRAC_PI_2), translation3(1.0, 0.0, 0.0)];
    let out = compose_and_apply(&p3(1.0, 0.0, 0.0), &ops).unwrap();
    assert_point(&out, &[1.0, 1.0, 0.0], 1e-9);
}

#[test]
fn dynamic_surface_from_names() {
    let mirror: Mirror = "y=-x".parse().unwrap();
    let m = build_transform(&TransformKind::Reflection(mirror), Dim::Two).unwrap();
    let out = m.apply(&p2(3.0, 4.0)).unwrap();
    assert_point(&out, &[-4.0, -3.0], 1e-9);

    let axis: Axis = "Y".parse().unwrap();
    let kind = TransformKind::Rotation {
        axis: Some(axis),
        angle: FRAC_PI_2,
    };
    let out = build_transform(&kind, Dim::Three)
        .unwrap()
        .apply(&p3(0.0, 0.0, 1.0))
        .unwrap();
    assert_point(&out, &[1.0, 0.0, 0.0], 1e-6);

    assert!(matches!(
        "q".parse::<Plane>(),
        Err(TransformError::InvalidParameter(_))
    ));
}

#[test]
fn directions_only_see_linear_part() {
    let d = HomogeneousPoint::new(&[1.0, 0.0, 0.0], PointKind::Direction).unwrap();
    let ops = [translation3(9.0, 9.0, 9.0), axis_rotation(Axis::Z, FRAC_PI_2)];
    let out = compose_and_apply(&d, &ops).unwrap();
    assert!(out.approx_eq(&HomogeneousPoint::direction3(0.0, 1.0, 0.0), 1e-9));
}

#[test]
fn dimension_mismatch_surfaces() {
    let err = axis_rotation(Axis::Z, 1.0).apply(&p2(1.0, 1.0)).unwrap_err();
    assert_eq!(
        err,
        TransformError::DimensionMismatch {
            expected: Dim::Three,
            found: Dim::Two,
        }
    );
}
