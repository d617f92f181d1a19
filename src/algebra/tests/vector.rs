use crate::algebra::*;

#[test]
fn test_dot() {
    let x = vec![1., 2., 3.];
    let y = vec![4., 5., 6.];
    assert_eq!(dot(&x, &y), 32.);
    assert_eq!(x.dot(&y), 32.);
}

#[test]
fn test_dot_empty() {
    let x: Vector = vec![];
    assert_eq!(dot(&x, &x), 0.);
}

#[test]
#[should_panic]
fn test_dot_short_rhs() {
    dot(&[1., 2., 3.], &[1., 2.]);
}

#[test]
#[should_panic]
fn test_dot_long_rhs() {
    dot(&[1., 2.], &[1., 2., 3.]);
}

#[test]
fn test_set() {
    let mut x = [3., 0., 2., 1.];
    x.set(-1.);
    assert_eq!(x, [-1., -1., -1., -1.]);
}

#[test]
fn test_scale() {
    let mut x = [3., 0., 2., 1.];
    x.scale(3.);
    assert_eq!(x, [9., 0., 6., 3.]);
}

#[test]
fn test_negate() {
    let mut x = vec![9., 4., 16., 1.];
    x.negate();
    assert_eq!(x, vec![-9., -4., -16., -1.]);
}

#[test]
fn test_sumsq_norm() {
    let x = [3., 4.];
    assert_eq!(x.sumsq(), 25.);
    assert_eq!(x.norm(), 5.);
}

#[test]
fn test_norm_inf() {
    let x = [-3., 1., -5., 2.];
    assert_eq!(x.norm_inf(), 5.);
    assert!([1., f64::NAN].norm_inf().is_nan());
}

#[test]
fn test_axpby() {
    let x = vec![1., 2., 3.];

    let mut y = vec![1., 1., 1.];
    y.axpby(2., &x, 1.);
    assert_eq!(y, vec![3., 5., 7.]);

    let mut y = vec![1., 1., 1.];
    y.axpby(2., &x, -1.);
    assert_eq!(y, vec![1., 3., 5.]);
}
