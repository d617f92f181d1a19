#![allow(non_snake_case)]
use densemat::algebra::*;

// exercises the public matrix API end to end

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scenario_matrix() -> DenseMatrix {
    let mut M = DenseMatrix::new(2, 3);
    M.set(0, 0, 1.);
    M.set(0, 1, 2.);
    M.set(0, 2, 3.);
    M.set(1, 0, 4.);
    M.set(1, 1, 5.);
    M.set(1, 2, 6.);
    M
}

#[test]
fn api_scenario_2x3() {
    init_logging();
    let mut M = scenario_matrix();

    assert_eq!(M.size(), (2, 3));
    assert_eq!(M.row(1), &[4., 5., 6.]);
    assert_eq!(M.col(2), vec![3., 6.]);

    M.transpose();
    assert_eq!(M.size(), (3, 2));
    assert_eq!(M.row(0), &[1., 4.]);
    assert_eq!(M.row(1), &[2., 5.]);
    assert_eq!(M.row(2), &[3., 6.]);
}

#[test]
fn api_row_alias_col_copy() {
    let mut M = scenario_matrix();

    let row = M.row_mut(1);
    row[0] = -4.;
    assert_eq!(M.get(1, 0), -4.);

    let mut col = M.col(0);
    col[1] = 99.;
    assert_eq!(M.get(1, 0), -4.);
}

#[test]
fn api_add_commutes() {
    init_logging();
    let A = scenario_matrix();
    let B = DenseMatrix::from(&[
        [0.5, -1., 2.], //
        [1e10, 0., -6.], //
    ]);

    let AB = add(&A, &B).unwrap();
    let BA = add(&B, &A).unwrap();
    assert!(AB.equals(&BA));
    assert!(same_size(&AB, &A));
}

#[test]
fn api_add_mismatch_is_error() {
    init_logging();
    let A = scenario_matrix();
    let mut B = scenario_matrix();
    B.transpose();

    let err = add(&A, &B).unwrap_err();
    assert_eq!(
        err,
        MatrixError::IncompatibleDimension {
            lhs: (2, 3),
            rhs: (3, 2)
        }
    );
    assert_eq!(err.to_string(), "Matrices must be same size: (2, 3) vs (3, 2)");
}

#[test]
fn api_equals_implies_same_size() {
    let A = DenseMatrix::<f64>::new(2, 2);
    let B = DenseMatrix::<f64>::new(1, 4);
    assert_eq!(A.data(), B.data());
    assert!(!same_size(&A, &B));
    assert!(!A.equals(&B));
    assert!(A.equals(&A.clone()));
}

#[test]
fn api_dot() {
    let v1: Vector = vec![1., 2., 3.];
    let v2: Vector = vec![4., 5., 6.];
    assert_eq!(dot(&v1, &v2), 32.);
    assert_eq!(dot(&v2, &v1), 32.);
}

#[test]
#[should_panic]
fn api_row_out_of_bounds() {
    let M = scenario_matrix();
    let _ = M.row(2);
}

#[test]
#[should_panic]
fn api_set_out_of_bounds() {
    let mut M = scenario_matrix();
    M.set(2, 0, 1.);
}

#[test]
fn api_pretty_print() {
    let M = scenario_matrix();
    let settings = DisplaySettingsBuilder::default()
        .precision(1)
        .max_cols(2)
        .build()
        .unwrap();
    assert_eq!(
        M.display_with(&settings).to_string(),
        "[ 1.0 2.0 ... ]\n[ 4.0 5.0 ... ]\n"
    );

    let bad = DisplaySettingsBuilder::default().max_rows(0).build();
    assert!(bad.is_err());
}
