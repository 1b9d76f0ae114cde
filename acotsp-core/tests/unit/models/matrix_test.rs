use super::*;

#[test]
fn can_create_matrix_with_padded_rows() {
    let matrix = SquareMatrix::new(10, 2.).unwrap();

    assert_eq!(matrix.size(), 10);
    assert_eq!(matrix.stride(), 16);
    (0..10).for_each(|row| {
        assert_eq!(matrix.row(row).len(), 10);
        assert_eq!(matrix.row(row).as_ptr() as usize % 64, 0);
        assert!(matrix.row(row).iter().all(|&value| value == 2.));
    });
}

#[test]
fn can_set_and_get_values() {
    let mut matrix = SquareMatrix::new(3, 0.).unwrap();

    matrix.set(0, 2, 5.);
    matrix.row_mut(1)[0] = 3.;

    assert_eq!(matrix.get(0, 2), 5.);
    assert_eq!(matrix.get(1, 0), 3.);
    assert_eq!(matrix.get(2, 0), 0.);
    assert!(!matrix.is_symmetric());

    matrix.set(2, 0, 5.);
    matrix.set(0, 1, 3.);
    assert!(matrix.is_symmetric());
}

#[test]
fn can_fill_matrix() {
    let mut matrix = SquareMatrix::new(4, 0.).unwrap();

    matrix.fill(7.);

    assert!((0..4).all(|row| matrix.row(row).iter().all(|&value| value == 7.)));
    assert_eq!(matrix.as_mut_padded().len(), 4 * matrix.stride());
}

#[test]
fn can_detect_too_large_matrix() {
    let result = SquareMatrix::new(usize::MAX / 2, 0.);

    assert!(matches!(result, Err(AcoError::ResourceExhaustion(_))));
}
