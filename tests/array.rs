use ndcell::prelude::*;

#[test]
fn zeros_reads_zero() {
    let a = Array::<f64>::zeros(&[2, 3, 4]);
    assert_eq!(a.shape(), &[2, 3, 4]);
    assert_eq!(a.ndim(), 3);
    assert_eq!(a.len(), 24);
    assert_eq!(a.strides(), &[12, 4, 1]);
    assert!(a.to_vec().iter().all(|&x| x == 0.));
}

#[test]
fn ones_reads_one() {
    let a = Array::<f64>::ones(&[3, 1, 2]);
    assert_eq!(a.len(), 6);
    assert!(a.data().iter().all(|x| x.get() == 1.));
}

#[test]
fn new_copies_in_row_major_order() {
    let a = Array::new(&[2, 2], &[1., 2., 3., 4.]);
    let flat: Vec<f64> = a.data().iter().map(|x| x.get()).collect();
    assert_eq!(flat, vec![1., 2., 3., 4.]);
    assert_eq!(a.get(&[0, 1]).unwrap().get(), 2.);
    assert_eq!(a.get(&[1, 0]).unwrap().get(), 3.);
}

#[test]
fn new_zero_fills_short_input() {
    let a = Array::new(&[2, 3], &[1, 2]);
    assert_eq!(a.to_vec(), vec![1, 2, 0, 0, 0, 0]);
}

#[test]
fn new_ignores_excess_input() {
    let a = Array::new(&[3], &[1, 2, 3, 4, 5]);
    assert_eq!(a.to_vec(), vec![1, 2, 3]);
}

#[test]
fn zeros_like_copies_shape_only() {
    let a = Array::new(&[2, 5], &[1.; 10]);
    let b = Array::<i64>::zeros_like(&a);
    assert!(is_shape_same(&a, &b));
    assert!(!b.shares_buffer(&a));
    assert!(b.to_vec().iter().all(|&x| x == 0));
}

#[test]
fn shape_sameness() {
    let a = Array::<f64>::zeros(&[2, 3]);
    assert!(is_shape_same(&a, &Array::<f64>::ones(&[2, 3])));
    assert!(!is_shape_same(&a, &Array::<f64>::zeros(&[3, 2])));
    assert!(!is_shape_same(&a, &Array::<f64>::zeros(&[2, 3, 1])));
    assert!(!is_shape_same(&a, &Array::<f64>::zeros(&[6])));
}

#[test]
fn arange_values() {
    let a = Array::arange(0., 5., 1.);
    assert_eq!(a.shape(), &[1, 5]);
    assert_eq!(a.to_vec(), vec![0., 1., 2., 3., 4.]);

    let b = Array::arange(1., 2., 0.25);
    assert_eq!(b.to_vec(), vec![1., 1.25, 1.5, 1.75]);
}

#[test]
fn arange_long_range_does_not_drift() {
    let a = Array::arange(0., 100., 0.1);
    assert_eq!(a.len(), 1000);
    let v = a.to_vec();
    for (i, &x) in v.iter().enumerate() {
        approx::assert_abs_diff_eq!(x, i as f64 * 0.1, epsilon = 1e-12);
    }
}

#[test]
#[should_panic(expected = "step must be non-zero")]
fn arange_zero_step() {
    Array::arange(0., 1., 0.);
}

#[test]
#[should_panic(expected = "InvalidShape")]
fn zeros_rejects_empty_axis() {
    Array::<f32>::zeros(&[2, 0, 3]);
}

#[test]
#[should_panic(expected = "InvalidShape")]
fn ones_rejects_empty_shape() {
    Array::<f32>::ones(&[]);
}

#[test]
#[should_panic(expected = "DimensionTooLarge")]
fn zeros_rejects_overflowing_size() {
    Array::<u8>::zeros(&[usize::MAX, 2]);
}

#[test]
fn from_elem_and_arr1() {
    let a = Array::from_elem(&[2, 2], 7u8);
    assert_eq!(a.to_vec(), vec![7; 4]);
    let b = arr1(&[1, 2, 3]);
    assert_eq!(b.shape(), &[3]);
    assert_eq!(b.strides(), &[1]);
    let c: Array<i32> = (1..4).collect();
    assert_eq!(b, c);
}

#[test]
fn equality_needs_same_shape() {
    let a = Array::new(&[2, 2], &[1, 2, 3, 4]);
    let b = Array::new(&[4], &[1, 2, 3, 4]);
    assert_ne!(a, b);
    assert_eq!(a, b.reshape(&[2, 2]).unwrap());
}

#[test]
fn clone_shares_buffer() {
    let a = Array::new(&[3], &[1, 2, 3]);
    let b = a.clone();
    assert!(b.shares_buffer(&a));
    b.data()[1].set(20);
    assert_eq!(a.to_vec(), vec![1, 20, 3]);
}

#[test]
fn get_checks_bounds() {
    let a = Array::<i32>::zeros(&[2, 3]);
    assert!(a.get(&[1, 2]).is_some());
    assert!(a.get(&[1, 3]).is_none());
    assert!(a.get(&[2, 0]).is_none());
    assert!(a.get(&[0]).is_none());
}
