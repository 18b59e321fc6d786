use ndcell::prelude::*;

#[test]
fn formatting() {
    let a = arr1::<f32>(&[1., 2., 3., 4.]);
    assert_eq!(format!("{}", a), "[1, 2, 3, 4]");
    assert_eq!(format!("{:4}", a), "[   1,    2,    3,    4]");
    let a = a.reshape(&[4, 1, 1]).unwrap();
    assert_eq!(format!("{:4}", a), "[[[   1]],\n [[   2]],\n [[   3]],\n [[   4]]]");

    let a = a.reshape(&[2, 2]).unwrap();
    assert_eq!(format!("{}", a), "[[1, 2],\n [3, 4]]");
    assert_eq!(format!("{:4}", a), "[[   1,    2],\n [   3,    4]]");

    let s = format!("{:.3e}", arr1::<f32>(&[1.1, 2.2, 33., 440.]));
    assert_eq!(s, "[1.100e0, 2.200e0, 3.300e1, 4.400e2]");
}

#[test]
fn three_dimensional() {
    let a = Array::new(&[2, 2, 2], &[1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(format!("{}", a), "[[[1, 2],\n  [3, 4]],\n [[5, 6],\n  [7, 8]]]");
}

#[test]
fn debug_format() {
    let a = Array::new(&[2, 2], &[1, 2, 3, 4]);
    assert_eq!(format!("{:?}", a), "[[1, 2],\n [3, 4]] shape=[2, 2], strides=[2, 1], layout=C");
    let v = a.view(&[0, 1], &[2, 1]).unwrap();
    assert_eq!(format!("{:?}", v), "[[2],\n [4]] shape=[2, 1], strides=[2, 1], layout=strided");
}
