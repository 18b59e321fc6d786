use ndcell::prelude::*;
use ndcell::dimension::{default_strides, ind2sub};

use itertools::assert_equal;

/// Collect the visited offsets through the cursor.
fn stepped<I: NdIter<f64>>(it: &mut I) -> Vec<usize> {
    let mut offsets = Vec::new();
    it.reset();
    while !it.done() {
        let k = it.data().iter().position(|cell| std::ptr::eq(cell, it.at()));
        offsets.push(k.expect("cursor points into data()"));
        it.advance();
    }
    offsets
}

#[test]
fn both_styles_agree_on_owned_arrays() {
    let shapes: [&[Ix]; 4] = [&[7], &[2, 3], &[3, 1, 4], &[2, 2, 2, 2]];
    for shape in shapes {
        let a = Array::<f64>::zeros(shape);
        let mut it = a.iter();
        assert_eq!(it.len(), a.len());
        assert_eq!(stepped(&mut it), it.ind().to_vec());
        assert_equal(it.ind().iter().copied(), 0..a.len());
    }
}

#[test]
fn both_styles_agree_on_views() {
    let a = Array::<f64>::zeros(&[4, 5, 6]);
    let v = a.view(&[1, 2, 1], &[2, 3]).unwrap();
    let mut it = v.iter();
    assert_eq!(it.len(), 6);
    assert_eq!(stepped(&mut it), it.ind().to_vec());
    assert_eq!(it.ind(), &[0, 1, 2, 6, 7, 8]);
}

#[test]
fn visits_in_row_major_coordinate_order() {
    let shape = [2, 3, 2];
    let a = Array::<f64>::zeros(&shape);
    let it = a.iter();
    let strides = default_strides(&shape);
    let mut index = [0; 3];
    let mut previous: Option<Vec<usize>> = None;
    for &k in it.ind() {
        let current = ind2sub(&strides, k, &mut index).to_vec();
        if let Some(p) = previous {
            assert!(p < current, "{:?} should come before {:?}", p, current);
        }
        previous = Some(current);
    }
}

#[test]
fn elements_adapter_matches_index_list() {
    let a = Array::new(&[3, 3], &[1., 2., 3., 4., 5., 6., 7., 8., 9.]);
    let v = a.view(&[1, 1], &[2, 2]).unwrap();
    let it = v.iter();
    let values: Vec<f64> = it.elements().map(|x| x.get()).collect();
    assert_eq!(values, vec![5., 6., 8., 9.]);
    let backwards: Vec<f64> = it.elements().rev().map(|x| x.get()).collect();
    assert_eq!(backwards, vec![9., 8., 6., 5.]);
    assert_eq!(it.elements().len(), it.len());
}

#[test]
fn cursor_mutation_through_default_iterator() {
    let mut a = Array::<f64>::zeros(&[2, 2]);
    let mut n = 0.;
    let it = a.take();
    while !it.done() {
        n += 1.;
        it.at().set(n);
        it.advance();
    }
    assert_eq!(a.to_vec(), vec![1., 2., 3., 4.]);

    // take() hands the iterator back rewound
    assert!(!a.take().done());
    assert_eq!(a.take().at().get(), 1.);
}

#[test]
fn iterator_outlives_array() {
    let it = {
        let a = Array::new(&[2], &[1., 2.]);
        a.iter()
    };
    assert_eq!(it.elements().map(|x| x.get()).sum::<f64>(), 3.);
}
