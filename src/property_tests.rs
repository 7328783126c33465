//! Property-based tests over randomly shaped matrices.

use proptest::prelude::*;

use crate::{IntMatrix, zip};
use crate::parallel::{ParallelEnabled, with_parallel_enabled};

const MODES: [ParallelEnabled; 3] = [ParallelEnabled::Yes, ParallelEnabled::No, ParallelEnabled::Default];

/// Matrices of up to 12 x 12 small integers, including empty ones.
fn matrix_strategy() -> impl Strategy<Value = IntMatrix> {
    (0usize..12, 0usize..12).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(-1000i32..1000, rows * cols)
            .prop_map(move |items| IntMatrix::new(rows, cols, items).unwrap())
    })
}

proptest! {
    #[test]
    fn prop_reshape_roundtrip(m in matrix_strategy(), rows in 0usize..16, cols in 0usize..16) {
        prop_assume!(rows * cols >= m.count());
        prop_assert_eq!(m.reshape(rows, cols).unwrap().reshape(m.rows(), m.cols()).unwrap(), m);
    }

    #[test]
    fn prop_transpose_involution(m in matrix_strategy()) {
        let t = m.transpose();
        prop_assert_eq!((t.rows(), t.cols()), (m.cols(), m.rows()));
        prop_assert_eq!(t.transpose(), m);
    }

    #[test]
    fn prop_rotation_composition(m in matrix_strategy()) {
        let r90 = m.rotate90();
        prop_assert_eq!(r90.rotate90(), m.rotate180());
        prop_assert_eq!(r90.rotate90().rotate90(), m.rotate270());
        prop_assert_eq!(r90.rotate90().rotate90().rotate90(), m.clone());
        prop_assert_eq!(m.rotate90(), m.transpose().flip_h());
    }

    #[test]
    fn prop_copy_independence(m in matrix_strategy()) {
        let before = m.flatten();
        let mut copy = m.copy();
        copy.update_all(|x| x + 1);
        prop_assert_eq!(&m.flatten(), &before);
        let mut m = m;
        let copy = m.copy();
        m.fill(0);
        prop_assert!(copy.flatten().iter().zip(&before).all(|(a, b)| a == b));
    }

    #[test]
    fn prop_shape_invariant(m in matrix_strategy()) {
        prop_assert_eq!(m.flatten().len(), m.rows() * m.cols());
        prop_assert_eq!(m.stream_h().len(), m.count());
        prop_assert_eq!(m.stream_r().len(), m.rows());
        for i in 0..m.rows() {
            prop_assert_eq!(m.row(i).unwrap().len(), m.cols());
        }
        prop_assert_eq!(m.stream_v().collect::<Vec<_>>(), m.transpose().flatten());
    }

    #[test]
    fn prop_zip_identity(m in matrix_strategy(), n in 1usize..6) {
        prop_assert_eq!(zip::zip2(&m, &m, |a, _| a).unwrap(), m.clone());
        let copies = vec![&m; n];
        let summed = zip::zip_all(&copies, |xs| xs.iter().sum(), true).unwrap();
        prop_assert_eq!(&summed, &zip::zip_fold(&copies, |a, b| a + b).unwrap());
        prop_assert_eq!(summed, m.scale(n as i32));
    }

    #[test]
    fn prop_parallel_equivalence(m in matrix_strategy()) {
        let outputs: Vec<_> = MODES.iter().map(|&mode| with_parallel_enabled(mode, || {
            let mut updated = m.copy();
            updated.update_all_indexed(|i, j| (i * 31 + j) as i32);
            (
                updated,
                m.map(|x| x * 2 - 1),
                zip::zip2(&m, &m.flip_v(), |a, b| a - b).unwrap(),
                zip::zip_all(&[&m, &m, &m], |xs| xs[0] * xs[1] - xs[2], false).unwrap(),
                m.transpose(),
            )
        })).collect();
        prop_assert_eq!(&outputs[0], &outputs[1]);
        prop_assert_eq!(&outputs[1], &outputs[2]);
    }
}
