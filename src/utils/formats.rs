//! Conversions between our matrix format and external libraries

use num_traits::Num;
use sprs::CsMat;

use crate::matrix::SparseMatrixCSR;

/// Converts our CSR matrix format to sprs CsMat format
///
/// Used by the cross-validation tests, which compare our kernel output
/// against the product computed by sprs.
pub fn to_sprs_csr<T>(matrix: &SparseMatrixCSR<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    CsMat::new(
        (matrix.n_rows, matrix.n_cols),
        matrix.row_ptr.clone(),
        matrix.col_idx.clone(),
        matrix.values.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_sprs_preserves_structure() {
        let matrix = SparseMatrixCSR::new(
            3,
            3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
        );

        let converted = to_sprs_csr(&matrix);

        assert_eq!(converted.rows(), 3);
        assert_eq!(converted.cols(), 3);
        assert_eq!(converted.nnz(), 5);
        assert_eq!(converted.indices(), matrix.col_idx.as_slice());
        assert_eq!(converted.data(), matrix.values.as_slice());
    }
}
