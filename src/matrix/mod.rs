// Matrix data structures and I/O

pub mod csr;
pub mod market;

pub use csr::SparseMatrixCSR;
pub use market::{read_matrix, read_triplets, write_matrix, Triplet};
