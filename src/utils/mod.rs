// Utility functions and format conversions

pub mod formats;

pub use formats::to_sprs_csr;
