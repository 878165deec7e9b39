use std::process;

use spmv_bench::{matrix, random_vector, run_benchmark, Error, RunConfig, SparseMatrixCSR};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config = RunConfig::from_env()?;

    let (n_rows, n_cols, triplets) = matrix::read_triplets(&config.matrix_path)?;
    let matrix = SparseMatrixCSR::from_triplets(n_rows, n_cols, triplets)?;

    let x = random_vector(matrix.n_cols, config.seed);
    let chunk_rows = config.chunk_rows_for(matrix.n_rows);

    let trials = run_benchmark(&matrix, &x, config.strategy, config.trials, chunk_rows);
    for trial in &trials {
        println!("{}", trial.csv_line());
    }

    Ok(())
}
