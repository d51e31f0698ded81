//! Batch sorting example: sort, argsort, and lexsort over ndarray data.
//!
//! Run with `cargo run --example batch_sorting`.

use fastAxsort::prelude::*;
use ndarray::Array2;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A batch of four sensor traces, one per row.
    let mut readings = Array2::from_shape_vec(
        (4, 5),
        vec![
            3.1, 1.4, 1.5, 9.2, 6.5, //
            2.7, 1.8, 2.8, 1.8, 2.8, //
            1.6, 1.8, 0.3, 3.9, 8.8, //
            7.5, 1.0, 5.8, 2.0, 4.5,
        ],
    )?;

    let mut sorter = Sorter::new().backend(CPU).build()?;

    // Rank each row before sorting it in place.
    let ranks = sorter.argsort(&readings)?;
    sorter.sort(&mut readings)?;

    println!("row-sorted readings:\n{readings:#?}");
    println!("per-row rank permutations: {ranks:?}");

    // Order trace ids by (primary: day, tie-break: channel).
    let channel = vec![2_i64, 0, 1, 0];
    let day = vec![1_i64, 1, 0, 0];
    let keys: Vec<i64> = channel.iter().chain(day.iter()).copied().collect();
    let km = KeyMatrix::new(&keys, 2, 4)?;

    let order = sorter.lexsort(&km)?;
    println!("traces by day, then channel: {order:?}");

    Ok(())
}
