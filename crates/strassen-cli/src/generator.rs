//! Benchmark input generation.
//!
//! Produces one block per power-of-two order `2^0 ..= 2^max_power`, filled
//! with small random values from a seeded generator so runs are repeatable.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::ops::RangeInclusive;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use strassen_core::Matrix;

use crate::output::write_input_block;
use crate::Element;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 1_234_567;

/// Largest generated order is `2^DEFAULT_MAX_POWER`.
pub const DEFAULT_MAX_POWER: u32 = 10;

/// Range of generated element values.
pub const VALUE_RANGE: RangeInclusive<Element> = -10..=10;

/// Fill an `order`x`order` matrix with values from [`VALUE_RANGE`].
pub fn random_matrix<R: Rng>(rng: &mut R, order: usize) -> Matrix<Element> {
    let mut matrix = Matrix::zeros(order, order);
    for row in 0..order {
        for col in 0..order {
            matrix.set(row, col, rng.gen_range(VALUE_RANGE));
        }
    }
    matrix
}

/// Write benchmark blocks for every order `2^0 ..= 2^max_power`.
///
/// Returns the number of blocks written.
pub fn generate_benchmark_input<W: Write>(
    out: &mut W,
    max_power: u32,
    seed: u64,
) -> io::Result<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut blocks = 0;

    for power in 0..=max_power {
        let order = 1usize << power;
        let a = random_matrix(&mut rng, order);
        let b = random_matrix(&mut rng, order);
        write_input_block(out, &a, &b)?;
        blocks += 1;
        tracing::debug!(order, "generated benchmark block");
    }

    out.flush()?;
    Ok(blocks)
}

/// Write benchmark blocks to `path`, replacing any existing file.
pub fn generate_to_file(path: &Path, max_power: u32, seed: u64) -> io::Result<usize> {
    let mut out = BufWriter::new(File::create(path)?);
    let blocks = generate_benchmark_input(&mut out, max_power, seed)?;
    tracing::info!(path = %path.display(), blocks, "benchmark input written");
    Ok(blocks)
}
