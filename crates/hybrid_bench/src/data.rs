//! Line-oriented integer datasets: one decimal `i32` per line.

use std::io::{BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use rand::Rng;

/// Reads at most `n` integers from `reader`.
///
/// Running out of lines early is not an error; check the length of the
/// returned vector if an exact count matters.
pub fn load_data<R: BufRead>(reader: R, n: usize) -> Result<Vec<i32>> {
    let mut out = Vec::with_capacity(n.min(1 << 20));
    for (idx, line) in reader.lines().take(n).enumerate() {
        let line = line.with_context(|| format!("cannot read line {}", idx + 1))?;
        let value = line
            .trim()
            .parse::<i32>()
            .with_context(|| format!("cannot parse line {} ({line:?}) as i32", idx + 1))?;
        out.push(value);
    }
    Ok(out)
}

/// Writes `data` to `writer`, one value per line.
///
/// On error some values may already have been written.
pub fn save_data<W: Write>(writer: W, data: &[i32]) -> Result<()> {
    let mut out = BufWriter::new(writer);
    for &value in data {
        writeln!(out, "{value}").with_context(|| format!("cannot save integer {value}"))?;
    }
    out.flush().context("cannot flush data")?;
    Ok(())
}

pub fn random_data<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.random::<i32>()).collect()
}
