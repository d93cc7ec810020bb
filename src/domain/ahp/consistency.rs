//! Random index table and consistency ratio for pairwise comparison matrices.

/// Conventional upper bound for an acceptable consistency ratio.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Saaty's random consistency index for matrix sizes 1 through 10.
pub const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.9, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Returns the random index for a matrix of `size` items.
pub fn random_index(size: usize) -> Option<f64> {
    size.checked_sub(1).and_then(|i| RANDOM_INDEX.get(i)).copied()
}

/// Computes `((λmax − n) / (n − 1)) / RI(n)` truncated to two decimals.
///
/// Sizes with a zero random index (1 and 2) or outside the table yield 0.
pub fn consistency_ratio(lambda_max: f64, size: usize) -> f64 {
    let ri = match random_index(size) {
        Some(ri) if ri > 0.0 => ri,
        _ => return 0.0,
    };
    let n = size as f64;
    let ratio = (lambda_max - n) / (n - 1.0) / ri;

    // Integer division by 100 drops everything past the second decimal.
    let basis_points = (ratio * 10_000.0).trunc() as i64;
    (basis_points / 100) as f64 / 100.0
}
