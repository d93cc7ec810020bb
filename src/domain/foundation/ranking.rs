//! Ranking helpers shared by both engines.

/// Returns the highest-scoring entry; ties go to the earliest entry.
///
/// Scores are expected in declaration order, so the tie-break is
/// "first declared wins".
pub fn first_best(scores: &[(String, f64)]) -> Option<(String, f64)> {
    let mut best: Option<&(String, f64)> = None;
    for entry in scores {
        match best {
            Some((_, score)) if entry.1 <= *score => {}
            _ => best = Some(entry),
        }
    }
    best.cloned()
}
