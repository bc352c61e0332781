//! Sort-and-sweep search of overlapping bounding boxes.

use crate::cartesian::Envelope;

/// Returns all pairs of indices `(i, j)`, `i != j`, of the envelopes that intersect each other. Every pair is
/// reported once.
pub fn overlapping_pairs(envelopes: &[Envelope]) -> Vec<(usize, usize)> {
    let mut order: Vec<usize> = (0..envelopes.len()).collect();
    order.sort_by(|a, b| envelopes[*a].x_min().total_cmp(&envelopes[*b].x_min()));

    let mut pairs = vec![];
    for (position, &i) in order.iter().enumerate() {
        let current = &envelopes[i];
        for &j in &order[position + 1..] {
            let candidate = &envelopes[j];
            if candidate.x_min() > current.x_max() {
                break;
            }

            if current.intersects(candidate) {
                pairs.push((i, j));
            }
        }
    }

    pairs
}
