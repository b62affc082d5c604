//! Deterministic ranking of color frequencies

use crate::frequency::ColorFrequencyTable;
use meshpalette_core::Color;
use serde::Serialize;
use std::cmp::Ordering;
use std::num::NonZeroUsize;

/// One ranked color with its count and share of all samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedEntry {
    pub color: Color,
    pub count: u64,
    /// `count / total_samples` over the whole scene
    pub frequency: f64,
}

/// Count descending, then color ascending
fn rank_order(a: &(Color, u64), b: &(Color, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Rank the colors of `table`, most frequent first
///
/// Colors with equal counts are ordered by ascending `(r, g, b)`, so the
/// output is identical across runs. With `top_n` only the first `top_n`
/// entries are returned; frequencies are always relative to the full
/// sample population.
///
/// # Example
/// ```rust
/// use meshpalette_core::Color;
/// use meshpalette_algorithms::{rank_colors, ColorFrequencyTable};
///
/// let table = ColorFrequencyTable::from_samples([
///     Color::new(0, 255, 0),
///     Color::new(255, 0, 0),
///     Color::new(255, 0, 0),
/// ]);
/// let ranked = rank_colors(&table, None);
/// assert_eq!(ranked[0].color, Color::new(255, 0, 0));
/// assert_eq!(ranked[0].count, 2);
/// ```
pub fn rank_colors(table: &ColorFrequencyTable, top_n: Option<NonZeroUsize>) -> Vec<RankedEntry> {
    let mut pairs: Vec<(Color, u64)> = table.iter().collect();

    if let Some(n) = top_n.map(NonZeroUsize::get) {
        if n < pairs.len() {
            pairs.select_nth_unstable_by(n - 1, rank_order);
            pairs.truncate(n);
        }
    }
    // Keys are unique colors, so an unstable sort is still deterministic
    pairs.sort_unstable_by(rank_order);

    let total = table.total_samples() as f64;
    pairs
        .into_iter()
        .map(|(color, count)| RankedEntry {
            color,
            count,
            frequency: count as f64 / total,
        })
        .collect()
}
