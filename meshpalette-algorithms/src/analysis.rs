//! End-to-end analysis of an in-memory scene

use crate::frequency::aggregate_scene;
use crate::parallel::ParallelConfig;
use crate::ranking::{rank_colors, RankedEntry};
use meshpalette_core::{Result, Scene};
use serde::Serialize;
use std::num::NonZeroUsize;

/// Configuration for a color analysis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Keep only the most frequent `top_n` colors (None = all)
    pub top_n: Option<NonZeroUsize>,
    /// How sub-meshes are processed
    pub parallel: ParallelConfig,
}

impl AnalysisOptions {
    /// Keep the `top_n` most frequent colors; 0 means unbounded
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = NonZeroUsize::new(top_n);
        self
    }

    /// Set the parallel execution configuration
    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Result of a color analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    /// Ranked colors, possibly truncated
    pub entries: Vec<RankedEntry>,
    /// Samples collected across the whole scene
    pub total_samples: u64,
    /// Distinct colors before truncation
    pub distinct_colors: usize,
}

/// Extract, aggregate and rank the colors of `scene`
pub fn analyze_scene(scene: &Scene, options: &AnalysisOptions) -> Result<ColorReport> {
    let table = aggregate_scene(scene, &options.parallel)?;

    Ok(ColorReport {
        entries: rank_colors(&table, options.top_n),
        total_samples: table.total_samples(),
        distinct_colors: table.distinct_colors(),
    })
}
