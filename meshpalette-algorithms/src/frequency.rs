//! Color frequency aggregation across a scene

use crate::extract::extract_samples;
use crate::parallel::ParallelConfig;
use meshpalette_core::{Color, Error, Result, Scene, SubMesh};
use rayon::prelude::*;
use std::collections::HashMap;

/// Occurrence count per distinct color
///
/// The sum of all counts always equals [`total_samples`](Self::total_samples).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorFrequencyTable {
    counts: HashMap<Color, u64>,
    total: u64,
}

impl ColorFrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a sequence of samples
    pub fn from_samples<I: IntoIterator<Item = Color>>(samples: I) -> Self {
        let mut table = Self::new();
        table.add_samples(samples);
        table
    }

    /// Record one sample
    pub fn add(&mut self, color: Color) {
        *self.counts.entry(color).or_insert(0) += 1;
        self.total += 1;
    }

    /// Record a sequence of samples
    pub fn add_samples<I: IntoIterator<Item = Color>>(&mut self, samples: I) {
        for color in samples {
            self.add(color);
        }
    }

    /// Map-addition of two tables; commutative and associative
    pub fn merge(self, other: Self) -> Self {
        let (mut larger, smaller) = if self.counts.len() >= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };

        for (color, count) in smaller.counts {
            *larger.counts.entry(color).or_insert(0) += count;
        }
        larger.total += smaller.total;
        larger
    }

    /// Count recorded for `color` (0 if never seen)
    pub fn count(&self, color: &Color) -> u64 {
        self.counts.get(color).copied().unwrap_or(0)
    }

    /// Total number of samples recorded
    pub fn total_samples(&self) -> u64 {
        self.total
    }

    /// Number of distinct colors
    pub fn distinct_colors(&self) -> usize {
        self.counts.len()
    }

    /// Check if no samples were recorded
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate over `(color, count)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (Color, u64)> + '_ {
        self.counts.iter().map(|(&color, &count)| (color, count))
    }
}

impl FromIterator<Color> for ColorFrequencyTable {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::from_samples(iter)
    }
}

/// Count the samples of a single sub-mesh
pub fn mesh_frequencies(mesh: &SubMesh) -> ColorFrequencyTable {
    ColorFrequencyTable::from_samples(extract_samples(mesh))
}

/// Aggregate the color samples of every sub-mesh in `scene`
///
/// Fails with [`Error::NoGeometry`] for a scene without sub-meshes and with
/// [`Error::NoColorData`] when no sub-mesh produced a single sample.
/// Colorless sub-meshes in an otherwise colored scene simply contribute
/// nothing.
pub fn aggregate_scene(scene: &Scene, config: &ParallelConfig) -> Result<ColorFrequencyTable> {
    if scene.is_empty() {
        return Err(Error::NoGeometry);
    }

    let table = if config.should_parallelize(scene.len()) {
        config.install(|| {
            scene
                .meshes
                .par_iter()
                .map(mesh_frequencies)
                .reduce(ColorFrequencyTable::new, ColorFrequencyTable::merge)
        })?
    } else {
        scene
            .iter()
            .map(mesh_frequencies)
            .fold(ColorFrequencyTable::new(), ColorFrequencyTable::merge)
    };

    if table.is_empty() {
        return Err(Error::NoColorData);
    }

    Ok(table)
}
