//! Parallel execution settings for per-sub-mesh work
//!
//! Sub-mesh extraction is independent per sub-mesh, so it can run on a rayon
//! pool and be merged afterwards. The configuration is passed explicitly to
//! each call; there is no process-wide pool state.

use meshpalette_core::{Error, Result};
use rayon::ThreadPoolBuilder;

/// Thread pool configuration for parallel aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Enable parallel processing (can be disabled for debugging)
    pub enabled: bool,
    /// Number of threads to use (None = rayon's global pool)
    pub num_threads: Option<usize>,
    /// Scenes with fewer sub-meshes than this run sequentially
    pub min_meshes_for_parallel: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            num_threads: None,
            min_meshes_for_parallel: 2,
        }
    }
}

impl ParallelConfig {
    /// Configuration that always runs on the calling thread
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Set number of threads
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Enable or disable parallel processing
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the sub-mesh count threshold for going parallel
    pub fn with_min_meshes(mut self, min_meshes: usize) -> Self {
        self.min_meshes_for_parallel = min_meshes;
        self
    }

    /// Whether a workload of `mesh_count` sub-meshes should be parallelized
    pub fn should_parallelize(&self, mesh_count: usize) -> bool {
        self.enabled && mesh_count >= self.min_meshes_for_parallel.max(2)
    }

    /// Run `op` inside the configured pool
    ///
    /// With an explicit thread count a dedicated pool is built for the call;
    /// otherwise rayon's global pool is used.
    pub fn install<F, R>(&self, op: F) -> Result<R>
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match self.num_threads {
            Some(num_threads) => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .thread_name(|index| format!("meshpalette-{}", index))
                    .build()
                    .map_err(|e| Error::Algorithm(format!("Failed to create thread pool: {}", e)))?;
                Ok(pool.install(op))
            }
            None => Ok(op()),
        }
    }
}
