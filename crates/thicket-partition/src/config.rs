/// Tuning knobs for [`ThicknessPartitioner`](crate::ThicknessPartitioner).
///
/// None of these change which partition is returned; they only change how
/// fast it is found.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PartitionerConfig {
    /// Worker threads testing candidates of one layer count. `0` and `1`
    /// both mean a sequential search on the calling thread.
    pub threads: usize,
    /// Start the search at the Euler lower bound `ceil(m / (3n - 6))`
    /// instead of at two layers.
    pub euler_lower_bound: bool,
}

impl Default for PartitionerConfig {
    fn default() -> Self {
        Self {
            threads: 1,
            euler_lower_bound: true,
        }
    }
}

impl PartitionerConfig {
    /// Set the number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Enable or disable the Euler lower bound shortcut.
    pub fn with_euler_lower_bound(mut self, on: bool) -> Self {
        self.euler_lower_bound = on;
        self
    }

    /// Whether candidates are tested on a worker pool.
    #[inline]
    pub fn is_parallel(&self) -> bool {
        self.threads > 1
    }
}
