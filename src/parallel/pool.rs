//! Thread budget for `tactics` batches.

use rayon::ThreadPoolBuilder;

/// Configures how many worker threads solve matchups concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkerPool {
    /// 0 means the global rayon pool.
    pub workers: usize,
}

impl WorkerPool {
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Runs `f` inside a dedicated pool of `workers` threads. Parallel iterators
    /// in `f` stay on the global pool when `workers` is 0 or the pool cannot be built.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if self.workers == 0 {
            return f();
        }
        match ThreadPoolBuilder::new().num_threads(self.workers).build() {
            Ok(pool) => pool.install(f),
            Err(err) => {
                tracing::warn!(workers = self.workers, "failed to build worker pool: {err}");
                f()
            }
        }
    }
}
