//! Rayon-backed executor.

use crate::Executor;
use rayon::prelude::*;
use std::sync::Arc;

/// Runs jobs on rayon's global pool, or on a dedicated pool when built with
/// [`RayonExecutor::with_threads`]. Indexed parallel iteration keeps results
/// in input order.
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    pool: Option<Arc<rayon::ThreadPool>>,
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            pool: None,
            num_threads: rayon::current_num_threads(),
        }
    }

    /// A private pool of `threads` workers. Falls back to the global pool if
    /// the pool cannot be built.
    pub fn with_threads(threads: usize) -> Self {
        match rayon::ThreadPoolBuilder::new().num_threads(threads.max(1)).build() {
            Ok(pool) => Self {
                num_threads: pool.current_num_threads(),
                pool: Some(Arc::new(pool)),
            },
            Err(_) => Self::new(),
        }
    }

    fn run<R: Send>(&self, job: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(job),
            None => job(),
        }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + 'static,
    {
        self.run(move || items.into_par_iter().map(f).collect())
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}
