//! Executors used by the report pipeline to render independent jobs
//! (charts, mostly) sequentially or on a thread pool.
//!
//! - [`SyncExecutor`]: runs jobs one after another on the calling thread
//! - [`RayonExecutor`]: work-stealing pool (feature: `rayon`)
//!
//! Both return results in input order.

use std::fmt::Debug;

#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;

/// Runs a batch of fallible jobs. Every job's outcome is kept, in input
/// order, so one failed chart never discards the others.
pub trait Executor: Send + Sync + Debug {
    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + 'static;

    /// 1 for sequential executors, the pool size otherwise.
    fn parallelism(&self) -> usize;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}

/// Concrete executor choice. `Executor` has generic methods and cannot be a
/// trait object, so the pipeline stores this enum instead.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    Sync(SyncExecutor),
    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl ExecutorImpl {
    /// Parallel when `parallel` is set and a pool is compiled in.
    pub fn for_parallelism(parallel: bool) -> Self {
        if parallel {
            Self::default()
        } else {
            ExecutorImpl::Sync(SyncExecutor::new())
        }
    }
}

impl Executor for ExecutorImpl {
    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all_fallible(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all_fallible(items, f),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            ExecutorImpl::Sync(exec) => exec.parallelism(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}

impl Default for ExecutorImpl {
    fn default() -> Self {
        #[cfg(feature = "rayon")]
        {
            ExecutorImpl::Rayon(RayonExecutor::new())
        }
        #[cfg(not(feature = "rayon"))]
        {
            ExecutorImpl::Sync(SyncExecutor::new())
        }
    }
}
