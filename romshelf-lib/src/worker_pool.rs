//! Worker pool for scanning system folders concurrently.
//!
//! Spawns N persistent tokio tasks that pull work items from a bounded
//! async-channel. Results are sent to an unbounded channel for consumption
//! by the caller, in completion order.
//!
//! `async-channel` is used for work distribution because its `Receiver` is
//! `Clone`: each worker owns a handle and no `Mutex` is needed.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A pool of worker tasks that process items concurrently.
///
/// # Example
///
/// ```ignore
/// let mut pool = WorkerPool::start(4, dirs, |dir| async move {
///     scan(dir).await
/// });
///
/// while let Some(result) = pool.recv().await {
///     handle(result);
/// }
/// ```
pub struct WorkerPool<R: Send + 'static> {
    result_rx: mpsc::UnboundedReceiver<R>,
    _handles: Vec<JoinHandle<()>>,
}

impl<R: Send + 'static> WorkerPool<R> {
    /// Spawn `n` workers (at least one), submit all items, and return a pool
    /// for receiving results.
    ///
    /// Items are submitted from a background task through a channel of
    /// capacity `n`, so the caller can start receiving immediately.
    pub fn start<W, F, Fut>(n: usize, items: Vec<W>, process_fn: F) -> Self
    where
        W: Send + 'static,
        F: Fn(W) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        let n = n.max(1);
        let (work_tx, work_rx) = async_channel::bounded::<W>(n);
        let (result_tx, result_rx) = mpsc::unbounded_channel::<R>();
        let process_fn = Arc::new(process_fn);

        let handles: Vec<JoinHandle<()>> = (0..n)
            .map(|_| {
                let work_rx = work_rx.clone();
                let result_tx = result_tx.clone();
                let process_fn = process_fn.clone();
                tokio::spawn(async move {
                    while let Ok(item) = work_rx.recv().await {
                        if result_tx.send(process_fn(item).await).is_err() {
                            break; // Receiver dropped
                        }
                    }
                })
            })
            .collect();

        // Close the result channel once every worker has finished
        drop(result_tx);

        tokio::spawn(async move {
            for item in items {
                if work_tx.send(item).await.is_err() {
                    break;
                }
            }
            // work_tx dropped here -> workers drain remaining items then stop
        });

        Self {
            result_rx,
            _handles: handles,
        }
    }

    /// Receive the next result. Returns `None` when all items have been
    /// processed and all workers have shut down.
    pub async fn recv(&mut self) -> Option<R> {
        self.result_rx.recv().await
    }

    /// Drain every remaining result.
    pub async fn collect(mut self) -> Vec<R> {
        let mut results = Vec::new();
        while let Some(r) = self.recv().await {
            results.push(r);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_all_items_processed() {
        let pool = WorkerPool::start(3, (0..20).collect(), |i: u32| async move { i * 2 });
        let mut results = pool.collect().await;
        results.sort();
        assert_eq!(results, (0..20).map(|i| i * 2).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_zero_workers_still_runs() {
        let pool = WorkerPool::start(0, vec!["a", "b"], |s: &'static str| async move { s.len() });
        assert_eq!(pool.collect().await, vec![1, 1]);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let mut pool = WorkerPool::start(2, Vec::<u8>::new(), |b: u8| async move { b });
        assert_eq!(pool.recv().await, None);
    }
}
