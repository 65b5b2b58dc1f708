use crate::pipeline::Pipeline;
use crate::results::PageResult;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// Starts a fixed pool of workers over `urls` and returns a receiver that
/// yields one `PageResult` per URL as jobs finish.
///
/// At most `max_workers` jobs are in flight. Results arrive in completion
/// order, not submission order.
pub fn start(pipeline: Pipeline, urls: Vec<String>, max_workers: usize) -> mpsc::Receiver<PageResult> {
    let job_count = urls.len();
    let capacity = job_count.max(1);

    let (job_tx, job_rx) = mpsc::channel::<String>(capacity);
    let (result_tx, result_rx) = mpsc::channel::<PageResult>(capacity);

    // The queue holds every job, so none of these sends wait
    for url in urls {
        if let Err(e) = job_tx.try_send(url) {
            ::log::error!("Failed to queue {}", e.into_inner());
        }
    }
    drop(job_tx);

    let num_workers = max_workers.max(1).min(capacity);
    ::log::debug!("Starting {} worker(s) for {} job(s)", num_workers, job_count);

    let job_rx = Arc::new(Mutex::new(job_rx));
    for worker_id in 0..num_workers {
        spawn_worker(
            worker_id,
            pipeline.clone(),
            Arc::clone(&job_rx),
            result_tx.clone(),
        );
    }

    result_rx
}

/// Runs every URL through `pipeline` and collects exactly one result per URL
pub async fn run_all(pipeline: Pipeline, urls: Vec<String>, max_workers: usize) -> Vec<PageResult> {
    let job_count = urls.len();
    let mut rx = start(pipeline, urls, max_workers);

    let mut results = Vec::with_capacity(job_count);
    while results.len() < job_count {
        match rx.recv().await {
            Some(result) => results.push(result),
            None => {
                ::log::error!(
                    "Workers exited after {} of {} results",
                    results.len(),
                    job_count
                );
                break;
            }
        }
    }

    results
}

/// Spawns a worker that pulls URLs from the shared queue until it is drained
fn spawn_worker(
    worker_id: usize,
    pipeline: Pipeline,
    job_rx: Arc<Mutex<mpsc::Receiver<String>>>,
    result_tx: mpsc::Sender<PageResult>,
) {
    ::log::trace!("Spawning worker {}", worker_id);

    tokio::spawn(async move {
        while let Some(url) = next_url(&job_rx).await {
            ::log::trace!("Worker {} processing: {}", worker_id, url);
            let result = pipeline.process(url).await;

            if let Err(e) = result_tx.send(result).await {
                ::log::error!("Worker {} failed to send result: {}", worker_id, e);
                break;
            }
        }

        ::log::debug!("Worker {} done, queue is empty", worker_id);
    });
}

async fn next_url(job_rx: &Arc<Mutex<mpsc::Receiver<String>>>) -> Option<String> {
    let mut rx = job_rx.lock().await;
    rx.recv().await
}
