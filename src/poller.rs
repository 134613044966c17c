use crate::backend::Backend;
use crate::errors::ClientError;
use serde::de::DeserializeOwned;
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    time::Duration,
};
use tokio::{
    task::{JoinHandle, JoinSet},
    time::{self, MissedTickBehavior},
};
use tracing::{debug, error, info};

pub const POLL_PERIOD: Duration = Duration::from_millis(1000);

type RenderFn<T> = Box<dyn Fn(&T) + Send + Sync>;

pub struct Poller<T> {
    name: &'static str,
    endpoint: &'static str,
    period: Duration,
    render: RenderFn<T>,
}

impl<T> Poller<T>
where
    T: DeserializeOwned + Send + 'static,
{
    pub fn new(
        name: &'static str,
        endpoint: &'static str,
        render: impl Fn(&T) + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            endpoint,
            period: POLL_PERIOD,
            render: Box::new(render),
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub async fn fetch(&self, backend: &dyn Backend) -> Result<T, ClientError> {
        let body = backend.get_body(self.endpoint).await?;
        serde_json::from_str(&body).map_err(|err| ClientError::parse(self.endpoint, err))
    }

    /// One fetch-and-render cycle. Returns whether the page was updated.
    pub async fn tick(&self, backend: &dyn Backend, stats: &PollStats) -> bool {
        stats.ticks.fetch_add(1, Ordering::Relaxed);
        match self.fetch(backend).await {
            Ok(record) => {
                (self.render)(&record);
                stats.successes.fetch_add(1, Ordering::Relaxed);
                true
            }
            Err(err) => {
                stats.failures.fetch_add(1, Ordering::Relaxed);
                error!(poller = self.name, error = %err, "poll failed");
                false
            }
        }
    }

    pub fn spawn(self, backend: Arc<dyn Backend>) -> PollerHandle {
        let name = self.name;
        let stats = Arc::new(PollStats::default());
        let task = tokio::spawn(run(Arc::new(self), backend, Arc::clone(&stats)));
        debug!(poller = name, "started");

        PollerHandle {
            name,
            task,
            stats,
            stopped: AtomicBool::new(false),
        }
    }
}

async fn run<T>(poller: Arc<Poller<T>>, backend: Arc<dyn Backend>, stats: Arc<PollStats>)
where
    T: DeserializeOwned + Send + 'static,
{
    let mut interval = time::interval(poller.period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // Dropped with this task, which aborts ticks still in flight.
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let poller = Arc::clone(&poller);
                let backend = Arc::clone(&backend);
                let stats = Arc::clone(&stats);
                in_flight.spawn(async move {
                    poller.tick(backend.as_ref(), &stats).await;
                });
            }
            Some(_) = in_flight.join_next() => {}
        }
    }
}

#[derive(Debug, Default)]
pub struct PollStats {
    ticks: AtomicU64,
    successes: AtomicU64,
    failures: AtomicU64,
}

impl PollStats {
    pub fn counts(&self) -> PollCounts {
        PollCounts {
            ticks: self.ticks.load(Ordering::Relaxed),
            successes: self.successes.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollCounts {
    pub ticks: u64,
    pub successes: u64,
    pub failures: u64,
}

/// Lifecycle of a spawned poller. Dropping the handle stops the poller.
pub struct PollerHandle {
    name: &'static str,
    task: JoinHandle<()>,
    stats: Arc<PollStats>,
    stopped: AtomicBool,
}

impl PollerHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn stop(&self) {
        if !self.stopped.swap(true, Ordering::SeqCst) {
            self.task.abort();
            info!(poller = self.name, "stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        !self.stopped.load(Ordering::SeqCst) && !self.task.is_finished()
    }

    pub fn stats(&self) -> PollCounts {
        self.stats.counts()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
