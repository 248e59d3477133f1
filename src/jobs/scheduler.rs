use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler as TokioCronScheduler};

use crate::jobs::error::{JobError, JobResult};
use crate::jobs::runner::PassRunner;

/// Re-runs the pipeline on a cron schedule while the server is up.
pub struct PassScheduler {
    scheduler: Arc<Mutex<TokioCronScheduler>>,
}

impl PassScheduler {
    /// Register `runner` under the six- or seven-field `expression`.
    pub async fn new(runner: Arc<PassRunner>, expression: &str) -> JobResult<Self> {
        let scheduler = TokioCronScheduler::new().await?;

        let job = Job::new_async(expression, move |_uuid, _lock| {
            let runner = Arc::clone(&runner);
            Box::pin(async move {
                runner.run_once().await;
            })
        })
        .map_err(|e| JobError::InvalidCronExpression {
            expression: expression.to_string(),
            message: e.to_string(),
        })?;

        scheduler.add(job).await?;
        tracing::info!(cron = %expression, "Scheduled periodic passes");

        Ok(Self {
            scheduler: Arc::new(Mutex::new(scheduler)),
        })
    }

    pub async fn start(&self) -> JobResult<()> {
        self.scheduler.lock().await.start().await?;
        Ok(())
    }

    /// Stop the scheduler gracefully
    pub async fn stop(&self) -> JobResult<()> {
        self.scheduler.lock().await.shutdown().await?;
        Ok(())
    }
}
