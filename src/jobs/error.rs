use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("Invalid cron expression '{expression}': {message}")]
    InvalidCronExpression { expression: String, message: String },

    #[error("Scheduler error: {0}")]
    Scheduler(String),
}

impl From<tokio_cron_scheduler::JobSchedulerError> for JobError {
    fn from(error: tokio_cron_scheduler::JobSchedulerError) -> Self {
        JobError::Scheduler(error.to_string())
    }
}

pub type JobResult<T> = Result<T, JobError>;
