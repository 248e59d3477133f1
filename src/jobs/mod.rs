//! Pass execution and optional periodic scheduling for `serve`.

pub mod error;
pub mod runner;
pub mod scheduler;

pub use error::{JobError, JobResult};
pub use runner::{PassReport, PassRunner, spawn_pass};
pub use scheduler::PassScheduler;
