pub mod correlation_id;
pub mod error;
pub mod task;

pub use correlation_id::CorrelationId;
pub use error::ModelError;
pub use task::{NewTask, Task, TaskPatch};
