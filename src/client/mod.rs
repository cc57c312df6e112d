mod error;
mod mirror;
mod service;
mod view;

pub use error::ClientError;
pub use mirror::TaskMirror;
pub use service::TaskService;
pub use view::{EditDraft, TaskListView};
