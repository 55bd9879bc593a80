pub mod app;
pub mod workflow;

pub use app::{build_router, AppState};
pub use workflow::{InsertOutcome, InsertWorkflow};
