pub mod batches;
pub mod beds;
pub mod dashboard;
pub mod dates;
pub mod error;
pub mod monitoring;
pub mod seedling_request;
pub mod tasks;
pub mod types;
pub mod users;
pub mod validation;
