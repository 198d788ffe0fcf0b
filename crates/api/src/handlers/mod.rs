pub mod auth;
pub mod batches;
pub mod beds;
pub mod blacklist;
pub mod dashboard;
pub mod locations;
pub mod monitoring;
pub mod releases;
pub mod seedling_requests;
pub mod sms;
pub mod tasks;
pub mod users;
