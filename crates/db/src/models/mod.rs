//! Row models (`FromRow`) and input DTOs, one module per table group.

pub mod batch;
pub mod bed;
pub mod beneficiary;
pub mod dashboard;
pub mod location;
pub mod monitoring;
pub mod release;
pub mod seedling_request;
pub mod sms;
pub mod task;
pub mod user;
