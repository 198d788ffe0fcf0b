//! Repositories: zero-sized structs grouping the SQL for one table each.

pub mod batch_repo;
pub mod bed_repo;
pub mod beneficiary_repo;
pub mod dashboard_repo;
pub mod location_repo;
pub mod monitoring_repo;
pub mod release_repo;
pub mod seedling_request_repo;
pub mod sms_repo;
pub mod task_repo;
pub mod user_repo;

pub use batch_repo::BatchRepo;
pub use bed_repo::BedRepo;
pub use beneficiary_repo::{BeneficiaryRepo, BlacklistRepo};
pub use dashboard_repo::DashboardRepo;
pub use location_repo::LocationRepo;
pub use monitoring_repo::{MonitoringSiteRepo, MonitoringVisitRepo};
pub use release_repo::ReleaseRepo;
pub use seedling_request_repo::SeedlingRequestRepo;
pub use sms_repo::SmsRepo;
pub use task_repo::{BedTaskRepo, TaskCompletionRepo};
pub use user_repo::UserRepo;
