//! Monitoring site and visit models.

use serde::Serialize;
use smartseed_core::types::{Date, DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `monitoring_sites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MonitoringSite {
    pub id: DbId,
    pub request_id: DbId,
    pub gps_latitude: Option<f64>,
    pub gps_longitude: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A geotagged site joined with its request and beneficiary.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub site: MonitoringSite,
    pub request_code: Option<String>,
    pub planting_site_address: Option<String>,
    pub beneficiary_name: Option<String>,
}

/// A row from the `monitoring_visits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MonitoringVisit {
    pub id: DbId,
    pub site_id: DbId,
    pub scheduled_date: Date,
    pub attempted_messages: i32,
    pub beneficiary_confirmed: bool,
    pub visit_date: Option<Date>,
    pub result: Option<String>,
    pub notes: Option<String>,
    pub blacklisted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A visit joined with its site, request and beneficiary.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VisitDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub visit: MonitoringVisit,
    pub request_id: Option<DbId>,
    pub request_code: Option<String>,
    pub planting_site_address: Option<String>,
    pub beneficiary_name: Option<String>,
    pub contact_number: Option<String>,
}

/// Field mask for recording a visit.
///
/// Each `Some` column is written; `None` columns keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateVisit {
    pub attempted_messages: Option<i32>,
    pub beneficiary_confirmed: Option<bool>,
    pub visit_date: Option<Date>,
    pub result: Option<String>,
    pub notes: Option<String>,
    pub blacklisted: Option<bool>,
}

impl UpdateVisit {
    /// True when no column would change.
    pub fn is_empty(&self) -> bool {
        self.attempted_messages.is_none()
            && self.beneficiary_confirmed.is_none()
            && self.visit_date.is_none()
            && self.result.is_none()
            && self.notes.is_none()
            && self.blacklisted.is_none()
    }
}

/// Side effects that accompany a visit update.
#[derive(Debug, Clone, Default)]
pub struct VisitOutcome {
    /// Coordinates to copy onto the site.
    pub site_coordinates: Option<(f64, f64)>,
    /// Blacklist reason, present when the beneficiary should be blacklisted.
    pub blacklist_reason: Option<String>,
}

/// Result of recording a visit.
#[derive(Debug, Clone)]
pub struct RecordedVisit {
    pub visit: MonitoringVisit,
    /// Beneficiary newly blacklisted by this call (`None` when already
    /// listed or not requested).
    pub blacklisted_beneficiary: Option<DbId>,
}
