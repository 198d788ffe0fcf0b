//! Repositories for `monitoring_sites` and `monitoring_visits`.

use smartseed_core::types::{Date, DbId};
use sqlx::PgPool;

use crate::models::monitoring::{
    MonitoringSite, MonitoringVisit, RecordedVisit, SiteDetail, UpdateVisit, VisitDetail,
    VisitOutcome,
};
use crate::repositories::BlacklistRepo;

const SITE_COLUMNS: &str = "id, request_id, gps_latitude, gps_longitude, created_at, updated_at";

const VISIT_COLUMNS: &str = "id, site_id, scheduled_date, attempted_messages, \
    beneficiary_confirmed, visit_date, result, notes, blacklisted, created_at, updated_at";

pub struct MonitoringSiteRepo;

impl MonitoringSiteRepo {
    /// Sites that have been geotagged (both coordinates present).
    pub async fn list_geotagged(pool: &PgPool) -> Result<Vec<SiteDetail>, sqlx::Error> {
        sqlx::query_as::<_, SiteDetail>(
            "SELECT
                ms.id, ms.request_id, ms.gps_latitude, ms.gps_longitude,
                ms.created_at, ms.updated_at,
                sr.request_code, sr.planting_site_address, b.full_name AS beneficiary_name
             FROM monitoring_sites ms
             LEFT JOIN seedling_requests sr ON sr.id = ms.request_id
             LEFT JOIN beneficiaries b ON b.id = sr.beneficiary_id
             WHERE ms.gps_latitude IS NOT NULL AND ms.gps_longitude IS NOT NULL
             ORDER BY ms.created_at DESC, ms.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MonitoringSite>, sqlx::Error> {
        let query = format!("SELECT {SITE_COLUMNS} FROM monitoring_sites WHERE id = $1");
        sqlx::query_as::<_, MonitoringSite>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_request(
        pool: &PgPool,
        request_id: DbId,
    ) -> Result<Option<MonitoringSite>, sqlx::Error> {
        let query = format!("SELECT {SITE_COLUMNS} FROM monitoring_sites WHERE request_id = $1");
        sqlx::query_as::<_, MonitoringSite>(&query)
            .bind(request_id)
            .fetch_optional(pool)
            .await
    }

    /// Return the site for a request, creating it on first use.
    ///
    /// `uq_monitoring_sites_request` makes concurrent first uses converge on
    /// one row.
    async fn get_or_create_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        request_id: DbId,
    ) -> Result<MonitoringSite, sqlx::Error> {
        let query = format!(
            "INSERT INTO monitoring_sites (request_id)
             VALUES ($1)
             ON CONFLICT (request_id) DO UPDATE SET request_id = EXCLUDED.request_id
             RETURNING {SITE_COLUMNS}"
        );
        sqlx::query_as::<_, MonitoringSite>(&query)
            .bind(request_id)
            .fetch_one(&mut **tx)
            .await
    }
}

pub struct MonitoringVisitRepo;

impl MonitoringVisitRepo {
    /// Schedule a visit, lazily creating the request's site.
    ///
    /// Site creation and the visit insert share a transaction.
    pub async fn schedule(
        pool: &PgPool,
        request_id: DbId,
        scheduled_date: Date,
    ) -> Result<MonitoringVisit, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let site = MonitoringSiteRepo::get_or_create_in_tx(&mut tx, request_id).await?;

        let query = format!(
            "INSERT INTO monitoring_visits
                (site_id, scheduled_date, attempted_messages, beneficiary_confirmed)
             VALUES ($1, $2, 0, FALSE)
             RETURNING {VISIT_COLUMNS}"
        );
        let visit = sqlx::query_as::<_, MonitoringVisit>(&query)
            .bind(site.id)
            .bind(scheduled_date)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(visit)
    }

    /// List all visits, latest scheduled first, with site and beneficiary.
    pub async fn list_details(pool: &PgPool) -> Result<Vec<VisitDetail>, sqlx::Error> {
        sqlx::query_as::<_, VisitDetail>(
            "SELECT
                mv.id, mv.site_id, mv.scheduled_date, mv.attempted_messages,
                mv.beneficiary_confirmed, mv.visit_date, mv.result, mv.notes, mv.blacklisted,
                mv.created_at, mv.updated_at,
                ms.request_id, sr.request_code, sr.planting_site_address,
                b.full_name AS beneficiary_name, b.contact_number
             FROM monitoring_visits mv
             LEFT JOIN monitoring_sites ms ON ms.id = mv.site_id
             LEFT JOIN seedling_requests sr ON sr.id = ms.request_id
             LEFT JOIN beneficiaries b ON b.id = sr.beneficiary_id
             ORDER BY mv.scheduled_date DESC, mv.created_at DESC, mv.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Record visit details and apply their side effects atomically.
    ///
    /// Writes only the columns set in `update`, then optionally copies GPS
    /// coordinates onto the site and blacklists the request's beneficiary.
    /// Returns `None` if the visit does not exist.
    pub async fn record(
        pool: &PgPool,
        id: DbId,
        update: &UpdateVisit,
        outcome: &VisitOutcome,
    ) -> Result<Option<RecordedVisit>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE monitoring_visits SET
                attempted_messages = COALESCE($2, attempted_messages),
                beneficiary_confirmed = COALESCE($3, beneficiary_confirmed),
                visit_date = COALESCE($4, visit_date),
                result = COALESCE($5, result),
                notes = COALESCE($6, notes),
                blacklisted = COALESCE($7, blacklisted)
             WHERE id = $1
             RETURNING {VISIT_COLUMNS}"
        );
        let Some(visit) = sqlx::query_as::<_, MonitoringVisit>(&query)
            .bind(id)
            .bind(update.attempted_messages)
            .bind(update.beneficiary_confirmed)
            .bind(update.visit_date)
            .bind(&update.result)
            .bind(&update.notes)
            .bind(update.blacklisted)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some((lat, lng)) = outcome.site_coordinates {
            sqlx::query(
                "UPDATE monitoring_sites SET gps_latitude = $2, gps_longitude = $3 WHERE id = $1",
            )
            .bind(visit.site_id)
            .bind(lat)
            .bind(lng)
            .execute(&mut *tx)
            .await?;
        }

        let mut blacklisted_beneficiary = None;
        if let Some(reason) = &outcome.blacklist_reason {
            let beneficiary_id: Option<DbId> = sqlx::query_scalar(
                "SELECT sr.beneficiary_id
                 FROM monitoring_sites ms
                 JOIN seedling_requests sr ON sr.id = ms.request_id
                 WHERE ms.id = $1",
            )
            .bind(visit.site_id)
            .fetch_optional(&mut *tx)
            .await?;

            if let Some(beneficiary_id) = beneficiary_id {
                if BlacklistRepo::insert_ignore_in_tx(&mut tx, beneficiary_id, reason).await? {
                    blacklisted_beneficiary = Some(beneficiary_id);
                }
            }
        }

        tx.commit().await?;
        Ok(Some(RecordedVisit {
            visit,
            blacklisted_beneficiary,
        }))
    }
}
