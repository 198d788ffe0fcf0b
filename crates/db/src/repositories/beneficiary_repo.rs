//! Repositories for `beneficiaries` and the `blacklist`.

use smartseed_core::types::DbId;
use sqlx::PgPool;

use crate::models::beneficiary::{Beneficiary, BlacklistEntry, CreateBeneficiary};

const COLUMNS: &str = "id, full_name, address, contact_number, email, created_at, updated_at";

pub struct BeneficiaryRepo;

impl BeneficiaryRepo {
    /// Insert a beneficiary within an existing transaction.
    ///
    /// Submissions never look up an existing beneficiary; every call creates
    /// a new row.
    pub(crate) async fn create_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        input: &CreateBeneficiary,
    ) -> Result<Beneficiary, sqlx::Error> {
        let query = format!(
            "INSERT INTO beneficiaries (full_name, address, contact_number, email)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Beneficiary>(&query)
            .bind(&input.full_name)
            .bind(&input.address)
            .bind(&input.contact_number)
            .bind(&input.email)
            .fetch_one(&mut **tx)
            .await
    }
}

pub struct BlacklistRepo;

impl BlacklistRepo {
    /// Blacklist a beneficiary within an existing transaction.
    ///
    /// Conflicts on `beneficiary_id` are ignored, so re-blacklisting is a
    /// no-op. Returns `true` when a new row was inserted.
    pub(crate) async fn insert_ignore_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        beneficiary_id: DbId,
        reason: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO blacklist (beneficiary_id, reason, active)
             VALUES ($1, $2, TRUE)
             ON CONFLICT (beneficiary_id) DO NOTHING",
        )
        .bind(beneficiary_id)
        .bind(reason)
        .execute(&mut **tx)
        .await?;
        let inserted = result.rows_affected() > 0;
        if !inserted {
            tracing::debug!(beneficiary_id, "Beneficiary already blacklisted");
        }
        Ok(inserted)
    }

    /// List active blacklist entries, newest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<BlacklistEntry>, sqlx::Error> {
        sqlx::query_as::<_, BlacklistEntry>(
            "SELECT bl.id, bl.beneficiary_id, b.full_name AS beneficiary_name,
                    bl.reason, bl.active, bl.created_at
             FROM blacklist bl
             LEFT JOIN beneficiaries b ON b.id = bl.beneficiary_id
             WHERE bl.active
             ORDER BY bl.created_at DESC, bl.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Number of blacklist rows for a beneficiary (0 or 1).
    pub async fn count_for_beneficiary(
        pool: &PgPool,
        beneficiary_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blacklist WHERE beneficiary_id = $1")
            .bind(beneficiary_id)
            .fetch_one(pool)
            .await
    }
}
