//! Repository for the simulated `sms_messages` log.

use sqlx::PgPool;

use crate::models::sms::{CreateSms, SmsMessage, SMS_STATUS_SENT};

const COLUMNS: &str = "id, to_number, message_text, status, attempt, created_at";

pub struct SmsRepo;

impl SmsRepo {
    /// Record a message as sent. No carrier is contacted.
    pub async fn log_sent(pool: &PgPool, input: &CreateSms) -> Result<SmsMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO sms_messages (to_number, message_text, status, attempt)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SmsMessage>(&query)
            .bind(&input.to_number)
            .bind(&input.message_text)
            .bind(SMS_STATUS_SENT)
            .bind(input.attempt)
            .fetch_one(pool)
            .await
    }

    /// List the log, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<SmsMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sms_messages ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, SmsMessage>(&query).fetch_all(pool).await
    }
}
