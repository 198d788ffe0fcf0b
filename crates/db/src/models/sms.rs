//! Simulated SMS log model.

use serde::Serialize;
use smartseed_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Status recorded for every simulated send.
pub const SMS_STATUS_SENT: &str = "sent";

/// A row from the `sms_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SmsMessage {
    pub id: DbId,
    pub to_number: String,
    pub message_text: String,
    pub status: String,
    pub attempt: i32,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateSms {
    pub to_number: String,
    pub message_text: String,
    pub attempt: i32,
}
