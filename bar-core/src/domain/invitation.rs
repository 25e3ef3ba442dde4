//! Invitation domain types

use super::common::{BusinessId, InvitationId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Invitation status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvitationStatus {
    #[default]
    Sent,
    Accepted,
    Expired,
    Failed,
}

impl std::str::FromStr for InvitationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SENT" => Ok(Self::Sent),
            "ACCEPTED" => Ok(Self::Accepted),
            "EXPIRED" => Ok(Self::Expired),
            "FAILED" => Ok(Self::Failed),
            _ => Err(format!("Unknown invitation status: {}", s)),
        }
    }
}

impl std::fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sent => write!(f, "SENT"),
            Self::Accepted => write!(f, "ACCEPTED"),
            Self::Expired => write!(f, "EXPIRED"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

impl<'r> sqlx::Decode<'r, sqlx::MySql> for InvitationStatus {
    fn decode(value: sqlx::mysql::MySqlValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = sqlx::Decode::<'r, sqlx::MySql>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl sqlx::Type<sqlx::MySql> for InvitationStatus {
    fn type_info() -> sqlx::mysql::MySqlTypeInfo {
        <String as sqlx::Type<sqlx::MySql>>::type_info()
    }

    fn compatible(ty: &sqlx::mysql::MySqlTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::MySql>>::compatible(ty)
    }
}

/// An invitation issued to the recipients of a business.
///
/// `token` is the only key this service looks invitations up by. It is a
/// capability and must never be logged or echoed back to callers.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invitation {
    pub id: InvitationId,
    /// Single email address or comma-separated list
    pub recipients: String,
    pub message: Option<String>,
    pub sent_date: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub token: String,
    pub status: InvitationStatus,
    pub additional_message: Option<String>,
    pub business_id: BusinessId,
}

impl Default for Invitation {
    fn default() -> Self {
        Self {
            id: InvitationId::default(),
            recipients: String::new(),
            message: None,
            sent_date: Utc::now(),
            token: String::new(),
            status: InvitationStatus::default(),
            additional_message: None,
            business_id: BusinessId::default(),
        }
    }
}
