//! Row identifiers shared by the domain models

use serde::{Deserialize, Serialize};

/// Internal business identifier (`businesses.id`, BIGINT AUTO_INCREMENT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct BusinessId(pub i64);

/// Internal invitation identifier (`invitations.id`, BIGINT AUTO_INCREMENT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct InvitationId(pub i64);

impl std::fmt::Display for BusinessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::fmt::Display for InvitationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for BusinessId {
    fn from(id: i64) -> Self {
        BusinessId(id)
    }
}

impl From<i64> for InvitationId {
    fn from(id: i64) -> Self {
        InvitationId(id)
    }
}
