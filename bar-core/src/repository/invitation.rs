//! Invitation repository

use crate::domain::Invitation;
use crate::error::Result;
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Find the invitation carrying `token`.
    ///
    /// Any string is a legal key. A miss is `Ok(None)`; only storage faults
    /// are errors.
    async fn find_by_token(&self, token: &str) -> Result<Option<Invitation>>;
}

pub struct InvitationRepositoryImpl {
    pool: MySqlPool,
}

impl InvitationRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for InvitationRepositoryImpl {
    async fn find_by_token(&self, token: &str) -> Result<Option<Invitation>> {
        let invitation = sqlx::query_as::<_, Invitation>(
            r#"
            SELECT id, recipients, message, sent_date, token, status, additional_message, business_id
            FROM invitations
            WHERE token = ?
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(exact_match(invitation, token))
    }
}

/// Drop a row whose token is not byte-for-byte equal to the requested one.
///
/// The column uses a binary collation, but MySQL PAD SPACE collations still
/// ignore trailing spaces when comparing.
fn exact_match(invitation: Option<Invitation>, token: &str) -> Option<Invitation> {
    invitation.filter(|invitation| invitation.token == token)
}
