//! Resolves invitation tokens to the business they were issued for

use crate::domain::{check_token, BusinessSummary, RejectionReason, TokenResolution};
use crate::error::Result;
use crate::repository::{BusinessRepository, InvitationRepository};
use metrics::counter;
use std::sync::Arc;

/// Token → invitation → business resolution.
///
/// Stateless and read-only: concurrent lookups never interact and repeating a
/// lookup with no intervening writes yields the same answer.
pub struct BusinessLookupService<IR, BR>
where
    IR: InvitationRepository,
    BR: BusinessRepository,
{
    invitation_repo: Arc<IR>,
    business_repo: Arc<BR>,
}

impl<IR, BR> BusinessLookupService<IR, BR>
where
    IR: InvitationRepository,
    BR: BusinessRepository,
{
    pub fn new(invitation_repo: Arc<IR>, business_repo: Arc<BR>) -> Self {
        Self {
            invitation_repo,
            business_repo,
        }
    }

    /// Resolve `token` to the restricted view of its business.
    ///
    /// Unresolvable tokens come back as `TokenResolution::Rejected`. Storage
    /// faults are returned as `Err` and are never turned into a rejection.
    pub async fn resolve_by_token(&self, token: &str) -> Result<TokenResolution> {
        let result = self.resolve(token).await;

        let outcome = match &result {
            Ok(resolution) => resolution.outcome(),
            Err(_) => "error",
        };
        counter!("bar_business_token_lookups_total", "outcome" => outcome).increment(1);

        result
    }

    async fn resolve(&self, token: &str) -> Result<TokenResolution> {
        if let Err(defect) = check_token(token) {
            tracing::debug!(%defect, "Rejected implausible invitation token");
            return Ok(TokenResolution::Rejected(RejectionReason::InvalidToken));
        }

        let Some(invitation) = self.invitation_repo.find_by_token(token).await? else {
            tracing::debug!("No invitation matches token");
            return Ok(TokenResolution::Rejected(RejectionReason::TokenNotFound));
        };

        let Some(business) = self.business_repo.find_by_id(invitation.business_id).await? else {
            tracing::error!(
                target: "data_integrity",
                invitation_id = %invitation.id,
                business_id = %invitation.business_id,
                "Invitation references a business that does not exist"
            );
            return Ok(TokenResolution::Rejected(
                RejectionReason::BusinessNotFound,
            ));
        };

        tracing::debug!(
            invitation_id = %invitation.id,
            business_id = %business.id,
            "Resolved invitation token"
        );

        Ok(TokenResolution::Resolved(BusinessSummary::from(business)))
    }
}
