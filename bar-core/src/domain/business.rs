//! Business domain model

use super::common::BusinessId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Business entity as stored in the registry.
///
/// Records are created by the registration workflow; this service only reads
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Business {
    pub id: BusinessId,
    pub legal_name: String,
    /// Jurisdiction code, e.g. `BC`
    pub legal_type: String,
    /// Registry-issued identifier, e.g. `BC1217715`
    pub identifier: String,
    pub tax_id: Option<String>,
    /// Short URL-safe identifier shared outside the registry
    pub nano_id: Option<String>,
}

/// The view of a business granted to the holder of an invitation token.
///
/// Only these four attributes are ever disclosed through a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSummary {
    #[schema(example = "Test Business 1")]
    pub legal_name: String,
    #[schema(example = "BC")]
    pub legal_type: String,
    #[schema(example = "BC1217715")]
    pub identifier: String,
    #[schema(example = "BN1234567899876")]
    pub tax_id: Option<String>,
}

impl From<Business> for BusinessSummary {
    fn from(business: Business) -> Self {
        Self {
            legal_name: business.legal_name,
            legal_type: business.legal_type,
            identifier: business.identifier,
            tax_id: business.tax_id,
        }
    }
}
