//! Application state traits for dependency injection
//!
//! Handlers are generic over these traits so the same handler code runs
//! against the production `AppState` and the in-memory test state.

use crate::config::Config;
use crate::repository::{BusinessRepository, InvitationRepository};
use crate::service::BusinessLookupService;

/// Trait for application state that provides the business lookup service.
pub trait HasBusinessLookup: Clone + Send + Sync + 'static {
    /// The invitation repository type
    type InvitationRepo: InvitationRepository;
    /// The business repository type
    type BusinessRepo: BusinessRepository;

    /// Get the application configuration
    fn config(&self) -> &Config;

    /// Get the business lookup service
    fn business_lookup_service(
        &self,
    ) -> &BusinessLookupService<Self::InvitationRepo, Self::BusinessRepo>;

    /// Check if the backing store is reachable
    fn check_ready(&self) -> impl std::future::Future<Output = bool> + Send;
}
