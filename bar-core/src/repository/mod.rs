//! Data access layer (Repository pattern)

pub mod business;
pub mod invitation;

pub use business::BusinessRepository;
pub use invitation::InvitationRepository;
