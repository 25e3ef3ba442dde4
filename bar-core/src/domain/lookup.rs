//! Token lookup outcomes

use super::business::BusinessSummary;

/// Longest token the `invitations.token` column can hold.
pub const MAX_TOKEN_LEN: usize = 255;

/// Why a token was rejected before reaching the store.
///
/// Only used for logging; callers see every rejection the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenDefect {
    Empty,
    TooLong,
    ControlCharacter,
}

impl std::fmt::Display for TokenDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::TooLong => write!(f, "too_long"),
            Self::ControlCharacter => write!(f, "control_character"),
        }
    }
}

/// Check that a token could plausibly have been issued.
///
/// Token format belongs to the issuer, so this only rules out input no
/// issuer could have produced.
pub fn check_token(token: &str) -> Result<(), TokenDefect> {
    if token.trim().is_empty() {
        return Err(TokenDefect::Empty);
    }
    if token.chars().count() > MAX_TOKEN_LEN {
        return Err(TokenDefect::TooLong);
    }
    if token.chars().any(char::is_control) {
        return Err(TokenDefect::ControlCharacter);
    }
    Ok(())
}

/// Caller-facing rejection vocabulary of the token lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// Token failed the plausibility check
    InvalidToken,
    /// No invitation carries the token
    TokenNotFound,
    /// The invitation points at a business that does not exist
    BusinessNotFound,
}

impl RejectionReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenNotFound => "TOKEN_NOT_FOUND",
            Self::BusinessNotFound => "BUSINESS_NOT_FOUND",
        }
    }
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of resolving a token: the projection or a structured rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenResolution {
    Resolved(BusinessSummary),
    Rejected(RejectionReason),
}

impl TokenResolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Label used for the lookup outcome metric
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Resolved(_) => "resolved",
            Self::Rejected(RejectionReason::InvalidToken) => "invalid_token",
            Self::Rejected(RejectionReason::TokenNotFound) => "token_not_found",
            Self::Rejected(RejectionReason::BusinessNotFound) => "business_not_found",
        }
    }
}
