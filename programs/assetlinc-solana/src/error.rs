use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // Subscription errors
    #[msg("Invalid subscription tier.")]
    InvalidSubscriptionTier,
    #[msg("Incorrect fee amount.")]
    IncorrectFeeAmount,
    #[msg("Subscription has expired.")]
    SubscriptionExpired,

    // Asset registration errors
    #[msg("Asset name is too long")]
    AssetNameTooLong,
    #[msg("Asset name must not be empty")]
    InvalidAssetName,
    #[msg("Asset value must be greater than zero")]
    InvalidAssetValue,

    // Authorization errors
    #[msg("Fee receiver does not match the configured fee receiver")]
    InvalidFeeReceiver,
    #[msg("Unauthorized authority")]
    UnauthorizedAuthority,

    // Protocol errors
    #[msg("Protocol is paused")]
    ProtocolPaused,

    // Math errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
