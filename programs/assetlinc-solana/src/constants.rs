use anchor_lang::prelude::*;

// PDA seeds
#[constant]
pub const CONFIG_SEED: &str = "config";
#[constant]
pub const USER_DATA_SEED: &str = "user-data";
#[constant]
pub const NFT_DATA_SEED: &str = "nft-data";

// Subscription fees per tier, in lamports
pub const BASIC_FEE: u64 = 10_000_000;
pub const PREMIUM_FEE: u64 = 25_000_000;
pub const ENTERPRISE_FEE: u64 = 100_000_000;

// Royalty taken from the declared asset value on registration
#[constant]
pub const ROYALTY_PERCENTAGE: u8 = 3; // 3%

// Periods
pub const SECONDS_PER_DAY: i64 = 86400;
pub const MONTHLY_PERIOD: i64 = 30 * SECONDS_PER_DAY;
pub const TRIAL_PERIOD: i64 = 14 * SECONDS_PER_DAY;

// Asset names are used as a PDA seed, which is capped at 32 bytes
pub const MAX_ASSET_NAME_LENGTH: usize = 32;
