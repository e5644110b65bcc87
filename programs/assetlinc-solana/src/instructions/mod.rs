pub mod check_subscription;
pub mod initialize;
pub mod manage_subscription;
pub mod register_asset_as_nft;
pub mod update_config;

pub use check_subscription::*;
pub use initialize::*;
pub use manage_subscription::*;
pub use register_asset_as_nft::*;
pub use update_config::*;
