pub mod nft_data;
pub mod program_config;
pub mod subscription_tier;
pub mod user_data;

pub use nft_data::*;
pub use program_config::*;
pub use subscription_tier::*;
pub use user_data::*;
