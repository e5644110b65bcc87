#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("H73K8LsRbV1jkcJkK3hQM2Z7TC4T1864Gwm3WtF3bAay");

#[program]
pub mod assetlinc_solana {
    use super::*;

    /// Create the protocol config and pin the fee receiver
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize(&ctx.bumps)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_fee_receiver: Option<Pubkey>,
        is_paused: Option<bool>,
    ) -> Result<()> {
        ctx.accounts.update_config(new_fee_receiver, is_paused)
    }

    /// Subscribe or change tier (0 = Basic, 1 = Premium, 2 = Enterprise)
    pub fn manage_subscription(
        ctx: Context<ManageSubscription>,
        subscription_tier: u8,
    ) -> Result<()> {
        ctx.accounts
            .manage_subscription(subscription_tier, &ctx.bumps)
    }

    pub fn register_asset_as_nft(
        ctx: Context<RegisterAsset>,
        asset_name: String,
        asset_value: u64,
    ) -> Result<()> {
        ctx.accounts
            .register_asset_as_nft(asset_name, asset_value, &ctx.bumps)
    }

    pub fn check_subscription(ctx: Context<CheckSubscription>) -> Result<()> {
        ctx.accounts.check_subscription()
    }
}
