use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[event]
pub struct ConfigUpdated {
    pub authority: Pubkey,
    pub fee_receiver: Pubkey,
    pub is_paused: bool,
    pub timestamp: i64,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
        constraint = config.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub config: Account<'info, ProgramConfig>,
}

impl<'info> UpdateConfig<'info> {
    pub fn update_config(
        &mut self,
        new_fee_receiver: Option<Pubkey>,
        is_paused: Option<bool>,
    ) -> Result<()> {
        let config = &mut self.config;

        if let Some(fee_receiver) = new_fee_receiver {
            msg!(
                "Fee receiver changed: {} -> {}",
                config.fee_receiver,
                fee_receiver
            );
            config.fee_receiver = fee_receiver;
        }

        if let Some(paused) = is_paused {
            msg!("Protocol paused: {}", paused);
            config.is_paused = paused;
        }

        emit!(ConfigUpdated {
            authority: self.authority.key(),
            fee_receiver: config.fee_receiver,
            is_paused: config.is_paused,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
