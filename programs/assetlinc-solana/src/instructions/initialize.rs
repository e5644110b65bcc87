use crate::{constants::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + ProgramConfig::INIT_SPACE,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, ProgramConfig>,

    /// Wallet that receives subscription fees and royalties
    pub fee_receiver: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, bumps: &InitializeBumps) -> Result<()> {
        self.config.set_inner(ProgramConfig {
            authority: self.authority.key(),
            fee_receiver: self.fee_receiver.key(),
            is_paused: false,
            total_assets_registered: 0,
            total_fees_collected: 0,
            bump: bumps.config,
        });

        msg!(
            "AssetLinc initialized by authority: {}",
            self.authority.key()
        );
        msg!("Fee receiver: {}", self.fee_receiver.key());

        Ok(())
    }
}
