use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct ProgramConfig {
    pub authority: Pubkey,
    pub fee_receiver: Pubkey, // Receives subscription fees and royalties
    pub is_paused: bool,
    pub total_assets_registered: u64,
    pub total_fees_collected: u64, // In lamports
    pub bump: u8,
}
