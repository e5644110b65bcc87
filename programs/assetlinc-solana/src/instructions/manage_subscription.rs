use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};

#[event]
pub struct SubscriptionUpdated {
    pub user: Pubkey,
    pub tier: u8,
    pub fee_paid: u64,
    pub last_payment: i64,
    pub expires_at: i64,
}

#[derive(Accounts)]
pub struct ManageSubscription<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserData::INIT_SPACE,
        seeds = [USER_DATA_SEED.as_bytes(), user.key().as_ref()],
        bump
    )]
    pub user_data: Account<'info, UserData>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(
        mut,
        address = config.fee_receiver @ ErrorCode::InvalidFeeReceiver
    )]
    pub fee_receiver: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> ManageSubscription<'info> {
    pub fn manage_subscription(
        &mut self,
        subscription_tier: u8,
        bumps: &ManageSubscriptionBumps,
    ) -> Result<()> {
        require!(!self.config.is_paused, ErrorCode::ProtocolPaused);
        let tier = SubscriptionTier::try_from(subscription_tier)?;

        let current_time = Clock::get()?.unix_timestamp;
        let user_data = &mut self.user_data;

        // First call for this user: the account was just created
        if user_data.user == Pubkey::default() {
            user_data.user = self.user.key();
            user_data.bump = bumps.user_data;
        }

        let fee_due = user_data.apply_subscription(tier, current_time)?;

        if fee_due > 0 {
            let ctx = CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.user.to_account_info(),
                    to: self.fee_receiver.to_account_info(),
                },
            );
            transfer(ctx, fee_due)?;

            self.config.total_fees_collected = self
                .config
                .total_fees_collected
                .checked_add(fee_due)
                .ok_or(ErrorCode::ArithmeticOverflow)?;
        }

        msg!(
            "User {} subscribed to {} tier (fee: {} SOL, valid until {})",
            self.user.key(),
            tier,
            fee_due as f64 / 1_000_000_000.0,
            user_data.expires_at()
        );

        emit!(SubscriptionUpdated {
            user: self.user.key(),
            tier: user_data.subscription_tier,
            fee_paid: fee_due,
            last_payment: user_data.last_payment,
            expires_at: user_data.expires_at(),
        });

        Ok(())
    }
}
