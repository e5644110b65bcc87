use crate::{constants::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CheckSubscription<'info> {
    #[account(
        seeds = [USER_DATA_SEED.as_bytes(), user_data.user.as_ref()],
        bump = user_data.bump
    )]
    pub user_data: Account<'info, UserData>,
}

impl<'info> CheckSubscription<'info> {
    pub fn check_subscription(&self) -> Result<()> {
        let user_data = &self.user_data;
        let current_time = Clock::get()?.unix_timestamp;

        user_data.ensure_active(current_time)?;

        msg!(
            "User {} subscription ACTIVE: tier {}, {} seconds remaining",
            user_data.user,
            user_data.subscription_tier,
            user_data.expires_at() - current_time
        );

        Ok(())
    }
}
