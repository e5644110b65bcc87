use crate::{constants::*, error::ErrorCode, state::SubscriptionTier};
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct UserData {
    pub user: Pubkey,
    pub subscription_tier: u8,
    pub last_payment: i64,     // 0 until the first subscription
    pub trial_started_at: i64, // Timestamp of the first subscription
    pub total_paid: u64,       // In lamports
    pub bump: u8,
}

impl UserData {
    pub fn is_new_user(&self) -> bool {
        self.last_payment == 0
    }

    pub fn is_within_trial(&self, current_time: i64) -> bool {
        !self.is_new_user() && current_time - self.trial_started_at < TRIAL_PERIOD
    }

    /// Records a subscription change at `current_time` and returns the fee
    /// owed for it. New users and users still inside their trial window owe
    /// nothing.
    pub fn apply_subscription(
        &mut self,
        tier: SubscriptionTier,
        current_time: i64,
    ) -> Result<u64> {
        let fee_due = if self.is_new_user() {
            self.trial_started_at = current_time;
            0
        } else if self.is_within_trial(current_time) {
            0
        } else {
            tier.fee_lamports()
        };

        self.total_paid = self
            .total_paid
            .checked_add(fee_due)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.subscription_tier = tier.as_u8();
        self.last_payment = current_time;

        Ok(fee_due)
    }

    pub fn expires_at(&self) -> i64 {
        self.last_payment.saturating_add(MONTHLY_PERIOD)
    }

    pub fn ensure_active(&self, current_time: i64) -> Result<()> {
        require!(!self.is_new_user(), ErrorCode::SubscriptionExpired);
        require!(
            current_time - self.last_payment < MONTHLY_PERIOD,
            ErrorCode::SubscriptionExpired
        );
        Ok(())
    }
}
