use crate::{constants::*, error::ErrorCode};
use anchor_lang::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionTier {
    Basic,
    Premium,
    Enterprise,
}

impl SubscriptionTier {
    pub fn fee_lamports(self) -> u64 {
        match self {
            SubscriptionTier::Basic => BASIC_FEE,
            SubscriptionTier::Premium => PREMIUM_FEE,
            SubscriptionTier::Enterprise => ENTERPRISE_FEE,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for SubscriptionTier {
    type Error = anchor_lang::error::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(SubscriptionTier::Basic),
            1 => Ok(SubscriptionTier::Premium),
            2 => Ok(SubscriptionTier::Enterprise),
            _ => err!(ErrorCode::InvalidSubscriptionTier),
        }
    }
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SubscriptionTier::Basic => "Basic",
            SubscriptionTier::Premium => "Premium",
            SubscriptionTier::Enterprise => "Enterprise",
        };
        write!(f, "{}", name)
    }
}
