use crate::{constants::*, error::ErrorCode};
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct NftData {
    #[max_len(MAX_ASSET_NAME_LENGTH)]
    pub name: String,
    pub value: u64, // Declared value in lamports
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub royalty_paid: u64,
    pub registered_at: i64,
    pub bump: u8,
}

impl NftData {
    pub fn royalty_for(asset_value: u64) -> Result<u64> {
        let royalty = (asset_value as u128)
            .checked_mul(ROYALTY_PERCENTAGE as u128)
            .ok_or(ErrorCode::ArithmeticOverflow)?
            / 100;

        Ok(u64::try_from(royalty).map_err(|_| ErrorCode::ArithmeticOverflow)?)
    }

    /// Asset name bytes for the `nft-data` PDA seeds. Runs inside the seed
    /// expression, ahead of address derivation, which panics on seeds longer
    /// than 32 bytes.
    pub fn name_seed(asset_name: &str) -> Result<&[u8]> {
        require!(
            asset_name.len() <= MAX_ASSET_NAME_LENGTH,
            ErrorCode::AssetNameTooLong
        );
        Ok(asset_name.as_bytes())
    }

    pub fn validate_asset(asset_name: &str, asset_value: u64) -> Result<()> {
        require!(!asset_name.is_empty(), ErrorCode::InvalidAssetName);
        require!(asset_value > 0, ErrorCode::InvalidAssetValue);
        Ok(())
    }
}
