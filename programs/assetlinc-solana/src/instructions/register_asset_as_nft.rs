use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{
        mint_to, set_authority, spl_token::instruction::AuthorityType, Mint, MintTo,
        SetAuthority, Token, TokenAccount,
    },
};

#[event]
pub struct AssetRegistered {
    pub owner: Pubkey,
    pub nft_data: Pubkey,
    pub mint: Pubkey,
    pub name: String,
    pub value: u64,
    pub royalty_paid: u64,
    pub timestamp: i64,
}

#[derive(Accounts)]
#[instruction(asset_name: String)]
pub struct RegisterAsset<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(
        init,
        payer = user,
        space = 8 + NftData::INIT_SPACE,
        seeds = [
            NFT_DATA_SEED.as_bytes(),
            user.key().as_ref(),
            NftData::name_seed(&asset_name)?
        ],
        bump
    )]
    pub nft_data: Account<'info, NftData>,

    // Asset NFT, supply fixed at one
    #[account(
        init,
        payer = user,
        mint::decimals = 0,
        mint::authority = user,
    )]
    pub nft_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = user,
        associated_token::mint = nft_mint,
        associated_token::authority = user,
    )]
    pub nft_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = config.fee_receiver @ ErrorCode::InvalidFeeReceiver
    )]
    pub fee_receiver: SystemAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> RegisterAsset<'info> {
    pub fn register_asset_as_nft(
        &mut self,
        asset_name: String,
        asset_value: u64,
        bumps: &RegisterAssetBumps,
    ) -> Result<()> {
        require!(!self.config.is_paused, ErrorCode::ProtocolPaused);
        NftData::validate_asset(&asset_name, asset_value)?;

        let royalty_fee = NftData::royalty_for(asset_value)?;

        if royalty_fee > 0 {
            let ctx = CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.user.to_account_info(),
                    to: self.fee_receiver.to_account_info(),
                },
            );
            transfer(ctx, royalty_fee)?;
        }

        self.mint_asset_nft()?;

        let registered_at = Clock::get()?.unix_timestamp;
        self.nft_data.set_inner(NftData {
            name: asset_name.clone(),
            value: asset_value,
            owner: self.user.key(),
            mint: self.nft_mint.key(),
            royalty_paid: royalty_fee,
            registered_at,
            bump: bumps.nft_data,
        });

        let config = &mut self.config;
        config.total_assets_registered = config
            .total_assets_registered
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        config.total_fees_collected = config
            .total_fees_collected
            .checked_add(royalty_fee)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        msg!(
            "Asset '{}' registered by {} (value: {} lamports, royalty: {} lamports)",
            asset_name,
            self.user.key(),
            asset_value,
            royalty_fee
        );
        msg!("Asset NFT minted: {}", self.nft_mint.key());

        emit!(AssetRegistered {
            owner: self.user.key(),
            nft_data: self.nft_data.key(),
            mint: self.nft_mint.key(),
            name: asset_name,
            value: asset_value,
            royalty_paid: royalty_fee,
            timestamp: registered_at,
        });

        Ok(())
    }

    fn mint_asset_nft(&self) -> Result<()> {
        let cpi_program = self.token_program.to_account_info();

        let cpi_accounts = MintTo {
            mint: self.nft_mint.to_account_info(),
            to: self.nft_token_account.to_account_info(),
            authority: self.user.to_account_info(),
        };
        mint_to(CpiContext::new(cpi_program.clone(), cpi_accounts), 1)?;

        // Drop the mint authority so no second token can ever be minted
        let cpi_accounts = SetAuthority {
            current_authority: self.user.to_account_info(),
            account_or_mint: self.nft_mint.to_account_info(),
        };
        set_authority(
            CpiContext::new(cpi_program, cpi_accounts),
            AuthorityType::MintTokens,
            None,
        )
    }
}
