//! In-process harness around the built SBF program. Requires
//! `cargo build-sbf` output, which `cargo test-sbf` provides.

#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::{
    prelude::Pubkey,
    solana_program::instruction::{AccountMeta, Instruction},
    system_program, AccountDeserialize, InstructionData, ToAccountMetas,
};
use anchor_spl::{associated_token, token};
use assetlinc_solana::{accounts, instruction, CONFIG_SEED, NFT_DATA_SEED, USER_DATA_SEED};
use mollusk_svm::{
    program::keyed_account_for_system_program,
    result::{InstructionResult, ProgramResult},
    Mollusk,
};
use solana_sdk::{account::Account, program_error::ProgramError};

pub const START: i64 = 1_720_000_000;
pub const ONE_SOL: u64 = 1_000_000_000;

pub struct TestContext {
    pub mollusk: Mollusk,
    pub store: HashMap<Pubkey, Account>,
    pub authority: Pubkey,
    pub fee_receiver: Pubkey,
}

impl TestContext {
    /// Loads the program and token programs, funds an authority and a fee
    /// receiver, and runs `initialize`.
    pub fn new() -> Self {
        let mut mollusk = Mollusk::new(&assetlinc_solana::ID, "assetlinc_solana");
        mollusk_svm_programs_token::token::add_program(&mut mollusk);
        mollusk_svm_programs_token::associated_token::add_program(&mut mollusk);
        mollusk.sysvars.clock.unix_timestamp = START;

        let mut ctx = Self {
            mollusk,
            store: HashMap::new(),
            authority: Pubkey::new_unique(),
            fee_receiver: Pubkey::new_unique(),
        };
        let (authority, fee_receiver) = (ctx.authority, ctx.fee_receiver);
        ctx.fund(&authority, 10 * ONE_SOL);
        ctx.fund(&fee_receiver, ONE_SOL);

        let ix = initialize_ix(&authority, &fee_receiver);
        assert_success(&ctx.process(&ix));
        ctx
    }

    pub fn fund(&mut self, key: &Pubkey, lamports: u64) {
        self.store.insert(
            *key,
            Account::new(lamports, 0, &system_program::ID),
        );
    }

    pub fn new_user(&mut self) -> Pubkey {
        let user = Pubkey::new_unique();
        self.fund(&user, 10 * ONE_SOL);
        user
    }

    pub fn advance_clock(&mut self, seconds: i64) {
        self.mollusk.sysvars.clock.unix_timestamp += seconds;
    }

    pub fn now(&self) -> i64 {
        self.mollusk.sysvars.clock.unix_timestamp
    }

    pub fn account(&self, key: &Pubkey) -> Account {
        if *key == system_program::ID {
            keyed_account_for_system_program().1
        } else if *key == token::ID {
            mollusk_svm_programs_token::token::keyed_account().1
        } else if *key == associated_token::ID {
            mollusk_svm_programs_token::associated_token::keyed_account().1
        } else {
            self.store.get(key).cloned().unwrap_or_default()
        }
    }

    pub fn lamports(&self, key: &Pubkey) -> u64 {
        self.account(key).lamports
    }

    pub fn state<T: AccountDeserialize>(&self, key: &Pubkey) -> T {
        let account = self
            .store
            .get(key)
            .unwrap_or_else(|| panic!("account {key} does not exist"));
        T::try_deserialize(&mut account.data.as_slice()).expect("should deserialize")
    }

    /// Runs one instruction against the store. Account changes are kept only
    /// when the instruction succeeds, as a failed transaction would.
    pub fn process(&mut self, ix: &Instruction) -> InstructionResult {
        let mut accounts: Vec<(Pubkey, Account)> = Vec::new();
        for meta in &ix.accounts {
            if !accounts.iter().any(|(key, _)| *key == meta.pubkey) {
                accounts.push((meta.pubkey, self.account(&meta.pubkey)));
            }
        }

        let result = self.mollusk.process_instruction(ix, &accounts);
        if !result.program_result.is_err() {
            for (key, account) in &result.resulting_accounts {
                self.store.insert(*key, account.clone());
            }
        }
        result
    }
}

pub fn assert_success(result: &InstructionResult) {
    assert!(
        !result.program_result.is_err(),
        "instruction failed: {:?}",
        result.program_result
    );
}

pub fn assert_error(result: &InstructionResult, code: u32) {
    match &result.program_result {
        ProgramResult::Failure(ProgramError::Custom(actual)) => assert_eq!(*actual, code),
        other => panic!("expected custom error {code}, got {other:?}"),
    }
}

pub fn config_address() -> Pubkey {
    Pubkey::find_program_address(&[CONFIG_SEED.as_bytes()], &assetlinc_solana::ID).0
}

pub fn user_data_address(user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[USER_DATA_SEED.as_bytes(), user.as_ref()],
        &assetlinc_solana::ID,
    )
}

pub fn nft_data_address(user: &Pubkey, asset_name: &str) -> Pubkey {
    Pubkey::find_program_address(
        &[NFT_DATA_SEED.as_bytes(), user.as_ref(), asset_name.as_bytes()],
        &assetlinc_solana::ID,
    )
    .0
}

fn with_signers(mut metas: Vec<AccountMeta>, signers: &[Pubkey]) -> Vec<AccountMeta> {
    for meta in metas.iter_mut() {
        if signers.contains(&meta.pubkey) {
            meta.is_signer = true;
        }
    }
    metas
}

pub fn initialize_ix(authority: &Pubkey, fee_receiver: &Pubkey) -> Instruction {
    Instruction {
        program_id: assetlinc_solana::ID,
        accounts: accounts::Initialize {
            authority: *authority,
            config: config_address(),
            fee_receiver: *fee_receiver,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::Initialize.data(),
    }
}

pub fn update_config_ix(
    authority: &Pubkey,
    new_fee_receiver: Option<Pubkey>,
    is_paused: Option<bool>,
) -> Instruction {
    Instruction {
        program_id: assetlinc_solana::ID,
        accounts: with_signers(
            accounts::UpdateConfig {
                authority: *authority,
                config: config_address(),
            }
            .to_account_metas(None),
            &[*authority],
        ),
        data: instruction::UpdateConfig {
            new_fee_receiver,
            is_paused,
        }
        .data(),
    }
}

pub fn manage_subscription_ix(user: &Pubkey, fee_receiver: &Pubkey, tier: u8) -> Instruction {
    Instruction {
        program_id: assetlinc_solana::ID,
        accounts: with_signers(
            accounts::ManageSubscription {
                user: *user,
                user_data: user_data_address(user).0,
                config: config_address(),
                fee_receiver: *fee_receiver,
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            &[*user],
        ),
        data: instruction::ManageSubscription {
            subscription_tier: tier,
        }
        .data(),
    }
}

pub fn check_subscription_ix(user: &Pubkey) -> Instruction {
    Instruction {
        program_id: assetlinc_solana::ID,
        accounts: accounts::CheckSubscription {
            user_data: user_data_address(user).0,
        }
        .to_account_metas(None),
        data: instruction::CheckSubscription.data(),
    }
}

pub fn register_asset_ix(
    user: &Pubkey,
    fee_receiver: &Pubkey,
    nft_mint: &Pubkey,
    nft_data: &Pubkey,
    asset_name: &str,
    asset_value: u64,
) -> Instruction {
    Instruction {
        program_id: assetlinc_solana::ID,
        accounts: with_signers(
            accounts::RegisterAsset {
                user: *user,
                config: config_address(),
                nft_data: *nft_data,
                nft_mint: *nft_mint,
                nft_token_account: associated_token::get_associated_token_address(
                    user, nft_mint,
                ),
                fee_receiver: *fee_receiver,
                token_program: token::ID,
                associated_token_program: associated_token::ID,
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            &[*user, *nft_mint],
        ),
        data: instruction::RegisterAssetAsNft {
            asset_name: asset_name.to_string(),
            asset_value,
        }
        .data(),
    }
}
