//! Canonical addresses for every account the faucet touches.
//!
//! All of them are computed from fixed seeds and the program id, so clients
//! and the program agree on them without any on-chain directory.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;

use crate::constants::{CONFIG_SEED, MINT_AUTHORITY_SEED, MINT_SEED};

/// Keyless mint authority — seeds: [b"mint_authority"]
pub fn find_mint_authority_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_AUTHORITY_SEED], program_id)
}

/// Token mint — seeds: [b"mint", mint_authority]
pub fn find_mint_address(program_id: &Pubkey) -> (Pubkey, u8) {
    let (mint_authority, _) = find_mint_authority_address(program_id);
    Pubkey::find_program_address(&[MINT_SEED, mint_authority.as_ref()], program_id)
}

/// Singleton config — seeds: [b"config"]
pub fn find_config_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED], program_id)
}

/// Token-2022 associated token account for `owner` and `mint`.
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, &anchor_spl::token_2022::ID)
}
