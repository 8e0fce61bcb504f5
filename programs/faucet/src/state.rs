use anchor_lang::prelude::*;

use crate::constants::ANCHOR_DISCRIMINATOR_SIZE;
use crate::errors::FaucetError;
use crate::instructions::scale_amount;

/// Singleton faucet configuration — PDA seeds: [b"config"]
///
/// Written once by `initialize` and only read afterwards.  `claim_amount` is
/// the single source of truth for how much a claim transfers; callers never
/// pass an amount of their own.
#[account]
#[derive(Debug, InitSpace)]
pub struct Config {
    /// Wallet that ran `initialize`
    pub admin: Pubkey,

    /// Token-2022 mint (PDA seeds: [b"mint", mint_authority])
    pub mint: Pubkey,

    /// Whole tokens per claim; scaled by `decimals` at transfer time
    pub claim_amount: u64,

    /// Mint decimals captured at initialization
    pub decimals: u8,

    /// Canonical bump of the mint authority PDA, used to sign pool transfers
    pub mint_authority_bump: u8,
}

impl Config {
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR_SIZE + Self::INIT_SPACE;

    /// Raw token units moved by a single claim.
    pub fn claim_amount_raw(&self) -> Result<u64> {
        scale_amount(self.claim_amount, self.decimals)
            .ok_or_else(|| error!(FaucetError::InvalidAmount))
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

#[event]
pub struct FaucetInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub mint_authority: Pubkey,
    /// Raw units minted into the pool
    pub initial_supply: u64,
    /// Whole tokens per claim
    pub claim_amount: u64,
}

#[event]
pub struct TokensClaimed {
    pub claimant: Pubkey,
    /// Raw units transferred
    pub amount: u64,
    /// Raw units left in the pool after this claim
    pub pool_remaining: u64,
    /// True when this claim created the claimant's token account
    pub account_created: bool,
}
