//! faucet — fixed-amount Token-2022 faucet
//!
//! * `initialize` — creates a 9-decimal mint whose only mint authority is a
//!   keyless PDA, mints the whole supply into that PDA's associated token
//!   account (the pool) and writes the singleton config.  Runs once.
//! * `claim` — moves `config.claim_amount` whole tokens from the pool to the
//!   caller, creating the caller's token account if needed.
//!
//! Every account is found by seeds (see [`pda`]), so clients never need a
//! lookup.  Nothing can mint after `initialize`: there is no instruction that
//! signs a mint as the authority PDA again.

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod pda;
pub mod state;

use instructions::claim::*;
use instructions::initialize::*;

declare_id!("Hwcm5yu8LuaDNTx185yxN5aQBQaDquXQiEKppUUc24uZ");

#[program]
pub mod faucet {
    use super::*;

    /// One-time setup: mint, pool and config.
    /// `claim_amount` is in whole tokens and defaults to 10,000.
    pub fn initialize(
        ctx: Context<Initialize>,
        initial_supply: u64,
        claim_amount: Option<u64>,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, initial_supply, claim_amount)
    }

    /// Claim the configured amount from the pool.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::handler(ctx)
    }
}
