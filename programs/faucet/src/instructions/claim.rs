use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::{self, AssociatedToken, Create},
    token_interface::{transfer_checked, Token2022, TransferChecked},
};

use crate::constants::*;
use crate::errors::FaucetError;
use crate::instructions::{
    debit_pool, is_live, read_mint_decimals, read_token_balance, rent_shortfall,
    require_funds, token_account_len,
};
use crate::pda::associated_token_address;
use crate::state::{Config, TokensClaimed};

/// Claim `config.claim_amount` tokens from the pool.
///
/// No amount is taken from the caller.  The claimant's associated token
/// account is created on first claim.  There is no per-wallet limit; anyone
/// can keep claiming until the pool runs dry.
#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: deserialized in the handler so a missing config reports
    /// `NotInitialized` — seeds: [b"config"]
    #[account(
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: UncheckedAccount<'info>,

    /// CHECK: keyless PDA, signs pool transfers — seeds: [b"mint_authority"]
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// CHECK: unpacked in the handler — seeds: [b"mint", mint_authority]
    #[account(
        seeds = [MINT_SEED, mint_authority.key().as_ref()],
        bump
    )]
    pub mint: UncheckedAccount<'info>,

    /// CHECK: the pool; unpacked in the handler
    #[account(
        mut,
        address = associated_token_address(&mint_authority.key(), &mint.key()),
    )]
    pub mint_authority_token_account: UncheckedAccount<'info>,

    /// CHECK: claimant's associated token account, created here if missing
    #[account(
        mut,
        address = associated_token_address(&signer.key(), &mint.key()),
    )]
    pub signer_token_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token2022>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

fn load_config(account: &AccountInfo, program_id: &Pubkey) -> Result<Config> {
    require!(
        is_live(account) && account.owner == program_id,
        FaucetError::NotInitialized
    );
    let data = account.try_borrow_data()?;
    Config::try_deserialize(&mut &data[..])
}

pub fn handler(ctx: Context<Claim>) -> Result<()> {
    let accounts = &ctx.accounts;
    let config = load_config(&accounts.config, ctx.program_id)?;
    require_keys_eq!(config.mint, accounts.mint.key(), FaucetError::UnauthorizedSigner);

    let mint_authority = accounts.mint_authority.key();
    let decimals = read_mint_decimals(&accounts.mint, &mint_authority)?;
    let amount = config.claim_amount_raw()?;

    // Checked here so an empty pool never reaches the token program
    let pool_balance = read_token_balance(&accounts.mint_authority_token_account, &mint_authority)?;
    let pool_remaining = debit_pool(pool_balance, amount)?;

    let account_created = !is_live(&accounts.signer_token_account);
    if account_created {
        let shortfall = rent_shortfall(&accounts.signer_token_account, token_account_len()?)?;
        require_funds(&accounts.signer, shortfall, FaucetError::AccountCreationFailed)?;

        associated_token::create(CpiContext::new(
            accounts.associated_token_program.to_account_info(),
            Create {
                payer: accounts.signer.to_account_info(),
                associated_token: accounts.signer_token_account.to_account_info(),
                authority: accounts.signer.to_account_info(),
                mint: accounts.mint.to_account_info(),
                system_program: accounts.system_program.to_account_info(),
                token_program: accounts.token_program.to_account_info(),
            },
        ))?;
        msg!("Created token account {}", accounts.signer_token_account.key());
    }

    // PDA signs the transfer out of the pool
    let authority_seeds: &[&[&[u8]]] = &[&[MINT_AUTHORITY_SEED, &[config.mint_authority_bump]]];
    transfer_checked(
        CpiContext::new_with_signer(
            accounts.token_program.to_account_info(),
            TransferChecked {
                from: accounts.mint_authority_token_account.to_account_info(),
                mint: accounts.mint.to_account_info(),
                to: accounts.signer_token_account.to_account_info(),
                authority: accounts.mint_authority.to_account_info(),
            },
            authority_seeds,
        ),
        amount,
        decimals,
    )?;
    msg!("Claimed {} raw units, {} left in pool", amount, pool_remaining);

    emit!(TokensClaimed {
        claimant: accounts.signer.key(),
        amount,
        pool_remaining,
        account_created,
    });

    Ok(())
}
