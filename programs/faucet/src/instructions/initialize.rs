use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::{self, AssociatedToken, Create},
    token_interface::{initialize_mint2, mint_to, InitializeMint2, MintTo, Token2022},
};

use crate::constants::*;
use crate::errors::FaucetError;
use crate::instructions::{
    create_pda_account, is_live, mint_account_len, rent_shortfall, require_funds,
    scale_amount, token_account_len,
};
use crate::pda::associated_token_address;
use crate::state::{Config, FaucetInitialized};

/// One-time setup: creates the mint, the pool token account and the config.
///
/// Every derived account is pinned by seeds or address here; whether they
/// already exist is decided in the handler so a repeat call fails with
/// `AlreadyInitialized` instead of a generic "account in use".
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Payer; recorded as the faucet admin.
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: keyless PDA that holds no data — seeds: [b"mint_authority"]
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// CHECK: created by the handler — seeds: [b"mint", mint_authority]
    #[account(
        mut,
        seeds = [MINT_SEED, mint_authority.key().as_ref()],
        bump
    )]
    pub mint: UncheckedAccount<'info>,

    /// CHECK: the pool; created by the handler through the associated token program
    #[account(
        mut,
        address = associated_token_address(&mint_authority.key(), &mint.key()),
    )]
    pub mint_authority_token_account: UncheckedAccount<'info>,

    /// CHECK: created and written by the handler — seeds: [b"config"]
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token2022>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    initial_supply: u64,
    claim_amount: Option<u64>,
) -> Result<()> {
    let accounts = &ctx.accounts;
    let bumps = &ctx.bumps;

    require!(
        !is_live(&accounts.mint) && !is_live(&accounts.config),
        FaucetError::AlreadyInitialized
    );

    require!(initial_supply > 0, FaucetError::InvalidAmount);
    let claim_amount = claim_amount.unwrap_or(DEFAULT_CLAIM_AMOUNT);
    require!(
        claim_amount > 0 && scale_amount(claim_amount, DECIMALS).is_some(),
        FaucetError::InvalidAmount
    );

    // Fail early with a typed error rather than inside a system program CPI
    let mint_len = mint_account_len()?;
    let required = [
        rent_shortfall(&accounts.mint, mint_len)?,
        rent_shortfall(&accounts.mint_authority_token_account, token_account_len()?)?,
        rent_shortfall(&accounts.config, Config::SPACE)?,
    ]
    .iter()
    .try_fold(0u64, |sum, lamports| sum.checked_add(*lamports))
    .ok_or(FaucetError::InsufficientFunds)?;
    require_funds(&accounts.signer, required, FaucetError::InsufficientFunds)?;

    let signer = accounts.signer.to_account_info();
    let system_program = accounts.system_program.to_account_info();
    let token_program = accounts.token_program.to_account_info();
    let mint_authority = accounts.mint_authority.key();

    // Mint — decimals fixed, the PDA is the only mint authority, no freeze authority
    create_pda_account(
        &signer,
        &accounts.mint,
        &system_program,
        mint_len,
        token_program.key,
        &[&[MINT_SEED, mint_authority.as_ref(), &[bumps.mint]]],
    )?;
    initialize_mint2(
        CpiContext::new(
            token_program.clone(),
            InitializeMint2 {
                mint: accounts.mint.to_account_info(),
            },
        ),
        DECIMALS,
        &mint_authority,
        None,
    )?;

    // Pool — the mint authority's associated token account
    associated_token::create(CpiContext::new(
        accounts.associated_token_program.to_account_info(),
        Create {
            payer: signer.clone(),
            associated_token: accounts.mint_authority_token_account.to_account_info(),
            authority: accounts.mint_authority.to_account_info(),
            mint: accounts.mint.to_account_info(),
            system_program: system_program.clone(),
            token_program: token_program.clone(),
        },
    ))?;

    // PDA signs the one and only mint
    let authority_seeds: &[&[&[u8]]] = &[&[MINT_AUTHORITY_SEED, &[bumps.mint_authority]]];
    mint_to(
        CpiContext::new_with_signer(
            token_program.clone(),
            MintTo {
                mint: accounts.mint.to_account_info(),
                to: accounts.mint_authority_token_account.to_account_info(),
                authority: accounts.mint_authority.to_account_info(),
            },
            authority_seeds,
        ),
        initial_supply,
    )?;
    msg!("Minted {} raw units into the pool", initial_supply);

    create_pda_account(
        &signer,
        &accounts.config,
        &system_program,
        Config::SPACE,
        ctx.program_id,
        &[&[CONFIG_SEED, &[bumps.config]]],
    )?;
    let config = Config {
        admin: accounts.signer.key(),
        mint: accounts.mint.key(),
        claim_amount,
        decimals: DECIMALS,
        mint_authority_bump: bumps.mint_authority,
    };
    {
        let mut data = accounts.config.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        config.try_serialize(&mut writer)?;
    }

    emit!(FaucetInitialized {
        admin: config.admin,
        mint: config.mint,
        mint_authority,
        initial_supply,
        claim_amount,
    });

    Ok(())
}
