pub mod claim;
pub mod initialize;

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};
use anchor_spl::token_2022::spl_token_2022::{
    extension::{ExtensionType, StateWithExtensions},
    state::{Account as TokenAccountState, Mint as MintState},
};

use crate::errors::FaucetError;

// ── Amount math ───────────────────────────────────────────────────────────────

/// Converts whole tokens into raw units: `amount × 10^decimals`.
/// Returns `None` if the result does not fit in a u64.
pub fn scale_amount(amount: u64, decimals: u8) -> Option<u64> {
    10u64
        .checked_pow(u32::from(decimals))
        .and_then(|factor| amount.checked_mul(factor))
}

/// Pool balance after paying out `amount`.  A short pool is rejected up
/// front instead of relying on the token program's own check.
pub fn debit_pool(balance: u64, amount: u64) -> Result<u64> {
    require_gte!(balance, amount, FaucetError::InsufficientPoolBalance);
    Ok(balance - amount)
}

// ── Account lifecycle ─────────────────────────────────────────────────────────

/// True once an account has been allocated or handed to a program.
/// A bare lamport balance sitting on a system account does not count.
pub fn is_live(account: &AccountInfo) -> bool {
    !account.data_is_empty() || account.owner != &system_program::ID
}

/// Lamports still needed for `account` to be rent exempt at `space` bytes.
pub fn rent_shortfall(account: &AccountInfo, space: usize) -> Result<u64> {
    Ok(Rent::get()?
        .minimum_balance(space)
        .saturating_sub(account.lamports()))
}

/// Checks that `payer` can spend `shortfall` lamports and still be a valid
/// system account afterwards: either drained to zero or left rent exempt.
/// Otherwise the runtime would abort with `InsufficientFundsForRent` and the
/// caller would never see `error`.
pub fn require_funds(payer: &AccountInfo, shortfall: u64, error: FaucetError) -> Result<()> {
    let floor = Rent::get()?.minimum_balance(0);
    let lamports = payer.lamports();
    let funded = lamports == shortfall
        || shortfall
            .checked_add(floor)
            .is_some_and(|needed| lamports >= needed);
    if !funded {
        msg!(
            "Payer holds {} lamports, needs {} plus {} to stay rent exempt",
            lamports,
            shortfall,
            floor
        );
        return Err(error.into());
    }
    Ok(())
}

/// Size of an unextended Token-2022 mint.
pub fn mint_account_len() -> Result<usize> {
    Ok(ExtensionType::try_calculate_account_len::<MintState>(&[])?)
}

/// Size of a Token-2022 associated token account (carries ImmutableOwner).
pub fn token_account_len() -> Result<usize> {
    Ok(ExtensionType::try_calculate_account_len::<TokenAccountState>(
        &[ExtensionType::ImmutableOwner],
    )?)
}

/// Creates a PDA owned by `owner`, signing with `signer_seeds`.
///
/// Anyone can send lamports to a PDA before it exists, which makes a plain
/// `create_account` fail.  In that case the balance is topped up and the
/// account is allocated and assigned instead.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let rent_exempt = Rent::get()?.minimum_balance(space);

    if target.lamports() == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer_seeds,
            ),
            rent_exempt,
            space as u64,
            owner,
        );
    }

    let top_up = rent_exempt.saturating_sub(target.lamports());
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            top_up,
        )?;
    }

    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer_seeds,
        ),
        owner,
    )
}

// ── Token state readers ───────────────────────────────────────────────────────

/// Decimals of a live mint, after checking it answers only to `authority`.
pub fn read_mint_decimals(mint: &AccountInfo, authority: &Pubkey) -> Result<u8> {
    let data = mint.try_borrow_data()?;
    let state = StateWithExtensions::<MintState>::unpack(&data)?;
    require!(
        Option::<Pubkey>::from(state.base.mint_authority) == Some(*authority),
        FaucetError::UnauthorizedSigner
    );
    Ok(state.base.decimals)
}

/// Balance of a token account, after checking it belongs to `owner`.
pub fn read_token_balance(account: &AccountInfo, owner: &Pubkey) -> Result<u64> {
    let data = account.try_borrow_data()?;
    let state = StateWithExtensions::<TokenAccountState>::unpack(&data)?;
    require_keys_eq!(state.base.owner, *owner, FaucetError::UnauthorizedSigner);
    Ok(state.base.amount)
}
