use anchor_lang::prelude::*;

#[error_code]
pub enum FaucetError {
    #[msg("Faucet is already initialized — mint and config exist")]
    AlreadyInitialized,

    #[msg("Faucet has not been initialized")]
    NotInitialized,

    #[msg("Amount is zero or overflows once scaled by the token decimals")]
    InvalidAmount,

    #[msg("Signer cannot cover the rent for the faucet accounts")]
    InsufficientFunds,

    #[msg("Faucet pool holds less than one claim")]
    InsufficientPoolBalance,

    #[msg("Signer cannot cover the rent for their token account")]
    AccountCreationFailed,

    #[msg("Mint or pool is not controlled by the derived mint authority")]
    UnauthorizedSigner,
}
