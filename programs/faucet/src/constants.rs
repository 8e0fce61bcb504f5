/// PDA seed for the keyless mint authority (also the owner of the pool).
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint_authority";

/// PDA seed for the mint, combined with the mint authority address.
pub const MINT_SEED: &[u8] = b"mint";

/// PDA seed for the singleton config record.
pub const CONFIG_SEED: &[u8] = b"config";

/// Token decimals — 9, same display precision as SOL.
pub const DECIMALS: u8 = 9;

/// Whole tokens handed out per claim when `initialize` is given no override.
pub const DEFAULT_CLAIM_AMOUNT: u64 = 10_000;

/// Anchor account discriminator length
pub const ANCHOR_DISCRIMINATOR_SIZE: usize = 8;
