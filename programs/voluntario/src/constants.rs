use anchor_lang::constant;

/// The length of the discriminator for an Anchor account.
pub const DISCRIMINATOR_LENGHT: usize = 8;

/// Seed for the token configuration PDA, which is also the mint authority.
#[constant]
pub const TOKEN_CONFIG_SEED: &[u8] = b"token_config";

/// Seed for the VoluntarioToken mint PDA.
#[constant]
pub const VOLUNTARIO_MINT_SEED: &[u8] = b"voluntario_mint";

/// Seed for a minter role PDA, followed by the holder's key.
#[constant]
pub const MINTER_SEED: &[u8] = b"minter";

/// Seed for the attendance validation authority.
#[constant]
pub const VALIDATOR_SEED: &[u8] = b"validator";

#[constant]
pub const EVENT_REGISTRY_SEED: &[u8] = b"event_registry";

#[constant]
pub const EVENT_SEED: &[u8] = b"event";

#[constant]
pub const ROSTER_SEED: &[u8] = b"roster";

#[constant]
pub const REGISTRATION_SEED: &[u8] = b"registration";

#[constant]
pub const REWARD_CATALOG_SEED: &[u8] = b"reward_catalog";

#[constant]
pub const REWARD_SEED: &[u8] = b"reward";

/// Seed for the redemption authority. It owns the treasury token account and
/// spends redeemers' tokens as their approved delegate.
#[constant]
pub const REDEMPTION_SEED: &[u8] = b"redemption";

/// Seed for an allowance PDA, followed by the owner's and the spender's keys.
#[constant]
pub const ALLOWANCE_SEED: &[u8] = b"allowance";

/// Seed for the transfer authority. Holders approve it as the SPL delegate of
/// their token account and it signs every spend made on an allowance.
#[constant]
pub const TRANSFER_AUTHORITY_SEED: &[u8] = b"transfer_authority";

#[constant]
pub const TOKEN_DECIMALS: u8 = 9;

pub const MAX_TITLE_LEN: usize = 64;
pub const MAX_SHORT_DESCRIPTION_LEN: usize = 160;
pub const MAX_LONG_DESCRIPTION_LEN: usize = 1000;
pub const MAX_URL_LEN: usize = 200;
pub const MAX_DATE_LEN: usize = 32;
pub const MAX_LOCATION_LEN: usize = 100;
pub const MAX_CATEGORY_LEN: usize = 32;
pub const MAX_REWARD_DESCRIPTION_LEN: usize = 280;
pub const MAX_PROVIDER_LEN: usize = 64;

pub const MAX_NAME_LEN: usize = 64;
pub const MAX_EMAIL_LEN: usize = 100;
pub const MAX_PHONE_LEN: usize = 32;

/// Return data is capped at 1 KiB, so list queries are paged. A full
/// `VolunteerRecord` takes up to 241 bytes.
pub const VOLUNTEER_PAGE_LEN: usize = 4;

pub const SUMMARY_PAGE_LEN: usize = 8;
