use anchor_lang::prelude::*;
use anchor_lang::solana_program::rent::{
    DEFAULT_EXEMPTION_THRESHOLD, DEFAULT_LAMPORTS_PER_BYTE_YEAR,
};
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::token_interface::{
    token_metadata_initialize, Mint, TokenInterface, TokenMetadataInitialize,
};

use spl_token_metadata_interface::state::TokenMetadata;
use spl_type_length_value::variable_len_pack::VariableLenPack;

use crate::{
    constants::{
        DISCRIMINATOR_LENGHT, MINTER_SEED, TOKEN_CONFIG_SEED, TOKEN_DECIMALS,
        VOLUNTARIO_MINT_SEED,
    },
    errors::VoluntarioError,
    events::TokenInitialized,
    program::Voluntario,
    state::{MinterRole, TokenConfig},
};

const MAX_TOKEN_NAME_LEN: usize = 32;
const MAX_TOKEN_SYMBOL_LEN: usize = 10;
const MAX_TOKEN_URI_LEN: usize = 200;

/// Contextual accounts required to set up the VoluntarioToken.
#[derive(Accounts)]
pub struct InitializeToken<'info> {
    /// Token configuration. Its PDA is the mint authority and metadata update authority.
    #[account(
        init,
        payer = admin,
        space = DISCRIMINATOR_LENGHT + TokenConfig::INIT_SPACE,
        seeds = [TOKEN_CONFIG_SEED],
        bump,
    )]
    pub token_config: Account<'info, TokenConfig>,

    /// The VoluntarioToken mint, carrying its own metadata.
    #[account(
        init,
        payer = admin,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = token_config,
        mint::token_program = token_program,
        extensions::metadata_pointer::authority = token_config,
        extensions::metadata_pointer::metadata_address = mint,
        seeds = [VOLUNTARIO_MINT_SEED],
        bump,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The deployer starts out holding the minter role.
    #[account(
        init,
        payer = admin,
        space = DISCRIMINATOR_LENGHT + MinterRole::INIT_SPACE,
        seeds = [MINTER_SEED, admin.key().as_ref()],
        bump,
    )]
    pub admin_role: Account<'info, MinterRole>,

    /// The deployer, who becomes the role admin. Must be a signer and the
    /// program's upgrade authority.
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(constraint = program.programdata_address()? == Some(program_data.key()))]
    pub program: Program<'info, Voluntario>,

    #[account(
        constraint = program_data.upgrade_authority_address == Some(admin.key())
            @ VoluntarioError::NotUpgradeAuthority,
    )]
    pub program_data: Account<'info, ProgramData>,

    /// The SPL Token 2022 program.
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Handles the one-time token setup.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `name` - Token name stored in the mint metadata.
/// * `symbol` - Token symbol stored in the mint metadata.
/// * `uri` - Off-chain metadata URI.
///
/// # Returns
///
/// An empty `Result` indicating success or failure.
pub fn initialize_token_handler(
    ctx: Context<InitializeToken>,
    name: String,
    symbol: String,
    uri: String,
) -> Result<()> {
    require!(
        name.len() <= MAX_TOKEN_NAME_LEN
            && symbol.len() <= MAX_TOKEN_SYMBOL_LEN
            && uri.len() <= MAX_TOKEN_URI_LEN,
        VoluntarioError::MetadataTooLong
    );

    let admin = ctx.accounts.admin.key();
    let mint = ctx.accounts.mint.key();

    let token_config = &mut ctx.accounts.token_config;
    token_config.admin = admin;
    token_config.mint = mint;
    token_config.bump = ctx.bumps.token_config;

    let admin_role = &mut ctx.accounts.admin_role;
    admin_role.holder = admin;
    admin_role.granted_by = admin;
    admin_role.bump = ctx.bumps.admin_role;

    // The metadata extension grows the mint account, fund the extra rent up front.
    let token_metadata = TokenMetadata {
        name: name.clone(),
        symbol: symbol.clone(),
        uri: uri.clone(),
        ..Default::default()
    };
    let data_len = 4 + token_metadata.get_packed_len()?;
    let lamports =
        data_len as u64 * DEFAULT_LAMPORTS_PER_BYTE_YEAR * DEFAULT_EXEMPTION_THRESHOLD as u64;

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin.to_account_info(),
                to: ctx.accounts.mint.to_account_info(),
            },
        ),
        lamports,
    )?;

    let signer: &[&[&[u8]]] = &[&[TOKEN_CONFIG_SEED, &[ctx.accounts.token_config.bump]]];

    token_metadata_initialize(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TokenMetadataInitialize {
                program_id: ctx.accounts.token_program.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                metadata: ctx.accounts.mint.to_account_info(),
                mint_authority: ctx.accounts.token_config.to_account_info(),
                update_authority: ctx.accounts.token_config.to_account_info(),
            },
            signer,
        ),
        name,
        symbol,
        uri,
    )?;

    emit!(TokenInitialized { mint, admin });
    msg!("VoluntarioToken initialized: {}", mint);

    Ok(())
}
