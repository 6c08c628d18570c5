use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{mint_to, Mint, MintTo, TokenAccount, TokenInterface},
};

use crate::{
    constants::{MINTER_SEED, TOKEN_CONFIG_SEED},
    errors::VoluntarioError,
    events::TokensMinted,
    state::{MinterRole, TokenConfig},
};

/// Contextual accounts required for a minter to mint VoluntarioTokens.
#[derive(Accounts)]
pub struct MintTokens<'info> {
    #[account(
        seeds = [TOKEN_CONFIG_SEED],
        bump = token_config.bump,
        has_one = mint,
    )]
    pub token_config: Account<'info, TokenConfig>,

    #[account(mut, mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// CHECK: The minter's role PDA. It may be missing, which the handler reports
    /// as a missing role rather than an uninitialized account.
    #[account(seeds = [MINTER_SEED, minter.key().as_ref()], bump)]
    pub minter_role: UncheckedAccount<'info>,

    #[account(mut)]
    pub minter: Signer<'info>,

    /// CHECK: Only used as the authority of the receiving token account.
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = minter,
        associated_token::mint = mint,
        associated_token::authority = recipient,
        associated_token::token_program = token_program,
    )]
    pub recipient_tokens: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Mints `amount` base units to `recipient`, increasing the total supply.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `amount` - Base units to mint.
pub fn mint_tokens_handler(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
    let minter = ctx.accounts.minter.key();
    require!(
        MinterRole::is_held(&ctx.accounts.minter_role.to_account_info(), &minter)?,
        VoluntarioError::MissingMinterRole
    );

    mint_voluntario(
        &ctx.accounts.token_program,
        &ctx.accounts.mint,
        &ctx.accounts.recipient_tokens,
        &ctx.accounts.token_config,
        amount,
    )?;

    let recipient = ctx.accounts.recipient.key();
    emit!(TokensMinted {
        minter,
        recipient,
        amount,
    });
    msg!("Minted {} to {}", amount, recipient);

    Ok(())
}

/// Mints with the token configuration PDA as the signing mint authority.
pub(crate) fn mint_voluntario<'info>(
    token_program: &Interface<'info, TokenInterface>,
    mint: &InterfaceAccount<'info, Mint>,
    to: &InterfaceAccount<'info, TokenAccount>,
    token_config: &Account<'info, TokenConfig>,
    amount: u64,
) -> Result<()> {
    let signer: &[&[&[u8]]] = &[&[TOKEN_CONFIG_SEED, &[token_config.bump]]];

    mint_to(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            MintTo {
                mint: mint.to_account_info(),
                to: to.to_account_info(),
                authority: token_config.to_account_info(),
            },
            signer,
        ),
        amount,
    )
}
