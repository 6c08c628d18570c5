use anchor_lang::prelude::*;
use anchor_spl::token_interface::{approve, Approve, Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{ALLOWANCE_SEED, DISCRIMINATOR_LENGHT, TOKEN_CONFIG_SEED, TRANSFER_AUTHORITY_SEED},
    events::SpenderApproved,
    state::{Allowance, TokenConfig},
};

/// Contextual accounts required for a holder to set a spender's allowance.
#[derive(Accounts)]
pub struct ApproveSpender<'info> {
    #[account(
        seeds = [TOKEN_CONFIG_SEED],
        bump = token_config.bump,
        has_one = mint,
    )]
    pub token_config: Account<'info, TokenConfig>,

    pub mint: InterfaceAccount<'info, Mint>,

    /// The holder. Pays for the allowance account the first time.
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_tokens: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Any key may be approved, including the redemption authority PDA.
    pub spender: UncheckedAccount<'info>,

    /// The allowance of `spender` over the owner's tokens. Allowances of other
    /// spenders live in their own accounts and are left untouched.
    #[account(
        init_if_needed,
        payer = owner,
        space = DISCRIMINATOR_LENGHT + Allowance::INIT_SPACE,
        seeds = [ALLOWANCE_SEED, owner.key().as_ref(), spender.key().as_ref()],
        bump,
    )]
    pub allowance: Account<'info, Allowance>,

    /// CHECK: PDA that becomes the SPL delegate of the owner's token account.
    #[account(seeds = [TRANSFER_AUTHORITY_SEED], bump)]
    pub transfer_authority: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Sets the allowance of `spender` over the owner's tokens to `amount`.
///
/// The new amount replaces the previous allowance instead of adding to it. The
/// token account itself delegates to the transfer authority, which only moves
/// tokens after the program has checked and charged an allowance.
pub fn approve_spender_handler(ctx: Context<ApproveSpender>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let spender = ctx.accounts.spender.key();

    ctx.accounts
        .allowance
        .approve(owner, spender, amount, ctx.bumps.allowance);

    approve(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Approve {
                to: ctx.accounts.owner_tokens.to_account_info(),
                delegate: ctx.accounts.transfer_authority.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        u64::MAX,
    )?;

    emit!(SpenderApproved {
        owner,
        spender,
        amount,
    });
    msg!("{} approved {} to spend {}", owner, spender, amount);

    Ok(())
}
