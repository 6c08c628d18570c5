use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::{ALLOWANCE_SEED, DISCRIMINATOR_LENGHT, TOKEN_CONFIG_SEED, TRANSFER_AUTHORITY_SEED},
    events::TokensTransferred,
    ledger::{DelegatedTransfer, TokenPosition},
    state::{Allowance, TokenConfig},
};

/// Contextual accounts required for an approved spender to move an owner's tokens.
#[derive(Accounts)]
pub struct TransferFrom<'info> {
    #[account(
        seeds = [TOKEN_CONFIG_SEED],
        bump = token_config.bump,
        has_one = mint,
    )]
    pub token_config: Account<'info, TokenConfig>,

    pub mint: InterfaceAccount<'info, Mint>,

    /// The approved spender. Pays for the recipient's token account if needed.
    #[account(mut)]
    pub spender: Signer<'info>,

    /// CHECK: Only used as the authority of the source token account.
    pub owner: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_tokens: InterfaceAccount<'info, TokenAccount>,

    /// The spender's allowance. A spender that was never approved gets an empty
    /// one, which fails the allowance check.
    #[account(
        init_if_needed,
        payer = spender,
        space = DISCRIMINATOR_LENGHT + Allowance::INIT_SPACE,
        seeds = [ALLOWANCE_SEED, owner.key().as_ref(), spender.key().as_ref()],
        bump,
    )]
    pub allowance: Account<'info, Allowance>,

    /// CHECK: PDA delegate of the owner's token account; signs the transfer.
    #[account(seeds = [TRANSFER_AUTHORITY_SEED], bump)]
    pub transfer_authority: UncheckedAccount<'info>,

    /// CHECK: Only used as the authority of the receiving token account.
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = spender,
        associated_token::mint = mint,
        associated_token::authority = recipient,
        associated_token::token_program = token_program,
    )]
    pub recipient_tokens: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Moves `amount` from `owner` to `recipient` on the spender's allowance.
///
/// The allowance is checked before the balance. Both the allowance and the
/// owner's balance decrease by `amount`.
pub fn transfer_from_handler(ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let spender = ctx.accounts.spender.key();

    let position =
        TokenPosition::of(&ctx.accounts.owner_tokens).with_allowance(&ctx.accounts.allowance);
    position.ensure_allowance(amount)?;
    position.ensure_balance(amount)?;

    DelegatedTransfer {
        token_program: &ctx.accounts.token_program,
        mint: &ctx.accounts.mint,
        from: &ctx.accounts.owner_tokens,
        to: &ctx.accounts.recipient_tokens,
        transfer_authority: &ctx.accounts.transfer_authority,
        transfer_authority_bump: ctx.bumps.transfer_authority,
    }
    .execute(amount)?;

    let allowance = &mut ctx.accounts.allowance;
    allowance.bind(owner, spender, ctx.bumps.allowance);
    allowance.spend(amount)?;

    let recipient = ctx.accounts.recipient.key();
    emit!(TokensTransferred {
        owner,
        spender,
        recipient,
        amount,
    });
    msg!("{} moved {} from {} to {}", spender, amount, owner, recipient);

    Ok(())
}
