use anchor_lang::prelude::*;
use anchor_spl::token_interface::{burn, Burn, Mint, TokenAccount, TokenInterface};

use crate::{
    constants::TOKEN_CONFIG_SEED, events::TokensBurned, ledger::TokenPosition,
    state::TokenConfig,
};

/// Contextual accounts required for a holder to burn its own tokens.
#[derive(Accounts)]
pub struct BurnTokens<'info> {
    #[account(
        seeds = [TOKEN_CONFIG_SEED],
        bump = token_config.bump,
        has_one = mint,
    )]
    pub token_config: Account<'info, TokenConfig>,

    #[account(mut, mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    pub holder: Signer<'info>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = holder,
        associated_token::token_program = token_program,
    )]
    pub holder_tokens: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Burns `amount` base units from the holder, decreasing the total supply.
pub fn burn_tokens_handler(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
    TokenPosition::of(&ctx.accounts.holder_tokens).ensure_balance(amount)?;

    burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.mint.to_account_info(),
                from: ctx.accounts.holder_tokens.to_account_info(),
                authority: ctx.accounts.holder.to_account_info(),
            },
        ),
        amount,
    )?;

    let holder = ctx.accounts.holder.key();
    emit!(TokensBurned { holder, amount });
    msg!("{} burned {}", holder, amount);

    Ok(())
}
