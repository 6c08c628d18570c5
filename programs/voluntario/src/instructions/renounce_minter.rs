use anchor_lang::prelude::*;

use crate::{constants::MINTER_SEED, events::MinterRenounced, state::MinterRole};

/// Contextual accounts required for a minter to give up its own role.
#[derive(Accounts)]
pub struct RenounceMinter<'info> {
    /// The caller's role account. It is closed and its rent returned to the caller.
    #[account(
        mut,
        seeds = [MINTER_SEED, holder.key().as_ref()],
        bump = minter_role.bump,
        close = holder,
    )]
    pub minter_role: Account<'info, MinterRole>,

    #[account(mut)]
    pub holder: Signer<'info>,
}

/// Handles renouncing the minter role. Only the admin can grant it back.
pub fn renounce_minter_handler(ctx: Context<RenounceMinter>) -> Result<()> {
    let holder = ctx.accounts.holder.key();

    emit!(MinterRenounced { holder });
    msg!("Minter role renounced by {}", holder);

    Ok(())
}
