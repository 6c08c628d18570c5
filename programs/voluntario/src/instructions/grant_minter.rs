use anchor_lang::prelude::*;

use crate::{
    constants::{DISCRIMINATOR_LENGHT, MINTER_SEED, TOKEN_CONFIG_SEED},
    errors::VoluntarioError,
    events::MinterGranted,
    state::{MinterRole, TokenConfig},
};

/// Contextual accounts required for the role admin to grant the minter role.
#[derive(Accounts)]
#[instruction(holder: Pubkey)]
pub struct GrantMinter<'info> {
    #[account(
        seeds = [TOKEN_CONFIG_SEED],
        bump = token_config.bump,
    )]
    pub token_config: Account<'info, TokenConfig>,

    /// The role account of `holder`. Granting an already held role keeps it.
    #[account(
        init_if_needed,
        payer = admin,
        space = DISCRIMINATOR_LENGHT + MinterRole::INIT_SPACE,
        seeds = [MINTER_SEED, holder.as_ref()],
        bump,
    )]
    pub minter_role: Account<'info, MinterRole>,

    #[account(mut, address = token_config.admin @ VoluntarioError::NotTokenAdmin)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Grants the minter role to `holder`, which may be a wallet or a PDA such as
/// the attendance validation authority.
pub fn grant_minter_handler(ctx: Context<GrantMinter>, holder: Pubkey) -> Result<()> {
    let minter_role = &mut ctx.accounts.minter_role;
    minter_role.holder = holder;
    minter_role.granted_by = ctx.accounts.admin.key();
    minter_role.bump = ctx.bumps.minter_role;

    emit!(MinterGranted {
        holder,
        granted_by: minter_role.granted_by,
    });
    msg!("Minter role granted to {}", holder);

    Ok(())
}
