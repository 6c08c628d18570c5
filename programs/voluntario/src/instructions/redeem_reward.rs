use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::{
        ALLOWANCE_SEED, DISCRIMINATOR_LENGHT, REDEMPTION_SEED, REWARD_SEED, TOKEN_CONFIG_SEED,
        TRANSFER_AUTHORITY_SEED,
    },
    events::RewardRedeemed,
    ledger::{DelegatedTransfer, TokenPosition},
    state::{Allowance, Reward, TokenConfig},
};

/// Contextual accounts required to redeem a reward for tokens.
#[derive(Accounts)]
#[instruction(reward_id: u64)]
pub struct RedeemReward<'info> {
    #[account(
        mut,
        seeds = [REWARD_SEED, reward_id.to_be_bytes().as_ref()],
        bump = reward.bump,
    )]
    pub reward: Account<'info, Reward>,

    /// The redeemer. Pays for the treasury token account the first time.
    #[account(mut)]
    pub redeemer: Signer<'info>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = redeemer,
        associated_token::token_program = token_program,
    )]
    pub redeemer_tokens: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: PDA that owns the treasury. Redeemers approve it as their
    /// spender beforehand.
    #[account(seeds = [REDEMPTION_SEED], bump)]
    pub redemption_authority: UncheckedAccount<'info>,

    /// The redeemer's allowance for the redemption authority. Redeemers that
    /// never approved it get an empty one, which fails the allowance check.
    #[account(
        init_if_needed,
        payer = redeemer,
        space = DISCRIMINATOR_LENGHT + Allowance::INIT_SPACE,
        seeds = [
            ALLOWANCE_SEED,
            redeemer.key().as_ref(),
            redemption_authority.key().as_ref()
        ],
        bump,
    )]
    pub allowance: Account<'info, Allowance>,

    /// CHECK: PDA delegate of the redeemer's token account; signs the transfer.
    #[account(seeds = [TRANSFER_AUTHORITY_SEED], bump)]
    pub transfer_authority: UncheckedAccount<'info>,

    /// Receives the tokens of every redemption.
    #[account(
        init_if_needed,
        payer = redeemer,
        associated_token::mint = mint,
        associated_token::authority = redemption_authority,
        associated_token::token_program = token_program,
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    #[account(
        seeds = [TOKEN_CONFIG_SEED],
        bump = token_config.bump,
        has_one = mint,
    )]
    pub token_config: Account<'info, TokenConfig>,

    pub mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Handles a redemption.
///
/// Checks, in order: the reward is active, the redeemer holds at least the
/// cost, and the redemption authority is approved for at least the cost. The
/// cost then moves from the redeemer to the treasury and is charged to the
/// allowance.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `reward_id` - The id of the reward, used for PDA validation.
pub fn redeem_reward_handler(ctx: Context<RedeemReward>, reward_id: u64) -> Result<()> {
    let token_cost = ctx.accounts.reward.token_cost;
    ctx.accounts.reward.ensure_active()?;

    let position = TokenPosition::of(&ctx.accounts.redeemer_tokens)
        .with_allowance(&ctx.accounts.allowance);
    position.ensure_balance(token_cost)?;
    position.ensure_allowance(token_cost)?;

    DelegatedTransfer {
        token_program: &ctx.accounts.token_program,
        mint: &ctx.accounts.mint,
        from: &ctx.accounts.redeemer_tokens,
        to: &ctx.accounts.treasury,
        transfer_authority: &ctx.accounts.transfer_authority,
        transfer_authority_bump: ctx.bumps.transfer_authority,
    }
    .execute(token_cost)?;

    let redeemer = ctx.accounts.redeemer.key();
    let spender = ctx.accounts.redemption_authority.key();
    let allowance = &mut ctx.accounts.allowance;
    allowance.bind(redeemer, spender, ctx.bumps.allowance);
    allowance.spend(token_cost)?;

    ctx.accounts.reward.record_redemption()?;

    emit!(RewardRedeemed {
        redeemer,
        reward_id,
        token_cost,
    });
    msg!("Reward {} redeemed by {}", reward_id, redeemer);

    Ok(())
}
