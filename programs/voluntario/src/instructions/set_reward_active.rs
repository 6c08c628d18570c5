use crate::{
    constants::REWARD_SEED, errors::VoluntarioError, events::RewardStatusChanged, state::Reward,
};
use anchor_lang::prelude::*;

/// Contextual accounts required for a creator to activate or deactivate a reward.
#[derive(Accounts)]
#[instruction(reward_id: u64)]
pub struct SetRewardActive<'info> {
    #[account(
        mut,
        seeds = [REWARD_SEED, reward_id.to_be_bytes().as_ref()],
        bump = reward.bump,
    )]
    pub reward: Account<'info, Reward>,

    #[account(address = reward.creator @ VoluntarioError::NotRewardCreator)]
    pub creator: Signer<'info>,
}

/// Handles toggling a reward. Cost and creator are left untouched.
pub fn set_reward_active_handler(
    ctx: Context<SetRewardActive>,
    reward_id: u64,
    active: bool,
) -> Result<()> {
    let creator = ctx.accounts.creator.key();
    ctx.accounts.reward.set_active(creator, active)?;

    emit!(RewardStatusChanged { reward_id, active });
    msg!("Reward {} active: {}", reward_id, active);

    Ok(())
}
