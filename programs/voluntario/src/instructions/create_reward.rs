use crate::{
    constants::{DISCRIMINATOR_LENGHT, REWARD_CATALOG_SEED, REWARD_SEED},
    events::RewardCreated,
    state::{Reward, RewardCatalog, RewardDetails},
};
use anchor_lang::prelude::*;

/// Contextual accounts required to publish a reward in the marketplace.
#[derive(Accounts)]
pub struct CreateReward<'info> {
    /// The reward catalog holding the next reward id.
    /// It is initialized if it does not exist.
    #[account(
        init_if_needed,
        payer = creator,
        space = DISCRIMINATOR_LENGHT + RewardCatalog::INIT_SPACE,
        seeds = [REWARD_CATALOG_SEED],
        bump
    )]
    pub reward_catalog: Account<'info, RewardCatalog>,

    #[account(
        init,
        payer = creator,
        space = DISCRIMINATOR_LENGHT + Reward::INIT_SPACE,
        seeds = [REWARD_SEED, reward_catalog.next_reward_id.to_be_bytes().as_ref()],
        bump,
    )]
    pub reward: Account<'info, Reward>,

    /// The creator of the reward. Only this key can toggle it later.
    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Handles reward creation. New rewards start active.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `token_cost` - Base units charged per redemption.
/// * `details` - The descriptive fields of the reward.
pub fn create_reward_handler(
    ctx: Context<CreateReward>,
    token_cost: u64,
    details: RewardDetails,
) -> Result<()> {
    details.validate()?;

    let reward_catalog = &mut ctx.accounts.reward_catalog;
    if reward_catalog.next_reward_id == 0 {
        reward_catalog.bump = ctx.bumps.reward_catalog;
    }
    let reward_id = reward_catalog.issue_id()?;

    let creator = ctx.accounts.creator.key();

    emit!(RewardCreated {
        reward_id,
        creator,
        title: details.title.clone(),
        token_cost,
        category: details.category.clone(),
    });

    let reward = &mut ctx.accounts.reward;
    reward.id = reward_id;
    reward.creator = creator;
    reward.token_cost = token_cost;
    reward.details = details;
    reward.active = true;
    reward.redemptions = 0;
    reward.bump = ctx.bumps.reward;

    msg!("Reward created: {}", reward_id);

    Ok(())
}
