use anchor_lang::prelude::*;

use crate::{
    constants::{REWARD_CATALOG_SEED, REWARD_SEED, SUMMARY_PAGE_LEN},
    errors::VoluntarioError,
    state::{page_range, try_load, Reward, RewardCatalog, RewardSummary},
};

/// Accounts for the catalog-wide reward queries.
#[derive(Accounts)]
pub struct RewardIndex<'info> {
    /// CHECK: Does not exist until the first reward is created, which reads as zero rewards.
    #[account(seeds = [REWARD_CATALOG_SEED], bump)]
    pub reward_catalog: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(reward_id: u64)]
pub struct RewardLookup<'info> {
    /// CHECK: Absent for ids that were never issued.
    #[account(seeds = [REWARD_SEED, reward_id.to_be_bytes().as_ref()], bump)]
    pub reward: UncheckedAccount<'info>,
}

pub fn total_rewards_handler(ctx: Context<RewardIndex>) -> Result<u64> {
    published_rewards(&ctx.accounts.reward_catalog)
}

pub fn get_reward_handler(ctx: Context<RewardLookup>, _reward_id: u64) -> Result<RewardSummary> {
    let reward =
        try_load::<Reward>(&ctx.accounts.reward)?.ok_or(VoluntarioError::RewardNotFound)?;
    Ok(reward.summary())
}

/// Summaries of rewards `start..`, one per remaining account, in id order.
pub fn list_rewards_handler(ctx: Context<RewardIndex>, start: u64) -> Result<Vec<RewardSummary>> {
    let total = published_rewards(&ctx.accounts.reward_catalog)?;
    let ids = page_range(total, start, SUMMARY_PAGE_LEN, VoluntarioError::RewardNotFound)?;
    require!(
        ctx.remaining_accounts.len() as u64 == ids.end - ids.start,
        VoluntarioError::ListAccountMismatch
    );

    ids.zip(ctx.remaining_accounts.iter())
        .map(|(id, info)| {
            let reward =
                try_load::<Reward>(info)?.ok_or(VoluntarioError::ListAccountMismatch)?;
            require!(reward.id == id, VoluntarioError::ListAccountMismatch);
            Ok(reward.summary())
        })
        .collect()
}

fn published_rewards(info: &AccountInfo) -> Result<u64> {
    Ok(try_load::<RewardCatalog>(info)?.map_or(0, |catalog| catalog.next_reward_id))
}
