pub mod constants;
pub mod errors;
pub mod events;
mod instructions;
mod ledger;
pub mod state;

use anchor_lang::prelude::*;

use instructions::*;
use state::{
    EventDetails, EventSummary, RewardDetails, RewardSummary, VolunteerData, VolunteerRecord,
};

declare_id!("E77TwKVZ8KxFRMqJaJtWfdwU6ayWuJpMbRcYGzLMaJSt");

#[program]
pub mod voluntario {
    use super::*;

    /// Sets up the VoluntarioToken.
    ///
    /// This instruction initializes the `TokenConfig`, a Token-2022 mint carrying its own
    /// metadata, and a `MinterRole` for the caller, who also becomes the role admin. Only
    /// the program's upgrade authority can call it.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `name` - The token name.
    /// * `symbol` - The token symbol.
    /// * `uri` - The off-chain metadata URI.
    pub fn initialize_token(
        ctx: Context<InitializeToken>,
        name: String,
        symbol: String,
        uri: String,
    ) -> Result<()> {
        initialize_token_handler(ctx, name, symbol, uri)
    }

    /// Grants the minter role to `holder`. Only the role admin can call it.
    pub fn grant_minter(ctx: Context<GrantMinter>, holder: Pubkey) -> Result<()> {
        grant_minter_handler(ctx, holder)
    }

    /// Gives up the caller's own minter role.
    pub fn renounce_minter(ctx: Context<RenounceMinter>) -> Result<()> {
        renounce_minter_handler(ctx)
    }

    /// Mints tokens to a recipient. The caller must hold the minter role.
    pub fn mint_tokens(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
        mint_tokens_handler(ctx, amount)
    }

    /// Sets a spender's allowance over the caller's tokens, replacing any previous one.
    /// Allowances of other spenders are kept.
    pub fn approve_spender(ctx: Context<ApproveSpender>, amount: u64) -> Result<()> {
        approve_spender_handler(ctx, amount)
    }

    /// Moves an owner's tokens on the calling spender's allowance.
    pub fn transfer_from(ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
        transfer_from_handler(ctx, amount)
    }

    /// Burns tokens from the caller's own account.
    pub fn burn_tokens(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
        burn_tokens_handler(ctx, amount)
    }

    /// Creates a new volunteering event.
    ///
    /// Any caller may create an event and becomes its organizer. The event gets the next
    /// sequential id and an empty volunteer roster.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `reward_per_volunteer` - Base units minted to each volunteer whose attendance is validated.
    /// * `title` - The event title.
    /// * `short_description` - A one-line summary.
    /// * `long_description` - The full description.
    /// * `image_url` - Cover image.
    /// * `logo_url` - Organizer logo.
    /// * `date` - Free-text date.
    /// * `location` - Where the event happens.
    /// * `category` - Free-text category.
    #[allow(clippy::too_many_arguments)]
    pub fn create_event(
        ctx: Context<CreateEvent>,
        reward_per_volunteer: u64,
        title: String,
        short_description: String,
        long_description: String,
        image_url: String,
        logo_url: String,
        date: String,
        location: String,
        category: String,
    ) -> Result<()> {
        create_event_handler(
            ctx,
            reward_per_volunteer,
            EventDetails {
                title,
                short_description,
                long_description,
                image_url,
                logo_url,
                date,
                location,
                category,
            },
        )
    }

    /// Registers the caller as a volunteer of an event.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `event_id` - The id of the event to join.
    /// * `name` - The volunteer's name.
    /// * `email` - The volunteer's email.
    /// * `phone` - The volunteer's phone.
    pub fn register_volunteer(
        ctx: Context<RegisterVolunteer>,
        event_id: u64,
        name: String,
        email: String,
        phone: String,
    ) -> Result<()> {
        register_volunteer_handler(ctx, event_id, VolunteerData { name, email, phone })
    }

    /// Whether `volunteer` is registered for the event.
    pub fn is_registered(
        ctx: Context<VolunteerLookup>,
        event_id: u64,
        volunteer: Pubkey,
    ) -> Result<bool> {
        is_registered_handler(ctx, event_id, volunteer)
    }

    /// Returns the registration of `volunteer`, or `None` if it never registered.
    pub fn get_volunteer_data(
        ctx: Context<VolunteerLookup>,
        event_id: u64,
        volunteer: Pubkey,
    ) -> Result<Option<VolunteerRecord>> {
        get_volunteer_data_handler(ctx, event_id, volunteer)
    }

    /// Returns a page of an event's registrations in registration order. The page's
    /// registration accounts are passed as remaining accounts, in roster order.
    pub fn list_volunteers(
        ctx: Context<RosterLookup>,
        event_id: u64,
        start: u32,
    ) -> Result<Vec<VolunteerRecord>> {
        list_volunteers_handler(ctx, event_id, start)
    }

    /// Returns a page of event summaries. The page's event accounts are passed as
    /// remaining accounts, in id order.
    pub fn list_events(ctx: Context<EventIndex>, start: u64) -> Result<Vec<EventSummary>> {
        list_events_handler(ctx, start)
    }

    /// Number of events created so far.
    pub fn total_events(ctx: Context<EventIndex>) -> Result<u64> {
        total_events_handler(ctx)
    }

    /// Validates a volunteer's attendance and mints the event reward to it.
    ///
    /// Only the event organizer can validate. The registration is approved and
    /// `reward_per_volunteer` tokens are minted through the validation authority's
    /// minter role.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `event_id` - The id of the event.
    /// * `volunteer` - The wallet of the registered volunteer.
    pub fn validate_attendance(
        ctx: Context<ValidateAttendance>,
        event_id: u64,
        volunteer: Pubkey,
    ) -> Result<()> {
        validate_attendance_handler(ctx, event_id, volunteer)
    }

    /// Publishes a reward in the marketplace. New rewards are active.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `token_cost` - Base units charged per redemption.
    /// * `title` - The reward title.
    /// * `description` - The reward description.
    /// * `image_url` - Reward image.
    /// * `provider` - Who delivers the reward.
    /// * `category` - Free-text category.
    pub fn create_reward(
        ctx: Context<CreateReward>,
        token_cost: u64,
        title: String,
        description: String,
        image_url: String,
        provider: String,
        category: String,
    ) -> Result<()> {
        create_reward_handler(
            ctx,
            token_cost,
            RewardDetails {
                title,
                description,
                image_url,
                provider,
                category,
            },
        )
    }

    /// Redeems a reward, moving its cost from the caller to the treasury.
    ///
    /// The caller must first approve the redemption authority as spender for at least
    /// the reward's cost.
    pub fn redeem_reward(ctx: Context<RedeemReward>, reward_id: u64) -> Result<()> {
        redeem_reward_handler(ctx, reward_id)
    }

    /// Activates or deactivates a reward. Only its creator can call it.
    pub fn set_reward_active(
        ctx: Context<SetRewardActive>,
        reward_id: u64,
        active: bool,
    ) -> Result<()> {
        set_reward_active_handler(ctx, reward_id, active)
    }

    /// Returns one reward, or fails with `RewardNotFound` for an unissued id.
    pub fn get_reward(ctx: Context<RewardLookup>, reward_id: u64) -> Result<RewardSummary> {
        get_reward_handler(ctx, reward_id)
    }

    /// Returns a page of reward summaries. The page's reward accounts are passed as
    /// remaining accounts, in id order.
    pub fn list_rewards(ctx: Context<RewardIndex>, start: u64) -> Result<Vec<RewardSummary>> {
        list_rewards_handler(ctx, start)
    }

    /// Number of rewards published so far.
    pub fn total_rewards(ctx: Context<RewardIndex>) -> Result<u64> {
        total_rewards_handler(ctx)
    }
}
