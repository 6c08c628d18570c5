use anchor_lang::prelude::*;

use crate::{
    constants::{
        EVENT_REGISTRY_SEED, EVENT_SEED, REGISTRATION_SEED, ROSTER_SEED, SUMMARY_PAGE_LEN,
        VOLUNTEER_PAGE_LEN,
    },
    errors::VoluntarioError,
    state::{
        page_range, try_load, Event, EventRegistry, EventRoster, EventSummary, Registration,
        VolunteerRecord,
    },
};

/// Accounts for the registry-wide event queries.
#[derive(Accounts)]
pub struct EventIndex<'info> {
    /// CHECK: Does not exist until the first event is created, which reads as zero events.
    #[account(seeds = [EVENT_REGISTRY_SEED], bump)]
    pub event_registry: UncheckedAccount<'info>,
}

/// Accounts for looking up one volunteer's registration.
#[derive(Accounts)]
#[instruction(event_id: u64, volunteer: Pubkey)]
pub struct VolunteerLookup<'info> {
    #[account(
        seeds = [EVENT_SEED, event_id.to_be_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    /// CHECK: Absent for volunteers that never registered.
    #[account(
        seeds = [REGISTRATION_SEED, event.key().as_ref(), volunteer.as_ref()],
        bump,
    )]
    pub registration: UncheckedAccount<'info>,
}

/// Accounts for listing an event's volunteers.
#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct RosterLookup<'info> {
    #[account(
        seeds = [EVENT_SEED, event_id.to_be_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    #[account(
        seeds = [ROSTER_SEED, event.key().as_ref()],
        bump = roster.bump,
    )]
    pub roster: Account<'info, EventRoster>,
}

pub fn total_events_handler(ctx: Context<EventIndex>) -> Result<u64> {
    registered_events(&ctx.accounts.event_registry)
}

/// Summaries of events `start..`, one per remaining account.
///
/// The caller passes the event accounts of the page, in id order, as remaining
/// accounts. A page holds at most `SUMMARY_PAGE_LEN` events.
pub fn list_events_handler(ctx: Context<EventIndex>, start: u64) -> Result<Vec<EventSummary>> {
    let total = registered_events(&ctx.accounts.event_registry)?;
    let ids = page_range(total, start, SUMMARY_PAGE_LEN, VoluntarioError::EventNotFound)?;
    require!(
        ctx.remaining_accounts.len() as u64 == ids.end - ids.start,
        VoluntarioError::ListAccountMismatch
    );

    ids.zip(ctx.remaining_accounts.iter())
        .map(|(id, info)| {
            let event = try_load::<Event>(info)?.ok_or(VoluntarioError::ListAccountMismatch)?;
            require!(event.id == id, VoluntarioError::ListAccountMismatch);
            Ok(event.summary())
        })
        .collect()
}

pub fn is_registered_handler(
    ctx: Context<VolunteerLookup>,
    _event_id: u64,
    volunteer: Pubkey,
) -> Result<bool> {
    Ok(load_registration(&ctx.accounts.registration, &volunteer)?.is_some())
}

/// The registration of `volunteer`, or `None` if it never registered.
pub fn get_volunteer_data_handler(
    ctx: Context<VolunteerLookup>,
    _event_id: u64,
    volunteer: Pubkey,
) -> Result<Option<VolunteerRecord>> {
    Ok(load_registration(&ctx.accounts.registration, &volunteer)?
        .map(|registration| registration.to_record()))
}

/// Registrations of an event in registration order, starting at `start`.
///
/// The caller passes the registration accounts of the roster slots
/// `start..start + VOLUNTEER_PAGE_LEN`, in roster order, as remaining accounts.
/// A `start` past the end of the roster yields an empty page.
pub fn list_volunteers_handler(
    ctx: Context<RosterLookup>,
    _event_id: u64,
    start: u32,
) -> Result<Vec<VolunteerRecord>> {
    let event = ctx.accounts.event.key();
    let volunteers = ctx.accounts.roster.page(start, VOLUNTEER_PAGE_LEN);
    require!(
        ctx.remaining_accounts.len() == volunteers.len(),
        VoluntarioError::ListAccountMismatch
    );

    volunteers
        .iter()
        .zip(ctx.remaining_accounts.iter())
        .map(|(volunteer, info)| {
            let registration =
                try_load::<Registration>(info)?.ok_or(VoluntarioError::ListAccountMismatch)?;
            require!(
                registration.belongs_to(&event, volunteer),
                VoluntarioError::ListAccountMismatch
            );
            Ok(registration.to_record())
        })
        .collect()
}

fn registered_events(info: &AccountInfo) -> Result<u64> {
    Ok(try_load::<EventRegistry>(info)?.map_or(0, |registry| registry.next_event_id))
}

fn load_registration(info: &AccountInfo, volunteer: &Pubkey) -> Result<Option<Registration>> {
    Ok(try_load::<Registration>(info)?.filter(|registration| registration.volunteer == *volunteer))
}
