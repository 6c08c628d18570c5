use crate::{
    constants::{DISCRIMINATOR_LENGHT, EVENT_REGISTRY_SEED, EVENT_SEED, ROSTER_SEED},
    events::EventCreated,
    state::{Event, EventDetails, EventRegistry, EventRoster},
};
use anchor_lang::prelude::*;

/// Contextual accounts required to create a new event.
#[derive(Accounts)]
pub struct CreateEvent<'info> {
    /// The global event registry holding the next event id.
    /// It is initialized if it does not exist.
    #[account(
        init_if_needed,
        payer = organizer,
        space = DISCRIMINATOR_LENGHT + EventRegistry::INIT_SPACE,
        seeds = [EVENT_REGISTRY_SEED],
        bump
    )]
    pub event_registry: Account<'info, EventRegistry>,

    /// The new event account, initialized by this instruction.
    /// The PDA is derived from the current event id.
    #[account(
        init,
        payer = organizer,
        space = DISCRIMINATOR_LENGHT + Event::INIT_SPACE,
        seeds = [EVENT_SEED, event_registry.next_event_id.to_be_bytes().as_ref()],
        bump,
    )]
    pub event: Account<'info, Event>,

    /// The event's empty volunteer roster.
    #[account(
        init,
        payer = organizer,
        space = EventRoster::space(0),
        seeds = [ROSTER_SEED, event.key().as_ref()],
        bump,
    )]
    pub roster: Account<'info, EventRoster>,

    /// The organizer creating the event. Must be a signer.
    #[account(mut)]
    pub organizer: Signer<'info>,

    /// The system program, required for creating accounts.
    pub system_program: Program<'info, System>,
}

/// Handles the logic for creating a new event.
///
/// Only the length of each text field is checked. Empty fields, a zero reward
/// and any free-text date are accepted.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `reward_per_volunteer` - Base units minted to each validated volunteer.
/// * `details` - The descriptive fields of the event.
///
/// # Returns
///
/// An empty `Result` indicating success or failure.
pub fn create_event_handler(
    ctx: Context<CreateEvent>,
    reward_per_volunteer: u64,
    details: EventDetails,
) -> Result<()> {
    details.validate()?;

    let event_registry = &mut ctx.accounts.event_registry;
    if event_registry.next_event_id == 0 {
        event_registry.bump = ctx.bumps.event_registry;
    }
    let event_id = event_registry.issue_id()?;

    let organizer = ctx.accounts.organizer.key();

    let roster = &mut ctx.accounts.roster;
    roster.event = ctx.accounts.event.key();
    roster.volunteers = Vec::new();
    roster.bump = ctx.bumps.roster;

    emit!(EventCreated {
        event_id,
        organizer,
        reward_per_volunteer,
        title: details.title.clone(),
        category: details.category.clone(),
        date: details.date.clone(),
        location: details.location.clone(),
    });

    let event = &mut ctx.accounts.event;
    event.id = event_id;
    event.organizer = organizer;
    event.reward_per_volunteer = reward_per_volunteer;
    event.details = details;
    event.bump = ctx.bumps.event;

    msg!("Event created: {}", event_id);

    Ok(())
}
