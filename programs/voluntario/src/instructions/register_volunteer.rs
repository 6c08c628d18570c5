use crate::{
    constants::{DISCRIMINATOR_LENGHT, EVENT_SEED, REGISTRATION_SEED, ROSTER_SEED},
    events::VolunteerRegistered,
    state::{Event, EventRoster, Registration, VolunteerData},
};
use anchor_lang::prelude::*;

/// Contextual accounts required for a volunteer to register for an event.
#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct RegisterVolunteer<'info> {
    /// The event being joined. A missing event fails account validation.
    #[account(
        seeds = [EVENT_SEED, event_id.to_be_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    /// The event's roster, grown by one key for the new volunteer.
    #[account(
        mut,
        seeds = [ROSTER_SEED, event.key().as_ref()],
        bump = roster.bump,
        realloc = EventRoster::space(roster.volunteers.len() + 1),
        realloc::payer = volunteer,
        realloc::zero = false,
    )]
    pub roster: Account<'info, EventRoster>,

    /// The registration of the signer for this event. An existing registration
    /// is loaded so the handler can reject it explicitly.
    #[account(
        init_if_needed,
        payer = volunteer,
        space = DISCRIMINATOR_LENGHT + Registration::INIT_SPACE,
        seeds = [REGISTRATION_SEED, event.key().as_ref(), volunteer.key().as_ref()],
        bump,
    )]
    pub registration: Account<'info, Registration>,

    /// The volunteer. Its key is the registered identity. Pays for the
    /// registration and the roster growth.
    #[account(mut)]
    pub volunteer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Handles a volunteer's registration.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `event_id` - The id of the event, used for PDA validation.
/// * `data` - Contact data of the volunteer.
///
/// # Returns
///
/// An empty `Result` indicating success or failure.
pub fn register_volunteer_handler(
    ctx: Context<RegisterVolunteer>,
    event_id: u64,
    data: VolunteerData,
) -> Result<()> {
    data.validate()?;

    let event = ctx.accounts.event.key();
    let volunteer = ctx.accounts.volunteer.key();

    ctx.accounts
        .registration
        .record(event, volunteer, data.clone(), ctx.bumps.registration)?;
    let position = ctx.accounts.roster.enroll(volunteer);

    emit!(VolunteerRegistered {
        event_id,
        volunteer,
        name: data.name,
        email: data.email,
        phone: data.phone,
    });
    msg!(
        "Volunteer {} registered for event {} at position {}",
        volunteer,
        event_id,
        position
    );

    Ok(())
}
