use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::{EVENT_SEED, MINTER_SEED, REGISTRATION_SEED, TOKEN_CONFIG_SEED, VALIDATOR_SEED},
    errors::VoluntarioError,
    events::AttendanceValidated,
    instructions::mint_tokens::mint_voluntario,
    state::{Event, MinterRole, Registration, TokenConfig},
};

/// Contextual accounts required for an organizer to validate a volunteer's attendance.
#[derive(Accounts)]
#[instruction(event_id: u64, volunteer: Pubkey)]
pub struct ValidateAttendance<'info> {
    /// The event the volunteer attended.
    #[account(
        seeds = [EVENT_SEED, event_id.to_be_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    /// The event organizer. Pays for the volunteer's token account if needed.
    #[account(mut, address = event.organizer @ VoluntarioError::NotOrganizer)]
    pub organizer: Signer<'info>,

    /// The volunteer's registration. A volunteer that never registered fails
    /// account validation.
    #[account(
        mut,
        seeds = [REGISTRATION_SEED, event.key().as_ref(), volunteer.as_ref()],
        bump = registration.bump,
    )]
    pub registration: Account<'info, Registration>,

    /// CHECK: PDA identity of the attendance validation authority. It holds no data.
    #[account(seeds = [VALIDATOR_SEED], bump)]
    pub validator: UncheckedAccount<'info>,

    /// CHECK: The validator's minter role PDA, checked in the handler.
    #[account(seeds = [MINTER_SEED, validator.key().as_ref()], bump)]
    pub validator_role: UncheckedAccount<'info>,

    #[account(
        seeds = [TOKEN_CONFIG_SEED],
        bump = token_config.bump,
        has_one = mint,
    )]
    pub token_config: Account<'info, TokenConfig>,

    #[account(mut, mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// CHECK: Only used as the authority of the volunteer's token account.
    #[account(address = volunteer)]
    pub volunteer_wallet: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = organizer,
        associated_token::mint = mint,
        associated_token::authority = volunteer_wallet,
        associated_token::token_program = token_program,
    )]
    pub volunteer_tokens: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Handles attendance validation.
///
/// Marks the registration approved and mints the event's reward to the
/// volunteer. Minting goes through the validation authority's minter role, so
/// it stops working if that role is not granted. A volunteer can be validated
/// only once per event.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `event_id` - The id of the event, used for PDA validation.
/// * `volunteer` - The wallet of the registered volunteer.
///
/// # Returns
///
/// An empty `Result` indicating success or failure.
pub fn validate_attendance_handler(
    ctx: Context<ValidateAttendance>,
    event_id: u64,
    volunteer: Pubkey,
) -> Result<()> {
    ctx.accounts.registration.approve()?;

    require!(
        MinterRole::is_held(
            &ctx.accounts.validator_role.to_account_info(),
            &ctx.accounts.validator.key()
        )?,
        VoluntarioError::MissingMinterRole
    );

    let amount = ctx.accounts.event.reward_per_volunteer;
    mint_voluntario(
        &ctx.accounts.token_program,
        &ctx.accounts.mint,
        &ctx.accounts.volunteer_tokens,
        &ctx.accounts.token_config,
        amount,
    )?;

    emit!(AttendanceValidated {
        event_id,
        volunteer,
        organizer: ctx.accounts.organizer.key(),
        amount,
    });
    msg!(
        "Attendance of {} validated for event {}, minted {}",
        volunteer,
        event_id,
        amount
    );

    Ok(())
}
