use anchor_lang::prelude::*;

#[event]
pub struct TokenInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
}

#[event]
pub struct MinterGranted {
    pub holder: Pubkey,
    pub granted_by: Pubkey,
}

#[event]
pub struct MinterRenounced {
    pub holder: Pubkey,
}

#[event]
pub struct TokensMinted {
    pub minter: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
pub struct SpenderApproved {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TokensTransferred {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TokensBurned {
    pub holder: Pubkey,
    pub amount: u64,
}

#[event]
pub struct EventCreated {
    pub event_id: u64,
    pub organizer: Pubkey,
    pub reward_per_volunteer: u64,
    pub title: String,
    pub category: String,
    pub date: String,
    pub location: String,
}

#[event]
pub struct VolunteerRegistered {
    pub event_id: u64,
    pub volunteer: Pubkey,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[event]
pub struct AttendanceValidated {
    pub event_id: u64,
    pub volunteer: Pubkey,
    pub organizer: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RewardCreated {
    pub reward_id: u64,
    pub creator: Pubkey,
    pub title: String,
    pub token_cost: u64,
    pub category: String,
}

#[event]
pub struct RewardRedeemed {
    pub redeemer: Pubkey,
    pub reward_id: u64,
    pub token_cost: u64,
}

#[event]
pub struct RewardStatusChanged {
    pub reward_id: u64,
    pub active: bool,
}
