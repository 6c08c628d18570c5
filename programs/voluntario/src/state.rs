use std::ops::Range;

use anchor_lang::prelude::*;
use anchor_lang::Owner;

use crate::{
    constants::{
        DISCRIMINATOR_LENGHT, MAX_CATEGORY_LEN, MAX_DATE_LEN, MAX_EMAIL_LEN, MAX_LOCATION_LEN,
        MAX_LONG_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_PHONE_LEN, MAX_PROVIDER_LEN,
        MAX_REWARD_DESCRIPTION_LEN, MAX_SHORT_DESCRIPTION_LEN, MAX_TITLE_LEN, MAX_URL_LEN,
    },
    errors::VoluntarioError,
};

/// Configuration of the VoluntarioToken. Its PDA is the mint authority.
#[account]
#[derive(InitSpace)]
pub struct TokenConfig {
    /// Role admin: the only key allowed to grant the minter role.
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub bump: u8,
}

/// Marks `holder` as allowed to mint. Renouncing closes the account.
#[account]
#[derive(InitSpace)]
pub struct MinterRole {
    pub holder: Pubkey,
    pub granted_by: Pubkey,
    pub bump: u8,
}

impl MinterRole {
    /// Whether `info` is a live minter role account belonging to `holder`.
    pub fn is_held(info: &AccountInfo, holder: &Pubkey) -> Result<bool> {
        Ok(try_load::<MinterRole>(info)?.is_some_and(|role| role.holder == *holder))
    }
}

#[account]
#[derive(InitSpace)]
pub struct EventRegistry {
    pub next_event_id: u64,
    pub bump: u8,
}

impl EventRegistry {
    pub fn issue_id(&mut self) -> Result<u64> {
        issue_next(&mut self.next_event_id)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct EventDetails {
    #[max_len(64)]
    pub title: String,
    #[max_len(160)]
    pub short_description: String,
    #[max_len(1000)]
    pub long_description: String,
    #[max_len(200)]
    pub image_url: String,
    #[max_len(200)]
    pub logo_url: String,
    /// Free text, not interpreted.
    #[max_len(32)]
    pub date: String,
    #[max_len(100)]
    pub location: String,
    #[max_len(32)]
    pub category: String,
}

impl EventDetails {
    pub fn validate(&self) -> Result<()> {
        check_len(&self.title, MAX_TITLE_LEN, VoluntarioError::TitleTooLong)?;
        check_len(
            &self.short_description,
            MAX_SHORT_DESCRIPTION_LEN,
            VoluntarioError::DescriptionTooLong,
        )?;
        check_len(
            &self.long_description,
            MAX_LONG_DESCRIPTION_LEN,
            VoluntarioError::DescriptionTooLong,
        )?;
        check_len(&self.image_url, MAX_URL_LEN, VoluntarioError::UrlTooLong)?;
        check_len(&self.logo_url, MAX_URL_LEN, VoluntarioError::UrlTooLong)?;
        check_len(&self.date, MAX_DATE_LEN, VoluntarioError::FieldTooLong)?;
        check_len(&self.location, MAX_LOCATION_LEN, VoluntarioError::FieldTooLong)?;
        check_len(&self.category, MAX_CATEGORY_LEN, VoluntarioError::FieldTooLong)
    }
}

#[account]
#[derive(InitSpace)]
pub struct Event {
    pub id: u64,
    pub organizer: Pubkey,
    /// Base units minted to each volunteer whose attendance is validated.
    pub reward_per_volunteer: u64,
    pub details: EventDetails,
    pub bump: u8,
}

impl Event {
    pub fn summary(&self) -> EventSummary {
        EventSummary {
            id: self.id,
            organizer: self.organizer,
            reward_per_volunteer: self.reward_per_volunteer,
            title: self.details.title.clone(),
        }
    }
}

/// Registration order of an event's volunteers.
///
/// The roster has no fixed capacity: the account is reallocated by one key on
/// every registration.
#[account]
pub struct EventRoster {
    pub event: Pubkey,
    pub volunteers: Vec<Pubkey>,
    pub bump: u8,
}

impl EventRoster {
    /// Account size of a roster holding `volunteers` keys.
    pub fn space(volunteers: usize) -> usize {
        DISCRIMINATOR_LENGHT + 32 + 4 + 32 * volunteers + 1
    }

    /// Appends `volunteer` and returns its position in the roster.
    pub fn enroll(&mut self, volunteer: Pubkey) -> usize {
        self.volunteers.push(volunteer);
        self.volunteers.len() - 1
    }

    pub fn page(&self, start: u32, len: usize) -> Vec<Pubkey> {
        self.volunteers
            .iter()
            .skip(start as usize)
            .take(len)
            .copied()
            .collect()
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct VolunteerData {
    #[max_len(64)]
    pub name: String,
    #[max_len(100)]
    pub email: String,
    #[max_len(32)]
    pub phone: String,
}

impl VolunteerData {
    pub fn validate(&self) -> Result<()> {
        check_len(&self.name, MAX_NAME_LEN, VoluntarioError::ContactTooLong)?;
        check_len(&self.email, MAX_EMAIL_LEN, VoluntarioError::ContactTooLong)?;
        check_len(&self.phone, MAX_PHONE_LEN, VoluntarioError::ContactTooLong)
    }
}

/// A volunteer's registration for one event, keyed by `(event, volunteer)`.
#[account]
#[derive(InitSpace)]
pub struct Registration {
    pub event: Pubkey,
    /// `Pubkey::default()` until the registration is recorded.
    pub volunteer: Pubkey,
    pub data: VolunteerData,
    pub approved: bool,
    pub bump: u8,
}

impl Registration {
    pub fn record(
        &mut self,
        event: Pubkey,
        volunteer: Pubkey,
        data: VolunteerData,
        bump: u8,
    ) -> Result<()> {
        require_keys_eq!(
            self.volunteer,
            Pubkey::default(),
            VoluntarioError::AlreadyRegistered
        );
        self.event = event;
        self.volunteer = volunteer;
        self.data = data;
        self.approved = false;
        self.bump = bump;
        Ok(())
    }

    /// Flips `approved` to true. It never goes back.
    pub fn approve(&mut self) -> Result<()> {
        require!(!self.approved, VoluntarioError::AlreadyApproved);
        self.approved = true;
        Ok(())
    }

    pub fn belongs_to(&self, event: &Pubkey, volunteer: &Pubkey) -> bool {
        self.event == *event && self.volunteer == *volunteer
    }

    pub fn to_record(&self) -> VolunteerRecord {
        VolunteerRecord {
            volunteer: self.volunteer,
            name: self.data.name.clone(),
            email: self.data.email.clone(),
            phone: self.data.phone.clone(),
            approved: self.approved,
        }
    }
}

/// What `spender` may still move out of `owner`'s tokens, keyed by
/// `(owner, spender)`.
#[account]
#[derive(InitSpace)]
pub struct Allowance {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Allowance {
    /// Records which `(owner, spender)` pair the account belongs to. Accounts
    /// created empty on a spend attempt have no keys yet.
    pub fn bind(&mut self, owner: Pubkey, spender: Pubkey, bump: u8) {
        self.owner = owner;
        self.spender = spender;
        self.bump = bump;
    }

    /// Sets the allowance to `amount`, replacing whatever was left.
    pub fn approve(&mut self, owner: Pubkey, spender: Pubkey, amount: u64, bump: u8) {
        self.bind(owner, spender, bump);
        self.amount = amount;
    }

    pub fn spend(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(VoluntarioError::InsufficientAllowance)?;
        Ok(())
    }
}

#[account]
#[derive(InitSpace)]
pub struct RewardCatalog {
    pub next_reward_id: u64,
    pub bump: u8,
}

impl RewardCatalog {
    pub fn issue_id(&mut self) -> Result<u64> {
        issue_next(&mut self.next_reward_id)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct RewardDetails {
    #[max_len(64)]
    pub title: String,
    #[max_len(280)]
    pub description: String,
    #[max_len(200)]
    pub image_url: String,
    #[max_len(64)]
    pub provider: String,
    #[max_len(32)]
    pub category: String,
}

impl RewardDetails {
    pub fn validate(&self) -> Result<()> {
        check_len(&self.title, MAX_TITLE_LEN, VoluntarioError::TitleTooLong)?;
        check_len(
            &self.description,
            MAX_REWARD_DESCRIPTION_LEN,
            VoluntarioError::DescriptionTooLong,
        )?;
        check_len(&self.image_url, MAX_URL_LEN, VoluntarioError::UrlTooLong)?;
        check_len(&self.provider, MAX_PROVIDER_LEN, VoluntarioError::FieldTooLong)?;
        check_len(&self.category, MAX_CATEGORY_LEN, VoluntarioError::FieldTooLong)
    }
}

/// A marketplace item redeemable for VoluntarioTokens.
#[account]
#[derive(InitSpace)]
pub struct Reward {
    pub id: u64,
    pub creator: Pubkey,
    pub token_cost: u64,
    pub details: RewardDetails,
    pub active: bool,
    pub redemptions: u64,
    pub bump: u8,
}

impl Reward {
    pub fn ensure_active(&self) -> Result<()> {
        require!(self.active, VoluntarioError::RewardInactive);
        Ok(())
    }

    pub fn set_active(&mut self, caller: Pubkey, active: bool) -> Result<()> {
        require_keys_eq!(caller, self.creator, VoluntarioError::NotRewardCreator);
        self.active = active;
        Ok(())
    }

    pub fn record_redemption(&mut self) -> Result<()> {
        self.redemptions = self
            .redemptions
            .checked_add(1)
            .ok_or(VoluntarioError::NumericOverflow)?;
        Ok(())
    }

    pub fn summary(&self) -> RewardSummary {
        RewardSummary {
            id: self.id,
            creator: self.creator,
            token_cost: self.token_cost,
            title: self.details.title.clone(),
            active: self.active,
            redemptions: self.redemptions,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct EventSummary {
    pub id: u64,
    pub organizer: Pubkey,
    pub reward_per_volunteer: u64,
    pub title: String,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VolunteerRecord {
    pub volunteer: Pubkey,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub approved: bool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RewardSummary {
    pub id: u64,
    pub creator: Pubkey,
    pub token_cost: u64,
    pub title: String,
    pub active: bool,
    pub redemptions: u64,
}

/// Deserializes a program account that may not exist yet.
///
/// Returns `None` when the account is not owned by this program or holds no
/// data, e.g. a PDA that was never initialized or has been closed.
pub fn try_load<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Result<Option<T>> {
    if info.owner != &T::owner() || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map(Some)
}

/// Ids `start..` of a dense collection holding `total` items, at most `len` of them.
pub fn page_range(
    total: u64,
    start: u64,
    len: usize,
    not_found: VoluntarioError,
) -> Result<Range<u64>> {
    if start > total {
        return Err(not_found.into());
    }
    let end = start.saturating_add(len as u64).min(total);
    Ok(start..end)
}

fn issue_next(counter: &mut u64) -> Result<u64> {
    let id = *counter;
    *counter = id.checked_add(1).ok_or(VoluntarioError::NumericOverflow)?;
    Ok(id)
}

fn check_len(value: &str, max: usize, error: VoluntarioError) -> Result<()> {
    if value.len() > max {
        return Err(error.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn code_of(err: Error) -> u32 {
        match err {
            Error::AnchorError(err) => err.error_code_number,
            Error::ProgramError(err) => panic!("unexpected program error: {err:?}"),
        }
    }

    fn assert_fails<T: std::fmt::Debug>(result: Result<T>, expected: VoluntarioError) {
        let err = result.expect_err("operation should have failed");
        assert_eq!(code_of(err), code_of(expected.into()));
    }

    fn event_details(title: &str) -> EventDetails {
        EventDetails {
            title: title.to_string(),
            short_description: "Desc corta".to_string(),
            long_description: "Desc larga".to_string(),
            image_url: "https://img.com/1.jpg".to_string(),
            logo_url: "https://logo.com/1.png".to_string(),
            date: "2025-08-03".to_string(),
            location: "Ubicacion 1".to_string(),
            category: "CategoriaA".to_string(),
        }
    }

    fn reward(creator: Pubkey) -> Reward {
        Reward {
            id: 0,
            creator,
            token_cost: 100,
            details: RewardDetails {
                title: "Recompensa Test".to_string(),
                description: "Descripcion de prueba".to_string(),
                image_url: "https://imagen.com/test.jpg".to_string(),
                provider: "Proveedor Test".to_string(),
                category: "Categoria Test".to_string(),
            },
            active: true,
            redemptions: 0,
            bump: 255,
        }
    }

    fn empty_registration() -> Registration {
        Registration {
            event: Pubkey::default(),
            volunteer: Pubkey::default(),
            data: VolunteerData::default(),
            approved: false,
            bump: 0,
        }
    }

    #[test]
    fn ids_are_dense_and_zero_based() {
        let mut registry = EventRegistry {
            next_event_id: 0,
            bump: 0,
        };
        let ids: Vec<u64> = (0..4).map(|_| registry.issue_id().unwrap()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(registry.next_event_id, 4);

        let mut catalog = RewardCatalog {
            next_reward_id: 0,
            bump: 0,
        };
        assert_eq!(catalog.issue_id().unwrap(), 0);
        assert_eq!(catalog.issue_id().unwrap(), 1);
    }

    #[test]
    fn id_counter_overflow_is_an_error() {
        let mut registry = EventRegistry {
            next_event_id: u64::MAX,
            bump: 0,
        };
        assert_fails(registry.issue_id(), VoluntarioError::NumericOverflow);
        assert_eq!(registry.next_event_id, u64::MAX);
    }

    #[test]
    fn event_details_accept_empty_fields() {
        let details = EventDetails {
            title: String::new(),
            short_description: String::new(),
            long_description: String::new(),
            image_url: String::new(),
            logo_url: String::new(),
            date: String::new(),
            location: String::new(),
            category: String::new(),
        };
        assert!(details.validate().is_ok());
    }

    #[test]
    fn event_details_reject_oversized_fields() {
        let long_title = event_details(&"a".repeat(MAX_TITLE_LEN + 1));
        assert_fails(long_title.validate(), VoluntarioError::TitleTooLong);

        let mut details = event_details("Evento 1");
        details.logo_url = "u".repeat(MAX_URL_LEN + 1);
        assert_fails(details.validate(), VoluntarioError::UrlTooLong);

        let mut details = event_details("Evento 1");
        details.location = "l".repeat(MAX_LOCATION_LEN + 1);
        assert_fails(details.validate(), VoluntarioError::FieldTooLong);

        let exact = event_details(&"a".repeat(MAX_TITLE_LEN));
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn roster_keeps_registration_order_and_pages() {
        let mut roster = EventRoster {
            event: Pubkey::new_unique(),
            volunteers: Vec::new(),
            bump: 0,
        };
        let volunteers: Vec<Pubkey> = (0..5).map(|_| Pubkey::new_unique()).collect();
        for (position, volunteer) in volunteers.iter().enumerate() {
            assert_eq!(roster.enroll(*volunteer), position);
        }

        assert_eq!(roster.page(0, 3), volunteers[..3].to_vec());
        assert_eq!(roster.page(3, 3), volunteers[3..].to_vec());
        assert!(roster.page(5, 3).is_empty());
        assert!(roster.page(42, 3).is_empty());
    }

    #[test]
    fn roster_grows_without_a_cap() {
        let mut roster = EventRoster {
            event: Pubkey::new_unique(),
            volunteers: Vec::new(),
            bump: 0,
        };
        for _ in 0..150 {
            roster.enroll(Pubkey::new_unique());
        }
        let last = Pubkey::new_unique();
        assert_eq!(roster.enroll(last), 150);
        assert_eq!(roster.page(150, 4), vec![last]);

        let mut data = Vec::new();
        roster.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), EventRoster::space(151));
    }

    #[test]
    fn roster_space_grows_one_key_per_volunteer() {
        assert_eq!(EventRoster::space(0), 8 + 32 + 4 + 1);
        assert_eq!(EventRoster::space(101) - EventRoster::space(100), 32);
    }

    #[test]
    fn registration_is_recorded_once() {
        let event = Pubkey::new_unique();
        let volunteer = Pubkey::new_unique();
        let data = VolunteerData {
            name: "Juan Perez".to_string(),
            email: "juan@email.com".to_string(),
            phone: "123456789".to_string(),
        };

        let mut registration = empty_registration();
        registration
            .record(event, volunteer, data.clone(), 254)
            .unwrap();
        assert_eq!(registration.volunteer, volunteer);
        assert!(!registration.approved);

        let other = VolunteerData {
            name: "Otro".to_string(),
            ..data.clone()
        };
        assert_fails(
            registration.record(event, volunteer, other, 254),
            VoluntarioError::AlreadyRegistered,
        );
        assert_eq!(registration.data, data);
    }

    #[test]
    fn approval_happens_exactly_once() {
        let mut registration = empty_registration();
        registration
            .record(
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                VolunteerData::default(),
                1,
            )
            .unwrap();

        registration.approve().unwrap();
        assert!(registration.approved);
        assert_fails(registration.approve(), VoluntarioError::AlreadyApproved);
        assert!(registration.to_record().approved);
    }

    #[test]
    fn registration_belongs_to_its_event_and_volunteer() {
        let event = Pubkey::new_unique();
        let volunteer = Pubkey::new_unique();
        let mut registration = empty_registration();
        registration
            .record(event, volunteer, VolunteerData::default(), 1)
            .unwrap();

        assert!(registration.belongs_to(&event, &volunteer));
        assert!(!registration.belongs_to(&event, &Pubkey::new_unique()));
        assert!(!registration.belongs_to(&Pubkey::new_unique(), &volunteer));
    }

    #[test]
    fn approving_replaces_the_allowance() {
        let owner = Pubkey::new_unique();
        let spender = Pubkey::new_unique();
        let mut allowance = Allowance {
            owner: Pubkey::default(),
            spender: Pubkey::default(),
            amount: 0,
            bump: 0,
        };
        allowance.approve(owner, spender, 50, 252);
        allowance.approve(owner, spender, 100, 252);
        assert_eq!(allowance.amount, 100);
        assert_eq!(allowance.spender, spender);

        allowance.spend(40).unwrap();
        assert_eq!(allowance.amount, 60);
        assert_fails(allowance.spend(61), VoluntarioError::InsufficientAllowance);
        assert_eq!(allowance.amount, 60);
    }

    #[test]
    fn allowances_are_kept_per_spender() {
        use crate::constants::ALLOWANCE_SEED;

        let owner = Pubkey::new_unique();
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        let address = |spender: &Pubkey| {
            Pubkey::find_program_address(
                &[ALLOWANCE_SEED, owner.as_ref(), spender.as_ref()],
                &crate::ID,
            )
            .0
        };
        assert_ne!(address(&first), address(&second));

        let mut to_first = Allowance {
            owner,
            spender: first,
            amount: 0,
            bump: 0,
        };
        let mut to_second = to_first.clone();
        to_first.approve(owner, first, 100, 0);
        to_second.approve(owner, second, 50, 0);
        assert_eq!(to_first.amount, 100);
        assert_eq!(to_second.amount, 50);
    }

    #[test]
    fn volunteer_data_limits() {
        let data = VolunteerData {
            name: "Ana Lopez".to_string(),
            email: "e".repeat(MAX_EMAIL_LEN + 1),
            phone: "987654321".to_string(),
        };
        assert_fails(data.validate(), VoluntarioError::ContactTooLong);
    }

    #[test]
    fn only_the_creator_toggles_a_reward() {
        let creator = Pubkey::new_unique();
        let mut reward = reward(creator);

        assert_fails(
            reward.set_active(Pubkey::new_unique(), false),
            VoluntarioError::NotRewardCreator,
        );
        assert!(reward.active);

        reward.set_active(creator, false).unwrap();
        assert_fails(reward.ensure_active(), VoluntarioError::RewardInactive);

        reward.set_active(creator, true).unwrap();
        assert!(reward.ensure_active().is_ok());
        assert_eq!(reward.creator, creator);
        assert_eq!(reward.token_cost, 100);
    }

    #[test]
    fn redemptions_do_not_change_activation() {
        let mut reward = reward(Pubkey::new_unique());
        reward.record_redemption().unwrap();
        reward.record_redemption().unwrap();

        let summary = reward.summary();
        assert_eq!(summary.redemptions, 2);
        assert!(summary.active);
        assert_eq!(summary.title, "Recompensa Test");
    }

    #[test]
    fn page_range_is_clamped_to_the_collection() {
        let not_found = VoluntarioError::EventNotFound;
        assert_eq!(page_range(20, 0, 8, not_found).unwrap(), 0..8);
        assert_eq!(page_range(20, 16, 8, not_found).unwrap(), 16..20);
        assert_eq!(page_range(20, 20, 8, not_found).unwrap(), 20..20);
        assert_eq!(page_range(0, 0, 8, not_found).unwrap(), 0..0);
        assert_fails(page_range(20, 21, 8, not_found), VoluntarioError::EventNotFound);
    }

    #[test]
    fn event_summary_carries_reward_and_title() {
        let organizer = Pubkey::new_unique();
        let event = Event {
            id: 1,
            organizer,
            reward_per_volunteer: 200,
            details: event_details("Evento 2"),
            bump: 253,
        };
        assert_eq!(
            event.summary(),
            EventSummary {
                id: 1,
                organizer,
                reward_per_volunteer: 200,
                title: "Evento 2".to_string(),
            }
        );
    }
}
