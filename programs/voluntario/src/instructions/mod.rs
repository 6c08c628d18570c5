pub mod approve_spender;
pub mod burn_tokens;
pub mod create_event;
pub mod create_reward;
pub mod event_queries;
pub mod grant_minter;
pub mod initialize_token;
pub mod mint_tokens;
pub mod redeem_reward;
pub mod register_volunteer;
pub mod renounce_minter;
pub mod reward_queries;
pub mod set_reward_active;
pub mod transfer_from;
pub mod validate_attendance;

pub use approve_spender::*;
pub use burn_tokens::*;
pub use create_event::*;
pub use create_reward::*;
pub use event_queries::*;
pub use grant_minter::*;
pub use initialize_token::*;
pub use mint_tokens::*;
pub use redeem_reward::*;
pub use register_volunteer::*;
pub use renounce_minter::*;
pub use reward_queries::*;
pub use set_reward_active::*;
pub use transfer_from::*;
pub use validate_attendance::*;
