pub mod add_allowed_wallet;
pub mod add_vesting_schedule_event;
pub mod deposit_tokens;
pub mod initialize;
pub mod lock_vesting_schedule;
pub mod views;
pub mod withdraw;

pub use add_allowed_wallet::*;
pub use add_vesting_schedule_event::*;
pub use deposit_tokens::*;
pub use initialize::*;
pub use lock_vesting_schedule::*;
pub use views::*;
pub use withdraw::*;
