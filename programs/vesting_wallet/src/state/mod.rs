pub mod allow_list;
pub mod month_receipt;
pub mod schedule;
pub mod wallet_config;

pub use allow_list::*;
pub use month_receipt::*;
pub use schedule::*;
pub use wallet_config::*;
