pub mod digest;
pub mod disbursement;
pub mod time;
