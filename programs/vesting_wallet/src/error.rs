use anchor_lang::prelude::*;

/// Custom error codes for the vesting wallet program.
#[error_code]
#[derive(PartialEq, Eq)]
pub enum VestingError {
    #[msg("Unauthorized: administrator signature required")]
    Unauthorized,

    #[msg("Schedule is already locked!")]
    ScheduleLocked,

    #[msg("Schedule is not locked")]
    ScheduleNotLocked,

    #[msg("Address is not allowed!")]
    AddressNotAllowed,

    #[msg("Month has already been withdrawn")]
    AlreadyExecuted,

    #[msg("Month has not matured yet")]
    NotMatureYet,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Amount overflow")]
    AmountOverflow,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Allow-list is full")]
    AllowListFull,

    #[msg("Vesting schedule is full")]
    ScheduleFull,

    #[msg("Too many entries for this month")]
    MonthCapacityExceeded,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Destination token account does not belong to the scheduled wallet")]
    InvalidDestinationAccount,

    #[msg("Missing destination token account")]
    MissingDestinationAccount,

    #[msg("Unexpected extra destination token account")]
    UnexpectedDestinationAccount,
}
