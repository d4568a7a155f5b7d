use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
#[cfg(not(target_os = "solana"))]
pub mod loader;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::*;

declare_id!("7kQ3vV9UMnGZ6f2s9Rr1eN8mYqJxB4cT5wHdLpA2zXo1");

#[program]
pub mod vesting_wallet {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, month_duration: Option<i64>) -> Result<()> {
        instructions::initialize::initialize(ctx, month_duration)
    }

    pub fn add_allowed_wallet(ctx: Context<AddAllowedWallet>, wallet: Pubkey) -> Result<()> {
        instructions::add_allowed_wallet::add_allowed_wallet(ctx, wallet)
    }

    pub fn add_vesting_schedule_event(
        ctx: Context<AddVestingScheduleEvent>,
        month: u32,
        destination: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::add_vesting_schedule_event::add_vesting_schedule_event(
            ctx,
            month,
            destination,
            amount,
        )
    }

    pub fn lock_vesting_schedule(ctx: Context<LockVestingSchedule>) -> Result<()> {
        instructions::lock_vesting_schedule::lock_vesting_schedule(ctx)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    pub fn withdraw<'info>(
        ctx: Context<'_, '_, 'info, 'info, Withdraw<'info>>,
        month: u32,
    ) -> Result<Vec<Disbursement>> {
        instructions::withdraw::withdraw(ctx, month)
    }

    pub fn is_locked(ctx: Context<ReadWalletConfig>) -> Result<bool> {
        instructions::views::is_locked(ctx)
    }

    pub fn emit_allowed_wallets(ctx: Context<ReadAllowList>) -> Result<()> {
        instructions::views::emit_allowed_wallets(ctx)
    }

    pub fn emit_vesting_schedule(ctx: Context<ReadSchedule>, month: Option<u32>) -> Result<()> {
        instructions::views::emit_vesting_schedule(ctx, month)
    }
}
