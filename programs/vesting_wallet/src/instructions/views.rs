//! Read-only instructions. Clients can also deserialize the accounts
//! directly and use the accessors on the state types.

use anchor_lang::prelude::*;

use crate::constants::{ALLOW_LIST_SEED, SCHEDULE_SEED, WALLET_CONFIG_SEED};
use crate::state::{AllowList, Schedule, WalletConfig};
use crate::utils::time;

pub fn is_locked(ctx: Context<ReadWalletConfig>) -> Result<bool> {
    Ok(ctx.accounts.wallet_config.is_locked())
}

pub fn emit_allowed_wallets(ctx: Context<ReadAllowList>) -> Result<()> {
    emit!(AllowedWallets {
        wallets: ctx.accounts.allow_list.wallets().to_vec(),
    });
    Ok(())
}

/// Emits one event per schedule entry, optionally restricted to `month`.
pub fn emit_vesting_schedule(ctx: Context<ReadSchedule>, month: Option<u32>) -> Result<()> {
    let cfg = &ctx.accounts.wallet_config;
    let locked_at = cfg.locked_at();

    for (index, event) in ctx.accounts.schedule.filtered(month) {
        emit!(VestingScheduleEventView {
            index: index as u16,
            month: event.month,
            destination: event.destination,
            amount: event.amount,
            matures_at: locked_at
                .and_then(|at| time::maturity_ts(at, event.month, cfg.month_duration)),
        });
    }
    Ok(())
}

#[derive(Accounts)]
pub struct ReadWalletConfig<'info> {
    #[account(seeds = [WALLET_CONFIG_SEED], bump = wallet_config.bump)]
    pub wallet_config: Account<'info, WalletConfig>,
}

#[derive(Accounts)]
pub struct ReadAllowList<'info> {
    #[account(seeds = [WALLET_CONFIG_SEED], bump = wallet_config.bump)]
    pub wallet_config: Account<'info, WalletConfig>,

    #[account(
        seeds = [ALLOW_LIST_SEED, wallet_config.key().as_ref()],
        bump
    )]
    pub allow_list: Box<Account<'info, AllowList>>,
}

#[derive(Accounts)]
pub struct ReadSchedule<'info> {
    #[account(seeds = [WALLET_CONFIG_SEED], bump = wallet_config.bump)]
    pub wallet_config: Account<'info, WalletConfig>,

    #[account(
        seeds = [SCHEDULE_SEED, wallet_config.key().as_ref()],
        bump
    )]
    pub schedule: Box<Account<'info, Schedule>>,
}

#[event]
pub struct AllowedWallets {
    pub wallets: Vec<Pubkey>,
}

#[event]
pub struct VestingScheduleEventView {
    pub index: u16,
    pub month: u32,
    pub destination: Pubkey,
    pub amount: u64,
    /// `None` until the schedule is locked.
    pub matures_at: Option<i64>,
}
