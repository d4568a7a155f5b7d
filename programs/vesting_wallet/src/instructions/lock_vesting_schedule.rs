use anchor_lang::prelude::*;

use crate::constants::{SCHEDULE_SEED, WALLET_CONFIG_SEED};
use crate::state::{Schedule, WalletConfig};
use crate::utils::digest;

pub fn lock_vesting_schedule(ctx: Context<LockVestingSchedule>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let events = ctx.accounts.schedule.events();
    let schedule_digest = digest::schedule_digest(events);
    let event_count = events.len() as u16;

    let cfg = &mut ctx.accounts.wallet_config;
    cfg.lock(&ctx.accounts.admin.key(), now, schedule_digest)?;

    msg!("vesting schedule locked at {} with {} entries", now, event_count);
    emit!(VestingScheduleLocked {
        admin: cfg.admin,
        locked_at: now,
        event_count,
        total_scheduled: cfg.total_scheduled,
        schedule_digest,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct LockVestingSchedule<'info> {
    #[account(mut, seeds = [WALLET_CONFIG_SEED], bump = wallet_config.bump)]
    pub wallet_config: Account<'info, WalletConfig>,

    #[account(
        seeds = [SCHEDULE_SEED, wallet_config.key().as_ref()],
        bump
    )]
    pub schedule: Box<Account<'info, Schedule>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct VestingScheduleLocked {
    pub admin: Pubkey,
    pub locked_at: i64,
    pub event_count: u16,
    pub total_scheduled: u64,
    pub schedule_digest: [u8; 32],
}
