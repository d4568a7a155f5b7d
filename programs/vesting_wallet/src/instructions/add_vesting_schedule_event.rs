use anchor_lang::prelude::*;

use crate::constants::{ALLOW_LIST_SEED, SCHEDULE_SEED, WALLET_CONFIG_SEED};
use crate::state::{AllowList, Schedule, WalletConfig};

pub fn add_vesting_schedule_event(
    ctx: Context<AddVestingScheduleEvent>,
    month: u32,
    destination: Pubkey,
    amount: u64,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let cfg = &mut ctx.accounts.wallet_config;
    let schedule = &mut ctx.accounts.schedule;

    let event = schedule.add_event(
        cfg,
        &ctx.accounts.allow_list,
        &admin,
        month,
        destination,
        amount,
    )?;

    emit!(VestingScheduleEventAdded {
        month: event.month,
        destination: event.destination,
        amount: event.amount,
        index: (schedule.events.len() - 1) as u16,
        total_scheduled: cfg.total_scheduled,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AddVestingScheduleEvent<'info> {
    #[account(mut, seeds = [WALLET_CONFIG_SEED], bump = wallet_config.bump)]
    pub wallet_config: Account<'info, WalletConfig>,

    #[account(
        seeds = [ALLOW_LIST_SEED, wallet_config.key().as_ref()],
        bump
    )]
    pub allow_list: Box<Account<'info, AllowList>>,

    #[account(
        mut,
        seeds = [SCHEDULE_SEED, wallet_config.key().as_ref()],
        bump
    )]
    pub schedule: Box<Account<'info, Schedule>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct VestingScheduleEventAdded {
    pub month: u32,
    pub destination: Pubkey,
    pub amount: u64,
    pub index: u16,
    pub total_scheduled: u64,
}
