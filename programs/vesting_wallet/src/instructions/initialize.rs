use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{
    ALLOW_LIST_SEED, DEFAULT_MONTH_DURATION, SCHEDULE_SEED, VAULT_SEED, WALLET_CONFIG_SEED,
};
use crate::error::VestingError;
use crate::state::{AllowList, LockState, Schedule, WalletConfig};

pub fn initialize(ctx: Context<Initialize>, month_duration: Option<i64>) -> Result<()> {
    let month_duration = month_duration.unwrap_or(DEFAULT_MONTH_DURATION);
    require!(month_duration > 0, VestingError::InvalidConfig);

    let cfg = &mut ctx.accounts.wallet_config;
    cfg.admin = ctx.accounts.admin.key();
    cfg.mint = ctx.accounts.mint.key();
    cfg.vault = ctx.accounts.vault.key();
    cfg.month_duration = month_duration;
    cfg.lock = LockState::Unlocked;
    cfg.schedule_digest = [0u8; 32];
    cfg.total_scheduled = 0;
    cfg.total_released = 0;
    cfg.bump = ctx.bumps.wallet_config;
    cfg.vault_bump = ctx.bumps.vault;

    ctx.accounts.allow_list.wallets = Vec::new();
    ctx.accounts.schedule.events = Vec::new();

    msg!("vesting wallet initialized, month duration {}s", month_duration);
    emit!(WalletInitialized {
        admin: cfg.admin,
        mint: cfg.mint,
        vault: cfg.vault,
        month_duration,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + WalletConfig::INIT_SPACE,
        seeds = [WALLET_CONFIG_SEED],
        bump
    )]
    pub wallet_config: Account<'info, WalletConfig>,

    #[account(
        init,
        payer = admin,
        space = 8 + AllowList::INIT_SPACE,
        seeds = [ALLOW_LIST_SEED, wallet_config.key().as_ref()],
        bump
    )]
    pub allow_list: Box<Account<'info, AllowList>>,

    #[account(
        init,
        payer = admin,
        space = 8 + Schedule::INIT_SPACE,
        seeds = [SCHEDULE_SEED, wallet_config.key().as_ref()],
        bump
    )]
    pub schedule: Box<Account<'info, Schedule>>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = wallet_config,
        seeds = [VAULT_SEED, wallet_config.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct WalletInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub month_duration: i64,
}
