use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{MONTH_RECEIPT_SEED, SCHEDULE_SEED, VAULT_SEED, WALLET_CONFIG_SEED};
use crate::error::VestingError;
use crate::state::{Disbursement, MonthReceipt, Schedule, WalletConfig};
use crate::utils::disbursement::{self, TokenCustody};
use crate::utils::time;

/// Releases every entry of a mature month. Destination token accounts are
/// passed as remaining accounts, one per entry, in schedule order.
pub fn withdraw<'info>(
    ctx: Context<'_, '_, 'info, 'info, Withdraw<'info>>,
    month: u32,
) -> Result<Vec<Disbursement>> {
    let now = Clock::get()?.unix_timestamp;

    let receipt = &mut ctx.accounts.month_receipt;
    if !receipt.executed {
        receipt.month = month;
        receipt.bump = ctx.bumps.month_receipt;
    }

    let cfg = &ctx.accounts.wallet_config;
    let plan = disbursement::plan_withdrawal(
        cfg,
        &ctx.accounts.schedule,
        &ctx.accounts.month_receipt,
        month,
        now,
    )
    .map_err(|err| {
        if err == VestingError::NotMatureYet {
            msg!(
                "month {} not mature, latest mature month {:?}",
                month,
                time::latest_mature_month(&cfg.lock, cfg.month_duration, now)
            );
        }
        err
    })?;

    // Account list must match the staged transfers before anything moves.
    let destinations = ctx.remaining_accounts;
    disbursement::ensure_destination_count(&plan, destinations.len())?;

    let signer_seeds: &[&[&[u8]]] = &[&[WALLET_CONFIG_SEED, &[cfg.bump]]];
    let mut custody = VaultCustody {
        token_program: ctx.accounts.token_program.to_account_info(),
        vault: ctx.accounts.vault.to_account_info(),
        authority: cfg.to_account_info(),
        balance: ctx.accounts.vault.amount,
        mint: cfg.mint,
        signer_seeds,
        destinations: destinations.iter(),
    };
    disbursement::execute_plan(&plan, &mut custody)?;

    disbursement::commit_plan(
        &mut ctx.accounts.wallet_config,
        &mut ctx.accounts.month_receipt,
        &plan,
        now,
    )?;

    for t in &plan.transfers {
        emit!(TokensDisbursed {
            month,
            destination: t.destination,
            amount: t.amount,
        });
    }
    msg!("month {} withdrawn: {} transfers", month, plan.transfers.len());
    emit!(MonthWithdrawn {
        month,
        transfer_count: plan.transfers.len() as u16,
        total: plan.total,
        total_released: ctx.accounts.wallet_config.total_released,
        executed_at: now,
    });

    Ok(plan.transfers)
}

/// SPL vault seen through the custody seam; signs as the config PDA.
struct VaultCustody<'a, 'info> {
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    balance: u64,
    mint: Pubkey,
    signer_seeds: &'a [&'a [&'a [u8]]],
    destinations: core::slice::Iter<'info, AccountInfo<'info>>,
}

impl<'a, 'info> TokenCustody for VaultCustody<'a, 'info> {
    fn balance(&self) -> u64 {
        self.balance
    }

    fn transfer(
        &mut self,
        destination: &Pubkey,
        amount: u64,
    ) -> core::result::Result<(), VestingError> {
        let account = self
            .destinations
            .next()
            .ok_or(VestingError::MissingDestinationAccount)?;
        let token_account = read_token_account(account)?;
        if token_account.mint != self.mint {
            return Err(VestingError::InvalidTokenMint);
        }
        if token_account.owner != *destination {
            return Err(VestingError::InvalidDestinationAccount);
        }

        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: self.vault.clone(),
                    to: account.clone(),
                    authority: self.authority.clone(),
                },
                self.signer_seeds,
            ),
            amount,
        )
        .map_err(|err| {
            msg!("transfer to {} failed: {:?}", destination, err);
            VestingError::TransferFailed
        })?;

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(VestingError::TransferFailed)?;
        Ok(())
    }
}

fn read_token_account(info: &AccountInfo) -> core::result::Result<TokenAccount, VestingError> {
    if *info.owner != token::ID {
        return Err(VestingError::InvalidTokenAccount);
    }
    let data = info
        .try_borrow_data()
        .map_err(|_| VestingError::InvalidTokenAccount)?;
    TokenAccount::try_deserialize(&mut &data[..]).map_err(|_| VestingError::InvalidTokenAccount)
}

#[derive(Accounts)]
#[instruction(month: u32)]
pub struct Withdraw<'info> {
    #[account(mut, seeds = [WALLET_CONFIG_SEED], bump = wallet_config.bump)]
    pub wallet_config: Account<'info, WalletConfig>,

    #[account(
        seeds = [SCHEDULE_SEED, wallet_config.key().as_ref()],
        bump
    )]
    pub schedule: Box<Account<'info, Schedule>>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + MonthReceipt::INIT_SPACE,
        seeds = [MONTH_RECEIPT_SEED, wallet_config.key().as_ref(), month.to_le_bytes().as_ref()],
        bump
    )]
    pub month_receipt: Account<'info, MonthReceipt>,

    #[account(
        mut,
        seeds = [VAULT_SEED, wallet_config.key().as_ref()],
        bump = wallet_config.vault_bump,
        constraint = vault.mint == wallet_config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensDisbursed {
    pub month: u32,
    pub destination: Pubkey,
    pub amount: u64,
}

#[event]
pub struct MonthWithdrawn {
    pub month: u32,
    pub transfer_count: u16,
    pub total: u64,
    pub total_released: u64,
    pub executed_at: i64,
}
