//! Month release: stage the transfers, move the funds, then commit the
//! receipt. A month is either fully paid and marked executed or left
//! pending; on-chain, any failure reverts the whole transaction.

use core::cmp::Ordering;

use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{Disbursement, MonthReceipt, Schedule, WalletConfig};
use crate::utils::time;

/// Source of funds for a withdrawal.
pub trait TokenCustody {
    /// Amount currently available for disbursement.
    fn balance(&self) -> u64;

    fn transfer(&mut self, destination: &Pubkey, amount: u64)
        -> core::result::Result<(), VestingError>;
}

/// Transfers staged for one month, in schedule insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawalPlan {
    pub month: u32,
    pub transfers: Vec<Disbursement>,
    pub total: u64,
}

/// Runs the release checks in order (lock, receipt, maturity) and stages
/// the month's transfers. Nothing is mutated.
pub fn plan_withdrawal(
    config: &WalletConfig,
    schedule: &Schedule,
    receipt: &MonthReceipt,
    month: u32,
    now: i64,
) -> core::result::Result<WithdrawalPlan, VestingError> {
    if !config.is_locked() {
        return Err(VestingError::ScheduleNotLocked);
    }
    receipt.ensure_pending()?;
    if !time::is_month_mature(&config.lock, month, config.month_duration, now) {
        return Err(VestingError::NotMatureYet);
    }

    Ok(WithdrawalPlan {
        month,
        transfers: schedule.disbursements_for_month(month),
        total: schedule.month_total(month)?,
    })
}

/// Moves every staged amount. Refuses up front when custody cannot cover
/// the month total, so an underfunded vault moves nothing.
pub fn execute_plan<C: TokenCustody>(
    plan: &WithdrawalPlan,
    custody: &mut C,
) -> core::result::Result<(), VestingError> {
    if custody.balance() < plan.total {
        return Err(VestingError::TransferFailed);
    }
    for t in &plan.transfers {
        custody.transfer(&t.destination, t.amount)?;
    }
    Ok(())
}

/// Destination accounts supplied with the call must pair one-to-one with
/// the staged transfers.
pub fn ensure_destination_count(
    plan: &WithdrawalPlan,
    supplied: usize,
) -> core::result::Result<(), VestingError> {
    match supplied.cmp(&plan.transfers.len()) {
        Ordering::Less => Err(VestingError::MissingDestinationAccount),
        Ordering::Greater => Err(VestingError::UnexpectedDestinationAccount),
        Ordering::Equal => Ok(()),
    }
}

/// Marks the month executed and bumps the released total.
pub fn commit_plan(
    config: &mut WalletConfig,
    receipt: &mut MonthReceipt,
    plan: &WithdrawalPlan,
    now: i64,
) -> core::result::Result<(), VestingError> {
    receipt.ensure_pending()?;
    let count =
        u16::try_from(plan.transfers.len()).map_err(|_| VestingError::MonthCapacityExceeded)?;
    config.record_released(plan.total)?;
    receipt.mark_executed(plan.month, now, plan.total, count)
}

/// Full release for `month`: plan, transfer, commit.
pub fn withdraw<C: TokenCustody>(
    config: &mut WalletConfig,
    schedule: &Schedule,
    receipt: &mut MonthReceipt,
    custody: &mut C,
    month: u32,
    now: i64,
) -> core::result::Result<Vec<Disbursement>, VestingError> {
    let plan = plan_withdrawal(config, schedule, receipt, month, now)?;
    execute_plan(&plan, custody)?;
    commit_plan(config, receipt, &plan, now)?;
    Ok(plan.transfers)
}
